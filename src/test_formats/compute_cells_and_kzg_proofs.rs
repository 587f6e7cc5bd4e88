use super::CellsAndProofs;
use crate::{bytes_from_hex, Error};
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Input<'a> {
    blob: &'a str,
}

impl Input<'_> {
    pub fn get_blob(&self) -> Result<Vec<u8>, Error> {
        bytes_from_hex(self.blob)
    }
}

#[derive(Deserialize)]
pub struct Test<'a> {
    #[serde(borrow)]
    pub input: Input<'a>,
    output: Option<Vec<Vec<String>>>,
}

impl Test<'_> {
    /// Returns the expected cells and proofs, or `None` when the prover is
    /// expected to reject the input.
    pub fn get_output(&self) -> Option<CellsAndProofs> {
        self.output.as_deref().map(CellsAndProofs::from_hex_lists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_input_blob() {
        let yaml = "input:\n  blob: \"0x00\"\noutput: null\n";
        let test: Test = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(test.input.get_blob().unwrap(), vec![0x00]);
    }

    #[test]
    fn input_blob_must_be_valid_hex() {
        let yaml = "input:\n  blob: \"0x0g\"\noutput: null\n";
        let test: Test = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            test.input.get_blob(),
            Err(Error::InvalidHexString(_))
        ));
    }

    #[test]
    fn absent_output_is_an_expected_failure_case() {
        let yaml = "input:\n  blob: \"0x00\"\noutput: null\n";
        let test: Test = serde_yaml::from_str(yaml).unwrap();
        assert!(test.get_output().is_none());

        // A missing output key reads the same as an explicit null.
        let yaml = "input:\n  blob: \"0x00\"\n";
        let test: Test = serde_yaml::from_str(yaml).unwrap();
        assert!(test.get_output().is_none());
    }

    #[test]
    fn decodes_cells_and_proofs_in_order() {
        let yaml = "input:\n  blob: \"0x00\"\noutput:\n- [\"0xAA\", \"0xBB\"]\n- [\"0xCC\"]\n";
        let test: Test = serde_yaml::from_str(yaml).unwrap();
        let output = test.get_output().unwrap();
        assert_eq!(output.cells, vec![vec![0xAA], vec![0xBB]]);
        assert_eq!(output.proofs, vec![vec![0xCC]]);
    }

    #[test]
    fn fixture_is_record_format_independent() {
        let json = r#"{"input": {"blob": "0x00"}, "output": [["0xAA"], ["0xCC"]]}"#;
        let test: Test = serde_json::from_str(json).unwrap();
        assert_eq!(test.input.get_blob().unwrap(), vec![0x00]);
        let output = test.get_output().unwrap();
        assert_eq!(output.cells, vec![vec![0xAA]]);
        assert_eq!(output.proofs, vec![vec![0xCC]]);
    }

    #[test]
    #[should_panic(expected = "exactly two lists")]
    fn one_output_list_is_a_corrupt_corpus() {
        let yaml = "input:\n  blob: \"0x00\"\noutput:\n- [\"0xAA\"]\n";
        let test: Test = serde_yaml::from_str(yaml).unwrap();
        let _ = test.get_output();
    }

    #[test]
    #[should_panic(expected = "exactly two lists")]
    fn three_output_lists_are_a_corrupt_corpus() {
        let yaml = "input:\n  blob: \"0x00\"\noutput:\n- [\"0xAA\"]\n- [\"0xBB\"]\n- [\"0xCC\"]\n";
        let test: Test = serde_yaml::from_str(yaml).unwrap();
        let _ = test.get_output();
    }
}
