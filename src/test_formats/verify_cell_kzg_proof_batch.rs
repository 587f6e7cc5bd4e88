use crate::{Bytes48, Cell, Error};
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Input {
    commitments: Vec<String>,
    cell_indices: Vec<u64>,
    cells: Vec<String>,
    proofs: Vec<String>,
}

impl Input {
    pub fn get_commitments(&self) -> Result<Vec<Bytes48>, Error> {
        self.commitments
            .iter()
            .map(|s| Bytes48::from_hex(s))
            .collect::<Result<Vec<Bytes48>, Error>>()
    }

    pub fn get_cell_indices(&self) -> Result<Vec<u64>, Error> {
        Ok(self.cell_indices.clone())
    }

    pub fn get_cells(&self) -> Result<Vec<Cell>, Error> {
        self.cells
            .iter()
            .map(|s| Cell::from_hex(s))
            .collect::<Result<Vec<Cell>, Error>>()
    }

    pub fn get_proofs(&self) -> Result<Vec<Bytes48>, Error> {
        self.proofs
            .iter()
            .map(|s| Bytes48::from_hex(s))
            .collect::<Result<Vec<Bytes48>, Error>>()
    }
}

#[derive(Deserialize)]
pub struct Test {
    pub input: Input,
    output: Option<bool>,
}

impl Test {
    pub fn get_output(&self) -> Option<bool> {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_boolean_verdict() {
        let yaml =
            "input:\n  commitments: []\n  cell_indices: []\n  cells: []\n  proofs: []\noutput: true\n";
        let test: Test = serde_yaml::from_str(yaml).unwrap();
        assert!(test.input.get_commitments().unwrap().is_empty());
        assert_eq!(test.get_output(), Some(true));
    }

    #[test]
    fn undersized_commitments_do_not_decode() {
        let yaml =
            "input:\n  commitments: [\"0x00\"]\n  cell_indices: []\n  cells: []\n  proofs: []\noutput: null\n";
        let test: Test = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            test.input.get_commitments(),
            Err(Error::InvalidBytesLength(_))
        ));
        assert!(test.get_output().is_none());
    }
}
