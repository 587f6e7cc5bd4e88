// Run with the following command:
// cargo fuzz run fuzz_parse_compute_cells_and_kzg_proofs

#![no_main]
use kzg_conformance::test_formats::compute_cells_and_kzg_proofs::Test;
use libfuzzer_sys::fuzz_target;

fn hex_list(items: &[Vec<u8>]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|bytes| format!("\"0x{}\"", hex::encode(bytes)))
        .collect();
    format!("[{}]", quoted.join(", "))
}

fuzz_target!(|case: (Vec<u8>, Option<(Vec<Vec<u8>>, Vec<Vec<u8>>)>)| {
    let (blob, output) = case;

    let mut yaml = format!("input:\n  blob: \"0x{}\"\n", hex::encode(&blob));
    match &output {
        None => yaml.push_str("output: null\n"),
        Some((cells, proofs)) => yaml.push_str(&format!(
            "output: [{}, {}]\n",
            hex_list(cells),
            hex_list(proofs)
        )),
    }

    let test: Test = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(test.input.get_blob().unwrap(), blob);
    match (test.get_output(), output) {
        (None, None) => {}
        (Some(decoded), Some((cells, proofs))) => {
            assert_eq!(decoded.cells, cells);
            assert_eq!(decoded.proofs, proofs);
        }
        _ => panic!("output presence mismatch"),
    }
});
