// Run with the following command:
// cargo fuzz run fuzz_parse_verify_cell_kzg_proof_batch

#![no_main]
use kzg_conformance::test_formats::verify_cell_kzg_proof_batch::Test;
use kzg_conformance::BYTES_PER_CELL;
use libfuzzer_sys::fuzz_target;

fn hex_list<const N: usize>(items: &[[u8; N]]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|bytes| format!("\"0x{}\"", hex::encode(bytes)))
        .collect();
    format!("[{}]", quoted.join(", "))
}

fn index_list(indices: &[u64]) -> String {
    let rendered: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}

fuzz_target!(
    |case: (
        Vec<[u8; 48]>,
        Vec<u64>,
        Vec<[u8; BYTES_PER_CELL]>,
        Vec<[u8; 48]>,
        Option<bool>,
    )| {
        let (commitments, cell_indices, cells, proofs, output) = case;

        let mut yaml = format!(
            "input:\n  commitments: {}\n  cell_indices: {}\n  cells: {}\n  proofs: {}\n",
            hex_list(&commitments),
            index_list(&cell_indices),
            hex_list(&cells),
            hex_list(&proofs),
        );
        match output {
            None => yaml.push_str("output: null\n"),
            Some(valid) => yaml.push_str(&format!("output: {}\n", valid)),
        }

        let test: Test = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(test.get_output(), output);
        assert_eq!(test.input.get_cell_indices().unwrap(), cell_indices);

        let decoded = test.input.get_commitments().unwrap();
        for (got, want) in decoded.iter().zip(commitments.iter()) {
            assert_eq!(got.as_slice(), want.as_slice());
        }
        let decoded = test.input.get_cells().unwrap();
        for (got, want) in decoded.iter().zip(cells.iter()) {
            assert_eq!(got.as_slice(), want.as_slice());
        }
        let decoded = test.input.get_proofs().unwrap();
        for (got, want) in decoded.iter().zip(proofs.iter()) {
            assert_eq!(got.as_slice(), want.as_slice());
        }
    }
);
