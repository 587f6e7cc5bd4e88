// Run with the following command:
// cargo fuzz run fuzz_parse_compute_cells

#![no_main]
use kzg_conformance::test_formats::compute_cells::Test;
use libfuzzer_sys::fuzz_target;

fn hex_list(items: &[Vec<u8>]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|bytes| format!("\"0x{}\"", hex::encode(bytes)))
        .collect();
    format!("[{}]", quoted.join(", "))
}

fuzz_target!(|case: (Vec<u8>, Option<Vec<Vec<u8>>>)| {
    let (blob, output) = case;

    let mut yaml = format!("input:\n  blob: \"0x{}\"\n", hex::encode(&blob));
    match &output {
        None => yaml.push_str("output: null\n"),
        Some(cells) => yaml.push_str(&format!("output: {}\n", hex_list(cells))),
    }

    let test: Test = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(test.input.get_blob().unwrap(), blob);
    assert_eq!(test.get_output(), output);
});
