// Run with the following command:
// cargo fuzz run fuzz_bytes_from_hex

#![no_main]
use kzg_conformance::bytes_from_hex;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Decoding must never panic; whenever it succeeds, re-encoding must
    // reproduce the input modulo prefix and case.
    if let Ok(bytes) = bytes_from_hex(data) {
        let stripped = data.strip_prefix("0x").unwrap_or(data);
        assert_eq!(hex::encode(&bytes), stripped.to_ascii_lowercase());
    }
});
