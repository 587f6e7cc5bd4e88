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
    output: Option<Vec<String>>,
}

impl Test<'_> {
    pub fn get_output(&self) -> Option<Vec<Vec<u8>>> {
        self.output.as_ref().map(|cells| {
            cells
                .iter()
                .map(|s| bytes_from_hex(s).unwrap())
                .collect::<Vec<Vec<u8>>>()
        })
    }
}
