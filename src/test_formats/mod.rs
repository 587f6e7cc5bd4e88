/* EIP-7594 */
pub mod compute_cells;
pub mod compute_cells_and_kzg_proofs;
pub mod recover_cells_and_kzg_proofs;
pub mod verify_cell_kzg_proof_batch;

use crate::bytes_from_hex;
use alloc::string::String;
use alloc::vec::Vec;

/// Expected cells and proofs of a test case, decoded and in corpus order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellsAndProofs {
    pub cells: Vec<Vec<u8>>,
    pub proofs: Vec<Vec<u8>>,
}

impl CellsAndProofs {
    // The output record must hold the cells list followed by the proofs
    // list. Any other shape is a corrupt corpus and aborts, in release
    // builds included.
    fn from_hex_lists(lists: &[Vec<String>]) -> Self {
        assert_eq!(
            lists.len(),
            2,
            "output must hold exactly two lists (cells, proofs), got {}",
            lists.len()
        );
        let cells = lists[0]
            .iter()
            .map(|s| bytes_from_hex(s).unwrap())
            .collect::<Vec<Vec<u8>>>();
        let proofs = lists[1]
            .iter()
            .map(|s| bytes_from_hex(s).unwrap())
            .collect::<Vec<Vec<u8>>>();
        Self { cells, proofs }
    }
}
