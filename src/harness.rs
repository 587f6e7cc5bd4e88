//! Drives an external cell-proof implementation against reference test
//! vectors.
//!
//! Each `run_*` function consumes one YAML test document. A fixture without
//! an output record is an expected-failure case: the prover must reject the
//! input. Divergence from the corpus panics, so these functions slot
//! directly into `#[test]` loops over [`collect_test_files`].

use crate::test_formats::{
    compute_cells, compute_cells_and_kzg_proofs, recover_cells_and_kzg_proofs,
    verify_cell_kzg_proof_batch, CellsAndProofs,
};
use crate::{Blob, Bytes48, Cell};
use std::path::PathBuf;

/// The cryptographic core under test.
///
/// Implementations wrap a concrete KZG library. The harness only relies on
/// rejected inputs surfacing as `Err`; the error type itself is never
/// inspected.
pub trait CellProver {
    type Error;

    fn compute_cells(&self, blob: &Blob) -> Result<Vec<Cell>, Self::Error>;

    fn compute_cells_and_kzg_proofs(
        &self,
        blob: &Blob,
    ) -> Result<(Vec<Cell>, Vec<Bytes48>), Self::Error>;

    fn recover_cells_and_kzg_proofs(
        &self,
        cell_indices: &[u64],
        cells: &[Cell],
    ) -> Result<(Vec<Cell>, Vec<Bytes48>), Self::Error>;

    fn verify_cell_kzg_proof_batch(
        &self,
        commitments: &[Bytes48],
        cell_indices: &[u64],
        cells: &[Cell],
        proofs: &[Bytes48],
    ) -> Result<bool, Self::Error>;
}

/// Expands a glob pattern into a sorted list of test files.
pub fn collect_test_files(pattern: &str) -> Result<Vec<PathBuf>, glob::PatternError> {
    let mut files: Vec<PathBuf> = glob::glob(pattern)?.filter_map(Result::ok).collect();
    files.sort();
    Ok(files)
}

pub fn run_compute_cells<P: CellProver>(prover: &P, yaml_data: &str) {
    let test: compute_cells::Test = serde_yaml::from_str(yaml_data).expect("malformed test file");
    let Ok(blob_bytes) = test.input.get_blob() else {
        assert!(test.get_output().is_none(), "invalid blob hex must fail");
        return;
    };
    let Ok(blob) = Blob::from_bytes(&blob_bytes) else {
        assert!(test.get_output().is_none(), "invalid blob length must fail");
        return;
    };

    match prover.compute_cells(&blob) {
        Ok(cells) => {
            let expected = test
                .get_output()
                .expect("prover accepted an input the corpus expects it to reject");
            assert_eq!(cells.len(), expected.len(), "cell count mismatch");
            for (got, want) in cells.iter().zip(expected.iter()) {
                assert_eq!(got.as_slice(), want.as_slice());
            }
        }
        Err(_) => assert!(
            test.get_output().is_none(),
            "prover rejected an input the corpus expects it to accept"
        ),
    }
}

pub fn run_compute_cells_and_kzg_proofs<P: CellProver>(prover: &P, yaml_data: &str) {
    let test: compute_cells_and_kzg_proofs::Test =
        serde_yaml::from_str(yaml_data).expect("malformed test file");
    let Ok(blob_bytes) = test.input.get_blob() else {
        assert!(test.get_output().is_none(), "invalid blob hex must fail");
        return;
    };
    let Ok(blob) = Blob::from_bytes(&blob_bytes) else {
        assert!(test.get_output().is_none(), "invalid blob length must fail");
        return;
    };

    match prover.compute_cells_and_kzg_proofs(&blob) {
        Ok((cells, proofs)) => {
            let expected = test
                .get_output()
                .expect("prover accepted an input the corpus expects it to reject");
            assert_cells_and_proofs_eq(&cells, &proofs, &expected);
        }
        Err(_) => assert!(
            test.get_output().is_none(),
            "prover rejected an input the corpus expects it to accept"
        ),
    }
}

pub fn run_recover_cells_and_kzg_proofs<P: CellProver>(prover: &P, yaml_data: &str) {
    let test: recover_cells_and_kzg_proofs::Test =
        serde_yaml::from_str(yaml_data).expect("malformed test file");
    let (Ok(cell_indices), Ok(cells)) = (test.input.get_cell_indices(), test.input.get_cells())
    else {
        assert!(test.get_output().is_none(), "invalid input must fail");
        return;
    };

    match prover.recover_cells_and_kzg_proofs(&cell_indices, &cells) {
        Ok((cells, proofs)) => {
            let expected = test
                .get_output()
                .expect("prover accepted an input the corpus expects it to reject");
            assert_cells_and_proofs_eq(&cells, &proofs, &expected);
        }
        Err(_) => assert!(
            test.get_output().is_none(),
            "prover rejected an input the corpus expects it to accept"
        ),
    }
}

pub fn run_verify_cell_kzg_proof_batch<P: CellProver>(prover: &P, yaml_data: &str) {
    let test: verify_cell_kzg_proof_batch::Test =
        serde_yaml::from_str(yaml_data).expect("malformed test file");
    let (Ok(commitments), Ok(cell_indices), Ok(cells), Ok(proofs)) = (
        test.input.get_commitments(),
        test.input.get_cell_indices(),
        test.input.get_cells(),
        test.input.get_proofs(),
    ) else {
        assert!(test.get_output().is_none(), "invalid input must fail");
        return;
    };

    match prover.verify_cell_kzg_proof_batch(&commitments, &cell_indices, &cells, &proofs) {
        Ok(valid) => assert_eq!(
            Some(valid),
            test.get_output(),
            "verification verdict mismatch"
        ),
        Err(_) => assert!(
            test.get_output().is_none(),
            "prover rejected an input the corpus expects it to accept"
        ),
    }
}

fn assert_cells_and_proofs_eq(cells: &[Cell], proofs: &[Bytes48], expected: &CellsAndProofs) {
    assert_eq!(cells.len(), expected.cells.len(), "cell count mismatch");
    assert_eq!(proofs.len(), expected.proofs.len(), "proof count mismatch");
    for (got, want) in cells.iter().zip(expected.cells.iter()) {
        assert_eq!(got.as_slice(), want.as_slice());
    }
    for (got, want) in proofs.iter().zip(expected.proofs.iter()) {
        assert_eq!(got.as_slice(), want.as_slice());
    }
}
