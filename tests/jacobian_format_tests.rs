//! File-level round-trip tests for the jacobian binary codec.

use std::fs;

use derivada::prelude::*;
use tempfile::TempDir;

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_end_to_end_legacy_scenario() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("run.jco");

    let row_labels = labels(&["OBS1", "OBS2"]);
    let col_labels = labels(&["P1", "P2", "P3"]);
    let mut m = SparseMatrix::new(2, 3);
    m.set(0, 0, 1.5);
    m.set(1, 2, -3.25);

    let variant = write_matrix(&path, &row_labels, &col_labels, &m).expect("write sample file");
    assert_eq!(variant, Variant::Legacy);

    // labels are short, so the file must be legacy: negative first word,
    // and exactly 2 in the nonzero-count word
    let bytes = fs::read(&path).expect("file was just written");
    let h1 = i32::from_ne_bytes(bytes[0..4].try_into().expect("slice length is 4"));
    let nnz = i32::from_ne_bytes(bytes[8..12].try_into().expect("slice length is 4"));
    assert!(h1 < 0);
    assert_eq!(nnz, 2);

    let jac = read_matrix(&path).expect("read sample file back");
    assert_eq!(jac.variant, Variant::Legacy);
    assert_eq!(jac.row_labels, vec!["OBS1", "OBS2"]);
    assert_eq!(jac.col_labels, vec!["P1", "P2", "P3"]);
    assert_eq!(jac.matrix.get(0, 0), 1.5);
    assert_eq!(jac.matrix.get(1, 2), -3.25);
    assert_eq!(jac.matrix.nnz(), 2);
    assert!(jac.diagnostics.is_empty());
}

#[test]
fn test_legacy_round_trip_preserves_values_exactly() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("exact.jco");

    let row_labels = labels(&["R1", "R2", "R3"]);
    let col_labels = labels(&["C1", "C2"]);
    let mut m = SparseMatrix::new(3, 2);
    m.set(0, 0, 1.0e-300);
    m.set(2, 0, -0.1);
    m.set(1, 1, f64::MAX);
    m.set(2, 1, 3.141_592_653_589_793);

    write_matrix(&path, &row_labels, &col_labels, &m).expect("write file");
    let jac = read_matrix(&path).expect("read file back");

    assert_eq!(jac.matrix, m);
    assert_eq!(jac.row_labels, row_labels);
    assert_eq!(jac.col_labels, col_labels);
}

#[test]
fn test_variant_escalation_on_long_row_label() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("ext.jco");

    let row_labels = labels(&["an_observation_name_longer_than_twenty"]);
    let col_labels = labels(&["p1"]);
    let mut m = SparseMatrix::new(1, 1);
    m.set(0, 0, 2.0);

    let variant = write_matrix(&path, &row_labels, &col_labels, &m).expect("write file");
    assert_eq!(variant, Variant::Extended);

    // extended files carry a positive first header word
    let bytes = fs::read(&path).expect("file was just written");
    let h1 = i32::from_ne_bytes(bytes[0..4].try_into().expect("slice length is 4"));
    assert!(h1 > 0);

    let jac = read_matrix(&path).expect("read file back");
    assert_eq!(jac.variant, Variant::Extended);
    assert_eq!(
        jac.row_labels,
        vec!["AN_OBSERVATION_NAME_LONGER_THAN_TWENTY"]
    );
}

#[test]
fn test_labels_lower_cased_on_disk_upper_cased_on_read() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("case.jco");

    let row_labels = labels(&["ObsAlpha"]);
    let col_labels = labels(&["ParBeta"]);
    let mut m = SparseMatrix::new(1, 1);
    m.set(0, 0, 1.0);

    write_matrix(&path, &row_labels, &col_labels, &m).expect("write file");

    let bytes = fs::read(&path).expect("file was just written");
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("parbeta"));
    assert!(text.contains("obsalpha"));
    assert!(!text.contains("ParBeta"));

    let jac = read_matrix(&path).expect("read file back");
    assert_eq!(jac.col_labels, vec!["PARBETA"]);
    assert_eq!(jac.row_labels, vec!["OBSALPHA"]);
}

#[test]
fn test_rewrite_is_bit_for_bit_identical() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path_a = temp_dir.path().join("a.jco");
    let path_b = temp_dir.path().join("b.jco");

    let row_labels = labels(&["o1", "o2"]);
    let col_labels = labels(&["p1", "p2"]);
    let mut m = SparseMatrix::new(2, 2);
    m.set(1, 0, 5.0);
    m.set(0, 1, -6.0);

    write_matrix(&path_a, &row_labels, &col_labels, &m).expect("write first file");
    let jac = read_matrix(&path_a).expect("read first file");
    write_matrix(&path_b, &jac.row_labels, &jac.col_labels, &jac.matrix)
        .expect("write second file");

    let a = fs::read(&path_a).expect("first file exists");
    let b = fs::read(&path_b).expect("second file exists");
    assert_eq!(a, b);
}

#[test]
fn test_read_matrix_dense() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("dense.jco");

    let row_labels = labels(&["o1", "o2"]);
    let col_labels = labels(&["p1", "p2", "p3"]);
    let mut m = SparseMatrix::new(2, 3);
    m.set(0, 0, 1.5);
    m.set(1, 2, -3.25);
    write_matrix(&path, &row_labels, &col_labels, &m).expect("write file");

    let (rows, cols, dense, variant) = read_matrix_dense(&path).expect("read dense");
    assert_eq!(rows, vec!["O1", "O2"]);
    assert_eq!(cols, vec!["P1", "P2", "P3"]);
    assert_eq!(variant, Variant::Legacy);
    assert_eq!(dense.shape(), (2, 3));
    assert_eq!(dense.get(0, 0), 1.5);
    assert_eq!(dense.get(1, 2), -3.25);
    assert_eq!(dense.get(0, 1), 0.0);
}

#[test]
fn test_write_to_unwritable_path_is_open_error() {
    let err = write_matrix(
        "no/such/directory/out.jco",
        &labels(&["r"]),
        &labels(&["c"]),
        &SparseMatrix::new(1, 1),
    )
    .expect_err("directory does not exist");
    assert!(matches!(err, DerivadaError::Open { .. }));
    assert!(err.to_string().contains("out.jco"));
}

#[test]
fn test_strict_mode_file_read() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("clean.jco");

    let row_labels = labels(&["o1"]);
    let col_labels = labels(&["p1"]);
    let mut m = SparseMatrix::new(1, 1);
    m.set(0, 0, 1.0);
    write_matrix(&path, &row_labels, &col_labels, &m).expect("write file");

    // a clean file decodes identically under strict options
    let strict = ReadOptions {
        strict_indices: true,
    };
    let jac = read_matrix_with(&path, strict).expect("clean file passes strict read");
    assert_eq!(jac.matrix.get(0, 0), 1.0);
    assert!(jac.diagnostics.is_empty());
}
