//! Jacobian binary file format (.jco)
//!
//! Dual-variant binary encoding for labeled sparse sensitivity matrices,
//! as exchanged by parameter-estimation tools.
//!
//! # Format Structure
//!
//! ```text
//! ┌──────────────────────────────┬─────────────────────────────────┐
//! │ Legacy                       │ Extended                        │
//! ├──────────────────────────────┼─────────────────────────────────┤
//! │ -col_count      : i32        │ +col_count      : i32           │
//! │ -row_count      : i32        │ +row_count      : i32           │
//! │ nonzero_count   : i32        │ nonzero_count   : i32           │
//! ├──────────────────────────────┼─────────────────────────────────┤
//! │ entries × nonzero_count      │ entries × nonzero_count         │
//! │   linear_index : i32         │   row : i32, col : i32          │
//! │   value        : f64         │   value : f64                   │
//! ├──────────────────────────────┼─────────────────────────────────┤
//! │ col names: 12-byte records   │ col names: 200-byte records     │
//! │ row names: 20-byte records   │ row names: 200-byte records     │
//! └──────────────────────────────┴─────────────────────────────────┘
//! ```
//!
//! The sign of the first header word selects the variant. Name records are
//! space-padded, lower-cased on disk, upper-cased on read.
//!
//! All scalars are **native byte order** with no endianness marker; files
//! are not portable between machines of different byte order. That is a
//! limitation of the historical format and is preserved here, since an
//! endianness tag would break every existing file.
//!
//! # Example
//!
//! ```no_run
//! use derivada::format::{read_matrix, write_matrix};
//! use derivada::primitives::SparseMatrix;
//!
//! let mut m = SparseMatrix::new(2, 3);
//! m.set(0, 0, 1.5);
//! m.set(1, 2, -3.25);
//! let rows = vec!["obs1".to_string(), "obs2".to_string()];
//! let cols = vec!["p1".to_string(), "p2".to_string(), "p3".to_string()];
//! write_matrix("run.jco", &rows, &cols, &m)?;
//!
//! let jac = read_matrix("run.jco")?;
//! assert_eq!(jac.row_labels, vec!["OBS1", "OBS2"]);
//! # Ok::<(), derivada::error::DerivadaError>(())
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DerivadaError, Result};
use crate::primitives::{Matrix, SparseMatrix};

pub mod core_io;
pub mod header;
pub mod names;
pub mod triplets;
mod wire;

pub use core_io::{decode_jacobian, encode_jacobian};
pub use header::Header;
pub use triplets::{linear_index, split_linear_index, Triplet};

/// Column-name record width in the legacy variant.
pub const LEGACY_COL_NAME_WIDTH: usize = 12;

/// Row-name record width in the legacy variant.
pub const LEGACY_ROW_NAME_WIDTH: usize = 20;

/// Name record width (both axes) in the extended variant.
pub const EXTENDED_NAME_WIDTH: usize = 200;

/// Sanity ceiling on the decoded column count; anything above this is
/// treated as a corrupt header rather than a real matrix.
pub const MAX_COL_COUNT: i32 = 100_000_000;

/// The two on-disk encodings, distinguished by the header's sign.
///
/// A file is entirely one variant; the tag rides along with decoded data
/// and codec logic branches on it (no polymorphism, only differing field
/// widths and index encodings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Packed 1-based column-major linear index per entry; name widths
    /// 12 (columns) / 20 (rows).
    Legacy,
    /// Explicit zero-based row and column per entry; name width 200.
    Extended,
}

impl Variant {
    /// Width of one column-name record for this variant.
    #[must_use]
    pub fn col_name_width(self) -> usize {
        match self {
            Self::Legacy => LEGACY_COL_NAME_WIDTH,
            Self::Extended => EXTENDED_NAME_WIDTH,
        }
    }

    /// Width of one row-name record for this variant.
    #[must_use]
    pub fn row_name_width(self) -> usize {
        match self {
            Self::Legacy => LEGACY_ROW_NAME_WIDTH,
            Self::Extended => EXTENDED_NAME_WIDTH,
        }
    }
}

/// Non-fatal report of an entry whose decoded indices fall outside the
/// header-declared matrix.
///
/// Historical files occasionally carry such entries; decoders tolerate
/// them by default and surface the condition here instead of failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexDiagnostic {
    /// Zero-based position of the entry in the file's entry section.
    pub ordinal: usize,
    /// Decoded row index (may be negative or past the row count).
    pub row: i32,
    /// Decoded column index (may be negative or past the column count).
    pub col: i32,
    /// The entry's value.
    pub value: f64,
}

impl fmt::Display for IndexDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entry {} has out-of-range index ({}, {}), value {}",
            self.ordinal, self.row, self.col, self.value
        )
    }
}

/// Decode behavior knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    /// Treat out-of-range entry indices as a format error instead of a
    /// diagnostic. Off by default, matching the historical tolerance.
    pub strict_indices: bool,
}

/// A fully decoded jacobian file.
#[derive(Debug, Clone, PartialEq)]
pub struct JacobianFile {
    /// Row labels (observations + prior information), upper-cased.
    pub row_labels: Vec<String>,
    /// Column labels (parameters), upper-cased.
    pub col_labels: Vec<String>,
    /// The sensitivity values.
    pub matrix: SparseMatrix,
    /// Which encoding the file used.
    pub variant: Variant,
    /// Out-of-range entries encountered during decode (empty for clean
    /// files; always empty under strict decoding, which errors instead).
    pub diagnostics: Vec<IndexDiagnostic>,
}

impl JacobianFile {
    /// Materializes the matrix as dense, zeros in unstored positions.
    #[must_use]
    pub fn to_dense(&self) -> Matrix<f64> {
        self.matrix.to_dense()
    }
}

/// Selects the on-disk variant from label lengths.
///
/// Extended whenever any row label exceeds 20 bytes or any column label
/// exceeds 12 bytes; legacy otherwise. Automatic and not overridable, so
/// files stay backward compatible whenever their labels fit the narrow
/// widths.
#[must_use]
pub fn choose_variant(row_labels: &[String], col_labels: &[String]) -> Variant {
    let row_fits = row_labels.iter().all(|l| l.len() <= LEGACY_ROW_NAME_WIDTH);
    let col_fits = col_labels.iter().all(|l| l.len() <= LEGACY_COL_NAME_WIDTH);
    if row_fits && col_fits {
        Variant::Legacy
    } else {
        Variant::Extended
    }
}

/// Returns the labels that would be silently truncated when packed at the
/// given variant's widths.
///
/// Pre-flight check only; [`write_matrix`] never errors on long labels.
#[must_use]
pub fn truncated_labels(
    row_labels: &[String],
    col_labels: &[String],
    variant: Variant,
) -> Vec<String> {
    let mut truncated = Vec::new();
    for label in col_labels {
        if label.len() > variant.col_name_width() {
            truncated.push(label.clone());
        }
    }
    for label in row_labels {
        if label.len() > variant.row_name_width() {
            truncated.push(label.clone());
        }
    }
    truncated
}

/// Reads a jacobian file with the default (tolerant) options.
///
/// # Errors
///
/// `Open` when the path cannot be opened; `Format`/`Io` per
/// [`decode_jacobian`].
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<JacobianFile> {
    read_matrix_with(path, ReadOptions::default())
}

/// Reads a jacobian file with explicit [`ReadOptions`].
///
/// # Errors
///
/// `Open` when the path cannot be opened; `Format`/`Io` per
/// [`decode_jacobian`].
pub fn read_matrix_with<P: AsRef<Path>>(path: P, options: ReadOptions) -> Result<JacobianFile> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DerivadaError::open(path, e))?;
    let mut reader = BufReader::new(file);
    decode_jacobian(&mut reader, options)
}

/// Reads a jacobian file and materializes the matrix densely.
///
/// Convenience mirror of [`read_matrix`] for callers that want every
/// element; returns `(row_labels, col_labels, dense matrix, variant)`.
///
/// # Errors
///
/// Same as [`read_matrix`].
pub fn read_matrix_dense<P: AsRef<Path>>(
    path: P,
) -> Result<(Vec<String>, Vec<String>, Matrix<f64>, Variant)> {
    let jac = read_matrix(path)?;
    let dense = jac.to_dense();
    Ok((jac.row_labels, jac.col_labels, dense, jac.variant))
}

/// Writes a labeled sparse matrix, auto-selecting the variant.
///
/// Returns the variant chosen. A failed write can leave the destination
/// in an undefined, partially-written state; there is no retry.
///
/// # Errors
///
/// `Open` when the path cannot be created; `Format` when label counts do
/// not match the matrix shape; `Io` on write failures.
pub fn write_matrix<P: AsRef<Path>>(
    path: P,
    row_labels: &[String],
    col_labels: &[String],
    matrix: &SparseMatrix,
) -> Result<Variant> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| DerivadaError::open(path, e))?;
    let mut writer = BufWriter::new(file);
    let variant = encode_jacobian(&mut writer, row_labels, col_labels, matrix)?;
    writer.flush()?;
    Ok(variant)
}
