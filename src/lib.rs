//! Derivada: binary codec for labeled sparse Jacobian/sensitivity matrices.
//!
//! Reads and writes the dual-variant binary format used by
//! parameter-estimation and inverse-modeling workflows to exchange
//! sensitivity matrices with their row (observation) and column
//! (parameter) labels.
//!
//! # Quick Start
//!
//! ```no_run
//! use derivada::prelude::*;
//!
//! let mut jacobian = SparseMatrix::new(2, 3);
//! jacobian.set(0, 0, 1.5);
//! jacobian.set(1, 2, -3.25);
//!
//! let row_labels = vec!["obs1".to_string(), "obs2".to_string()];
//! let col_labels = vec!["p1".to_string(), "p2".to_string(), "p3".to_string()];
//!
//! let variant = write_matrix("run.jco", &row_labels, &col_labels, &jacobian)?;
//! assert_eq!(variant, Variant::Legacy);
//!
//! let decoded = read_matrix("run.jco")?;
//! assert_eq!(decoded.matrix.get(1, 2), -3.25);
//! # Ok::<(), derivada::error::DerivadaError>(())
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: dense `Matrix` and sparse `SparseMatrix` types
//! - [`format`]: the binary file codec (header, name tables, entries)
//! - [`error`]: error types

pub mod error;
pub mod format;
pub mod prelude;
pub mod primitives;

pub use error::{DerivadaError, Result};
pub use format::{
    read_matrix, read_matrix_dense, read_matrix_with, write_matrix, JacobianFile, ReadOptions,
    Variant,
};
pub use primitives::{Matrix, SparseMatrix};
