//! Convenience re-exports for common usage.

pub use crate::error::{DerivadaError, Result};
pub use crate::format::{
    choose_variant, read_matrix, read_matrix_dense, read_matrix_with, truncated_labels,
    write_matrix, IndexDiagnostic, JacobianFile, ReadOptions, Variant,
};
pub use crate::primitives::{Matrix, SparseMatrix};
