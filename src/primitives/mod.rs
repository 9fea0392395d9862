//! Core matrix primitives (dense and sparse).
//!
//! These types carry the numeric payload of a jacobian file; labels and
//! format concerns live in [`crate::format`].

mod matrix;
mod sparse;

pub use matrix::Matrix;
pub use sparse::SparseMatrix;
