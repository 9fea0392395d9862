//! Header codec: the three leading integers of a jacobian file.
//!
//! The first two words double as the variant tag. Extended writers store
//! the column and row counts directly; legacy writers store them negated,
//! so the sign of word one tells a reader which entry encoding and name
//! widths follow.

use std::io::{Read, Write};

use super::wire::{read_i32, write_i32};
use super::{Variant, MAX_COL_COUNT};
use crate::error::{DerivadaError, Result};

/// Decoded jacobian file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Number of columns (parameters).
    pub col_count: i32,
    /// Number of rows (observations + prior information).
    pub row_count: i32,
    /// Number of entry records that follow.
    pub nonzero_count: i32,
    /// Which on-disk encoding the rest of the file uses.
    pub variant: Variant,
}

impl Header {
    /// Reads and validates the three leading integers.
    ///
    /// # Errors
    ///
    /// `Format` when the column count exceeds the sanity ceiling or any of
    /// the three counts is zero or negative after sign decoding; `Io` when
    /// the stream ends early.
    pub fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let h1 = read_i32(reader)?;
        let h2 = read_i32(reader)?;

        let (variant, col_count, row_count) = if h1 > 0 {
            (Variant::Extended, h1, h2)
        } else {
            (Variant::Legacy, h1.wrapping_neg(), h2.wrapping_neg())
        };

        if col_count > MAX_COL_COUNT {
            return Err(DerivadaError::format(format!(
                "failed sanity check: column count {col_count} > {MAX_COL_COUNT}"
            )));
        }

        let nonzero_count = read_i32(reader)?;

        if col_count <= 0 || row_count <= 0 || nonzero_count <= 0 {
            return Err(DerivadaError::format(format!(
                "column, row and/or nonzero count is zero \
                 (cols={col_count}, rows={row_count}, nonzeros={nonzero_count})"
            )));
        }

        Ok(Self {
            col_count,
            row_count,
            nonzero_count,
            variant,
        })
    }

    /// Writes the three leading integers, sign-encoding the variant.
    ///
    /// # Errors
    ///
    /// `Io` when the stream cannot be written.
    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self.variant {
            Variant::Extended => {
                write_i32(writer, self.col_count)?;
                write_i32(writer, self.row_count)?;
            }
            Variant::Legacy => {
                write_i32(writer, -self.col_count)?;
                write_i32(writer, -self.row_count)?;
            }
        }
        write_i32(writer, self.nonzero_count)
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
