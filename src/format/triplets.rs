//! Sparse triplet entry codec.
//!
//! One entry record per stored nonzero. The legacy variant packs both
//! indices into a single 1-based, column-major linear index; the extended
//! variant writes explicit zero-based row and column words. Both carry the
//! value as a raw f64.
//!
//! Entries are enumerated column-major on encode. That order is part of
//! the format: two writers given the same matrix must produce identical
//! bytes, not just equivalent content.

use std::io::{Read, Write};

use super::wire::{read_f64, read_i32, write_f64, write_i32};
use crate::error::Result;

/// One decoded entry record: zero-based indices plus the value.
///
/// Transient: produced during decode and consumed immediately by the
/// assembler. Indices may lie outside the matrix for corrupt files; range
/// checking happens downstream, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triplet {
    /// Zero-based row index.
    pub row: i32,
    /// Zero-based column index.
    pub col: i32,
    /// Entry value.
    pub value: f64,
}

/// Packs zero-based (row, col) into the legacy 1-based column-major
/// linear index: `row + 1 + col * row_count`.
#[must_use]
pub fn linear_index(row: i32, col: i32, row_count: i32) -> i32 {
    (i64::from(row) + 1 + i64::from(col) * i64::from(row_count)) as i32
}

/// Recovers zero-based (row, col) from a legacy linear index.
///
/// Inverse of [`linear_index`] for all in-range positions. Out-of-range
/// inputs still produce a deterministic (row, col) pair; they surface as
/// diagnostics during assembly rather than failing here.
#[must_use]
pub fn split_linear_index(n: i32, row_count: i32) -> (i32, i32) {
    let n0 = i64::from(n) - 1;
    let rows = i64::from(row_count);
    let col = n0 / rows;
    let row = (n0 - rows * col) % rows;
    (row as i32, col as i32)
}

/// Reads one legacy entry: linear index + value.
pub fn decode_legacy_entry<R: Read>(reader: &mut R, row_count: i32) -> Result<Triplet> {
    let n = read_i32(reader)?;
    let value = read_f64(reader)?;
    let (row, col) = split_linear_index(n, row_count);
    Ok(Triplet { row, col, value })
}

/// Reads one extended entry: explicit row + col + value.
pub fn decode_extended_entry<R: Read>(reader: &mut R) -> Result<Triplet> {
    let row = read_i32(reader)?;
    let col = read_i32(reader)?;
    let value = read_f64(reader)?;
    Ok(Triplet { row, col, value })
}

/// Writes one legacy entry for a zero-based in-range position.
pub fn encode_legacy_entry<W: Write>(
    writer: &mut W,
    row: usize,
    col: usize,
    value: f64,
    row_count: usize,
) -> Result<()> {
    let n = linear_index(row as i32, col as i32, row_count as i32);
    write_i32(writer, n)?;
    write_f64(writer, value)
}

/// Writes one extended entry for a zero-based in-range position.
pub fn encode_extended_entry<W: Write>(
    writer: &mut W,
    row: usize,
    col: usize,
    value: f64,
) -> Result<()> {
    write_i32(writer, row as i32)?;
    write_i32(writer, col as i32)?;
    write_f64(writer, value)
}

#[cfg(test)]
#[path = "triplets_tests.rs"]
mod tests;
