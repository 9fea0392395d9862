//! Whole-file decode/encode composition.
//!
//! Field order on disk: header, entry records, column-name table, row-name
//! table. Decode reads the sections in that order and assembles at the
//! end; encode mirrors it, enumerating entries column-major.

use std::io::{Read, Write};

use super::header::Header;
use super::names::{decode_names, encode_names};
use super::triplets::{
    decode_extended_entry, decode_legacy_entry, encode_extended_entry, encode_legacy_entry,
    Triplet,
};
use super::{choose_variant, IndexDiagnostic, JacobianFile, ReadOptions, Variant};
use crate::error::{DerivadaError, Result};
use crate::primitives::SparseMatrix;

/// Decodes a complete jacobian file from a stream.
///
/// # Errors
///
/// `Format` on a malformed header, a truncated name table, or (with
/// `strict_indices`) an out-of-range entry index; `Io` on stream failures.
pub fn decode_jacobian<R: Read>(reader: &mut R, options: ReadOptions) -> Result<JacobianFile> {
    let header = Header::decode(reader)?;
    eprintln!(
        "reading {} elements, {} rows, {} columns",
        header.nonzero_count, header.row_count, header.col_count
    );

    let mut triplets = Vec::with_capacity(header.nonzero_count as usize);
    for _ in 0..header.nonzero_count {
        let triplet = match header.variant {
            Variant::Legacy => decode_legacy_entry(reader, header.row_count)?,
            Variant::Extended => decode_extended_entry(reader)?,
        };
        triplets.push(triplet);
    }

    let col_labels = decode_names(
        reader,
        header.col_count as usize,
        header.variant.col_name_width(),
    )?;
    let row_labels = decode_names(
        reader,
        header.row_count as usize,
        header.variant.row_name_width(),
    )?;

    let (matrix, diagnostics) = assemble(&triplets, &header, options.strict_indices)?;

    Ok(JacobianFile {
        row_labels,
        col_labels,
        matrix,
        variant: header.variant,
        diagnostics,
    })
}

/// Builds the sparse matrix from decoded triplets.
///
/// Out-of-range indices become [`IndexDiagnostic`]s in the default mode:
/// reported, not stored, never fatal. Duplicate positions resolve by
/// replacement in encounter order (last write wins).
fn assemble(
    triplets: &[Triplet],
    header: &Header,
    strict: bool,
) -> Result<(SparseMatrix, Vec<IndexDiagnostic>)> {
    let rows = header.row_count as usize;
    let cols = header.col_count as usize;
    let mut matrix = SparseMatrix::new(rows, cols);
    let mut diagnostics = Vec::new();

    for (ordinal, t) in triplets.iter().enumerate() {
        let in_range =
            t.row >= 0 && t.row < header.row_count && t.col >= 0 && t.col < header.col_count;
        if in_range {
            matrix.set(t.row as usize, t.col as usize, t.value);
        } else if strict {
            return Err(DerivadaError::format(format!(
                "entry {ordinal}: index ({}, {}) outside {rows}x{cols} matrix",
                t.row, t.col
            )));
        } else {
            let diagnostic = IndexDiagnostic {
                ordinal,
                row: t.row,
                col: t.col,
                value: t.value,
            };
            eprintln!("warning: {diagnostic} (matrix is {rows}x{cols})");
            diagnostics.push(diagnostic);
        }
    }

    Ok((matrix, diagnostics))
}

/// Encodes a labeled sparse matrix to a stream, auto-selecting the variant.
///
/// Returns the variant chosen so callers can verify which encoding a file
/// received.
///
/// # Errors
///
/// `Format` when the label counts disagree with the matrix shape; `Io` on
/// stream failures.
pub fn encode_jacobian<W: Write>(
    writer: &mut W,
    row_labels: &[String],
    col_labels: &[String],
    matrix: &SparseMatrix,
) -> Result<Variant> {
    let (rows, cols) = matrix.shape();
    if row_labels.len() != rows || col_labels.len() != cols {
        return Err(DerivadaError::format(format!(
            "label counts ({} rows, {} columns) do not match matrix shape {rows}x{cols}",
            row_labels.len(),
            col_labels.len()
        )));
    }

    let variant = choose_variant(row_labels, col_labels);
    let header = Header {
        col_count: cols as i32,
        row_count: rows as i32,
        nonzero_count: matrix.nnz() as i32,
        variant,
    };
    header.encode(writer)?;

    for (row, col, value) in matrix.iter_col_major() {
        match variant {
            Variant::Legacy => encode_legacy_entry(writer, row, col, value, rows)?,
            Variant::Extended => encode_extended_entry(writer, row, col, value)?,
        }
    }

    encode_names(writer, col_labels, variant.col_name_width())?;
    encode_names(writer, row_labels, variant.row_name_width())?;

    Ok(variant)
}

#[cfg(test)]
#[path = "core_io_tests.rs"]
mod tests;
