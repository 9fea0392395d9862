//! Fixed-width name table codec.
//!
//! Labels are stored as constant-width, space-padded byte records with no
//! delimiters, in file order. The case handling is deliberately asymmetric:
//! names are upper-cased on read (they serve as lookup keys downstream) and
//! lower-cased on write (the on-disk convention of existing producers).

use std::io::{Read, Write};

use crate::error::{DerivadaError, Result};

/// Packs a label into exactly `width` bytes: lower-cased, space-padded,
/// silently truncated when too long.
///
/// Truncation is part of the fixed-width record convention, not an error.
#[must_use]
pub fn pack_name(label: &str, width: usize) -> Vec<u8> {
    let lower = label.to_lowercase();
    let bytes = lower.as_bytes();
    let take = bytes.len().min(width);
    let mut record = vec![b' '; width];
    record[..take].copy_from_slice(&bytes[..take]);
    record
}

/// Unpacks a fixed-width record: strips padding, upper-cases.
#[must_use]
pub fn unpack_name(record: &[u8]) -> String {
    String::from_utf8_lossy(record).trim().to_uppercase()
}

/// Reads `count` records of `width` bytes each.
///
/// # Errors
///
/// `Format` when the stream ends before `count` records have been read
/// (name-table record count mismatch against the header).
pub fn decode_names<R: Read>(reader: &mut R, count: usize, width: usize) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(count);
    let mut record = vec![0u8; width];
    for index in 0..count {
        reader.read_exact(&mut record).map_err(|_| {
            DerivadaError::format(format!(
                "name table truncated: read {index} of {count} records of width {width}"
            ))
        })?;
        names.push(unpack_name(&record));
    }
    Ok(names)
}

/// Writes one `width`-byte record per label, in order.
///
/// # Errors
///
/// `Io` when the stream cannot be written.
pub fn encode_names<W: Write>(writer: &mut W, labels: &[String], width: usize) -> Result<()> {
    for label in labels {
        writer.write_all(&pack_name(label, width))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "names_tests.rs"]
mod tests;
