//! Native-order scalar read/write helpers.
//!
//! The jacobian format carries no endianness marker: producers write raw
//! in-memory integers and doubles. Matching that means native byte order
//! here, not little-endian. See the caveat in the [`format`](crate::format)
//! module docs.

use std::io::{Read, Write};

use crate::error::Result;

pub(crate) fn read_i32<R: Read>(reader: &mut R) -> Result<i32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_ne_bytes(buf))
}

pub(crate) fn read_f64<R: Read>(reader: &mut R) -> Result<f64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(f64::from_ne_bytes(buf))
}

pub(crate) fn write_i32<W: Write>(writer: &mut W, value: i32) -> Result<()> {
    writer.write_all(&value.to_ne_bytes())?;
    Ok(())
}

pub(crate) fn write_f64<W: Write>(writer: &mut W, value: f64) -> Result<()> {
    writer.write_all(&value.to_ne_bytes())?;
    Ok(())
}
