//! Case conversion for ASCII and the Latin-1 Supplement.
//!
//! Only two blocks are mapped: ASCII letters and the Latin-1 letters
//! U+00C0-U+00DE / U+00E0-U+00FE (excluding × and ÷). Everything else, CJK,
//! emoji and punctuation included, is copied unchanged.
//!
//! Within those blocks a mapping never changes the encoded length, which is
//! what makes the `_in_place` variants possible. A wider case table would not
//! have that property, so the buffered forms are the general interface.

use alloc::vec::Vec;

use crate::error::{reserve, Result, StrError};
use crate::text::utf8::{code_points, encode_code_point, push_code_point};

/// Distance between an upper-case letter and its lower-case form in both
/// covered blocks.
const CASE_OFFSET: u32 = 0x20;

/// Lower-case mapping of a single code point.
///
/// ```
/// use cpstr::transform::to_lower;
///
/// assert_eq!(to_lower('A' as u32), 'a' as u32);
/// assert_eq!(to_lower('Ö' as u32), 'ö' as u32);
/// assert_eq!(to_lower('×' as u32), '×' as u32);
/// assert_eq!(to_lower('Ω' as u32), 'Ω' as u32); // outside the covered blocks
/// ```
#[inline]
pub fn to_lower(cp: u32) -> u32 {
    match cp {
        0x41..=0x5A | 0xC0..=0xD6 | 0xD8..=0xDE => cp + CASE_OFFSET,
        _ => cp,
    }
}

/// Upper-case mapping of a single code point.
#[inline]
pub fn to_upper(cp: u32) -> u32 {
    match cp {
        0x61..=0x7A | 0xE0..=0xF6 | 0xF8..=0xFE => cp - CASE_OFFSET,
        _ => cp,
    }
}

fn map_into(input: &[u8], out: &mut Vec<u8>, map: fn(u32) -> u32) -> Result<()> {
    out.clear();
    reserve(out, input.len())?;
    for seq in code_points(input) {
        let seq = seq?;
        push_code_point(out, map(seq.code_point), seq.offset)?;
    }
    Ok(())
}

fn map_in_place(buf: &mut [u8], map: fn(u32) -> u32) -> Result<()> {
    let mut pos = 0;
    while pos < buf.len() {
        let seq = match code_points(&buf[pos..]).next() {
            Some(seq) => seq.map_err(|_| StrError::InvalidUtf8 { offset: pos })?,
            None => break,
        };
        let mapped = map(seq.code_point);
        if mapped != seq.code_point {
            let (bytes, len) =
                encode_code_point(mapped).ok_or(StrError::InvalidUtf8 { offset: pos })?;
            debug_assert_eq!(len, seq.len, "case mapping changed the encoded length");
            buf[pos..pos + len].copy_from_slice(&bytes[..len]);
        }
        pos += seq.len;
    }
    Ok(())
}

/// Write the lower-case form of `input` into `out`.
///
/// ```
/// use cpstr::transform::to_lower_case;
///
/// let mut out = Vec::new();
/// to_lower_case("HÉLLÖ, 世界!".as_bytes(), &mut out).unwrap();
/// assert_eq!(out, "héllö, 世界!".as_bytes());
/// ```
pub fn to_lower_case(input: &[u8], out: &mut Vec<u8>) -> Result<()> {
    map_into(input, out, to_lower)
}

/// Write the upper-case form of `input` into `out`.
pub fn to_upper_case(input: &[u8], out: &mut Vec<u8>) -> Result<()> {
    map_into(input, out, to_upper)
}

/// Lower-case `buf` in place.
///
/// On a decode error the bytes before the failing sequence have already been
/// converted.
pub fn to_lower_case_in_place(buf: &mut [u8]) -> Result<()> {
    map_in_place(buf, to_lower)
}

/// Upper-case `buf` in place.
///
/// On a decode error the bytes before the failing sequence have already been
/// converted.
pub fn to_upper_case_in_place(buf: &mut [u8]) -> Result<()> {
    map_in_place(buf, to_upper)
}
