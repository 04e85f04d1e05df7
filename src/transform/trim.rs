//! Whitespace trimming.
//!
//! The slice-returning functions borrow from their input; the `_in_place`
//! functions shrink an owned buffer.

use alloc::vec::Vec;

use crate::error::{Result, StrError};
use crate::text::utf8::{code_points, decode_code_point, is_continuation_byte};
use crate::text::whitespace::is_whitespace;

/// Byte offset of the first non-whitespace code point.
fn leading_end(input: &[u8]) -> Result<usize> {
    for seq in code_points(input) {
        let seq = seq?;
        if !is_whitespace(seq.code_point) {
            return Ok(seq.offset);
        }
    }
    Ok(input.len())
}

/// Byte offset one past the last non-whitespace code point.
///
/// Walks backwards. A continuation byte cannot be classified on its own, so
/// each step first backs up to the lead byte of the final sequence.
fn trailing_start(input: &[u8]) -> Result<usize> {
    let mut end = input.len();
    while end > 0 {
        let mut start = end - 1;
        while start > 0 && end - start < 4 && is_continuation_byte(input[start]) {
            start -= 1;
        }
        match decode_code_point(&input[start..end]) {
            Some((cp, len)) if len == end - start => {
                if !is_whitespace(cp) {
                    return Ok(end);
                }
            }
            // A valid sequence followed by stray continuation bytes: the
            // bad sequence begins right after it.
            Some((_, len)) => return Err(StrError::InvalidUtf8 { offset: start + len }),
            None => return Err(StrError::InvalidUtf8 { offset: start }),
        }
        end = start;
    }
    Ok(0)
}

/// `input` without leading whitespace.
///
/// ```
/// use cpstr::transform::trim_start;
///
/// assert_eq!(trim_start("\u{3000} Trim me!".as_bytes()).unwrap(), b"Trim me!");
/// ```
pub fn trim_start(input: &[u8]) -> Result<&[u8]> {
    Ok(&input[leading_end(input)?..])
}

/// `input` without trailing whitespace.
pub fn trim_end(input: &[u8]) -> Result<&[u8]> {
    Ok(&input[..trailing_start(input)?])
}

/// `input` without leading or trailing whitespace.
///
/// ```
/// use cpstr::transform::trim;
///
/// assert_eq!(trim(b"   Trim me!   ").unwrap(), b"Trim me!");
/// ```
pub fn trim(input: &[u8]) -> Result<&[u8]> {
    let start = leading_end(input)?;
    let rest = &input[start..];
    let end = trailing_start(rest).map_err(|err| err.shifted(start))?;
    Ok(&rest[..end])
}

/// Remove leading whitespace from `buf`.
pub fn trim_start_in_place(buf: &mut Vec<u8>) -> Result<()> {
    let start = leading_end(buf)?;
    buf.drain(..start);
    Ok(())
}

/// Remove trailing whitespace from `buf`.
pub fn trim_end_in_place(buf: &mut Vec<u8>) -> Result<()> {
    let end = trailing_start(buf)?;
    buf.truncate(end);
    Ok(())
}

/// Remove leading and trailing whitespace from `buf`.
pub fn trim_in_place(buf: &mut Vec<u8>) -> Result<()> {
    trim_end_in_place(buf)?;
    trim_start_in_place(buf)
}
