//! Code-point indexed access.
//!
//! Indices in this module count code points, not bytes. Reaching index `i`
//! means decoding the `i` sequences before it, so every call is `O(i)`; nothing
//! is cached between calls.
//!
//! ```
//! use cpstr::access::{char_at, char_code_at, length};
//!
//! let s = "Hello, 🌍🚀!".as_bytes();
//! assert_eq!(length(s).unwrap(), 10);
//! assert_eq!(char_code_at(s, 7).unwrap(), 127757);
//! assert_eq!(char_at(s, 7).unwrap(), "🌍".as_bytes());
//! ```

use alloc::vec::Vec;

use crate::error::{reserve, Result, StrError};
use crate::text::utf8::{code_points, encode_code_point, Sequence};

/// Number of code points in `input`.
///
/// Fails with [`StrError::InvalidUtf8`] if any sequence does not decode.
pub fn length(input: &[u8]) -> Result<usize> {
    let mut count = 0;
    for seq in code_points(input) {
        seq?;
        count += 1;
    }
    Ok(count)
}

/// The sequence at code-point index `index`.
///
/// Only the sequences up to and including `index` are decoded.
pub(crate) fn sequence_at(input: &[u8], index: usize) -> Result<Sequence> {
    let mut count = 0;
    for seq in code_points(input) {
        let seq = seq?;
        if count == index {
            return Ok(seq);
        }
        count += 1;
    }
    Err(StrError::InvalidIndex {
        index,
        limit: count,
    })
}

/// The UTF-8 bytes of the code point at `index`, as an owned buffer.
///
/// The whole multi-byte sequence is returned, never a single byte of it.
///
/// # Errors
///
/// [`StrError::InvalidIndex`] if `index` is not below the length,
/// [`StrError::InvalidUtf8`] if decoding fails before reaching it, and
/// [`StrError::MemoryAllocation`] if the buffer cannot be allocated.
pub fn char_at(input: &[u8], index: usize) -> Result<Vec<u8>> {
    let seq = sequence_at(input, index)?;
    let mut out = Vec::new();
    reserve(&mut out, seq.len)?;
    out.extend_from_slice(&input[seq.offset..seq.end()]);
    Ok(out)
}

/// The code point at `index`.
///
/// ```
/// use cpstr::access::char_code_at;
/// use cpstr::StrError;
///
/// assert_eq!(char_code_at(b"Hello, World!", 7).unwrap(), 'W' as u32);
/// assert_eq!(
///     char_code_at(b"abc", 3),
///     Err(StrError::InvalidIndex { index: 3, limit: 3 })
/// );
/// ```
pub fn char_code_at(input: &[u8], index: usize) -> Result<u32> {
    sequence_at(input, index).map(|seq| seq.code_point)
}

/// The code point at `index`, or `None` if there is none.
///
/// Same lookup as [`char_code_at`]; out-of-range indices and decode failures
/// both map to `None`.
pub fn code_point_at(input: &[u8], index: usize) -> Option<u32> {
    char_code_at(input, index).ok()
}

/// Encode a single code point into an owned buffer.
///
/// ```
/// use cpstr::access::from_code_point;
///
/// assert_eq!(from_code_point(0x4E16).unwrap(), "世".as_bytes());
/// assert!(from_code_point(0x110000).is_err());
/// ```
///
/// # Errors
///
/// [`StrError::InvalidUtf8`] above U+10FFFF or for a surrogate,
/// [`StrError::MemoryAllocation`] if the buffer cannot be allocated.
pub fn from_code_point(cp: u32) -> Result<Vec<u8>> {
    let (bytes, len) = encode_code_point(cp).ok_or(StrError::InvalidUtf8 { offset: 0 })?;
    let mut out = Vec::new();
    reserve(&mut out, len)?;
    out.extend_from_slice(&bytes[..len]);
    Ok(out)
}

/// Byte offset of the code point at `index`.
///
/// `index` may equal the length, which maps to `input.len()`.
pub fn byte_offset(input: &[u8], index: usize) -> Result<usize> {
    let mut iter = code_points(input);
    for count in 0..index {
        match iter.next() {
            Some(seq) => {
                seq?;
            }
            None => {
                return Err(StrError::InvalidIndex {
                    index,
                    limit: count,
                })
            }
        }
    }
    Ok(iter.offset())
}

/// Code-point index of the sequence starting at byte `offset`.
///
/// `offset` must be a sequence boundary or `input.len()`; an offset inside a
/// sequence is [`StrError::InvalidIndex`].
pub fn code_point_index(input: &[u8], offset: usize) -> Result<usize> {
    if offset > input.len() {
        return Err(StrError::InvalidIndex {
            index: offset,
            limit: input.len(),
        });
    }
    let mut count = 0;
    let mut iter = code_points(input);
    while iter.offset() < offset {
        match iter.next() {
            Some(seq) => {
                seq?;
                count += 1;
            }
            None => break,
        }
    }
    if iter.offset() != offset {
        return Err(StrError::InvalidIndex {
            index: offset,
            limit: input.len(),
        });
    }
    Ok(count)
}
