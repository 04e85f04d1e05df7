//! Extracting code-point ranges.

use alloc::vec::Vec;
use core::ops::Range;

use crate::error::{reserve, Result, StrError};
use crate::search::find_match;
use crate::text::utf8::{check_utf8, code_points};

/// Byte range covering code points `[start, end)`, with both ends clamped to
/// the length. Requires `start <= end`.
///
/// Decoding stops at `end`, so malformed bytes after the range are not seen.
fn byte_range(input: &[u8], start: usize, end: usize) -> Result<Range<usize>> {
    debug_assert!(start <= end);
    let mut iter = code_points(input);
    let mut begin = None;
    let mut index = 0;

    while index < end {
        if index == start {
            begin = Some(iter.offset());
        }
        match iter.next() {
            Some(seq) => {
                seq?;
                index += 1;
            }
            None => break,
        }
    }

    let finish = iter.offset();
    Ok(begin.unwrap_or(finish)..finish)
}

fn copy_bytes(src: &[u8], dest: &mut Vec<u8>) -> Result<()> {
    dest.clear();
    reserve(dest, src.len())?;
    dest.extend_from_slice(src);
    Ok(())
}

/// Copy code points `[start, end)` of `input` into `out`.
///
/// Indices past the end are clamped to the length. If `start > end` the
/// result is empty.
///
/// ```
/// use cpstr::transform::slice;
///
/// let mut out = Vec::new();
/// slice("Héllö, 世界!".as_bytes(), 7, 9, &mut out).unwrap();
/// assert_eq!(out, "世界".as_bytes());
/// ```
pub fn slice(input: &[u8], start: usize, end: usize, out: &mut Vec<u8>) -> Result<()> {
    if start >= end {
        out.clear();
        return Ok(());
    }
    let range = byte_range(input, start, end)?;
    copy_bytes(&input[range], out)
}

/// Like [`slice`], but swaps `start` and `end` when `start > end`.
///
/// ```
/// use cpstr::transform::substring;
///
/// let mut out = Vec::new();
/// substring(b"Hello, World!", 12, 7, &mut out).unwrap();
/// assert_eq!(out, b"World");
/// ```
pub fn substring(input: &[u8], start: usize, end: usize, out: &mut Vec<u8>) -> Result<()> {
    if start > end {
        slice(input, end, start, out)
    } else {
        slice(input, start, end, out)
    }
}

/// Copy code points `[start, end)` of `src` into `dest`, without clamping.
///
/// # Errors
///
/// [`StrError::InvalidIndex`] if `start > end` or `end` is past the length of
/// `src`.
pub fn copy_range(src: &[u8], start: usize, end: usize, dest: &mut Vec<u8>) -> Result<()> {
    if start > end {
        return Err(StrError::InvalidIndex {
            index: start,
            limit: end,
        });
    }
    let range = byte_range(src, start, end)?;
    let available = crate::access::code_point_index(src, range.end)?;
    if available < end {
        return Err(StrError::InvalidIndex {
            index: end,
            limit: available,
        });
    }
    copy_bytes(&src[range], dest)
}

/// Copy `src` into `dest` up to, not including, the first occurrence of
/// `delimiter`. Without an occurrence the whole of `src` is copied.
///
/// ```
/// use cpstr::transform::copy_until;
///
/// let mut out = Vec::new();
/// copy_until("key=世界".as_bytes(), b"=", &mut out).unwrap();
/// assert_eq!(out, b"key");
/// ```
pub fn copy_until(src: &[u8], delimiter: &[u8], dest: &mut Vec<u8>) -> Result<()> {
    check_utf8(delimiter)?;
    if delimiter.is_empty() {
        dest.clear();
        return Ok(());
    }
    let end = match find_match(src, delimiter, 0)? {
        Some(m) => m.offset,
        None => {
            check_utf8(src)?;
            src.len()
        }
    };
    copy_bytes(&src[..end], dest)
}
