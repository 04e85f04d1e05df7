//! Substring search with code-point positions.
//!
//! Matching is a naive scan: at every code-point boundary of the haystack the
//! needle is compared byte by byte. For well-formed input comparing bytes at a
//! boundary is the same as comparing decoded code points, and a match can never
//! start inside a sequence. The scan is `O(n·m)`, which is fine for the short
//! strings these helpers target.
//!
//! All positions are code-point indices, including the result of
//! [`last_index_of`].
//!
//! ```
//! use cpstr::search::{index_of, last_index_of};
//!
//! assert_eq!(index_of(b"Hello, World!", b"World").unwrap(), Some(7));
//! assert_eq!(last_index_of(b"Hello, Hello, World!", b"Hello").unwrap(), Some(7));
//! assert_eq!(index_of("世界, 世界".as_bytes(), "界".as_bytes()).unwrap(), Some(1));
//! ```

use crate::error::{Result, StrError};
use crate::text::utf8::{check_utf8, code_points, sequence_length};

/// A match found by [`find_match`], in both coordinate systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Match {
    /// Code-point index of the first matched code point.
    pub index: usize,
    /// Byte offset of the first matched byte.
    pub offset: usize,
}

/// Scan `haystack` for `needle`, starting at code-point index `start`.
///
/// `needle` is assumed valid; the haystack is decoded as the scan advances.
pub(crate) fn find_match(haystack: &[u8], needle: &[u8], start: usize) -> Result<Option<Match>> {
    let mut iter = code_points(haystack);
    let mut index = 0;

    while index < start {
        match iter.next() {
            Some(seq) => {
                seq?;
                index += 1;
            }
            None => {
                return Err(StrError::InvalidIndex {
                    index: start,
                    limit: index,
                })
            }
        }
    }

    loop {
        let offset = iter.offset();
        if iter.rest().starts_with(needle) {
            return Ok(Some(Match { index, offset }));
        }
        match iter.next() {
            Some(seq) => {
                seq?;
                index += 1;
            }
            None => return Ok(None),
        }
    }
}

/// Position of the first occurrence of `substr` at or after code-point index
/// `start`.
///
/// An empty `substr` matches at `start`.
///
/// # Errors
///
/// [`StrError::InvalidIndex`] if `start` is past the end of `input`, and
/// [`StrError::InvalidUtf8`] if either argument is malformed.
pub fn find(input: &[u8], substr: &[u8], start: usize) -> Result<Option<usize>> {
    check_utf8(substr)?;
    Ok(find_match(input, substr, start)?.map(|m| m.index))
}

/// Position of the first occurrence of `substr`, or `None`.
#[inline]
pub fn index_of(input: &[u8], substr: &[u8]) -> Result<Option<usize>> {
    find(input, substr, 0)
}

/// Position of the last occurrence of `substr`, or `None`.
///
/// Found by repeated forward searches, each one resuming one code point after
/// the previous match, so the input is decoded once. An empty `substr` matches
/// at the end of `input`.
pub fn last_index_of(input: &[u8], substr: &[u8]) -> Result<Option<usize>> {
    check_utf8(substr)?;
    if substr.is_empty() {
        return crate::access::length(input).map(Some);
    }

    let mut last = None;
    // Code-point index and byte offset where the next search resumes.
    let mut index = 0;
    let mut offset = 0;
    while let Some(m) =
        find_match(&input[offset..], substr, 0).map_err(|err| err.shifted(offset))?
    {
        last = Some(index + m.index);
        // The match starts with the first code point of `substr`, which is valid.
        index += m.index + 1;
        offset += m.offset + sequence_length(substr[0]);
    }
    Ok(last)
}

/// Whether `substr` occurs anywhere in `input`.
#[inline]
pub fn includes(input: &[u8], substr: &[u8]) -> Result<bool> {
    index_of(input, substr).map(|pos| pos.is_some())
}

/// Whether `input` begins with `prefix`, compared byte for byte.
#[inline]
pub fn starts_with(input: &[u8], prefix: &[u8]) -> bool {
    input.starts_with(prefix)
}

/// Whether `input` ends with `suffix`, compared byte for byte.
#[inline]
pub fn ends_with(input: &[u8], suffix: &[u8]) -> bool {
    input.ends_with(suffix)
}
