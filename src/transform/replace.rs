//! Substring replacement.

use alloc::vec::Vec;

use crate::error::{reserve, Result, StrError};
use crate::search::find_match;
use crate::text::utf8::check_utf8;

/// Replace every non-overlapping occurrence of `search` in `input` with
/// `replacement`, writing the result into `out`.
///
/// Matches are found left to right; after a match the scan resumes right after
/// the matched span. Text between matches is copied verbatim.
///
/// ```
/// use cpstr::transform::replace;
///
/// let mut out = Vec::new();
/// replace(b"Hello, World!", b"World", b"Universe", &mut out).unwrap();
/// assert_eq!(out, b"Hello, Universe!");
/// ```
///
/// # Errors
///
/// [`StrError::NullInput`] if `search` is empty, and
/// [`StrError::InvalidUtf8`] if any argument is malformed.
pub fn replace(input: &[u8], search: &[u8], replacement: &[u8], out: &mut Vec<u8>) -> Result<()> {
    if search.is_empty() {
        return Err(StrError::NullInput { argument: "search" });
    }
    check_utf8(search)?;
    check_utf8(replacement)?;

    out.clear();
    reserve(out, input.len())?;

    // Byte offset of the first byte not yet copied to `out`.
    let mut copied = 0;
    loop {
        let found = find_match(&input[copied..], search, 0).map_err(|err| err.shifted(copied))?;
        let Some(m) = found else { break };
        let matched_at = copied + m.offset;
        reserve(out, matched_at - copied + replacement.len())?;
        out.extend_from_slice(&input[copied..matched_at]);
        out.extend_from_slice(replacement);
        copied = matched_at + search.len();
    }

    let rest = &input[copied..];
    reserve(out, rest.len())?;
    out.extend_from_slice(rest);
    Ok(())
}
