//! Padding to a target length in code points.

use alloc::vec::Vec;

use crate::access::{byte_offset, length};
use crate::error::{reserve, Result, StrError};
use crate::text::utf8::check_utf8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Start,
    End,
}

/// The padding needed to bring `input` up to `target_len` code points.
#[derive(Debug)]
struct Padding<'a> {
    pad: &'a [u8],
    /// Whole copies of `pad`.
    copies: usize,
    /// Bytes of the partial copy that follows the whole ones.
    partial: usize,
}

impl Padding<'_> {
    fn byte_len(&self) -> Option<usize> {
        self.pad.len().checked_mul(self.copies)?.checked_add(self.partial)
    }

    fn write(&self, out: &mut Vec<u8>) {
        for _ in 0..self.copies {
            out.extend_from_slice(self.pad);
        }
        out.extend_from_slice(&self.pad[..self.partial]);
    }
}

fn plan<'a>(input_len: usize, target_len: usize, pad: &'a [u8]) -> Result<Padding<'a>> {
    let missing = target_len.saturating_sub(input_len);
    if missing == 0 {
        return Ok(Padding {
            pad,
            copies: 0,
            partial: 0,
        });
    }
    if pad.is_empty() {
        return Err(StrError::NullInput { argument: "pad" });
    }
    let pad_len = length(pad)?;
    Ok(Padding {
        pad,
        copies: missing / pad_len,
        partial: byte_offset(pad, missing % pad_len)?,
    })
}

fn pad_impl(
    input: &[u8],
    target_len: usize,
    pad: &[u8],
    out: &mut Vec<u8>,
    capacity: usize,
    side: Side,
) -> Result<()> {
    if target_len >= capacity {
        return Err(StrError::InvalidIndex {
            index: target_len,
            limit: capacity,
        });
    }
    check_utf8(pad)?;
    let padding = plan(length(input)?, target_len, pad)?;

    let total = padding
        .byte_len()
        .and_then(|n| n.checked_add(input.len()))
        .ok_or(StrError::MemoryAllocation {
            requested: usize::MAX,
        })?;
    if total > capacity {
        return Err(StrError::MemoryAllocation { requested: total });
    }

    out.clear();
    reserve(out, total)?;
    match side {
        Side::Start => {
            padding.write(out);
            out.extend_from_slice(input);
        }
        Side::End => {
            out.extend_from_slice(input);
            padding.write(out);
        }
    }
    Ok(())
}

/// Pad the start of `input` with repetitions of `pad` until it is `target_len`
/// code points long, writing the result into `out`.
///
/// If `input` is already at least `target_len` long it is copied unchanged.
/// Otherwise `pad` is repeated whole as often as it fits, followed by as many
/// leading code points of `pad` as are still missing.
///
/// `capacity` bounds the result: both checks below happen before `out` is
/// touched.
///
/// ```
/// use cpstr::transform::pad_start;
///
/// let mut out = Vec::new();
/// pad_start(b"Pad", 10, b" ", &mut out, 64).unwrap();
/// assert_eq!(out, b"       Pad");
///
/// pad_start(b"5", 4, "世界".as_bytes(), &mut out, 64).unwrap();
/// assert_eq!(out, "世界世5".as_bytes());
/// ```
///
/// # Errors
///
/// - [`StrError::InvalidIndex`] if `target_len >= capacity`
/// - [`StrError::MemoryAllocation`] if the result needs more than `capacity`
///   bytes or cannot be allocated
/// - [`StrError::NullInput`] if padding is needed and `pad` is empty
/// - [`StrError::InvalidUtf8`] if `input` or `pad` is malformed
pub fn pad_start(
    input: &[u8],
    target_len: usize,
    pad: &[u8],
    out: &mut Vec<u8>,
    capacity: usize,
) -> Result<()> {
    pad_impl(input, target_len, pad, out, capacity, Side::Start)
}

/// Pad the end of `input`; the counterpart of [`pad_start`].
pub fn pad_end(
    input: &[u8],
    target_len: usize,
    pad: &[u8],
    out: &mut Vec<u8>,
    capacity: usize,
) -> Result<()> {
    pad_impl(input, target_len, pad, out, capacity, Side::End)
}
