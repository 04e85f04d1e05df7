//! String transformations.
//!
//! Functions that produce a new string write it into a caller-supplied
//! `Vec<u8>`. The buffer is cleared first, so it can be reused across calls.
//!
//! | Function | Module |
//! |---|---|
//! | [`to_lower_case`], [`to_upper_case`] and in-place forms | `case` |
//! | [`trim`], [`trim_start`], [`trim_end`] and in-place forms | `trim` |
//! | [`slice`], [`substring`], [`copy_range`], [`copy_until`] | `slice` |
//! | [`pad_start`], [`pad_end`] | `pad` |
//! | [`replace`] | `replace` |
//! | [`concat`], [`repeat`] | here |

use alloc::vec::Vec;

use crate::error::{reserve, Result, StrError};

mod case;
mod pad;
mod replace;
mod slice;
mod trim;

pub use case::{
    to_lower, to_lower_case, to_lower_case_in_place, to_upper, to_upper_case,
    to_upper_case_in_place,
};
pub use pad::{pad_end, pad_start};
pub use replace::replace;
pub use slice::{copy_range, copy_until, slice, substring};
pub use trim::{trim, trim_end, trim_end_in_place, trim_in_place, trim_start, trim_start_in_place};

/// Write `first` followed by `second` into `out`.
///
/// Works on bytes only; neither argument is decoded.
///
/// ```
/// use cpstr::transform::concat;
///
/// let mut out = Vec::new();
/// concat(b"Hello, World!", b"World", &mut out).unwrap();
/// assert_eq!(out, b"Hello, World!World");
/// ```
pub fn concat(first: &[u8], second: &[u8], out: &mut Vec<u8>) -> Result<()> {
    out.clear();
    let total = first
        .len()
        .checked_add(second.len())
        .ok_or(StrError::MemoryAllocation {
            requested: usize::MAX,
        })?;
    reserve(out, total)?;
    out.extend_from_slice(first);
    out.extend_from_slice(second);
    Ok(())
}

/// Write `count` copies of `input` into `out`. A count of zero gives an empty
/// result.
///
/// ```
/// use cpstr::transform::repeat;
///
/// let mut out = Vec::new();
/// repeat(b"Repeat", 3, &mut out).unwrap();
/// assert_eq!(out, b"RepeatRepeatRepeat");
/// ```
///
/// # Errors
///
/// [`StrError::MemoryAllocation`] if the result size overflows or cannot be
/// allocated.
pub fn repeat(input: &[u8], count: usize, out: &mut Vec<u8>) -> Result<()> {
    out.clear();
    let total = input
        .len()
        .checked_mul(count)
        .ok_or(StrError::MemoryAllocation {
            requested: usize::MAX,
        })?;
    reserve(out, total)?;
    for _ in 0..count {
        out.extend_from_slice(input);
    }
    Ok(())
}
