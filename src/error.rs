//! Error type shared by every code-point operation.
//!
//! Each operation reports its outcome through its own return value. There is
//! no global "last error" cell: a failure is carried by the `Err` it belongs to
//! and cannot be overwritten by a later call.

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Errors returned by the code-point operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum StrError {
    /// A required argument was empty where the operation needs content
    /// (an empty search value, an empty pad string).
    NullInput {
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// A numeric argument is out of range, or does not fit the given capacity.
    InvalidIndex {
        /// The offending value.
        index: usize,
        /// The bound it was checked against.
        limit: usize,
    },

    /// An owned result buffer could not be allocated, or the result would not
    /// fit into the caller's capacity.
    MemoryAllocation {
        /// Number of bytes that were requested.
        requested: usize,
    },

    /// An undecodable sequence (or a code point above U+10FFFF).
    InvalidUtf8 {
        /// Byte offset of the sequence that failed to decode.
        offset: usize,
    },
}

impl fmt::Display for StrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullInput { argument } => write!(f, "missing required input '{}'", argument),
            Self::InvalidIndex { index, limit } => {
                write!(f, "index {} out of range (limit {})", index, limit)
            }
            Self::MemoryAllocation { requested } => {
                write!(f, "unable to allocate {} bytes", requested)
            }
            Self::InvalidUtf8 { offset } => write!(f, "invalid UTF-8 sequence at byte {}", offset),
        }
    }
}

impl StrError {
    /// Move an `InvalidUtf8` offset from a sub-slice starting at byte `by`
    /// into the coordinates of the enclosing buffer.
    pub(crate) fn shifted(self, by: usize) -> Self {
        match self {
            Self::InvalidUtf8 { offset } => Self::InvalidUtf8 {
                offset: by + offset,
            },
            other => other,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StrError {}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, StrError>;

/// Reserve `additional` bytes in `buf`, reporting failure as
/// [`StrError::MemoryAllocation`].
#[inline]
pub(crate) fn reserve(buf: &mut alloc::vec::Vec<u8>, additional: usize) -> Result<()> {
    buf.try_reserve(additional)
        .map_err(|_| StrError::MemoryAllocation {
            requested: additional,
        })
}
