//! # cpstr
//!
//! Code-point indexed string operations over UTF-8 byte buffers.
//!
//! The operations take `&[u8]` rather than `&str`: input may be malformed, and
//! every index is counted in Unicode code points rather than bytes. Malformed
//! input is reported as [`StrError::InvalidUtf8`] with the byte offset of the
//! offending sequence.
//!
//! ## Module Organization
//!
//! - [`text`] - UTF-8 codec and whitespace classification
//! - [`access`] - length and code-point indexed lookup
//! - [`search`] - substring search and prefix/suffix tests
//! - [`transform`] - case conversion, trimming, slicing, padding, replacement
//! - [`error`] - the [`StrError`] type
//!
//! ## Quick Start
//!
//! ```
//! use cpstr::{char_code_at, index_of, length, pad_start, replace, trim};
//!
//! assert_eq!(length("Héllö, 世界!".as_bytes()).unwrap(), 10);
//! assert_eq!(index_of(b"Hello, World!", b"World").unwrap(), Some(7));
//! assert_eq!(char_code_at("Hello, 🌍🚀!".as_bytes(), 7).unwrap(), 127757);
//! assert_eq!(trim(b"   Trim me!   ").unwrap(), b"Trim me!");
//!
//! let mut out = Vec::new();
//! replace(b"Hello, World!", b"World", b"Universe", &mut out).unwrap();
//! assert_eq!(out, b"Hello, Universe!");
//!
//! pad_start(b"Pad", 10, b" ", &mut out, 64).unwrap();
//! assert_eq!(out, b"       Pad");
//! ```
//!
//! ## Features
//!
//! - `std` (default) - `std::error::Error` impls; disable for `no_std` + `alloc`
//! - `serde` - `Serialize` for [`StrError`]
//! - `cli` - the `cpstr` command-line tool

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

// =============================================================================
// Core modules
// =============================================================================

/// Error type shared by all operations.
pub mod error;

/// UTF-8 codec and whitespace classification.
pub mod text;

// =============================================================================
// Operations
// =============================================================================

/// Length and code-point indexed lookup.
pub mod access;

/// Substring search.
pub mod search;

/// Case conversion, trimming, slicing, padding and replacement.
pub mod transform;

// =============================================================================
// Public re-exports
// =============================================================================

pub use error::{Result, StrError};
pub use text::utf8::{is_valid_utf8, validate_utf8, Utf8Error, Utf8ErrorKind};

pub use access::{char_at, char_code_at, code_point_at, from_code_point, length};
pub use search::{ends_with, find, includes, index_of, last_index_of, starts_with};
pub use transform::{
    concat, copy_range, copy_until, pad_end, pad_start, repeat, replace, slice, substring,
    to_lower_case, to_lower_case_in_place, to_upper_case, to_upper_case_in_place, trim, trim_end,
    trim_end_in_place, trim_in_place, trim_start, trim_start_in_place,
};
