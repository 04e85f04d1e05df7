//! Low-level text primitives.
//!
//! - [`utf8`] decodes, encodes and validates UTF-8 sequences.
//! - [`whitespace`] classifies whitespace code points.
//!
//! ```
//! use cpstr::text::utf8::{validate_utf8, Utf8ErrorKind};
//! use cpstr::text::whitespace::is_whitespace;
//!
//! assert!(validate_utf8("Hello, 🌍🚀!".as_bytes()).is_ok());
//! assert_eq!(
//!     validate_utf8(&[0x80]).unwrap_err().kind,
//!     Utf8ErrorKind::InvalidLeadByte
//! );
//!
//! assert!(is_whitespace(0x3000));
//! assert!(!is_whitespace('x' as u32));
//! ```

pub mod utf8;
pub mod whitespace;

// Re-export commonly used types
pub use utf8::{validate_utf8, Utf8Error, Utf8ErrorKind};
