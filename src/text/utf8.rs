//! UTF-8 decoding, encoding and validation.
//!
//! Every other module walks byte buffers through the decoder here, which keeps
//! the rules for a well-formed sequence in one place.
//!
//! ## UTF-8 Encoding Rules
//!
//! | Bytes | First byte    | Continuation bytes | Code point range     |
//! |-------|---------------|-------------------|----------------------|
//! | 1     | `0xxxxxxx`    | -                 | U+0000 - U+007F      |
//! | 2     | `110xxxxx`    | `10xxxxxx`        | U+0080 - U+07FF      |
//! | 3     | `1110xxxx`    | `10xxxxxx` × 2    | U+0800 - U+FFFF      |
//! | 4     | `11110xxx`    | `10xxxxxx` × 3    | U+10000 - U+10FFFF   |
//!
//! ## Strictness
//!
//! Decoding is strict. A sequence is rejected when:
//! 1. its lead byte is a continuation byte or `0xF8..=0xFF`
//! 2. it is cut off by the end of the buffer
//! 3. a continuation byte does not match `10xxxxxx`
//! 4. it uses more bytes than the code point needs (overlong)
//! 5. it encodes a surrogate (U+D800-U+DFFF)
//! 6. it encodes a value above U+10FFFF
//!
//! Because of this every buffer that decodes also re-encodes to the same bytes.

use crate::error::{Result, StrError};

/// Largest Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Error information for UTF-8 validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utf8Error {
    /// The byte offset where the error occurred (0-indexed).
    pub offset: usize,
    /// The line number where the error occurred (1-indexed).
    pub line: usize,
    /// The column (byte position within the line, 1-indexed).
    pub column: usize,
    /// The kind of UTF-8 error.
    pub kind: Utf8ErrorKind,
}

impl core::fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} at byte {}, line {}, column {}",
            self.kind, self.offset, self.line, self.column
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Utf8Error {}

/// The specific type of UTF-8 violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8ErrorKind {
    /// A continuation byte (0x80-0xBF) or 0xF8-0xFF where a lead byte was expected.
    InvalidLeadByte,
    /// A byte outside 0x80-0xBF where a continuation byte was expected.
    InvalidContinuationByte,
    /// A code point encoded with more bytes than necessary.
    OverlongEncoding,
    /// A surrogate code point (U+D800-U+DFFF).
    SurrogateCodepoint,
    /// A code point above U+10FFFF.
    OutOfRangeCodepoint,
    /// A multi-byte sequence cut off by the end of input.
    TruncatedSequence,
}

impl core::fmt::Display for Utf8ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLeadByte => write!(f, "invalid UTF-8 lead byte"),
            Self::InvalidContinuationByte => write!(f, "invalid UTF-8 continuation byte"),
            Self::OverlongEncoding => write!(f, "overlong UTF-8 encoding"),
            Self::SurrogateCodepoint => write!(f, "surrogate code point in UTF-8"),
            Self::OutOfRangeCodepoint => write!(f, "code point above U+10FFFF"),
            Self::TruncatedSequence => write!(f, "truncated UTF-8 sequence"),
        }
    }
}

/// Check if a byte is a UTF-8 continuation byte (0x80-0xBF).
#[inline(always)]
pub fn is_continuation_byte(byte: u8) -> bool {
    (byte & 0xC0) == 0x80
}

/// Get the expected sequence length from a lead byte.
///
/// Returns 0 for bytes that cannot start a sequence (continuation bytes and
/// 0xF8-0xFF).
#[inline]
pub fn sequence_length(lead_byte: u8) -> usize {
    match lead_byte {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 0,
    }
}

/// Check the sequence starting at `pos`.
///
/// On success returns the code point and the sequence length. On failure
/// returns the violation and the offset of the offending byte, which is either
/// `pos` or one of its continuation bytes.
fn check_sequence(
    input: &[u8],
    pos: usize,
) -> core::result::Result<(u32, usize), (Utf8ErrorKind, usize)> {
    let lead = input[pos];
    let len = sequence_length(lead);

    if len == 0 {
        return Err((Utf8ErrorKind::InvalidLeadByte, pos));
    }
    if len == 1 {
        return Ok((lead as u32, 1));
    }
    if pos + len > input.len() {
        return Err((Utf8ErrorKind::TruncatedSequence, pos));
    }

    // Lead byte payload: 5, 4 or 3 bits for lengths 2, 3, 4.
    let mut cp = lead as u32 & (0x7F >> len);
    for i in 1..len {
        let byte = input[pos + i];
        if !is_continuation_byte(byte) {
            return Err((Utf8ErrorKind::InvalidContinuationByte, pos + i));
        }
        cp = (cp << 6) | (byte as u32 & 0x3F);
    }

    let min = match len {
        2 => 0x80,
        3 => 0x800,
        _ => 0x10000,
    };
    if cp < min {
        return Err((Utf8ErrorKind::OverlongEncoding, pos));
    }
    if (0xD800..=0xDFFF).contains(&cp) {
        return Err((Utf8ErrorKind::SurrogateCodepoint, pos));
    }
    if cp > MAX_CODE_POINT {
        return Err((Utf8ErrorKind::OutOfRangeCodepoint, pos));
    }

    Ok((cp, len))
}

/// Decode the UTF-8 code point at the start of a byte slice.
///
/// Returns `None` if the input is empty or starts with a malformed sequence.
/// On success, returns the code point and the number of bytes consumed.
///
/// # Examples
///
/// ```
/// use cpstr::text::utf8::decode_code_point;
///
/// assert_eq!(decode_code_point(b"A"), Some(('A' as u32, 1)));
/// assert_eq!(decode_code_point("世".as_bytes()), Some((0x4E16, 3)));
/// assert_eq!(decode_code_point(&[0xC0, 0x81]), None); // overlong
/// assert_eq!(decode_code_point(b""), None);
/// ```
#[inline]
pub fn decode_code_point(input: &[u8]) -> Option<(u32, usize)> {
    if input.is_empty() {
        return None;
    }
    check_sequence(input, 0).ok()
}

/// Encode a Unicode code point as UTF-8.
///
/// Returns `None` for surrogates and values above U+10FFFF. On success,
/// returns the bytes and how many of them are used.
///
/// # Examples
///
/// ```
/// use cpstr::text::utf8::encode_code_point;
///
/// let (bytes, len) = encode_code_point(0x1F30D).unwrap();
/// assert_eq!(&bytes[..len], "🌍".as_bytes());
///
/// assert!(encode_code_point(0xD800).is_none());
/// assert!(encode_code_point(0x110000).is_none());
/// ```
pub fn encode_code_point(cp: u32) -> Option<([u8; 4], usize)> {
    if (0xD800..=0xDFFF).contains(&cp) || cp > MAX_CODE_POINT {
        return None;
    }

    let mut buf = [0u8; 4];
    let len = if cp < 0x80 {
        buf[0] = cp as u8;
        1
    } else if cp < 0x800 {
        buf[0] = 0xC0 | ((cp >> 6) as u8);
        buf[1] = 0x80 | ((cp & 0x3F) as u8);
        2
    } else if cp < 0x10000 {
        buf[0] = 0xE0 | ((cp >> 12) as u8);
        buf[1] = 0x80 | (((cp >> 6) & 0x3F) as u8);
        buf[2] = 0x80 | ((cp & 0x3F) as u8);
        3
    } else {
        buf[0] = 0xF0 | ((cp >> 18) as u8);
        buf[1] = 0x80 | (((cp >> 12) & 0x3F) as u8);
        buf[2] = 0x80 | (((cp >> 6) & 0x3F) as u8);
        buf[3] = 0x80 | ((cp & 0x3F) as u8);
        4
    };

    Some((buf, len))
}

/// Append the encoding of `cp` to `out`. `offset` is the source position
/// reported if `cp` cannot be encoded.
pub(crate) fn push_code_point(
    out: &mut alloc::vec::Vec<u8>,
    cp: u32,
    offset: usize,
) -> Result<()> {
    let (bytes, len) = encode_code_point(cp).ok_or(StrError::InvalidUtf8 { offset })?;
    crate::error::reserve(out, len)?;
    out.extend_from_slice(&bytes[..len]);
    Ok(())
}

/// Validate that the input is well-formed UTF-8.
///
/// Returns `Ok(())` if the input is valid, or a [`Utf8Error`] describing the
/// first violation with its byte offset, line and column.
///
/// # Examples
///
/// ```
/// use cpstr::text::utf8::{validate_utf8, Utf8ErrorKind};
///
/// assert!(validate_utf8("Héllö, 世界!".as_bytes()).is_ok());
///
/// let err = validate_utf8(b"ok\n\x80").unwrap_err();
/// assert_eq!(err.kind, Utf8ErrorKind::InvalidLeadByte);
/// assert_eq!((err.offset, err.line, err.column), (3, 2, 1));
/// ```
pub fn validate_utf8(input: &[u8]) -> core::result::Result<(), Utf8Error> {
    let mut pos = 0;
    let mut line = 1;
    let mut line_start = 0;

    while pos < input.len() {
        match check_sequence(input, pos) {
            Ok((cp, len)) => {
                if cp == '\n' as u32 {
                    line += 1;
                    line_start = pos + 1;
                }
                pos += len;
            }
            Err((kind, offset)) => {
                return Err(Utf8Error {
                    offset,
                    line,
                    column: offset - line_start + 1,
                    kind,
                });
            }
        }
    }

    Ok(())
}

/// Check a whole argument before use. Unlike [`validate_utf8`] the reported
/// offset is the start of the bad sequence, as everywhere else in the crate.
pub(crate) fn check_utf8(input: &[u8]) -> Result<()> {
    code_points(input).try_for_each(|seq| seq.map(|_| ()))
}

/// Whether the whole buffer is well-formed UTF-8.
#[inline]
pub fn is_valid_utf8(input: &[u8]) -> bool {
    validate_utf8(input).is_ok()
}

/// The prefix of `buf` before its first NUL byte, or all of `buf`.
///
/// Lets NUL-terminated buffers be passed to the explicitly sized operations.
///
/// ```
/// use cpstr::text::utf8::until_nul;
///
/// assert_eq!(until_nul(b"abc\0garbage"), b"abc");
/// assert_eq!(until_nul(b"abc"), b"abc");
/// ```
pub fn until_nul(buf: &[u8]) -> &[u8] {
    match buf.iter().position(|&b| b == 0) {
        Some(end) => &buf[..end],
        None => buf,
    }
}

/// One decoded UTF-8 sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    /// Byte offset of the lead byte.
    pub offset: usize,
    /// The decoded code point.
    pub code_point: u32,
    /// Number of bytes in the sequence (1-4).
    pub len: usize,
}

impl Sequence {
    /// Byte offset one past the last byte of the sequence.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Sequential decoder over a byte buffer.
///
/// Yields one [`Sequence`] per code point. A malformed sequence yields a single
/// `Err(StrError::InvalidUtf8)` and ends the iteration.
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    input: &'a [u8],
    offset: usize,
    failed: bool,
}

impl<'a> CodePoints<'a> {
    /// Byte offset of the next sequence to be decoded.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The undecoded remainder of the input.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.offset..]
    }
}

impl Iterator for CodePoints<'_> {
    type Item = Result<Sequence>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.input.len() {
            return None;
        }
        match check_sequence(self.input, self.offset) {
            Ok((code_point, len)) => {
                let seq = Sequence {
                    offset: self.offset,
                    code_point,
                    len,
                };
                self.offset += len;
                Some(Ok(seq))
            }
            Err(_) => {
                self.failed = true;
                Some(Err(StrError::InvalidUtf8 {
                    offset: self.offset,
                }))
            }
        }
    }
}

/// Decode `input` sequentially, one code point at a time.
///
/// ```
/// use cpstr::text::utf8::code_points;
///
/// let cps: Vec<u32> = code_points("aé🚀".as_bytes())
///     .map(|seq| seq.unwrap().code_point)
///     .collect();
/// assert_eq!(cps, [0x61, 0xE9, 0x1F680]);
/// ```
#[inline]
pub fn code_points(input: &[u8]) -> CodePoints<'_> {
    CodePoints {
        input,
        offset: 0,
        failed: false,
    }
}

/// Format a byte as a human-readable string for error messages.
pub fn format_byte(byte: u8) -> alloc::string::String {
    if byte.is_ascii_graphic() || byte == b' ' {
        alloc::format!("0x{:02X} ({:?})", byte, byte as char)
    } else {
        alloc::format!("0x{:02X}", byte)
    }
}
