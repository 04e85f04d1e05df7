//! Whitespace classification by code point.

use super::utf8::decode_code_point;

/// Code points treated as whitespace by the trim operations.
///
/// Ranges are inclusive. The table is small and only consulted while trimming,
/// so a linear scan is enough.
const WHITESPACE: &[(u32, u32)] = &[
    (0x0009, 0x000D), // TAB, LF, VT, FF, CR
    (0x0020, 0x0020), // SPACE
    (0x0085, 0x0085), // NEXT LINE
    (0x00A0, 0x00A0), // NO-BREAK SPACE
    (0x1680, 0x1680), // OGHAM SPACE MARK
    (0x2000, 0x200A), // EN QUAD .. HAIR SPACE
    (0x2028, 0x2028), // LINE SEPARATOR
    (0x2029, 0x2029), // PARAGRAPH SEPARATOR
    (0x202F, 0x202F), // NARROW NO-BREAK SPACE
    (0x205F, 0x205F), // MEDIUM MATHEMATICAL SPACE
    (0x3000, 0x3000), // IDEOGRAPHIC SPACE
];

/// Whether `cp` is a whitespace code point.
///
/// ```
/// use cpstr::text::whitespace::is_whitespace;
///
/// assert!(is_whitespace(' ' as u32));
/// assert!(is_whitespace(0x00A0));
/// assert!(!is_whitespace(0x200B)); // zero width space is not whitespace
/// ```
#[inline]
pub fn is_whitespace(cp: u32) -> bool {
    WHITESPACE.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Whether the first code point of `input` is whitespace.
///
/// Empty or undecodable input is not whitespace.
pub fn starts_with_whitespace(input: &[u8]) -> bool {
    matches!(decode_code_point(input), Some((cp, _)) if is_whitespace(cp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_members() {
        let members = [
            0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x20, 0x85, 0xA0, 0x1680, 0x2000, 0x2005, 0x200A,
            0x2028, 0x2029, 0x202F, 0x205F, 0x3000,
        ];
        for cp in members {
            assert!(is_whitespace(cp), "U+{:04X} should be whitespace", cp);
        }
    }

    #[test]
    fn neighbours_are_not_whitespace() {
        let others = [
            0x08, 0x0E, 0x1F, 0x21, 0x84, 0x86, 0x9F, 0xA1, 0x167F, 0x1FFF, 0x200B, 0x2027,
            0x202A, 0x205E, 0x2060, 0x2FFF, 0x3001, 0xFEFF,
        ];
        for cp in others {
            assert!(!is_whitespace(cp), "U+{:04X} should not be whitespace", cp);
        }
    }

    #[test]
    fn agrees_with_std_on_table() {
        // Every entry is also whitespace for `char::is_whitespace`.
        for &(lo, hi) in WHITESPACE {
            for cp in lo..=hi {
                assert!(char::from_u32(cp).unwrap().is_whitespace());
            }
        }
    }

    #[test]
    fn leading_code_point() {
        assert!(starts_with_whitespace(b" x"));
        assert!(starts_with_whitespace("\u{3000}世界".as_bytes()));
        assert!(!starts_with_whitespace(b"x "));
        assert!(!starts_with_whitespace(b""));
        assert!(!starts_with_whitespace(&[0xC2])); // truncated NBSP
    }
}
