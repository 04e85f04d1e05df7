//! End-to-end checks of the public operations on fixed inputs.

use cpstr::{
    char_at, char_code_at, concat, copy_range, copy_until, ends_with, from_code_point, includes,
    index_of, last_index_of, length, pad_end, pad_start, repeat, replace, slice, starts_with,
    substring, to_lower_case, to_upper_case, trim, trim_end, trim_in_place, trim_start, StrError,
};

// ============================================================================
// Reference inputs
// ============================================================================

#[test]
fn test_length_ascii() {
    assert_eq!(length(b"Hello, World!").unwrap(), 13);
}

#[test]
fn test_index_of_ascii() {
    assert_eq!(index_of(b"Hello, World!", b"World").unwrap(), Some(7));
}

#[test]
fn test_length_mixed_widths() {
    assert_eq!(length("Héllö, 世界!".as_bytes()).unwrap(), 10);
}

#[test]
fn test_emoji_lookup() {
    let s = "Hello, 🌍🚀!".as_bytes();
    assert_eq!(char_code_at(s, 7).unwrap(), 127757);
    let c = char_at(s, 7).unwrap();
    assert_eq!(c.len(), 4);
    assert_eq!(c, "🌍".as_bytes());
}

#[test]
fn test_replace_word() {
    let mut out = Vec::new();
    replace(b"Hello, World!", b"World", b"Universe", &mut out).unwrap();
    assert_eq!(out, b"Hello, Universe!");
}

#[test]
fn test_pad_start_spaces() {
    let mut out = Vec::new();
    pad_start(b"Pad", 10, b" ", &mut out, 1024).unwrap();
    assert_eq!(out, b"       Pad");
}

#[test]
fn test_trim_spaces() {
    assert_eq!(trim(b"   Trim me!   ").unwrap(), b"Trim me!");
}

#[test]
fn test_last_index_of_counts_code_points() {
    assert_eq!(
        last_index_of(b"Hello, Hello, World!", b"Hello").unwrap(),
        Some(7)
    );
    // Both search directions report the same unit.
    let s = "日本日本".as_bytes();
    assert_eq!(index_of(s, "本".as_bytes()).unwrap(), Some(1));
    assert_eq!(last_index_of(s, "本".as_bytes()).unwrap(), Some(3));
}

// ============================================================================
// Multi-byte handling across operations
// ============================================================================

#[test]
fn test_search_and_slice_agree() {
    let s = "Héllö, 世界!".as_bytes();
    let pos = index_of(s, "世界".as_bytes()).unwrap().unwrap();
    assert_eq!(pos, 7);

    let mut out = Vec::new();
    slice(s, pos, pos + 2, &mut out).unwrap();
    assert_eq!(out, "世界".as_bytes());

    substring(s, pos + 2, pos, &mut out).unwrap();
    assert_eq!(out, "世界".as_bytes());

    copy_range(s, 0, 5, &mut out).unwrap();
    assert_eq!(out, "Héllö".as_bytes());
    assert_eq!(
        copy_range(s, 0, 11, &mut out),
        Err(StrError::InvalidIndex {
            index: 11,
            limit: 10
        })
    );
}

#[test]
fn test_prefix_and_suffix() {
    let s = "Héllö, 世界!".as_bytes();
    assert!(starts_with(s, "Hé".as_bytes()));
    assert!(ends_with(s, "界!".as_bytes()));
    assert!(!ends_with(s, "世".as_bytes()));
    assert!(includes(s, "ö, ".as_bytes()).unwrap());
}

#[test]
fn test_case_conversion_latin1() {
    let mut out = Vec::new();
    to_upper_case("straße Ölçü 世界".as_bytes(), &mut out).unwrap();
    assert_eq!(out, "STRAßE ÖLÇÜ 世界".as_bytes());
    to_lower_case("ÀÉÎÕÜ × ÷".as_bytes(), &mut out).unwrap();
    assert_eq!(out, "àéîõü × ÷".as_bytes());
}

#[test]
fn test_trim_unicode_whitespace() {
    let s = "\u{3000}\u{00A0}\t 世界 \u{2003}\n".as_bytes();
    assert_eq!(trim(s).unwrap(), "世界".as_bytes());
    assert_eq!(trim_start(s).unwrap(), "世界 \u{2003}\n".as_bytes());
    assert_eq!(trim_end(s).unwrap(), "\u{3000}\u{00A0}\t 世界".as_bytes());

    let mut buf = s.to_vec();
    trim_in_place(&mut buf).unwrap();
    assert_eq!(buf, "世界".as_bytes());
}

#[test]
fn test_pad_with_multibyte_pad() {
    let mut out = Vec::new();
    pad_end("ab".as_bytes(), 7, "🌍🚀".as_bytes(), &mut out, 1024).unwrap();
    assert_eq!(out, "ab🌍🚀🌍🚀🌍".as_bytes());
    assert_eq!(length(&out).unwrap(), 7);
}

#[test]
fn test_building_blocks() {
    let mut out = Vec::new();
    concat(b"Hello, World!", b"World", &mut out).unwrap();
    assert_eq!(out, b"Hello, World!World");

    repeat(b"Repeat", 3, &mut out).unwrap();
    assert_eq!(out, b"RepeatRepeatRepeat");

    copy_until(b"name: value", b": ", &mut out).unwrap();
    assert_eq!(out, b"name");

    assert_eq!(from_code_point(0x1F680).unwrap(), "🚀".as_bytes());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_malformed_input_reports_offset() {
    let s = [b'a', b'b', 0xE4, 0xB8, b'c'];
    assert_eq!(length(&s), Err(StrError::InvalidUtf8 { offset: 2 }));
    assert_eq!(index_of(&s, b"c"), Err(StrError::InvalidUtf8 { offset: 2 }));
    // Lookups that stop before the bad sequence still succeed.
    assert_eq!(char_code_at(&s, 1).unwrap(), 'b' as u32);
}

#[test]
fn test_out_of_range_index() {
    assert_eq!(
        char_at("世界".as_bytes(), 2),
        Err(StrError::InvalidIndex { index: 2, limit: 2 })
    );
}

#[test]
fn test_required_arguments() {
    let mut out = Vec::new();
    assert_eq!(
        replace(b"abc", b"", b"x", &mut out),
        Err(StrError::NullInput { argument: "search" })
    );
    assert_eq!(
        pad_start(b"abc", 5, b"", &mut out, 64),
        Err(StrError::NullInput { argument: "pad" })
    );
    // No padding needed, so an empty pad is fine.
    pad_start(b"abc", 2, b"", &mut out, 64).unwrap();
    assert_eq!(out, b"abc");
}

#[test]
fn test_pad_capacity() {
    let mut out = Vec::new();
    assert_eq!(
        pad_start(b"abc", 8, b" ", &mut out, 8),
        Err(StrError::InvalidIndex { index: 8, limit: 8 })
    );
    // 6 code points of a 3-byte pad do not fit in 16 bytes.
    assert_eq!(
        pad_start(b"", 6, "世".as_bytes(), &mut out, 16),
        Err(StrError::MemoryAllocation { requested: 18 })
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        StrError::InvalidUtf8 { offset: 4 }.to_string(),
        "invalid UTF-8 sequence at byte 4"
    );
    assert_eq!(
        StrError::InvalidIndex { index: 9, limit: 3 }.to_string(),
        "index 9 out of range (limit 3)"
    );
}
