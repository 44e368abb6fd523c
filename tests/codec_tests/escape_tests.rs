//! Tests for label escaping
//!
//! These tests verify:
//! - ASCII passes through untouched
//! - Two-byte UTF-8 characters escape to `\xHH\xHH` and back
//! - Malformed tokens are kept literally
//! - The two-byte limit is kept (wider characters do not round-trip)

use siistreams::codec::{decode_pair, escape_label, is_representable, unescape_label};

// =============================================================================
// Escape Tests
// =============================================================================

#[test]
fn test_escape_ascii_unchanged() {
    let label = "SKY.FM - Smooth Jazz [128k] |~!";
    assert_eq!(escape_label(label), label);
}

#[test]
fn test_escape_two_byte_char() {
    assert_eq!(escape_label("Café"), r"Caf\xc3\xa9");
}

#[test]
fn test_escape_uses_lowercase_hex() {
    // Ü is U+00DC -> C3 9C
    assert_eq!(escape_label("Ü"), r"\xc3\x9c");
}

#[test]
fn test_escape_multiple_chars() {
    assert_eq!(escape_label("Rádio Zürich"), r"R\xc3\xa1dio Z\xc3\xbcrich");
}

#[test]
fn test_escape_empty() {
    assert_eq!(escape_label(""), "");
}

#[test]
fn test_escape_output_is_ascii() {
    let escaped = escape_label("Ελληνικό Ραδιόφωνο Łódź");
    assert!(escaped.is_ascii());
}

// =============================================================================
// Unescape Tests
// =============================================================================

#[test]
fn test_unescape_cafe_de_paris() {
    assert_eq!(
        unescape_label(r"SKY.FM - Caf\xc3\xa9 de Paris"),
        "SKY.FM - Café de Paris"
    );
}

#[test]
fn test_unescape_uppercase_hex_digits() {
    assert_eq!(unescape_label(r"Caf\xC3\xA9"), "Café");
}

#[test]
fn test_unescape_adjacent_tokens() {
    assert_eq!(unescape_label(r"\xc3\xa1\xc3\xa9\xc3\xad"), "áéí");
}

#[test]
fn test_unescape_plain_text_unchanged() {
    assert_eq!(unescape_label("Radio Paradise"), "Radio Paradise");
}

#[test]
fn test_unescape_truncated_token_kept() {
    assert_eq!(unescape_label(r"abc\xc3"), r"abc\xc3");
}

#[test]
fn test_unescape_backslash_without_x_kept() {
    assert_eq!(unescape_label(r"back\slash and more"), r"back\slash and more");
}

#[test]
fn test_unescape_non_hex_digits_kept() {
    assert_eq!(unescape_label(r"\xzz\xa9 tail"), r"\xzz\xa9 tail");
}

#[test]
fn test_unescape_malformed_then_valid() {
    // The stray backslash is kept, the following token still decodes
    assert_eq!(unescape_label(r"\\xc3\xa9"), r"\é");
}

#[test]
fn test_unescape_overlong_tokens_kept() {
    // Would decode to a newline and to '|'
    for raw in [r"Line\xc0\x8aBreak", r"Pipe\xc1\xbcLabel"] {
        assert_eq!(unescape_label(raw), raw);
        assert_eq!(escape_label(&unescape_label(raw)), raw);
    }
}

#[test]
fn test_unescape_overlong_quote_kept() {
    assert_eq!(unescape_label(r"say \xc0\xa2hi"), r"say \xc0\xa2hi");
}

#[test]
fn test_unescape_trailing_backslash() {
    assert_eq!(unescape_label("end\\"), "end\\");
}

// =============================================================================
// Codepoint Decoding Tests
// =============================================================================

#[test]
fn test_decode_pair_e_acute() {
    assert_eq!(decode_pair(0xc3, 0xa9), 'é');
}

#[test]
fn test_decode_pair_range_bounds() {
    assert_eq!(decode_pair(0xc2, 0x80), '\u{80}');
    assert_eq!(decode_pair(0xdf, 0xbf), '\u{7ff}');
}

#[test]
fn test_decode_pair_ignores_prefix_bits() {
    // Only the low 5 bits of high and low 6 bits of low count
    assert_eq!(decode_pair(0xe3, 0xe9), decode_pair(0xc3, 0xa9));
}

// =============================================================================
// Inverse Property Tests
// =============================================================================

#[test]
fn test_every_two_byte_char_round_trips() {
    for code in 0x80u32..=0x7ff {
        let c = char::from_u32(code).unwrap();
        let original = c.to_string();

        let escaped = escape_label(&original);
        assert_eq!(escaped.len(), 8, "U+{:04X} escaped to {:?}", code, escaped);
        assert_eq!(unescape_label(&escaped), original, "U+{:04X}", code);
    }
}

#[test]
fn test_mixed_label_round_trips() {
    let label = "Antenne Bayern – nicht, aber Ö3 é ß ñ";
    // The en dash is three bytes wide
    assert!(!is_representable(label));

    let label = "Ö3 Hitradio · éß ñ";
    assert!(is_representable(label));
    assert_eq!(unescape_label(&escape_label(label)), label);
}

// =============================================================================
// Two-Byte Limit Tests
// =============================================================================

#[test]
fn test_is_representable() {
    assert!(is_representable("plain"));
    assert!(is_representable("Café"));
    assert!(!is_representable("日本"));
    assert!(!is_representable("Radio 📻"));
}

#[test]
fn test_three_byte_char_is_cut_to_two_bytes() {
    // € is E2 82 AC; only the first two bytes are written
    assert_eq!(escape_label("€"), r"\xe2\x82");
    assert_ne!(unescape_label(&escape_label("€")), "€");
}
