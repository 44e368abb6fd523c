//! Label escaping
//!
//! Labels are stored as ASCII. A non-ASCII character is written as the
//! two bytes of its UTF-8 encoding, `\xHH\xHH`, with lowercase hex digits.
//! For example `"Rádio"` is stored as `"R\xc3\xa1dio"`.
//!
//! Only two-byte UTF-8 characters (U+0080..=U+07FF) survive the scheme.
//! Wider characters are cut to their first two bytes and do not come back
//! intact; see [`is_representable`].

use std::fmt::Write;

/// Length of one escape token: `\xHH\xHH`
pub const ESCAPE_TOKEN_LEN: usize = 8;

/// Escape every non-ASCII character of `label`
pub fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());

    for c in label.chars() {
        if c.is_ascii() {
            escaped.push(c);
            continue;
        }

        let mut buf = [0u8; 4];
        let bytes = c.encode_utf8(&mut buf).as_bytes();
        // Non-ASCII always encodes to at least two bytes
        let (high, low) = (bytes[0], bytes[1]);

        // Writing into a String cannot fail
        let _ = write!(escaped, "\\x{:02x}\\x{:02x}", high, low);
    }

    escaped
}

/// Replace every `\xHH\xHH` token in `raw` with the character it encodes
///
/// A backslash that does not start a complete token is kept as-is and
/// scanning continues with the next character. So is an overlong token
/// such as `\xc0\x8a`, which would otherwise decode to ASCII.
pub fn unescape_label(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut unescaped = String::with_capacity(raw.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '\\' {
            if let Some(c) = chars.get(i..i + ESCAPE_TOKEN_LEN).and_then(decode_token) {
                unescaped.push(c);
                i += ESCAPE_TOKEN_LEN;
                continue;
            }
        }

        unescaped.push(chars[i]);
        i += 1;
    }

    unescaped
}

/// Rebuild a codepoint from the two bytes of a `110xxxxx 10yyyyyy` sequence
pub fn decode_pair(high: u8, low: u8) -> char {
    let code = (u32::from(high & 0x1F) << 6) | u32::from(low & 0x3F);

    // At most 0x7FF, never a surrogate
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Whether `label` survives an escape/unescape cycle unchanged
pub fn is_representable(label: &str) -> bool {
    label.chars().all(|c| c.len_utf8() <= 2)
}

/// Decode one token: `\` `x` H H `\` `x` H H
fn decode_token(token: &[char]) -> Option<char> {
    if token.len() != ESCAPE_TOKEN_LEN {
        return None;
    }
    if token[0] != '\\' || token[1] != 'x' || token[4] != '\\' || token[5] != 'x' {
        return None;
    }

    let high = hex_byte(token[2], token[3])?;
    let low = hex_byte(token[6], token[7])?;

    // Escaping never produces ASCII, and a decoded `"` or newline would
    // break the entry line on the next save
    let c = decode_pair(high, low);
    if c.is_ascii() {
        return None;
    }
    Some(c)
}

fn hex_byte(hi: char, lo: char) -> Option<u8> {
    let hi = hi.to_digit(16)?;
    let lo = lo.to_digit(16)?;
    u8::try_from((hi << 4) | lo).ok()
}
