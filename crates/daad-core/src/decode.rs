//! # Unicode Escape Decoding
//!
//! Course and academy names in the DAAD export sometimes carry literal
//! `\uXXXX` sequences (a backslash, `u`, and four hex digits) instead of
//! the characters they stand for. [`decode_unicode_escapes`] rewrites each
//! such sequence into its character and leaves everything else alone.
//!
//! A sequence with fewer than four hex digits is not an escape and is kept
//! verbatim. A high surrogate escape directly followed by a low surrogate
//! escape is combined into one supplementary character; an unpaired
//! surrogate cannot live in a `String` and is kept verbatim.

use std::borrow::Cow;

const ESCAPE_PREFIX: &str = "\\u";
const ESCAPE_LEN: usize = 6;

/// Replace every `\uXXXX` escape in `input` with the character it encodes.
///
/// Returns the input unchanged (borrowed) when it contains no `\u`.
pub fn decode_unicode_escapes(input: &str) -> Cow<'_, str> {
    if !input.contains(ESCAPE_PREFIX) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find(ESCAPE_PREFIX) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let Some(unit) = code_unit(rest) else {
            // Not an escape: keep the backslash and rescan from the `u`.
            out.push('\\');
            rest = &rest[1..];
            continue;
        };

        match unit {
            0xD800..=0xDBFF => {
                let low = code_unit(&rest[ESCAPE_LEN..])
                    .filter(|u| (0xDC00..=0xDFFF).contains(u));
                match low.and_then(|low| combine_surrogates(unit, low)) {
                    Some(c) => {
                        out.push(c);
                        rest = &rest[2 * ESCAPE_LEN..];
                    }
                    None => {
                        out.push_str(&rest[..ESCAPE_LEN]);
                        rest = &rest[ESCAPE_LEN..];
                    }
                }
            }
            _ => {
                match char::from_u32(unit) {
                    Some(c) => out.push(c),
                    None => out.push_str(&rest[..ESCAPE_LEN]),
                }
                rest = &rest[ESCAPE_LEN..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Parse the four hex digits of an escape at the start of `s`.
fn code_unit(s: &str) -> Option<u32> {
    if !s.starts_with(ESCAPE_PREFIX) {
        return None;
    }
    let digits = s.as_bytes().get(2..ESCAPE_LEN)?;
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    // All four bytes are ASCII, so this slice is on char boundaries.
    u32::from_str_radix(&s[2..ESCAPE_LEN], 16).ok()
}

fn combine_surrogates(high: u32, low: u32) -> Option<char> {
    char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
}
