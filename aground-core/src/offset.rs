//! Byte/character offset conversion.
//!
//! Regex matching works in byte offsets; the public data model uses
//! character offsets throughout so spans stay meaningful for non-ASCII
//! input (vessel names, place names). These helpers convert between the
//! two, with a fast path for ASCII text where the offsets coincide.

/// Fast check if text is ASCII-only (byte and char offsets coincide).
#[must_use]
pub fn is_ascii(text: &str) -> bool {
    text.is_ascii()
}

/// Convert a byte-offset span to a character-offset span.
///
/// Offsets falling inside a multi-byte character snap to that character's
/// index. Offsets at or past the end of the text map to the char count.
#[must_use]
pub fn bytes_to_chars(text: &str, byte_start: usize, byte_end: usize) -> (usize, usize) {
    if is_ascii(text) {
        return (byte_start.min(text.len()), byte_end.min(text.len()));
    }

    let mut char_start = None;
    let mut char_end = None;
    for (char_idx, (byte_idx, _)) in text.char_indices().enumerate() {
        if char_start.is_none() && byte_idx >= byte_start {
            char_start = Some(char_idx);
        }
        if char_end.is_none() && byte_idx >= byte_end {
            char_end = Some(char_idx);
        }
        if char_start.is_some() && char_end.is_some() {
            break;
        }
    }
    let char_count = text.chars().count();
    (
        char_start.unwrap_or(char_count),
        char_end.unwrap_or(char_count),
    )
}

/// Convert a character-offset span to a byte-offset span.
///
/// Offsets past the end of the text map to the byte length.
#[must_use]
pub fn chars_to_bytes(text: &str, char_start: usize, char_end: usize) -> (usize, usize) {
    if is_ascii(text) {
        return (char_start.min(text.len()), char_end.min(text.len()));
    }

    let mut byte_start = None;
    let mut byte_end = None;
    for (char_idx, (byte_idx, _)) in text.char_indices().enumerate() {
        if char_idx == char_start {
            byte_start = Some(byte_idx);
        }
        if char_idx == char_end {
            byte_end = Some(byte_idx);
        }
    }
    (
        byte_start.unwrap_or(text.len()),
        byte_end.unwrap_or(text.len()),
    )
}
