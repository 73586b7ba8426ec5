//! Code-point helpers.
//!
//! Wire offsets count Unicode code points, never UTF-16 code units or UTF-8
//! bytes. A Rust `char` is exactly one code point, so counting `chars()` is
//! enough for `&str` and surrogate pairs never need special handling.

/// U+FFFC OBJECT REPLACEMENT CHARACTER, the placeholder an embed occupies in
/// flat block text.
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

/// Number of code points in `s`.
pub fn code_point_len(s: &str) -> usize {
    s.chars().count()
}

/// Number of UTF-16 code units needed to encode `s`.
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Returns true if `s` is exactly one object replacement character.
pub fn is_object_replacement(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next() == Some(OBJECT_REPLACEMENT) && chars.next().is_none()
}
