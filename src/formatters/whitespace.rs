//! Invisible character removal and trimming.

/// Invisible or formatting code points removed from every candidate.
pub const OBSCURE_WHITESPACE: [char; 7] = [
    '\u{180E}', // Mongolian vowel separator
    '\u{200B}', // Zero width space
    '\u{200C}', // Zero width non-joiner
    '\u{200D}', // Zero width joiner
    '\u{2060}', // Word joiner
    '\u{00A0}', // Non breaking space
    '\u{FEFF}', // Zero width no-break space
];

/// Ordinary ASCII whitespace.
pub const WHITESPACE: [char; 6] = [
    '\u{0020}', // Space
    '\u{0009}', // Tab
    '\u{000A}', // Line feed
    '\u{000D}', // Carriage return
    '\u{000C}', // Form feed
    '\u{000B}', // Vertical tab
];

/// Every character stripped by [`remove_whitespace`].
pub const ALL_WHITESPACE: [char; 13] = [
    '\u{0020}', '\u{0009}', '\u{000A}', '\u{000D}', '\u{000C}', '\u{000B}', '\u{180E}', '\u{200B}',
    '\u{200C}', '\u{200D}', '\u{2060}', '\u{00A0}', '\u{FEFF}',
];

/// Remove obscure whitespace everywhere, then trim ordinary whitespace from
/// both ends.
///
/// Interior spaces, tabs and line breaks are kept.
///
/// # Example
///
/// ```
/// use notify_recipients::formatters::normalize;
///
/// assert_eq!(normalize("\u{200B} email@domain.com\t"), "email@domain.com");
/// ```
pub fn normalize(text: &str) -> String {
    strip_chars(text, &OBSCURE_WHITESPACE)
}

/// Remove ordinary and obscure whitespace from anywhere in the string.
///
/// Used for postcodes, where `"SW1 3EF"` and `"SW13EF"` are the same value.
pub fn remove_whitespace(text: &str) -> String {
    strip_chars(text, &ALL_WHITESPACE)
}

fn strip_chars(text: &str, chars: &[char]) -> String {
    let cleaned: String = text.chars().filter(|c| !chars.contains(c)).collect();
    cleaned.trim().to_string()
}
