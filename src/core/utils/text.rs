//! Small text helpers shared by the extractor and the signature parser.

use std::ops::Range;

pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Collapse every whitespace run (newlines included) into one space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Byte range of the last identifier in `text`, skipping trailing non-identifier characters.
///
/// `"const Foo &"` -> range of `Foo`; `"**"` -> `None`.
pub fn last_identifier(text: &str) -> Option<Range<usize>> {
    let end = text
        .char_indices()
        .rev()
        .find(|(_, c)| is_ident_char(*c))
        .map(|(i, c)| i + c.len_utf8())?;

    let start = text[..end]
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_ident_char(*c))
        .last()
        .map(|(i, _)| i)
        .unwrap_or(end);

    Some(start..end)
}

/// Byte range of the identifier that ends exactly at the end of `text`.
pub fn trailing_identifier(text: &str) -> Option<Range<usize>> {
    let range = last_identifier(text)?;
    (range.end == text.len()).then_some(range)
}
