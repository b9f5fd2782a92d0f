//! Tag parsing: one block's normalized text -> ordered `(tag, value)` entries.

use crate::core::data::{AnnotationBlock, CommentBlock, TagEntry, split_tag_line};

/// Split a comment block into tag entries.
///
/// A line starting with `@` opens a tagged entry. Every other non-blank line becomes its
/// own untagged entry; prose lines are never concatenated here; the assembler joins them
/// when it builds documentation strings.
pub fn parse_tags(block: CommentBlock) -> AnnotationBlock {
    AnnotationBlock {
        entries: parse_entries(&block.text),
        signature: block.signature,
    }
}

pub fn parse_entries(text: &str) -> Vec<TagEntry> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match split_tag_line(line) {
            Some(("", value)) => TagEntry::prose(value),
            Some((tag, value)) => TagEntry::tagged(tag, value),
            None => TagEntry::prose(line),
        })
        .filter(|entry| entry.tag.is_some() || !entry.value.is_empty())
        .collect()
}
