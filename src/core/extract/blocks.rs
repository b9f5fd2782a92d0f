//! Block extraction: source text -> ordered stream of comment blocks and scope sentinels.
//!
//! Two comment forms are recognized:
//!
//! ```cpp
//! /**
//!  * @class Foo
//!  */
//! class Foo {
//!
//!     /// @func
//!     void bar(int x, int y = 0);
//! };
//! ```
//!
//! Outside of a block every `{` / `}` on a line becomes a [`Block::BeginScope`] /
//! [`Block::EndScope`] sentinel, so nesting is tracked even for code that carries no
//! annotations. When a block declares a constructor or function, the declaration that
//! follows it is captured (until `;` or `{`), collapsed to one line and attached to the
//! block.

use crate::core::data::{Block, CommentBlock, RawBlock, Tag, split_tag_line};
use crate::core::utils::collapse_whitespace;

const DELIMITED_START: &str = "/*";
const DELIMITED_END: &str = "*/";
const LINE_PREFIX: &str = "///";
const DOC_START: &str = "/**";

/// Extract every block of `source`, in source order.
pub fn extract_blocks(source: &str) -> Vec<RawBlock> {
    BlockExtractor::new(source).run()
}

struct BlockExtractor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    blocks: Vec<RawBlock>,
}

impl<'a> BlockExtractor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
            pos: 0,
            blocks: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<RawBlock> {
        while let Some(line) = self.next_line() {
            self.scan_code_line(line.trim());
        }
        self.blocks
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.pos).copied()?;
        self.pos += 1;
        Some(line)
    }

    fn peek_line(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Hand the last consumed line back so the main loop scans it again.
    fn step_back(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    fn scan_code_line(&mut self, trimmed: &str) {
        self.push_scope_sentinels(trimmed);

        if let Some(rest) = trimmed.strip_prefix(DELIMITED_START) {
            self.read_delimited(rest);
        } else if let Some(rest) = trimmed.strip_prefix(LINE_PREFIX) {
            self.read_line_comments(rest);
        }
    }

    // ============================================================
    // Delimited form: /* ... */
    // ============================================================

    fn read_delimited(&mut self, first: &str) {
        let mut text = String::new();

        // The opening line may close the block as well: `/** @class Foo */`
        if let Some(end) = first.find(DELIMITED_END) {
            push_line(&mut text, &clean_opening_line(&first[..end]));
            self.finish_delimited(text);
            return;
        }
        push_line(&mut text, &clean_opening_line(first));

        while let Some(line) = self.next_line() {
            let trimmed = line.trim();
            if let Some(end) = trimmed.find(DELIMITED_END) {
                push_line(&mut text, &clean_comment_line(&trimmed[..end]));
                break;
            }
            push_line(&mut text, &clean_comment_line(trimmed));
        }

        self.finish_delimited(text);
    }

    /// Continuation for the delimited form always starts on the line after `*/`.
    fn finish_delimited(&mut self, text: String) {
        if !needs_signature(&text) {
            self.push_block(text, None);
            return;
        }

        let raw = self.capture_declaration(String::new());
        self.push_block(text, normalize_signature(&raw));
        self.push_scope_sentinels(&raw);
    }

    // ============================================================
    // Per-line form: /// ...
    // ============================================================

    fn read_line_comments(&mut self, first: &str) {
        let mut text = String::new();
        push_line(&mut text, first);

        while let Some(line) = self.next_line() {
            let trimmed = line.trim();
            match trimmed.strip_prefix(LINE_PREFIX) {
                Some(rest) => push_line(&mut text, rest),
                None => {
                    self.finish_line_comments(text, trimmed);
                    return;
                }
            }
        }

        // End of input right after the comment lines.
        self.push_block(text, None);
    }

    /// The first code line after a `///` run already belongs to the declaration.
    fn finish_line_comments(&mut self, text: String, terminating: &str) {
        if !needs_signature(&text) || terminating.starts_with(DELIMITED_START) {
            self.push_block(text, None);
            self.step_back();
            return;
        }

        let mut raw = format!("{terminating} ");
        if !(terminating.contains(';') && terminating.contains('{')) {
            raw = self.capture_declaration(raw);
        }

        self.push_block(text, normalize_signature(&raw));
        self.push_scope_sentinels(&raw);
    }

    // ============================================================
    // Shared helpers
    // ============================================================

    /// Append raw code lines to `raw` until one contains `;` or `{`.
    ///
    /// Blank lines are skipped; a line opening another comment block is left unread.
    /// Reaching the end of input keeps whatever was captured so far.
    fn capture_declaration(&mut self, mut raw: String) -> String {
        while let Some(line) = self.peek_line() {
            let code = line.trim();
            if code.is_empty() {
                self.pos += 1;
                continue;
            }
            if code.starts_with(LINE_PREFIX) || code.starts_with(DOC_START) {
                break;
            }

            self.pos += 1;
            raw.push_str(code);
            raw.push(' ');
            if code.contains(';') || code.contains('{') {
                break;
            }
        }
        raw
    }

    fn push_block(&mut self, text: String, signature: Option<String>) {
        if text.trim().is_empty() && signature.is_none() {
            return;
        }
        self.blocks
            .push(Block::Annotation(CommentBlock { text, signature }));
    }

    fn push_scope_sentinels(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '{' => self.blocks.push(Block::BeginScope),
                '}' => self.blocks.push(Block::EndScope),
                _ => {}
            }
        }
    }
}

fn push_line(text: &mut String, line: &str) {
    text.push_str(line);
    text.push('\n');
}

/// Strip surrounding whitespace and one leading `*`.
fn clean_comment_line(line: &str) -> String {
    let trimmed = line.trim();
    match trimmed.strip_prefix('*') {
        Some(rest) => rest.trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Like [`clean_comment_line`], for the text right after `/*` (`/**`, `/*!`).
fn clean_opening_line(line: &str) -> String {
    clean_comment_line(line.strip_prefix('!').unwrap_or(line))
}

fn needs_signature(text: &str) -> bool {
    text.lines()
        .filter_map(|line| split_tag_line(line.trim()))
        .filter_map(|(tag, _)| Tag::parse(tag))
        .any(|tag| tag.requires_signature())
}

fn normalize_signature(raw: &str) -> Option<String> {
    let signature = collapse_whitespace(raw);
    (!signature.is_empty()).then_some(signature)
}
