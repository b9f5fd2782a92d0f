/// One item of the stream produced by the block extractor.
///
/// Scope sentinels mark a `{` / `}` seen in code outside of annotation blocks. The payload
/// type changes as the stream moves through the pipeline: raw [`CommentBlock`]s out of the
/// extractor, [`AnnotationBlock`]s out of the tag parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<A> {
    Annotation(A),
    BeginScope,
    EndScope,
}

impl<A> Block<A> {
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Block<B> {
        match self {
            Block::Annotation(a) => Block::Annotation(f(a)),
            Block::BeginScope => Block::BeginScope,
            Block::EndScope => Block::EndScope,
        }
    }
}

/// Normalized text of one comment block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBlock {
    /// Comment lines with markers stripped, newline separated.
    pub text: String,
    /// Declaration captured after the block, whitespace collapsed to single spaces.
    pub signature: Option<String>,
}

/// A single `(tag, value)` entry. `tag` is `None` for prose lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub tag: Option<String>,
    pub value: String,
}

impl TagEntry {
    pub fn tagged(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: value.into(),
        }
    }

    pub fn prose(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
        }
    }
}

/// Tag entries of one block in source order, plus the captured declaration if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationBlock {
    pub entries: Vec<TagEntry>,
    pub signature: Option<String>,
}

impl AnnotationBlock {
    pub fn new(entries: Vec<TagEntry>) -> Self {
        Self {
            entries,
            signature: None,
        }
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }
}

pub type RawBlock = Block<CommentBlock>;
pub type TagBlock = Block<AnnotationBlock>;
