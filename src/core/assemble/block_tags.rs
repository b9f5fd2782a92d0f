use crate::core::data::{AnnotationBlock, Tag, TagEntry};

/// Read-only lookup view over one annotation block.
///
/// Single-valued lookups are last-wins, matching how repeated tags overwrite each other;
/// repeatable tags (`@inherit`, `@enum_item`, `@using_ns`) are read with [`Self::values`].
#[derive(Debug, Clone, Copy)]
pub struct BlockTags<'a> {
    entries: &'a [TagEntry],
    signature: Option<&'a str>,
}

impl<'a> BlockTags<'a> {
    pub fn new(block: &'a AnnotationBlock) -> Self {
        Self {
            entries: &block.entries,
            signature: block.signature.as_deref(),
        }
    }

    pub fn get(&self, tag: Tag) -> Option<&'a str> {
        self.values(tag).last()
    }

    pub fn has(&self, tag: Tag) -> bool {
        self.values(tag).next().is_some()
    }

    pub fn values(&self, tag: Tag) -> impl Iterator<Item = &'a str> + use<'a> {
        let name = tag.as_str();
        let entries = self.entries;
        entries
            .iter()
            .filter(move |entry| entry.tag.as_deref() == Some(name))
            .map(|entry| entry.value.as_str())
    }

    /// Documentation string: untagged lines plus `@brief`/`@note` values, newline-joined.
    pub fn doc(&self) -> String {
        self.entries
            .iter()
            .filter(|entry| match entry.tag.as_deref() {
                None => true,
                Some(name) => Tag::parse(name).is_some_and(|tag| tag.is_doc()),
            })
            .map(|entry| entry.value.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The declaration to parse: the captured one, else an explicit `@func_sig`.
    pub fn signature(&self) -> Option<&'a str> {
        self.signature.or_else(|| self.get(Tag::FuncSig))
    }

    /// First function marker present, by priority, with its value.
    pub fn function_marker(&self) -> Option<(Tag, &'a str)> {
        Tag::FUNCTION_MARKERS
            .into_iter()
            .find_map(|tag| self.get(tag).map(|value| (tag, value)))
    }
}
