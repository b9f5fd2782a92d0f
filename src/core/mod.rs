//! The extraction engine.
//!
//! One file goes through four stages, each a pure function of its input:
//!
//! 1. [`extract::extract_blocks`]: source text -> comment blocks and scope sentinels
//! 2. [`extract::parse_tags`]: comment text -> ordered `(tag, value)` entries
//! 3. [`assemble::Assembler`]: block stream -> [`ModuleModel`]
//! 4. [`resolve::resolve_qualified_names`]: parameter types -> fully qualified paths
//!
//! The engine has no error path: malformed annotations are skipped and the (possibly
//! partial) model is always returned.

pub mod assemble;
pub mod data;
pub mod extract;
pub mod resolve;
pub mod signature;
pub mod utils;

pub use data::*;

/// Wrapper macros unwrapped by default before a declaration is parsed.
pub const DEFAULT_WRAPPER_MACROS: &[&str] = &["GFX_API_FUNC", "GX_API_FUNC"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub wrapper_macros: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            wrapper_macros: DEFAULT_WRAPPER_MACROS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Run the whole pipeline over one file's text.
pub fn parse_source(source: &str, options: &ParseOptions) -> ModuleModel {
    let blocks = extract::extract_blocks(source)
        .into_iter()
        .map(|block| block.map(extract::parse_tags));

    let mut model = assemble::assemble(blocks, &options.wrapper_macros);
    resolve::resolve_qualified_names(&mut model);
    model
}
