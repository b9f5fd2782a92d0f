//! Assembler: folds the annotation/scope block stream of one file into a [`ModuleModel`].
//!
//! [`ModuleModel`]: crate::core::data::ModuleModel

mod assembler;
mod block_tags;


pub use assembler::{Assembler, ScopeKind, assemble};
pub use block_tags::BlockTags;
