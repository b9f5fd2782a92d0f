//! Core data types shared by every stage of the engine.
//!
//! ## Module Structure
//!
//! - `block`: the block stream (annotation blocks and scope sentinels)
//! - `model`: the assembled symbol model (`ModuleModel` and everything it owns)
//! - `tag`: the `@word` tag vocabulary

pub mod block;
pub mod model;
pub mod tag;

pub use block::{AnnotationBlock, Block, CommentBlock, RawBlock, TagBlock, TagEntry};
pub use model::{
    ClassModel, EnumModel, FunctionId, FunctionOverloadSet, ModuleEnumKind, ModuleEnumModel,
    ModuleModel, Parameter, ParsedSignature, PropertyModel, SCOPE_SEPARATOR,
};
pub use tag::{Tag, split_tag_line};
