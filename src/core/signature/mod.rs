//! Declaration-level stages of the engine.
//!
//! - `parser`: one normalized declaration -> `ParsedSignature`
//! - `overloads`: trailing default parameters -> one signature per call arity

pub mod overloads;
pub mod parser;

pub use overloads::generate_overloads;
pub use parser::parse_signature;
