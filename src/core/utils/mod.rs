//! Utility helpers for the engine.
//!
//! ## Module Structure
//!
//! - `text`: identifier scanning and whitespace normalization

pub mod text;

pub use text::*;
