//! Text-level stages of the engine.
//!
//! - `blocks`: scans source text into comment blocks and scope sentinels
//! - `tags`: splits each comment block into `(tag, value)` entries

pub mod blocks;
pub mod tags;

pub use blocks::extract_blocks;
pub use tags::{parse_entries, parse_tags};
