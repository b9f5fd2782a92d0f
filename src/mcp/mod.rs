//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the extraction engine read-only to AI assistants: configuration, the model of
//! one header and an overview of every header under the base path.
//!
//! ## Module Structure
//!
//! - `helpers`: Context loading and result conversion shared by the tools
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameters and result DTOs

mod helpers;
mod server;
pub mod types;

pub use server::{AutorefMcpServer, run_server};
