//! Autoref - reflection metadata extraction for annotated C++ headers
//!
//! Autoref is a CLI tool and library that reads `@tag` annotations from documentation
//! comments in C++ headers and assembles them into a typed model of classes, enums,
//! overloaded functions and properties, with parameter types rewritten to fully
//! qualified names.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reports)
//! - `config`: Configuration file loading and parsing
//! - `context`: Per-run configuration, input selection and the driving loop
//! - `core`: Extraction engine (blocks, tags, signatures, assembly, resolution)
//! - `file_scanner`: Header discovery under the base path
//! - `listing`: Per-file outputs aggregated by the driving loop
//! - `logging`: Diagnostic tracing setup
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod file_scanner;
pub mod listing;
pub mod logging;
pub mod mcp;
