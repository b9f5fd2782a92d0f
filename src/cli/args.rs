//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Extract every input header and print a per-file summary
//! - `export`: Extract and write `ref_*.json` models plus the module registration file
//! - `dump`: Print one header's model as JSON
//! - `init`: Initialize autoref configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Dump(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by the extraction commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory every input file must live under (overrides config file)
    #[arg(long)]
    pub base_path: Option<PathBuf>,

    /// Module name for the registration file (overrides config file)
    #[arg(long)]
    pub module_name: Option<String>,

    /// Prefix prepended to include paths (overrides config file)
    #[arg(long)]
    pub include_prefix: Option<String>,

    /// Output directory for exported models (overrides config file)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Header files to process (default: every header under the base path)
    pub files: Vec<PathBuf>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Header files to process (default: every header under the base path)
    pub files: Vec<PathBuf>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DumpCommand {
    /// Header file to print
    pub file: PathBuf,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract annotated headers and summarize what was found
    Scan(ScanCommand),
    /// Write per-file reflection models and the module registration file
    Export(ExportCommand),
    /// Print the reflection model of one header as JSON
    Dump(DumpCommand),
    /// Initialize a new .autorefrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
