/// Main entry point for the autoref CLI.
///
/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(ExitStatus)`: `Failure` when there was nothing to do
/// - `Err` if the command fails (e.g., config invalid, unreadable file)
use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{dump::dump, export::export, init::init, scan::scan},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Dump(cmd)) => dump(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            bail!("Serve command should be handled before run()")
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
