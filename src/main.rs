use std::process::ExitCode;

use autoref::cli::{Arguments, Command, ExitStatus};
use autoref::logging::init_tracing;
use clap::Parser;

fn main() -> ExitCode {
    let args = Arguments::parse();

    if let Err(err) = init_tracing(args.verbose()) {
        eprintln!("Error: {}", err);
        return ExitStatus::Error.into();
    }

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = autoref::mcp::run_server() {
            eprintln!("Error: {}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match autoref::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
