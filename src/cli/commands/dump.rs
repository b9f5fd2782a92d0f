use anyhow::Result;

use super::super::args::DumpCommand;
use super::super::exit_status::ExitStatus;
use crate::context::ExtractContext;

/// Print one file's model as pretty JSON; stdout carries nothing else.
pub fn dump(cmd: DumpCommand) -> Result<ExitStatus> {
    let ctx = ExtractContext::new(&cmd.common)?;

    // A skipped file has already been reported.
    let files = ctx.input_files(std::slice::from_ref(&cmd.file));
    let Some(path) = files.first() else {
        return Ok(ExitStatus::Failure);
    };

    let file = ctx.extract_file(path)?;
    println!("{}", serde_json::to_string_pretty(&file.model)?);
    Ok(ExitStatus::Success)
}
