use anyhow::Result;

use super::super::args::ScanCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_no_input, print_scan_summary};
use crate::context::ExtractContext;

pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let ctx = ExtractContext::new(&cmd.common)?;

    let files = ctx.input_files(&cmd.files);
    if files.is_empty() {
        print_no_input();
        return Ok(ExitStatus::Failure);
    }

    let listing = ctx.build_listing(&files)?;
    print_scan_summary(&listing);
    Ok(ExitStatus::Success)
}
