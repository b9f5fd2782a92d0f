use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::debug;

use super::super::args::ExportCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_export_summary, print_no_input};
use crate::config::CONFIG_FILE_NAME;
use crate::context::ExtractContext;
use crate::listing::ModuleListing;

pub fn export(cmd: ExportCommand) -> Result<ExitStatus> {
    let ctx = ExtractContext::new(&cmd.common)?;
    if ctx.config.module_name.is_none() {
        bail!(
            "A module name is required for export: pass --module-name or set \"moduleName\" in {}",
            CONFIG_FILE_NAME
        );
    }

    let files = ctx.input_files(&cmd.files);
    if files.is_empty() {
        print_no_input();
        return Ok(ExitStatus::Failure);
    }

    let listing = ctx.build_listing(&files)?;
    let output_dir = ctx.output_dir();
    let written = write_listing(&listing, &output_dir)?;

    let names: Vec<String> = written
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    print_export_summary(&names, &ctx.config.output);
    Ok(ExitStatus::Success)
}

/// Write one `ref_*.json` per file and, with a module name, the registration file.
///
/// Returns the written paths in write order.
pub fn write_listing(listing: &ModuleListing, output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let mut written = Vec::with_capacity(listing.files.len() + 1);
    for file in &listing.files {
        let path = output_dir.join(&file.ref_file);
        write_json(&path, &file.model)?;
        written.push(path);
    }
    if let Some(registration) = listing.registration() {
        let path = output_dir.join(&registration.file_name);
        write_json(&path, &registration)?;
        written.push(path);
    }
    Ok(written)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    content.push('\n');
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))?;
    debug!(file = %path.display(), "written");
    Ok(())
}
