use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::super::exit_status::ExitStatus;
use super::super::report::{print_config_created, print_config_exists};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default `.autorefrc.json` into the working directory, never overwriting.
pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        print_config_exists(config_path);
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    print_config_created(config_path);

    Ok(ExitStatus::Success)
}
