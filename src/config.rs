use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_WRAPPER_MACROS, ParseOptions};

pub const CONFIG_FILE_NAME: &str = ".autorefrc.json";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Module name used for the registration listing written by `export`.
    #[serde(default)]
    pub module_name: Option<String>,
    /// Every input file must live under this directory.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Prepended to base-relative paths to form include paths.
    #[serde(default)]
    pub include_prefix: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_wrapper_macros")]
    pub wrapper_macros: Vec<String>,
}

fn default_base_path() -> String {
    "./".to_string()
}

fn default_output() -> String {
    "./reflection".to_string()
}

fn default_extensions() -> Vec<String> {
    ["h", "hh", "hpp", "hxx"].map(String::from).to_vec()
}

fn default_wrapper_macros() -> Vec<String> {
    DEFAULT_WRAPPER_MACROS.iter().map(|m| m.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module_name: None,
            base_path: default_base_path(),
            include_prefix: String::new(),
            output: default_output(),
            includes: Vec::new(),
            ignores: Vec::new(),
            extensions: default_extensions(),
            wrapper_macros: default_wrapper_macros(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores`/`includes` and for
    /// wrapper macro names that are not identifiers.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Includes without wildcards are literal directories.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        for name in &self.wrapper_macros {
            if !is_identifier(name) {
                bail!("Invalid macro name in 'wrapperMacros': \"{}\"", name);
            }
        }

        for ext in &self.extensions {
            if ext.is_empty() || ext.contains(['.', '/', '\\']) {
                bail!(
                    "Invalid extension in 'extensions': \"{}\" (expected e.g. \"hpp\")",
                    ext
                );
            }
        }

        Ok(())
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            wrapper_macros: self.wrapper_macros.clone(),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug, Clone)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
