use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, bail};
use colored::Colorize;
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::parse_source,
    file_scanner::scan_files,
    listing::{FileModel, ModuleListing, is_registration_file, normalize_include_prefix},
};

/// Everything one run needs: merged configuration and resolved directories.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (e.g. `--base-path include`)
/// 2. `.autorefrc.json`
/// 3. Built-in defaults
#[derive(Debug, Clone)]
pub struct ExtractContext {
    pub config: Config,
    /// Directory the config was searched from; relative settings are resolved against it.
    pub root_dir: PathBuf,
    /// Canonical base path; every input file must live under it.
    pub base_path: PathBuf,
    pub include_prefix: String,
    pub verbose: bool,
}

impl ExtractContext {
    /// Context for the current directory with CLI overrides applied.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let root_dir = env::current_dir().context("Failed to get current directory")?;
        Self::load(&root_dir, Some(args))
    }

    pub fn load(root_dir: &Path, args: Option<&CommonArgs>) -> Result<Self> {
        let mut config = load_config(root_dir)?.config;
        let mut verbose = false;

        if let Some(args) = args {
            if let Some(base_path) = &args.base_path {
                config.base_path = base_path.to_string_lossy().into_owned();
            }
            if let Some(module_name) = &args.module_name {
                config.module_name = Some(module_name.clone());
            }
            if let Some(include_prefix) = &args.include_prefix {
                config.include_prefix = include_prefix.clone();
            }
            if let Some(output) = &args.output {
                config.output = output.to_string_lossy().into_owned();
            }
            verbose = args.verbose;
        }

        Self::from_config(root_dir, config, verbose)
    }

    pub fn from_config(root_dir: &Path, config: Config, verbose: bool) -> Result<Self> {
        config.validate()?;

        let base = root_dir.join(&config.base_path);
        if !base.is_dir() {
            bail!("The base path does not exist: {}", base.display());
        }
        let base_path = base
            .canonicalize()
            .with_context(|| format!("Failed to resolve base path: {}", base.display()))?;

        Ok(Self {
            include_prefix: normalize_include_prefix(&config.include_prefix),
            root_dir: root_dir.to_path_buf(),
            base_path,
            config,
            verbose,
        })
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root_dir.join(&self.config.output)
    }

    /// Files to process, in processing order.
    ///
    /// With no explicit paths every header under the base path is used. Explicit paths
    /// that are missing or outside the base path are skipped with a warning; generated
    /// `reg_*` files are always skipped.
    pub fn input_files(&self, explicit: &[PathBuf]) -> Vec<PathBuf> {
        if explicit.is_empty() {
            let scanned = scan_files(
                &self.base_path,
                &self.config.includes,
                &self.config.ignores,
                &self.config.extensions,
                self.verbose,
            );
            if scanned.skipped_count > 0 && !self.verbose {
                eprintln!(
                    "{} {} unreadable path(s) skipped, rerun with --verbose for details",
                    "warning:".bold().yellow(),
                    scanned.skipped_count
                );
            }
            debug!(
                found = scanned.files.len(),
                skipped = scanned.skipped_count,
                "header scan finished"
            );
            return scanned
                .files
                .into_iter()
                .filter(|path| !is_registration_file(path))
                .collect();
        }

        let mut files = Vec::new();
        for path in explicit {
            let path = self.root_dir.join(path);
            let Ok(canonical) = path.canonicalize() else {
                warn_skipped("File not found", &path);
                continue;
            };
            if !canonical.starts_with(&self.base_path) {
                warn_skipped("File is not under the base path", &path);
                continue;
            }
            if is_registration_file(&canonical) {
                debug!(file = %path.display(), "registration file skipped");
                continue;
            }
            files.push(canonical);
        }
        files
    }

    /// Read and run the engine over one file.
    pub fn extract_file(&self, path: &Path) -> Result<FileModel> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {}", path.display()))?;
        let relative = path.strip_prefix(&self.base_path).unwrap_or(path);

        let model = parse_source(&source, &self.config.parse_options());
        debug!(
            file = %relative.display(),
            classes = model.classes.len(),
            enums = model.enum_count(),
            "file extracted"
        );
        Ok(FileModel::new(path, relative, &self.include_prefix, model))
    }

    /// Process `files` one after another into a listing; the first unreadable file aborts.
    pub fn build_listing(&self, files: &[PathBuf]) -> Result<ModuleListing> {
        files.iter().try_fold(
            ModuleListing::new(self.config.module_name.clone()),
            |mut listing, path| {
                listing.push(self.extract_file(path)?);
                Ok(listing)
            },
        )
    }

    /// Path relative to the base path, for display.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.base_path)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

fn warn_skipped(reason: &str, path: &Path) {
    eprintln!(
        "{} {}, skipping: {}",
        "warning:".bold().yellow(),
        reason,
        path.display()
    );
}
