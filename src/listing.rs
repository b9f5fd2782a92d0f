//! Per-file outputs of one run, aggregated explicitly by the driving loop.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::ModuleModel;

/// Prefix of generated per-file reference names and of module registration files.
pub const REF_PREFIX: &str = "ref_";
pub const REG_PREFIX: &str = "reg_";

/// The assembled model of one input file plus the names generated from its path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileModel {
    pub source: PathBuf,
    /// `includePrefix` + path relative to the base path, `/`-separated.
    pub include_path: String,
    pub ref_name: String,
    pub ref_file: String,
    pub model: ModuleModel,
}

impl FileModel {
    pub fn new(
        source: impl Into<PathBuf>,
        relative_path: &Path,
        include_prefix: &str,
        model: ModuleModel,
    ) -> Self {
        let source = source.into();
        let ref_name = ref_name(&source);
        Self {
            include_path: format!("{}{}", include_prefix, slash_path(relative_path)),
            ref_file: format!("{ref_name}.json"),
            ref_name,
            source,
            model,
        }
    }

    pub fn counts(&self) -> ModelCounts {
        ModelCounts::of(&self.model)
    }
}

/// `include/gfx/canvas.hpp` -> `ref_canvas`
pub fn ref_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    format!("{REF_PREFIX}{stem}")
}

/// Generated registration files are inputs to nothing.
pub fn is_registration_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with(REG_PREFIX))
}

/// Backslashes become `/`, a leading `/` is dropped and a non-empty prefix ends with `/`.
pub fn normalize_include_prefix(prefix: &str) -> String {
    let mut normalized = prefix.replace('\\', "/");
    if let Some(stripped) = normalized.strip_prefix('/') {
        normalized = stripped.to_string();
    }
    if !normalized.is_empty() && !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Entity counts shown by `scan` and `scan_overview`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCounts {
    pub classes: usize,
    pub enums: usize,
    pub functions: usize,
    pub properties: usize,
}

impl ModelCounts {
    pub fn of(model: &ModuleModel) -> Self {
        Self {
            classes: model.classes.len(),
            enums: model.enum_count(),
            functions: model.function_count(),
            properties: model.property_count(),
        }
    }

    pub fn add(&mut self, other: Self) {
        self.classes += other.classes;
        self.enums += other.enums;
        self.functions += other.functions;
        self.properties += other.properties;
    }
}

/// Every file processed in one run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleListing {
    pub module_name: Option<String>,
    pub files: Vec<FileModel>,
}

impl ModuleListing {
    pub fn new(module_name: Option<String>) -> Self {
        Self {
            module_name,
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, file: FileModel) {
        self.files.push(file);
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn totals(&self) -> ModelCounts {
        let mut totals = ModelCounts::default();
        for file in &self.files {
            totals.add(file.counts());
        }
        totals
    }

    /// Content of the module registration file; `None` without a module name.
    pub fn registration(&self) -> Option<Registration> {
        let module_name = self.module_name.clone()?;
        Some(Registration {
            file_name: format!("{REG_PREFIX}{module_name}.json"),
            module_name,
            files: self
                .files
                .iter()
                .map(|f| RegisteredFile {
                    include_path: f.include_path.clone(),
                    ref_name: f.ref_name.clone(),
                })
                .collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub module_name: String,
    #[serde(skip)]
    pub file_name: String,
    pub files: Vec<RegisteredFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredFile {
    pub include_path: String,
    pub ref_name: String,
}
