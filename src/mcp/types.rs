use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::listing::{FileModel, ModelCounts};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root (where .autorefrc.json lives)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractFileParams {
    /// Absolute path of the project root (where .autorefrc.json lives)
    pub project_root_path: String,
    /// Header file, absolute or relative to the project root
    pub file_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path of the project root (where .autorefrc.json lives)
    pub project_root_path: String,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub module_name: Option<String>,
    pub base_path: String,
    pub include_prefix: String,
    pub output: String,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub extensions: Vec<String>,
    pub wrapper_macros: Vec<String>,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            module_name: c.module_name,
            base_path: c.base_path,
            include_prefix: c.include_prefix,
            output: c.output,
            includes: c.includes,
            ignores: c.ignores,
            extensions: c.extensions,
            wrapper_macros: c.wrapper_macros,
        }
    }
}

// ============================================================
// Overview Types (scan_overview)
// ============================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountsDto {
    pub classes: usize,
    pub enums: usize,
    pub functions: usize,
    pub properties: usize,
}

impl From<ModelCounts> for CountsDto {
    fn from(c: ModelCounts) -> Self {
        Self {
            classes: c.classes,
            enums: c.enums,
            functions: c.functions,
            properties: c.properties,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileOverview {
    pub include_path: String,
    pub ref_name: String,
    #[serde(flatten)]
    pub counts: CountsDto,
}

impl From<&FileModel> for FileOverview {
    fn from(file: &FileModel) -> Self {
        Self {
            include_path: file.include_path.clone(),
            ref_name: file.ref_name.clone(),
            counts: file.counts().into(),
        }
    }
}

/// Result of scan_overview operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub module_name: Option<String>,
    pub total_file_count: usize,
    pub totals: CountsDto,
    pub files: Vec<FileOverview>,
}
