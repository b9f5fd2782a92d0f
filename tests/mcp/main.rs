use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;


pub const WIDGET_HEADER: &str = r#"
/// @ns ui
/// @class Widget
class Widget {
    /// @func
    /// @property_get visible
    bool isVisible();

    /// @func
    /// @property_set visible
    void setVisible(bool value);

    /// @class Style
    class Style {
        /// @func
        void apply(Widget target);
    };
};
"#;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with an `include/` header tree
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;
        fs::create_dir(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a project whose config points `basePath` at `include/`
    pub fn with_headers(headers: Vec<(&str, &str)>) -> Result<Self> {
        let fixture = Self::new()?;
        fixture.write_config(&serde_json::json!({
            "moduleName": "ui",
            "basePath": "include",
            "includePrefix": "sdk"
        }))?;
        for (path, content) in headers {
            fixture.write_header(path, content)?;
        }
        Ok(fixture)
    }

    /// Write a header to include/<relative_path>
    pub fn write_header(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join("include").join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write header: {}", path.display()))?;
        Ok(())
    }

    /// Write a .autorefrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".autorefrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    // Check for errors using is_error field
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    // Extract text from the content
    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
