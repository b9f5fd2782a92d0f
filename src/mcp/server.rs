use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::config::load_config;

use super::helpers::{json_result, load_context};
use super::types::{
    ConfigDto, ConfigValues, ExtractFileParams, FileOverview, GetConfigParams,
    ScanOverviewParams, ScanOverviewResult,
};

#[derive(Clone)]
pub struct AutorefMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for AutorefMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl AutorefMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current autoref configuration
    #[tool(description = "Get the current autoref configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// Extract the reflection model of one header
    #[tool(
        description = "Extract the reflection model (classes, enums, functions, properties) of one annotated header file. The file must live under the configured base path."
    )]
    pub async fn extract_file(
        &self,
        params: Parameters<ExtractFileParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let requested = PathBuf::from(&params.0.file_path);
        let files = ctx.input_files(std::slice::from_ref(&requested));
        let Some(path) = files.first() else {
            return Err(McpError::invalid_params(
                format!(
                    "File not found, not under the base path, or a registration file: {}",
                    params.0.file_path
                ),
                None,
            ));
        };

        let file = ctx
            .extract_file(path)
            .map_err(|e| McpError::internal_error(format!("Extraction failed: {:#}", e), None))?;
        json_result(&file.model)
    }

    /// Get entity counts for every header under the base path
    #[tool(
        description = "Get class, enum, function and property counts for every header under the base path, plus totals. Use this first to find which files to extract."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let files = ctx.input_files(&[]);
        let listing = ctx
            .build_listing(&files)
            .map_err(|e| McpError::internal_error(format!("Scan failed: {:#}", e), None))?;

        json_result(&ScanOverviewResult {
            module_name: listing.module_name.clone(),
            total_file_count: listing.files.len(),
            totals: listing.totals().into(),
            files: listing.files.iter().map(FileOverview::from).collect(),
        })
    }
}

#[tool_handler]
impl ServerHandler for AutorefMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Autoref MCP exposes reflection metadata extracted from annotated C++ headers.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_overview - Get per-file entity counts for every header\n\
                 3. extract_file - Get the full reflection model of one header\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to find the headers that declare what you need\n\
                 2. Use extract_file on those headers for classes, overloads and properties"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = AutorefMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
