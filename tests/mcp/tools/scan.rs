use autoref::mcp::{AutorefMcpServer, types::ScanOverviewParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, WIDGET_HEADER, extract_tool_result_json};

// ============================================================================
// scan_overview tests
// ============================================================================

#[tokio::test]
async fn test_scan_overview_counts() {
    let fixture = McpTestFixture::with_headers(vec![
        ("ui/widget.h", WIDGET_HEADER),
        ("ui/empty.hpp", "// nothing annotated here\n"),
        ("ui/notes.txt", "/// @class Ignored\n"),
    ])
    .unwrap();
    let server = AutorefMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });
    let result = server.scan_overview(params).await.unwrap();
    let overview = extract_tool_result_json(&result);

    assert_eq!(overview["moduleName"], "ui");
    assert_eq!(overview["totalFileCount"], 2);
    assert_eq!(
        overview["totals"],
        json!({ "classes": 2, "enums": 0, "functions": 3, "properties": 1 })
    );
    assert_eq!(
        overview["files"],
        json!([
            {
                "includePath": "sdk/ui/empty.hpp",
                "refName": "ref_empty",
                "classes": 0, "enums": 0, "functions": 0, "properties": 0
            },
            {
                "includePath": "sdk/ui/widget.h",
                "refName": "ref_widget",
                "classes": 2, "enums": 0, "functions": 3, "properties": 1
            }
        ])
    );
}

#[tokio::test]
async fn test_scan_overview_skips_registration_files() {
    let fixture = McpTestFixture::with_headers(vec![
        ("ui/widget.h", WIDGET_HEADER),
        ("reg_ui.h", "/// @class Generated\nclass Generated {};\n"),
    ])
    .unwrap();
    let server = AutorefMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });
    let result = server.scan_overview(params).await.unwrap();
    let overview = extract_tool_result_json(&result);

    assert_eq!(overview["totalFileCount"], 1);
    assert_eq!(overview["files"][0]["refName"], "ref_widget");
}
