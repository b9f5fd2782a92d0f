use autoref::mcp::{AutorefMcpServer, types::ExtractFileParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, WIDGET_HEADER, extract_tool_result_json};

// ============================================================================
// extract_file tests
// ============================================================================

fn params(fixture: &McpTestFixture, file_path: &str) -> Parameters<ExtractFileParams> {
    Parameters(ExtractFileParams {
        project_root_path: fixture.root(),
        file_path: file_path.to_string(),
    })
}

#[tokio::test]
async fn test_extract_file_relative_path() {
    let fixture = McpTestFixture::with_headers(vec![("ui/widget.h", WIDGET_HEADER)]).unwrap();
    let server = AutorefMcpServer::new();

    let result = server
        .extract_file(params(&fixture, "include/ui/widget.h"))
        .await
        .unwrap();
    let model = extract_tool_result_json(&result);

    let classes = model["classes"].as_array().unwrap();
    assert_eq!(classes.len(), 2);

    let widget = &classes[0];
    assert_eq!(widget["name"], "Widget");
    assert_eq!(widget["namespace"], "ui");
    assert_eq!(
        widget["properties"],
        json!([{
            "name": "visible",
            "getter": 0,
            "setter": 1,
            "doc": "",
            "repackType": null
        }])
    );

    let style = &classes[1];
    assert_eq!(style["name"], "Style");
    assert_eq!(style["outerClass"], "Widget");
    // Parameter types come back fully qualified.
    assert_eq!(
        style["functions"][0]["overloads"][0]["params"][0]["type"],
        "Widget"
    );
}

#[tokio::test]
async fn test_extract_file_absolute_path() {
    let fixture = McpTestFixture::with_headers(vec![("ui/widget.h", WIDGET_HEADER)]).unwrap();
    let server = AutorefMcpServer::new();

    let absolute = fixture.root_path().join("include/ui/widget.h");
    let result = server
        .extract_file(params(&fixture, &absolute.to_string_lossy()))
        .await
        .unwrap();
    let model = extract_tool_result_json(&result);

    assert_eq!(model["classes"][0]["name"], "Widget");
}

#[tokio::test]
async fn test_extract_file_outside_base_path() {
    let fixture = McpTestFixture::with_headers(vec![("ui/widget.h", WIDGET_HEADER)]).unwrap();
    std::fs::write(fixture.root_path().join("stray.h"), WIDGET_HEADER).unwrap();
    let server = AutorefMcpServer::new();

    let err = server
        .extract_file(params(&fixture, "stray.h"))
        .await
        .unwrap_err();
    assert!(err.message.contains("stray.h"));
}

#[tokio::test]
async fn test_extract_file_missing_base_path() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "basePath": "does/not/exist" }))
        .unwrap();
    let server = AutorefMcpServer::new();

    let err = server
        .extract_file(params(&fixture, "a.h"))
        .await
        .unwrap_err();
    assert!(err.message.contains("base path does not exist"));
}
