use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CANVAS_HEADER, CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in ["moduleName", "basePath", "includePrefix", "output", "extensions", "wrapperMacros"] {
        assert!(parsed.get(field).is_some(), "Config should have '{field}' field");
    }
    assert_eq!(parsed["basePath"], "./");
    assert_eq!(parsed["output"], "./reflection");

    // Verify formatting (2-space indentation)
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Created .autorefrc.json\n");

    assert!(test.root().join(".autorefrc.json").exists());
    let content = test.read_file(".autorefrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".autorefrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, _, stderr) = run(cmd)?;
    assert_eq!(code, 1);
    assert_eq!(
        stderr,
        "✘ .autorefrc.json already exists\n  help: edit it directly or remove it first\n"
    );
    assert_eq!(test.read_file(".autorefrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    let mut init = test.command();
    init.arg("init");
    init.output()?;

    test.write_file("gfx/canvas.h", CANVAS_HEADER)?;

    let (code, stdout, stderr) = run(test.scan_command())?;
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("gfx/canvas.h"));

    Ok(())
}
