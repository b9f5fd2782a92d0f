use anyhow::Result;

use crate::{CANVAS_HEADER, CliTest, run};

#[test]
fn test_scan_whole_base_path() -> Result<()> {
    let test = CliTest::with_headers()?;

    let (code, stdout, stderr) = run(test.scan_command())?;
    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "  gx/gfx/canvas.h  1 class, 1 enum, 3 functions, 1 property\n\
         \x20 gx/gfx/color.h   0 classes, 1 enum, 0 functions, 0 properties\n\
         \n\
         ✓ Scanned 2 files: 1 class, 2 enums, 3 functions, 1 property\n"
    );

    Ok(())
}

#[test]
fn test_scan_explicit_files_skips_invalid_inputs() -> Result<()> {
    let test = CliTest::with_headers()?;
    test.write_file("outside/other.h", CANVAS_HEADER)?;
    test.write_file("include/gfx/reg_gfx.h", "")?;

    let mut cmd = test.scan_command();
    cmd.args([
        "include/gfx/color.h",
        "include/gfx/missing.h",
        "include/gfx/reg_gfx.h",
        "outside/other.h",
    ]);
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("gx/gfx/color.h"));
    assert!(!stdout.contains("canvas"));
    assert!(stdout.contains("Scanned 1 file:"));

    assert!(stderr.contains("warning: File not found, skipping:"));
    assert!(stderr.contains("missing.h"));
    assert!(stderr.contains("warning: File is not under the base path, skipping:"));
    assert!(stderr.contains("other.h"));
    assert!(!stderr.contains("reg_gfx.h"));

    Ok(())
}

#[test]
fn test_scan_no_input_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("README.md", "# nothing to see")?;

    let (code, stdout, stderr) = run(test.scan_command())?;
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("No input files found"));

    Ok(())
}

#[test]
fn test_scan_base_path_override() -> Result<()> {
    let test = CliTest::with_file("headers/canvas.hpp", CANVAS_HEADER)?;

    let mut cmd = test.scan_command();
    cmd.args(["--base-path", "headers", "--include-prefix", "/gx/"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("gx/canvas.hpp  1 class"));

    Ok(())
}

#[test]
fn test_scan_missing_base_path_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.scan_command();
    cmd.args(["--base-path", "nope"]);
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 2);
    assert!(stderr.starts_with("Error: The base path does not exist:"));

    Ok(())
}

#[test]
fn test_scan_respects_ignores() -> Result<()> {
    let test = CliTest::with_headers()?;
    test.write_file(
        ".autorefrc.json",
        r#"{ "basePath": "include", "ignores": ["**/color.h"] }"#,
    )?;

    let (code, stdout, _) = run(test.scan_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("gfx/canvas.h"));
    assert!(!stdout.contains("color.h"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(
        ".autorefrc.json",
        r#"{ "wrapperMacros": ["NOT A MACRO"] }"#,
    )?;

    let (code, _, stderr) = run(test.scan_command())?;
    assert_eq!(code, 2);
    assert!(stderr.contains("wrapperMacros"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("scan"));

    Ok(())
}
