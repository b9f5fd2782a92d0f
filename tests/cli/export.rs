use anyhow::Result;
use serde_json::{Value, json};

use crate::{CliTest, run};

#[test]
fn test_export_writes_models_and_registration() -> Result<()> {
    let test = CliTest::with_headers()?;

    let mut cmd = test.export_command();
    cmd.args(["--module-name", "gfx", "--output", "out/reflection"]);
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "  ref_canvas.json\n  ref_color.json\n  reg_gfx.json\n✓ Wrote 3 files to out/reflection\n"
    );

    let canvas: Value = serde_json::from_str(&test.read_file("out/reflection/ref_canvas.json")?)?;
    assert_eq!(canvas["targetNamespace"], "gx::gfx");
    assert_eq!(canvas["classes"][0]["name"], "Canvas");
    assert_eq!(canvas["classes"][0]["namespace"], "gfx");

    let registration: Value =
        serde_json::from_str(&test.read_file("out/reflection/reg_gfx.json")?)?;
    assert_eq!(
        registration,
        json!({
            "moduleName": "gfx",
            "files": [
                { "includePath": "gx/gfx/canvas.h", "refName": "ref_canvas" },
                { "includePath": "gx/gfx/color.h", "refName": "ref_color" },
            ]
        })
    );

    Ok(())
}

#[test]
fn test_export_module_name_from_config() -> Result<()> {
    let test = CliTest::with_headers()?;
    test.write_file(
        ".autorefrc.json",
        r#"{ "basePath": "include", "moduleName": "core" }"#,
    )?;

    let (code, _, stderr) = run(test.export_command())?;
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(test.root().join("reflection/reg_core.json").exists());
    assert!(test.root().join("reflection/ref_color.json").exists());

    Ok(())
}

#[test]
fn test_export_requires_module_name() -> Result<()> {
    let test = CliTest::with_headers()?;

    let (code, _, stderr) = run(test.export_command())?;
    assert_eq!(code, 2);
    assert!(stderr.contains("A module name is required"));
    assert!(!test.root().join("reflection").exists());

    Ok(())
}
