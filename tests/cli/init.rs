use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed.get("issueTracker"), Some(&Value::String(String::new())));
    assert_eq!(parsed.get("formatComments"), Some(&Value::Bool(true)));

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .tree-gettext.json

    ----- stderr -----
    ");

    assert!(test.root().join(".tree-gettext.json").exists());

    let content = test.read_file(".tree-gettext.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tree-gettext.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .tree-gettext.json already exists
    ");

    assert_eq!(test.read_file(".tree-gettext.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    test.write_file("src/main.c", "int main(void) {\n  puts(_(\"Hello\"));\n}\n")?;
    test.write_file("POTFILES", "src/main.c\n")?;

    let output = test.pot_command("app.pot", "POTFILES").output()?;
    assert!(
        output.status.success(),
        "pot should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
