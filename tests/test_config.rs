#![cfg(feature = "uses_serde")]
mod common {
    pub mod test_prelude;
    pub mod test_utils;
}

use common::test_prelude::*;
use common::test_utils::{TestWorkspace, MIXED_OUTPUT};

const CUSTOM_OUTPUT: &str = "\
a.lua: [Warning] line 1, column 1 - line 1, column 5: Trailing whitespace
b.lua: [Warning] line 2, column 1 - line 2, column 5: Trailing whitespace
c.lua: [Warning] line 3, column 1 - line 3, column 5: Empty if statement
";

#[test]
fn test_config_rules_group_custom_messages() -> Result<(), Box<dyn std::error::Error>> {
    let ws = TestWorkspace::new()?;
    let input = ws.write("lint.txt", CUSTOM_OUTPUT)?;
    let config = ws.write(
        "lint-e.toml",
        "[[rules]]\npattern = \"^Trailing\"\nlabel = \"Trailing whitespace(s)\"\n\n[[rules]]\npattern = \"Empty\"\nlabel = \"Never used\"\n",
    )?;

    let mut cmd = Command::cargo_bin("lint-e")?;
    cmd.arg("--config")
        .arg(&config)
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("Trailing whitespace(s): 2x"))
        .stdout(contains("Empty If-Statement(s): 1x"))
        .stdout(contains("Never used").not());

    Ok(())
}

#[test]
fn test_invalid_config_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let ws = TestWorkspace::new()?;
    let input = ws.write("lint.txt", CUSTOM_OUTPUT)?;
    let config = ws.write("lint-e.toml", "[[rules]]\npattern = \"(\"\nlabel = \"Broken\"\n")?;

    let mut cmd = Command::cargo_bin("lint-e")?;
    cmd.arg("-c")
        .arg(&config)
        .arg(&input)
        .assert()
        .code(2)
        .stderr(contains("Broken"));

    Ok(())
}

#[test]
fn test_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let ws = TestWorkspace::new()?;
    let input = ws.write("lint.txt", MIXED_OUTPUT)?;

    let mut cmd = Command::cargo_bin("lint-e")?;
    let output = cmd.args(["--format", "json"]).arg(&input).output()?;
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["verdict"], "fail");
    assert_eq!(value["error_count"], 2);
    assert_eq!(value["warning_count"], 3);
    assert_eq!(value["warnings_by_category"]["Deprecation(s)"], 2);
    assert_eq!(value["entry_count"], 6);
    assert_eq!(value["error_lines"].as_array().map(|a| a.len()), Some(2));

    Ok(())
}
