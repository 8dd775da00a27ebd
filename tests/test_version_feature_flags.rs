use assert_cmd::Command;
use lint_e::e_cli::get_feature_flags;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_version_feature_flags() {
    let mut cmd = Command::cargo_bin("lint-e").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        // Check that the output starts with "lint-e " and contains a JSON array.
        .stdout(contains("lint-e "))
        .stdout(contains("["))
        .stdout(contains("]"))
        .stdout(if cfg!(feature = "uses_serde") {
            contains("\"uses_serde\"").and(contains("\"!uses_serde\"").not())
        } else {
            contains("\"!uses_serde\"").and(contains("\"uses_serde\"").not())
        });
}

#[test]
fn test_feature_flags_compact() {
    let flags = get_feature_flags();
    if cfg!(feature = "uses_serde") {
        assert!(flags.contains(&"uses_serde"));
        assert!(!flags.contains(&"!uses_serde"));
    } else {
        assert!(flags.contains(&"!uses_serde"));
    }
}
