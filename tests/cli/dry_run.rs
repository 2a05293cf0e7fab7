//! Tests for `--dry-run`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_default_dockerfile() {
    let t = Test::new();

    let output = t.dry_run(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, "FROM ghcr.io/zxlwq/domain:latest\n");
}

#[test]
fn test_custom_image() {
    let t = Test::new();

    let output = t.dry_run(&["--image", "myregistry/foo:v1"]);
    assert_success(&output);
    assert_stdout_contains(&output, "FROM myregistry/foo:v1\n");
    assert_stdout_excludes(&output, "ghcr.io/zxlwq/domain");
}

#[test]
fn test_empty_image_falls_back_to_default() {
    let t = Test::new();

    let output = t.dry_run(&["--image", ""]);
    assert_success(&output);
    assert_stdout_contains(&output, "FROM ghcr.io/zxlwq/domain:latest\n");
}

#[test]
fn test_readme_front_matter() {
    let t = Test::new();

    let output = t.dry_run(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, "sdk: docker");
    assert_stdout_contains(&output, "app_port: 3000");
    assert_stdout_contains(&output, "pinned: false");
}

#[test]
fn test_lists_secret_keys_without_values() {
    let t = Test::new();

    let output = t.dry_run(&["--tg-bot-token", "abc-bot-token", "--cf-key", "   "]);
    assert_success(&output);

    assert_stdout_contains(&output, "PASSWORD");
    assert_stdout_contains(&output, "DATABASE_URL");
    assert_stdout_contains(&output, "TG_BOT_TOKEN");
    assert_stdout_excludes(&output, "CF_KEY");

    assert_stdout_excludes(&output, "abc-bot-token");
    assert_stdout_excludes(&output, PASSWORD);
    assert_stdout_excludes(&output, DATABASE_URL);
}

#[test]
fn test_name_length_flag() {
    let t = Test::new();

    let output = t.dry_run(&["--name-length", "8"]);
    assert_success(&output);

    let out = stdout(&output);
    let name = out
        .lines()
        .find_map(|l| l.strip_prefix("title: "))
        .expect("README title missing");
    assert_eq!(name.len(), 8);
    assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
    assert!(name.chars().any(|c| c.is_ascii_alphabetic()));
}

#[test]
fn test_dry_run_makes_no_network_calls() {
    // The default test endpoint is unroutable; success means it was never used.
    let t = Test::new();

    let output = t.dry_run(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, "nothing was created");
}

#[test]
fn test_owner_is_placeholder() {
    let t = Test::new();

    t.provision_cmd(TOKEN)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Space <owner>/"));
}
