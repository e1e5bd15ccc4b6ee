//! End-to-end tests for the `separate` command
//!
//! These tests invoke the actual CLI binary and validate its behavior
//! from a user's perspective.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

const CANONICAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Profile xmlns="http://soap.sforce.com/2006/04/metadata">
    <custom>true</custom>
    <fieldPermissions>
        <editable>true</editable>
        <field>Account.Industry</field>
    </fieldPermissions>
</Profile>"#;

/// Test that --help flag shows help information
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_separate_help() {
    let mut cmd = cargo_bin_cmd!("sfprofiles");

    cmd.arg("separate").arg("--help").assert().success().stdout(
        predicate::str::contains("Split canonical profile documents"),
    );
}

/// Test that separate writes fragment and scalar meta files
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_separate_writes_fragments() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("Admin.profile-meta.xml")
        .write_str(CANONICAL)
        .unwrap();

    let mut cmd = cargo_bin_cmd!("sfprofiles");
    cmd.arg("separate")
        .arg("--output")
        .arg(temp.path())
        .assert()
        .success();

    temp.child("Admin/fieldPermissions/Account.Industry.fieldPermissions-meta.xml")
        .assert(predicate::path::is_file());
    temp.child("Admin/Admin.profile-meta.xml")
        .assert(predicate::str::contains("<custom>true</custom>"));
}

/// Test that a malformed profile is reported but does not fail the run
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_separate_reports_malformed_profile() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("Admin.profile-meta.xml")
        .write_str(CANONICAL)
        .unwrap();
    temp.child("Broken.profile-meta.xml")
        .write_str("<Profile>")
        .unwrap();

    let mut cmd = cargo_bin_cmd!("sfprofiles");
    cmd.arg("separate")
        .arg("--output")
        .arg(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Broken.profile-meta.xml"));

    temp.child("Admin/Admin.profile-meta.xml")
        .assert(predicate::path::is_file());
}

/// Test that a missing profile directory produces an error
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_separate_missing_directory() {
    let mut cmd = cargo_bin_cmd!("sfprofiles");
    cmd.arg("separate")
        .arg("--output")
        .arg("/nonexistent/profiles")
        .assert()
        .failure();
}
