//! Integration tests for the resolve command

mod common;

use common::{LOCAL_BUNDLE, PINNED_CHECKSUM, TestWorkspace};
use predicates::prelude::*;

fn resolve_json(workspace: &TestWorkspace) -> serde_json::Value {
    let output = workspace.cmd().arg("resolve").output().unwrap();
    assert!(output.status.success(), "resolve failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_resolve_remote_without_local_build() {
    let workspace = TestWorkspace::new();
    let json = resolve_json(&workspace);

    let binary = &json["modules"][1];
    assert_eq!(binary["kind"], "binary");
    assert_eq!(binary["name"], "Appcore");
    assert_eq!(binary["artifact"]["type"], "remote");
    assert_eq!(
        binary["artifact"]["url"],
        "https://github.com/CriticalMoments/CriticalMoments/releases/download/appcore-v0.8.0-beta/Appcore.xcframework.zip"
    );
    assert_eq!(binary["artifact"]["checksum"], PINNED_CHECKSUM);
    assert!(json["modules"][0].get("diagnostics").is_none());
}

#[test]
fn test_resolve_remote_prints_no_notice() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .arg("resolve")
        .assert()
        .success()
        .stderr(predicate::str::contains("Using Local Appcore Build From").not());
}

#[test]
fn test_resolve_local_with_bundle() {
    let workspace = TestWorkspace::new();
    let bundle = workspace.create_local_bundle();
    let json = resolve_json(&workspace);

    let artifact = &json["modules"][1]["artifact"];
    assert_eq!(artifact["type"], "local");
    assert_eq!(artifact["path"], bundle.display().to_string());
    assert!(artifact.get("checksum").is_none());
    assert_eq!(
        json["modules"][0]["diagnostics"],
        serde_json::json!(["-Werror=return-type", "-Werror=unused-variable", "-Werror"])
    );
}

#[test]
fn test_resolve_local_notice_on_stderr_only() {
    let workspace = TestWorkspace::new();
    workspace.create_local_bundle();
    let marker = workspace.marker();

    workspace
        .cmd()
        .arg("resolve")
        .assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "Using Local Appcore Build From: {}",
            marker.display()
        )))
        .stdout(predicate::str::contains("Using Local Appcore Build From").not());
}

#[test]
fn test_resolve_bundle_without_marker_is_remote() {
    let workspace = TestWorkspace::new();
    std::fs::create_dir_all(workspace.path.join(LOCAL_BUNDLE)).unwrap();

    let json = resolve_json(&workspace);
    assert_eq!(json["modules"][1]["artifact"]["type"], "remote");
}

#[test]
fn test_resolve_marker_contents_not_inspected() {
    let workspace = TestWorkspace::new();
    workspace.write_file(&format!("{LOCAL_BUNDLE}/Info.plist"), "");

    let json = resolve_json(&workspace);
    assert_eq!(json["modules"][1]["artifact"]["type"], "local");
}

#[test]
fn test_resolve_is_idempotent() {
    let workspace = TestWorkspace::new();
    workspace.create_local_bundle();

    let first = workspace.cmd().arg("resolve").output().unwrap();
    let second = workspace.cmd().arg("resolve").output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_resolve_names_are_consistent() {
    let workspace = TestWorkspace::new();
    let json = resolve_json(&workspace);

    assert_eq!(json["name"], "CriticalMoments");
    assert_eq!(json["products"][0]["name"], "CriticalMoments");
    assert_eq!(json["products"][0]["targets"], serde_json::json!(["CriticalMoments"]));
    assert_eq!(json["modules"][0]["name"], "CriticalMoments");
    assert_eq!(json["modules"][0]["dependencies"], serde_json::json!(["Appcore"]));
    assert_eq!(json["modules"][2]["name"], "CriticalMomentsTests");
    assert_eq!(
        json["modules"][2]["dependencies"],
        serde_json::json!(["CriticalMoments"])
    );
}

#[test]
fn test_resolve_explicit_descriptor_from_elsewhere() {
    let workspace = TestWorkspace::new();
    workspace.create_local_bundle();
    let other = TestWorkspace::new();

    let output = other
        .cmd()
        .args(["resolve", "--descriptor"])
        .arg(workspace.descriptor())
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["modules"][1]["artifact"]["type"], "local");
}

#[test]
fn test_resolve_descriptor_from_env() {
    let workspace = TestWorkspace::new();
    workspace.create_local_bundle();
    let other = TestWorkspace::new();

    other
        .cmd()
        .arg("resolve")
        .env("APPCORE_DESCRIPTOR", workspace.descriptor())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"local\""));
}

#[test]
fn test_resolve_rejects_wrong_descriptor_name() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["resolve", "--descriptor"])
        .arg(workspace.path.join("Package.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not name 'Package.swift'"));
}

#[test]
fn test_resolve_swift_format_remote() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["resolve", "--format", "swift"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("// swift-tools-version: 5.7"))
        .stdout(predicate::str::contains(format!("checksum: \"{PINNED_CHECKSUM}\"")))
        .stdout(predicate::str::contains("unsafeFlags").not());
}

#[test]
fn test_resolve_swift_format_local() {
    let workspace = TestWorkspace::new();
    workspace.create_local_bundle();
    workspace
        .cmd()
        .args(["resolve", "--format", "swift"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("path: \"{LOCAL_BUNDLE}\")")))
        .stdout(predicate::str::contains(".unsafeFlags(["))
        .stdout(predicate::str::contains("\"-Werror\""));
}

#[test]
fn test_resolve_yaml_format() {
    let workspace = TestWorkspace::new();
    let output = workspace
        .cmd()
        .args(["resolve", "-f", "yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let yaml: serde_yaml::Value = serde_yaml::from_slice(&output.stdout).unwrap();
    assert_eq!(yaml["tools_version"].as_str(), Some("5.7"));
    assert_eq!(yaml["modules"][1]["artifact"]["type"].as_str(), Some("remote"));
}

#[test]
fn test_resolve_text_format() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["resolve", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Binary source: remote release"))
        .stdout(predicate::str::contains("Diagnostics: none"));
}

#[test]
fn test_resolve_writes_output_file() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["resolve", "--format", "swift", "--output", "out/Package.swift"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let manifest = workspace.read_file("out/Package.swift");
    assert!(manifest.contains("name: \"CriticalMoments\""));
}

#[test]
fn test_resolve_with_implicit_config() {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "appcore.yaml",
        "package:\n  platform_version: \"13.0\"\nartifact:\n  local:\n    path: build/Appcore.xcframework\n",
    );
    workspace.write_file("build/Appcore.xcframework/Info.plist", "<plist/>");

    let json = resolve_json(&workspace);
    assert_eq!(json["platforms"][0]["version"], "13.0");
    assert_eq!(json["modules"][1]["artifact"]["type"], "local");
}

#[test]
fn test_resolve_explicit_config_replaces_implicit() {
    let workspace = TestWorkspace::new();
    workspace.write_file("appcore.yaml", "package:\n  platform_version: \"13.0\"\n");
    workspace.write_file("ci.yaml", "package:\n  platform_version: \"15.0\"\n");

    let output = workspace
        .cmd()
        .args(["resolve", "--config", "ci.yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["platforms"][0]["version"], "15.0");
}

#[test]
fn test_resolve_missing_config_fails() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["resolve", "--config", "missing.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_resolve_invalid_config_fails() {
    let workspace = TestWorkspace::new();
    workspace.write_file("appcore.yaml", "artifact:\n  remote:\n    checksum: nope\n");
    workspace
        .cmd()
        .arg("resolve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
