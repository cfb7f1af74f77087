// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end tests for the `linmath-gen` binary.
#![allow(clippy::unwrap_used)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("linmath-gen").unwrap()
}

#[test]
fn writes_every_artifact_and_manifest() {
    let dir = tempfile::tempdir().unwrap();
    bin().arg("--out-dir").arg(dir.path()).assert().success();

    let rs_files = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .count();
    assert_eq!(rs_files, 27);

    let manifest: serde_json::Value =
        serde_json::from_slice(&fs::read(dir.path().join("manifest.json")).unwrap()).unwrap();
    assert_eq!(manifest["generator"], "linmath-gen");
    assert_eq!(manifest["artifacts"].as_array().unwrap().len(), 27);
    assert_eq!(manifest["artifacts"][0]["file"], "vec2.rs");
}

#[test]
fn check_passes_on_fresh_output_and_fails_after_tampering() {
    let dir = tempfile::tempdir().unwrap();
    bin().arg("--out-dir").arg(dir.path()).assert().success();
    bin()
        .args(["--check", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success();

    fs::write(dir.path().join("mat3.rs"), "// edited by hand\n").unwrap();
    fs::remove_file(dir.path().join("ivec2.rs")).unwrap();
    bin()
        .args(["--check", "--out-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("mat3").and(predicate::str::contains("ivec2")));

    // Check mode never writes.
    assert!(!dir.path().join("ivec2.rs").exists());
}

#[test]
fn check_reports_a_stale_manifest_unless_manifests_are_off() {
    let dir = tempfile::tempdir().unwrap();
    bin().arg("--out-dir").arg(dir.path()).assert().success();
    let emptied = serde_json::json!({
        "generator": "linmath-gen",
        "version": "0.0.0",
        "artifacts": []
    });
    fs::write(dir.path().join("manifest.json"), emptied.to_string()).unwrap();

    bin()
        .args(["--check", "--out-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("manifest.json"));
    bin()
        .args(["--check", "--no-manifest", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn list_prints_names_in_registration_order() {
    let output = bin()
        .arg("--list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let names: Vec<String> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect();
    assert_eq!(names.len(), 27);
    assert_eq!(names.first().map(String::as_str), Some("vec2"));
    assert_eq!(names.last().map(String::as_str), Some("dmat4"));
}

#[test]
fn config_file_and_flags_combine() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("from-config");
    let config = dir.path().join("linmath-gen.json");
    fs::write(
        &config,
        serde_json::json!({ "out_dir": out, "pretty": true }).to_string(),
    )
    .unwrap();

    bin()
        .arg("--config")
        .arg(&config)
        .arg("--no-manifest")
        .assert()
        .success();
    assert!(out.join("vec3.rs").is_file());
    assert!(!out.join("manifest.json").exists());
    let text = fs::read_to_string(out.join("vec3.rs")).unwrap();
    assert!(text.starts_with("///"), "prettyplease drops plain comments");
}

#[test]
fn malformed_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.json");
    fs::write(&config, "{ \"pretty\": 3 }").unwrap();
    bin()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading config"));
}
