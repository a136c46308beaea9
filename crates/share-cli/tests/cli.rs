//! Black-box CLI tests over pinned envelopes.

use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

const ENVELOPE: &str = r#"{"pi":{"name":{"firstName":"Ann"},"contact":{"email":"a@x.com"}},"pubKey":"KEY1","version":"1.1.2","type":"personal","tag":""}"#;
const ROOT: &str = "4f03b998eb2b215c1db5b912e7cede5c299dcbca20a3f323bcd078abfe0cd092";

fn share_cmd() -> Command {
    Command::cargo_bin("share").unwrap()
}

#[test]
fn hash_prints_pinned_fingerprint() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("share.json");
    fs::write(&path, ENVELOPE).unwrap();

    share_cmd()
        .arg("hash")
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("{ROOT}\n"));
}

#[test]
fn hash_reads_stdin() {
    share_cmd()
        .args(["hash", "-"])
        .write_stdin(ENVELOPE)
        .assert()
        .success()
        .stdout(format!("{ROOT}\n"));
}

#[test]
fn hash_json_output() {
    let out = share_cmd()
        .args(["--json", "hash", "-"])
        .write_stdin(ENVELOPE)
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["fingerprint"], ROOT);
    assert_eq!(v["version"], "1.1.2");
}

#[test]
fn hash_rejects_malformed_envelope() {
    share_cmd()
        .args(["hash", "-"])
        .write_stdin("not an envelope")
        .assert()
        .failure();
}

#[test]
fn verify_accepts_matching_fingerprint() {
    share_cmd()
        .args(["verify", "--fingerprint", ROOT, "-"])
        .write_stdin(ENVELOPE)
        .assert()
        .success()
        .stdout("ok\n");
}

#[test]
fn verify_fails_on_mismatch() {
    let wrong = "0".repeat(64);
    share_cmd()
        .args(["verify", "--fingerprint", &wrong, "-"])
        .write_stdin(ENVELOPE)
        .assert()
        .failure();
}

#[test]
fn inspect_json_reports_record_fields() {
    let out = share_cmd()
        .args(["--json", "inspect", "-"])
        .write_stdin(ENVELOPE)
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["pubKey"], "KEY1");
    assert_eq!(v["type"], "personal");
    assert_eq!(v["pi"]["name"]["firstName"], "Ann");
    assert_eq!(v["fingerprint"], ROOT);
}

#[test]
fn inspect_tolerates_unsupported_version() {
    let envelope = r#"{"pi":{},"pubKey":"KEY1","version":"7.0.0"}"#;
    let out = share_cmd()
        .args(["--json", "inspect", "-"])
        .write_stdin(envelope)
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["version"], "7.0.0");
    assert!(v.get("fingerprint").is_none());
}
