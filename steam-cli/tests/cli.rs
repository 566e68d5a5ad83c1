//! Command-line behavior, run against the binary in `--mock` mode.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("steam-cli").unwrap();
    cmd.env_remove("STEAM_API_LIBRARY").env_remove("RUST_LOG");
    cmd
}

#[test]
fn symbols_prints_table() {
    cli()
        .arg("symbols")
        .assert()
        .success()
        .stdout(predicate::str::contains("SteamAPI_Init"))
        .stdout(predicate::str::contains("SteamAPI_SteamRemoteStorage_v016"))
        .stdout(predicate::str::contains(
            "SteamAPI_ISteamUtils_GetAPICallResult",
        ));
}

#[test]
fn symbols_json_is_parseable() {
    let output = cli().args(["--json", "symbols"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["symbols"].as_array().unwrap().len(), 31);
}

#[test]
fn check_missing_library_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("libsteam_api.so");
    cli()
        .arg("--library")
        .arg(&path)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("libsteam_api.so"));
}

#[test]
fn check_rejects_mock() {
    cli()
        .args(["--mock", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--mock"));
}

#[test]
fn restart_check_with_mock() {
    cli()
        .args(["--mock", "restart-check", "--app-id", "480"])
        .assert()
        .success()
        .stdout(predicate::str::contains("App 480: no restart needed"));
}

#[test]
fn info_with_mock() {
    cli()
        .args(["--mock", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Language:    english"))
        .stdout(predicate::str::contains("/mock/steamapps/common/Spacewar"))
        .stdout(predicate::str::contains("k_ESteamInputType_SteamDeckController"));
}

#[test]
fn storage_write_with_mock() {
    cli()
        .args(["--mock", "storage", "write", "save.bin", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 5 bytes to save.bin"));
}

#[test]
fn storage_write_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0u8; 64]).unwrap();
    cli()
        .args(["--mock", "storage", "write", "blob.bin", "--file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 64 bytes"));
}

#[test]
fn storage_size_of_missing_file_is_zero() {
    cli()
        .args(["--mock", "storage", "size", "nothing.bin"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn storage_read_missing_fails() {
    cli()
        .args(["--mock", "storage", "read", "nothing.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn achievement_set_with_mock() {
    cli()
        .args(["--mock", "achievement", "set", "ACH_WIN_ONE_GAME"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ACH_WIN_ONE_GAME: now unlocked"));
}

#[test]
fn achievement_unknown_fails() {
    cli()
        .args([
            "--mock",
            "achievement",
            "get",
            "ACH_DOES_NOT_EXIST",
            "--timeout-ms",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ACH_DOES_NOT_EXIST"));
}

#[test]
fn ticket_with_mock() {
    cli()
        .args(["--mock", "--json", "ticket", "--data", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains(hex::encode(b"mock-ticket:abc")));
}

#[test]
fn config_file_supplies_app_id() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[app]\nid = 1234").unwrap();
    cli()
        .args(["--mock", "restart-check", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("App 1234"));
}

#[test]
fn invalid_config_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[app]\nid = \"x\"").unwrap();
    cli()
        .args(["--mock", "symbols", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));
}
