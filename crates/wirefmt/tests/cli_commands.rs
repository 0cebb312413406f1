#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::{Command, Output};

fn wirefmt(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wirefmt"))
        .arg("--log-level")
        .arg("error")
        .args(args)
        .output()
        .expect("wirefmt should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn unique_temp_file(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "wirefmt-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ))
}

#[test]
fn size_prints_formatted_value() {
    let output = wirefmt(&["--format", "raw", "size", "345356234698", "-p", "6"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "321.638058 GB\n");
}

#[test]
fn size_json_output() {
    let output = wirefmt(&["--format", "json", "size", "65535"]);
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(stdout(&output).trim()).expect("stdout should be JSON");
    assert_eq!(value["formatted"], "64.0 KB");
    assert_eq!(value["precision"], 1);
}

#[test]
fn slice_maps_each_id() {
    let output = wirefmt(&["--format", "pretty", "slice", "aa", "ff01"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "slice_id=aa bucket=a\nslice_id=ff01 bucket=v\n"
    );
}

#[test]
fn slice_rejects_malformed_id() {
    let output = wirefmt(&["--format", "json", "slice", "zz"]);
    assert_eq!(output.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid slice id"));
}

#[test]
fn encode_writes_raw_frame() {
    let output = wirefmt(&["--format", "raw", "encode", "--hex", "ffaaffaa"]);
    assert!(output.status.success());
    assert_eq!(output.stdout, vec![0, 0, 0, 4, 0xff, 0xaa, 0xff, 0xaa]);
}

#[test]
fn encode_enforces_max_payload() {
    let output = wirefmt(&["--format", "json", "encode", "--data", "hello", "--max-payload", "4"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn encode_then_decode_file() {
    let path = unique_temp_file("frame");
    let encoded = wirefmt(&["--format", "raw", "encode", "--data", "hello wire"]);
    assert!(encoded.status.success());
    std::fs::write(&path, &encoded.stdout).expect("frame file should be writable");

    let path_arg = path.to_string_lossy().into_owned();
    let decoded = wirefmt(&["--format", "json", "decode", "--file", &path_arg]);
    let _ = std::fs::remove_file(&path);

    assert!(decoded.status.success());
    let value: serde_json::Value =
        serde_json::from_str(stdout(&decoded).trim()).expect("stdout should be JSON");
    assert_eq!(value["empty"], false);
    assert_eq!(value["declared_length"], 10);
    assert_eq!(value["body"], "hello wire");
}

#[test]
fn decode_zero_length_is_empty_message() {
    let output = wirefmt(&["--format", "json", "decode", "--hex", "00000000"]);
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(stdout(&output).trim()).expect("stdout should be JSON");
    assert_eq!(value["empty"], true);
}

#[test]
fn decode_truncated_header_fails() {
    let output = wirefmt(&["--format", "json", "decode", "--hex", "0000"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn length_reverses_bytes() {
    let output = wirefmt(&["--format", "json", "length", "0x7fff"]);
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(stdout(&output).trim()).expect("stdout should be JSON");
    assert_eq!(value["transformed"], 4_286_513_152u64);
    assert_eq!(value["transformed_hex"], "0xff7f0000");
    assert_eq!(value["header_hex"], "00007fff");
}

#[test]
fn version_prints_name() {
    let output = wirefmt(&["version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("wirefmt "));
}
