// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use std::time::Duration;

use super::*;

fn result() -> ExecResult {
    ExecResult {
        exit_code: 3,
        output: "one\ntwo\n".to_string(),
        program: PathBuf::from("/usr/bin/tool"),
        duration: Duration::from_millis(1500),
    }
}

#[test]
fn json_report_flattens_result() {
    let json = to_json(&result()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["exit_code"], 3);
    assert_eq!(value["output"], "one\ntwo\n");
    assert_eq!(value["program"], "/usr/bin/tool");
    assert_eq!(value["duration_ms"], 1500);
}

#[test]
fn json_report_has_no_raw_duration() {
    let json = to_json(&result()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("duration").is_none());
}
