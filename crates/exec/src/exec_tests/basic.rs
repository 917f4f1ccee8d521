// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exit codes, echo, and the default result shape.

use super::{captured, executor, run_async};
use crate::exec::{ExecError, ExecOptions};

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn successful_command_returns_zero() {
    let (exec, _console) = executor();
    let result = exec.run("true", &ExecOptions::new()).await.unwrap();
    assert_eq!(result.exit_code, 0);
    assert!(result.success());
    assert_eq!(result.output, "");
}

#[yare::parameterized(
    one   = { "exit 1", 1 },
    two   = { "exit 2", 2 },
    high  = { "exit 113", 113 },
)]
fn non_zero_exit_with_allow_failure(script: &str, code: i32) {
    run_async(async {
        let (exec, _console) = executor();
        let options = ExecOptions::new().allow_failure(true);
        let result = exec.run(vec!["sh", "-c", script], &options).await.unwrap();
        assert_eq!(result.exit_code, code);
        assert!(!result.success());
        assert_eq!(result.output, "");
    });
}

#[tokio::test]
async fn non_zero_exit_without_allow_failure_is_an_error() {
    let (exec, _console) = executor();
    let err = exec
        .run(vec!["sh", "-c", "exit 2"], &ExecOptions::new())
        .await
        .unwrap_err();
    match &err {
        ExecError::NonZeroExit {
            command_line,
            exit_code,
        } => {
            assert_eq!(*exit_code, 2);
            assert!(command_line.ends_with(r#"sh -c "exit 2""#), "command_line = {command_line}");
            assert!(command_line.starts_with('/'), "command_line = {command_line}");
        }
        other => panic!("expected NonZeroExit, got: {other:?}"),
    }
    assert!(err.to_string().contains(r#"-c "exit 2""#));
    assert_eq!(err.exit_code(), Some(2));
}

#[tokio::test]
async fn allow_failure_with_capture_returns_code_and_output() {
    let (exec, _console) = executor();
    let options = captured().allow_failure(true);
    let result = exec
        .run(vec!["sh", "-c", "echo partial; exit 3"], &options)
        .await
        .unwrap();
    assert_eq!(result.exit_code, 3);
    assert_eq!(result.output, "partial\n");
}

#[cfg(unix)]
#[tokio::test]
async fn killed_by_signal_reports_negated_signal() {
    let (exec, _console) = executor();
    let options = ExecOptions::new().allow_failure(true);
    let result = exec
        .run(vec!["sh", "-c", "kill -TERM $$"], &options)
        .await
        .unwrap();
    assert_eq!(result.exit_code, -15);
}

// ---------------------------------------------------------------------------
// Program resolution
// ---------------------------------------------------------------------------

#[tokio::test]
async fn program_is_resolved_to_absolute_path() {
    let (exec, _console) = executor();
    let result = exec.run("true", &ExecOptions::new()).await.unwrap();
    assert!(result.program.is_absolute());
    assert_eq!(result.program.file_name().unwrap(), "true");
}

#[tokio::test]
async fn duration_is_recorded() {
    let (exec, _console) = executor();
    let result = exec.run("sleep 0.05", &ExecOptions::new()).await.unwrap();
    assert!(result.duration.as_millis() >= 50, "duration = {:?}", result.duration);
}

// ---------------------------------------------------------------------------
// Verbose echo
// ---------------------------------------------------------------------------

#[tokio::test]
async fn verbose_echoes_resolved_command_line() {
    let (exec, console) = executor();
    let options = ExecOptions::new().verbosity(1);
    exec.run(vec!["echo", "two words"], &options).await.unwrap();

    let diagnostics = console.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    let line = &diagnostics[0];
    assert!(line.starts_with("$ /"), "line = {line}");
    assert!(line.ends_with(r#"echo "two words""#), "line = {line}");
}

#[tokio::test]
async fn zero_verbosity_echoes_nothing() {
    let (exec, console) = executor();
    exec.run("true", &ExecOptions::new()).await.unwrap();
    assert!(console.diagnostics().is_empty());
}
