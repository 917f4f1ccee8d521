// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stdout capture and echo, stderr forwarding.

use super::{captured, executor};
use crate::exec::ExecOptions;

// ---------------------------------------------------------------------------
// Stdout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn capture_quiet_returns_lines_and_echoes_nothing() {
    let (exec, console) = executor();
    let result = exec.run(r"printf 'a\nb\nc\n'", &captured()).await.unwrap();
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.output, "a\nb\nc\n");
    assert_eq!(result.lines().count(), 3);
    assert!(console.stdout_lines().is_empty());
}

#[tokio::test]
async fn echo_without_capture_leaves_output_empty() {
    let (exec, console) = executor();
    let result = exec.run(r"printf 'a\nb\n'", &ExecOptions::new()).await.unwrap();
    assert_eq!(result.output, "");
    assert_eq!(console.stdout_lines(), ["a", "b"]);
}

#[tokio::test]
async fn capture_and_echo_together() {
    let (exec, console) = executor();
    let options = ExecOptions::new().capture_output(true);
    let result = exec.run("echo hello", &options).await.unwrap();
    assert_eq!(result.output, "hello\n");
    assert_eq!(console.stdout_lines(), ["hello"]);
}

#[tokio::test]
async fn last_line_without_newline_is_terminated() {
    let (exec, _console) = executor();
    let result = exec.run("printf 'no-newline'", &captured()).await.unwrap();
    assert_eq!(result.output, "no-newline\n");
}

#[tokio::test]
async fn quoted_arguments_reach_the_child_intact() {
    let (exec, _console) = executor();
    let result = exec
        .run(r#"printf '%s|' "a b" 'it'\''s' "" "$HOME""#, &captured())
        .await
        .unwrap();
    assert_eq!(result.output, "a b|it's||$HOME|\n");
}

#[tokio::test]
async fn no_shell_interpretation_of_arguments() {
    let (exec, _console) = executor();
    let result = exec.run("echo a;b | c > d", &captured()).await.unwrap();
    assert_eq!(result.output, "a;b | c > d\n");
}

// ---------------------------------------------------------------------------
// Stderr
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stderr_is_forwarded_even_when_quiet() {
    let (exec, console) = executor();
    let result = exec
        .run(vec!["sh", "-c", "echo out; echo oops >&2"], &captured())
        .await
        .unwrap();
    assert_eq!(result.output, "out\n");
    assert_eq!(console.stderr_text(), "oops\n");
    assert!(console.stdout_lines().is_empty());
}

#[tokio::test]
async fn stderr_is_forwarded_on_failure() {
    let (exec, console) = executor();
    let options = ExecOptions::new().allow_failure(true);
    let result = exec
        .run(vec!["sh", "-c", "echo bad input >&2; exit 4"], &options)
        .await
        .unwrap();
    assert_eq!(result.exit_code, 4);
    assert_eq!(console.stderr_text(), "bad input\n");
}

#[tokio::test]
async fn stderr_is_never_captured() {
    let (exec, _console) = executor();
    let result = exec
        .run(vec!["sh", "-c", "echo only-err >&2"], &captured())
        .await
        .unwrap();
    assert_eq!(result.output, "");
}

// ---------------------------------------------------------------------------
// Large output
// ---------------------------------------------------------------------------

#[tokio::test]
async fn full_stderr_pipe_does_not_deadlock() {
    // Stderr is written first and far exceeds a pipe buffer; the run only
    // completes if stderr is drained while stdout is still being read.
    let (exec, console) = executor();
    let result = exec
        .run(
            vec!["sh", "-c", "seq 1 50000 >&2; seq 1 50000"],
            &captured(),
        )
        .await
        .unwrap();
    assert_eq!(result.lines().count(), 50_000);
    assert_eq!(result.lines().last(), Some("50000"));
    assert_eq!(console.stderr_text().lines().count(), 50_000);
}
