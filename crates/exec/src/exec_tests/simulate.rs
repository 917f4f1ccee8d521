// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulate mode resolves and echoes without spawning.

use std::sync::Arc;

use super::{executor, run_async};
use crate::exec::{ExecErrorKind, ExecOptions};
use crate::{MemoryConsole, ProcessExecutor, StaticResolver};

fn simulate() -> ExecOptions {
    ExecOptions::new().simulate(true)
}

#[tokio::test]
async fn simulated_run_does_not_spawn() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("marker");
    let (exec, console) = executor();

    let result = exec
        .run(
            vec!["touch".to_string(), marker.display().to_string()],
            &simulate().capture_output(true),
        )
        .await
        .unwrap();

    assert_eq!(result.exit_code, 0);
    assert_eq!(result.output, "");
    assert!(!marker.exists());
    assert!(console.stdout_lines().is_empty());
}

#[tokio::test]
async fn simulated_run_still_resolves() {
    let (exec, _console) = executor();
    let err = exec
        .run("nonexistent_command_xyz_12345", &simulate())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ExecErrorKind::NotFound);
}

#[tokio::test]
async fn simulated_run_never_checks_spawnability() {
    let console = Arc::new(MemoryConsole::new());
    let exec = ProcessExecutor::new()
        .console(console)
        .resolver(StaticResolver::new().with("ghost", "/nonexistent/ghost"));
    let result = exec.run("ghost --now", &simulate()).await.unwrap();
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.program.to_str(), Some("/nonexistent/ghost"));
}

#[tokio::test]
async fn simulated_run_ignores_would_be_failure() {
    let (exec, _console) = executor();
    let result = exec.run("false", &simulate()).await.unwrap();
    assert_eq!(result.exit_code, 0);
    assert!(result.output.is_empty());
}

#[yare::parameterized(
    silent  = { 0, 0 },
    verbose = { 1, 1 },
    debug   = { 3, 1 },
)]
fn simulated_echo_depends_on_verbosity(verbosity: u8, expected: usize) {
    run_async(async {
        let console = Arc::new(MemoryConsole::new());
        let exec = ProcessExecutor::new()
            .console(console.clone())
            .resolver(StaticResolver::new().with("deploy", "/opt/bin/deploy"));
        exec.run(
            vec!["deploy", "--env", "prod stage"],
            &simulate().verbosity(verbosity),
        )
        .await
        .unwrap();

        let diagnostics = console.diagnostics();
        assert_eq!(diagnostics.len(), expected);
        if expected > 0 {
            assert_eq!(
                diagnostics[0],
                r#"$ /opt/bin/deploy --env "prod stage" (simulated)"#
            );
        }
    });
}
