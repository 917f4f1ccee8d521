// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure classification.

use super::{captured, executor, run_async};
use crate::exec::{ExecError, ExecErrorKind, ExecOptions};
use crate::{NormalizeError, ProcessExecutor, StaticResolver};

// ---------------------------------------------------------------------------
// NotFound
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_program_is_not_found() {
    let (exec, console) = executor();
    let err = exec
        .run("nonexistent_command_xyz_12345 --flag", &ExecOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ExecErrorKind::NotFound);
    assert!(
        matches!(&err, ExecError::NotFound { command } if command == "nonexistent_command_xyz_12345")
    );
    assert_eq!(
        err.to_string(),
        "nonexistent_command_xyz_12345: command not found"
    );
    assert!(console.diagnostics().is_empty());
}

#[tokio::test]
async fn not_found_ignores_allow_failure() {
    let (exec, _console) = executor();
    let options = ExecOptions::new().allow_failure(true);
    let err = exec
        .run("nonexistent_command_xyz_12345", &options)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ExecErrorKind::NotFound);
}

#[tokio::test]
async fn empty_search_path_finds_nothing() {
    let (_, console) = executor();
    let exec = ProcessExecutor::new()
        .console(console)
        .resolver(crate::SearchPathResolver::new().search_path(""));
    let err = exec.run("sh", &ExecOptions::new()).await.unwrap_err();
    assert_eq!(err.kind(), ExecErrorKind::NotFound);
}

// ---------------------------------------------------------------------------
// SpawnFailure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn vanished_program_is_spawn_failure() {
    let (_, console) = executor();
    let exec = ProcessExecutor::new()
        .console(console.clone())
        .resolver(StaticResolver::new().with("ghost", "/nonexistent/dir/ghost"));
    let err = exec.run("ghost arg", &captured()).await.unwrap_err();

    assert_eq!(err.kind(), ExecErrorKind::SpawnFailure);
    match &err {
        ExecError::SpawnFailed {
            program,
            command_line,
            ..
        } => {
            assert_eq!(program.to_str(), Some("/nonexistent/dir/ghost"));
            assert_eq!(command_line, "/nonexistent/dir/ghost arg");
        }
        other => panic!("expected SpawnFailed, got: {other:?}"),
    }
    assert!(console.stdout_lines().is_empty());
    assert_eq!(console.stderr_text(), "");
}

#[cfg(unix)]
#[tokio::test]
async fn non_executable_file_is_spawn_failure() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("script");
    std::fs::write(&path, "#!/bin/sh\necho hi\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    let (_, console) = executor();
    let exec = ProcessExecutor::new()
        .console(console)
        .resolver(StaticResolver::new().with("script", &path));
    let err = exec.run("script", &captured()).await.unwrap_err();

    assert_eq!(err.kind(), ExecErrorKind::SpawnFailure);
    assert!(err.to_string().starts_with("failed to execute "), "{err}");
}

#[tokio::test]
async fn spawn_failure_ignores_allow_failure() {
    let exec = ProcessExecutor::new()
        .console(std::sync::Arc::new(crate::MemoryConsole::new()))
        .resolver(StaticResolver::new().with("ghost", "/nonexistent/dir/ghost"));
    let options = ExecOptions::new().allow_failure(true);
    let err = exec.run("ghost", &options).await.unwrap_err();
    assert_eq!(err.kind(), ExecErrorKind::SpawnFailure);
    assert_eq!(err.exit_code(), None);
}

// ---------------------------------------------------------------------------
// InvalidArgument
// ---------------------------------------------------------------------------

#[yare::parameterized(
    empty_string      = { "" },
    only_blanks       = { "  \t " },
    unterminated      = { "echo 'oops" },
    trailing_escape   = { "echo oops\\" },
    empty_program     = { "'' arg" },
)]
fn malformed_quoted_spec_is_invalid_argument(spec: &str) {
    run_async(async {
        let (exec, console) = executor();
        let options = ExecOptions::new().verbosity(2);
        let err = exec.run(spec, &options).await.unwrap_err();
        assert_eq!(err.kind(), ExecErrorKind::InvalidArgument);
        assert!(console.diagnostics().is_empty());
    });
}

#[tokio::test]
async fn empty_vec_is_invalid_argument() {
    let (exec, _console) = executor();
    let err = exec
        .run(Vec::<String>::new(), &ExecOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ExecError::InvalidArgument(NormalizeError::Empty)
    ));
}

#[tokio::test]
async fn unterminated_quote_reports_lexer_error() {
    let (exec, _console) = executor();
    let err = exec
        .run(r#"echo "open"#, &ExecOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ExecError::InvalidArgument(NormalizeError::Split(_))
    ));
    assert!(err.to_string().contains("unterminated double quote"), "{err}");
}
