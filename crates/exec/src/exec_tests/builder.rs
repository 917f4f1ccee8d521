// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executor configuration: working directory, environment, resolver.

use std::path::PathBuf;

use super::{captured, executor};
use crate::StaticResolver;

#[tokio::test]
async fn cwd_applies_to_child() {
    let dir = tempfile::tempdir().unwrap();
    let (exec, _console) = executor();
    let exec = exec.cwd(dir.path());

    let result = exec.run("pwd -P", &captured()).await.unwrap();
    let expected = dir.path().canonicalize().unwrap();
    assert_eq!(result.output.trim_end(), expected.display().to_string());
}

#[tokio::test]
async fn env_is_passed_to_child() {
    let (exec, _console) = executor();
    let exec = exec
        .env("XRUN_TEST_ONE", "first value")
        .envs([("XRUN_TEST_TWO", "second")]);

    let result = exec
        .run(
            vec!["sh", "-c", "echo \"$XRUN_TEST_ONE\"; echo \"$XRUN_TEST_TWO\""],
            &captured(),
        )
        .await
        .unwrap();
    assert_eq!(result.output, "first value\nsecond\n");
}

#[tokio::test]
async fn parent_environment_is_inherited() {
    let (exec, _console) = executor();
    let result = exec.run("printenv PATH", &captured()).await.unwrap();
    assert!(!result.output.trim().is_empty());
}

#[tokio::test]
async fn closure_resolver_is_consulted() {
    let (exec, _console) = executor();
    let exec = exec.resolver(|name: &str| match name {
        "say" => which::which("echo").ok(),
        _ => None,
    });

    let result = exec.run("say hi", &captured()).await.unwrap();
    assert_eq!(result.output, "hi\n");
    assert_eq!(result.program.file_name().unwrap(), "echo");
}

#[tokio::test]
async fn static_resolver_overrides_search_path() {
    let (exec, _console) = executor();
    let echo = which::which("echo").unwrap();
    let exec = exec.resolver(StaticResolver::new().with("hello", echo.clone()));

    let result = exec.run("hello world", &captured()).await.unwrap();
    assert_eq!(result.program, echo);
    assert_eq!(result.output, "world\n");
}

#[cfg(unix)]
#[tokio::test]
async fn search_path_resolver_finds_private_tool() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let tool: PathBuf = dir.path().join("private-tool");
    std::fs::write(&tool, "#!/bin/sh\necho \"tool:$1\"\n").unwrap();
    std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

    let (exec, _console) = executor();
    let exec = exec.resolver(crate::SearchPathResolver::new().search_path(dir.path()));

    let result = exec.run("private-tool ok", &captured()).await.unwrap();
    assert_eq!(result.output, "tool:ok\n");
    assert_eq!(result.program, tool);
}

#[cfg(unix)]
#[tokio::test]
async fn relative_program_resolves_against_cwd() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let tool = dir.path().join("tool");
    std::fs::write(&tool, "#!/bin/sh\necho from-tool\n").unwrap();
    std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

    let (exec, _console) = executor();
    let exec = exec.cwd(dir.path());

    let result = exec.run("./tool", &captured()).await.unwrap();
    assert_eq!(result.output, "from-tool\n");
    assert!(result.program.is_absolute());
    assert_eq!(result.program.file_name().unwrap(), "tool");
}

#[test]
fn debug_omits_trait_objects() {
    let exec = crate::ProcessExecutor::new().cwd("/tmp").env("K", "V");
    let debug = format!("{exec:?}");
    assert!(debug.contains("ProcessExecutor"));
    assert!(debug.contains("/tmp"));
    assert!(debug.contains("\"K\""));
}
