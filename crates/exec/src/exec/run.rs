// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Core run logic: normalize, resolve, echo, spawn, drain, classify.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::time::Instant;

use tracing::Instrument;

use super::drain::{drain_stdout, forward_stderr};
use super::{ExecError, ExecOptions, ExecResult, ProcessExecutor};
use crate::{normalize, ArgumentList, CommandSpec};

pub(super) async fn run_command(
    exec: &ProcessExecutor,
    spec: CommandSpec,
    options: &ExecOptions,
) -> Result<ExecResult, ExecError> {
    let start = Instant::now();

    let args = normalize(spec)?;
    let program = resolve_program(exec, args.program()).ok_or_else(|| ExecError::NotFound {
        command: args.program().to_string(),
    })?;
    tracing::debug!(name = args.program(), program = %program.display(), "resolved");

    let args = args.with_program(program.to_string_lossy());
    let command_line = args.to_quoted_string();

    if options.verbosity > 0 {
        let suffix = if options.simulate { " (simulated)" } else { "" };
        exec.console.diagnostic(&format!("$ {command_line}{suffix}"));
    }

    if options.simulate {
        tracing::debug!(command = %command_line, "simulated, not spawning");
        return Ok(ExecResult {
            exit_code: 0,
            output: String::new(),
            program,
            duration: start.elapsed(),
        });
    }

    let span = tracing::info_span!(
        "exec.run",
        program = %program.display(),
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    let (exit_code, output) = spawn_and_wait(exec, &program, &args, &command_line, options)
        .instrument(span.clone())
        .await?;

    let duration = start.elapsed();
    span.record("exit_code", exit_code);
    span.record("duration_ms", duration.as_millis() as u64);

    if exit_code != 0 && !options.allow_failure {
        return Err(ExecError::NonZeroExit {
            command_line,
            exit_code,
        });
    }

    Ok(ExecResult {
        exit_code,
        output,
        program,
        duration,
    })
}

/// Resolve `name` for the child. A path-like name is taken relative to the
/// executor's working directory, where the child will run, not ours.
fn resolve_program(exec: &ProcessExecutor, name: &str) -> Option<PathBuf> {
    match &exec.cwd {
        Some(dir) if is_path_like(name) => {
            exec.resolver.resolve(&dir.join(name).to_string_lossy())
        }
        _ => exec.resolver.resolve(name),
    }
}

fn is_path_like(name: &str) -> bool {
    name.contains('/') || name.contains(std::path::MAIN_SEPARATOR)
}

/// Spawn the child, stream its output, and reap it.
///
/// Stderr is forwarded by its own task while this task drains stdout, so a
/// child that fills both pipes cannot deadlock. The child is always waited
/// on, even when draining fails.
async fn spawn_and_wait(
    exec: &ProcessExecutor,
    program: &Path,
    args: &ArgumentList,
    command_line: &str,
    options: &ExecOptions,
) -> Result<(i32, String), ExecError> {
    let spawn_failed = |source: std::io::Error| ExecError::SpawnFailed {
        program: program.to_path_buf(),
        command_line: command_line.to_string(),
        source,
    };

    let mut process = tokio::process::Command::new(program);
    process.args(args.args());
    if let Some(cwd) = &exec.cwd {
        process.current_dir(cwd);
    }
    process.envs(&exec.env);
    process.stdin(Stdio::inherit());
    process.stdout(Stdio::piped());
    process.stderr(Stdio::piped());
    process.kill_on_drop(true);

    let mut child = process.spawn().map_err(spawn_failed)?;
    tracing::debug!(pid = child.id(), "spawned");

    let stderr_task = child
        .stderr
        .take()
        .map(|pipe| tokio::spawn(forward_stderr(pipe, Arc::clone(&exec.console))));

    let drained = match child.stdout.take() {
        Some(pipe) => drain_stdout(pipe, options, exec.console.as_ref()).await,
        None => Ok(String::new()),
    };

    let status = child.wait().await;

    let forwarded = match stderr_task {
        Some(task) => task.await.unwrap_or_else(|e| Err(std::io::Error::other(e))),
        None => Ok(()),
    };

    // Pipe and wait failures after a successful spawn map to SpawnFailed too.
    let status = status.map_err(spawn_failed)?;
    let output = drained.map_err(spawn_failed)?;
    forwarded.map_err(spawn_failed)?;

    Ok((exit_code(status), output))
}

/// The child's exit code. A child killed by a signal reports the negated
/// signal number on Unix; anything else without a code reports -1.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}
