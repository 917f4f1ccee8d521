// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types.

use std::path::PathBuf;

use crate::NormalizeError;

/// Errors that can occur while running a command.
///
/// `NotFound` and `InvalidArgument` mean no process ran. `NonZeroExit`
/// means it ran and failed. `SpawnFailed` usually means it never started;
/// see its variant docs for the exception.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The program name did not resolve to an executable.
    #[error("{command}: command not found")]
    NotFound { command: String },

    /// The OS refused to start the process.
    ///
    /// Also reported when the process started but reading its stdout or
    /// stderr pipe failed, or waiting for it failed.
    #[error("failed to execute {command_line}: {source}")]
    SpawnFailed {
        program: PathBuf,
        command_line: String,
        source: std::io::Error,
    },

    /// The process exited non-zero and failure was not allowed.
    #[error("command failed with exit code {exit_code}: {command_line}")]
    NonZeroExit { command_line: String, exit_code: i32 },

    /// The command specification could not be normalized.
    #[error("invalid command: {0}")]
    InvalidArgument(#[from] NormalizeError),
}

/// Payload-free discriminant of [`ExecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecErrorKind {
    NotFound,
    SpawnFailure,
    NonZeroExit,
    InvalidArgument,
}

impl ExecError {
    pub fn kind(&self) -> ExecErrorKind {
        match self {
            ExecError::NotFound { .. } => ExecErrorKind::NotFound,
            ExecError::SpawnFailed { .. } => ExecErrorKind::SpawnFailure,
            ExecError::NonZeroExit { .. } => ExecErrorKind::NonZeroExit,
            ExecError::InvalidArgument(_) => ExecErrorKind::InvalidArgument,
        }
    }

    /// The child's exit code, for `NonZeroExit`.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecError::NonZeroExit { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}
