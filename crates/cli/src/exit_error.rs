// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

use xrun_exec::{ExecError, ExecErrorKind};

/// Exit code when the program could not be found (as a shell reports it).
pub const NOT_FOUND: i32 = 127;
/// Exit code when the program was found but could not be started.
pub const CANNOT_EXECUTE: i32 = 126;
/// Exit code for malformed command input.
pub const USAGE: i32 = 2;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Exit with `code` without printing anything.
    pub fn silent(code: i32) -> Self {
        Self::new(code, "")
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

impl From<ExecError> for ExitError {
    fn from(err: ExecError) -> Self {
        let code = match err.kind() {
            ExecErrorKind::NotFound => NOT_FOUND,
            ExecErrorKind::SpawnFailure => CANNOT_EXECUTE,
            ExecErrorKind::InvalidArgument => USAGE,
            ExecErrorKind::NonZeroExit => process_exit_code(err.exit_code().unwrap_or(1)),
        };
        Self::new(code, err.to_string())
    }
}

/// Map a child's exit code onto a process exit status.
///
/// A child killed by signal N is reported as -N; a shell reports that as
/// 128 + N, and so do we.
pub fn process_exit_code(code: i32) -> i32 {
    if code < 0 {
        128 + code.saturating_neg()
    } else {
        code
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
