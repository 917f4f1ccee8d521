// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome of a completed run.

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

/// Outcome of a run that was not classified as a failure.
#[derive(Debug, Clone, Serialize)]
pub struct ExecResult {
    /// Exit code of the child; 0 for simulated runs.
    pub exit_code: i32,
    /// Captured stdout, one `\n`-terminated line per child line. Empty
    /// unless `capture_output` was set.
    pub output: String,
    /// Absolute path of the program that was (or would have been) run.
    pub program: PathBuf,
    /// Wall-clock duration, including resolution.
    #[serde(skip)]
    pub duration: Duration,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Captured output split into lines.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.output.lines()
    }
}
