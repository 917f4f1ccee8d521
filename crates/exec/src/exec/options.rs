// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-run options.

use serde::{Deserialize, Serialize};

/// How a single run treats the child's output and exit status.
///
/// Deserializes from a table where every key is optional:
///
/// ```toml
/// quiet = true
/// capture_output = true
/// verbosity = 1
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecOptions {
    /// Do not echo child stdout to the console.
    pub quiet: bool,
    /// Accumulate child stdout into [`ExecResult::output`](super::ExecResult::output).
    pub capture_output: bool,
    /// Return non-zero exit codes instead of failing with
    /// [`ExecError::NonZeroExit`](super::ExecError::NonZeroExit).
    pub allow_failure: bool,
    /// Above zero, the command line is echoed before running.
    pub verbosity: u8,
    /// Resolve and echo, but do not spawn.
    pub simulate: bool,
}

impl ExecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn capture_output(mut self, capture: bool) -> Self {
        self.capture_output = capture;
        self
    }

    pub fn allow_failure(mut self, allow: bool) -> Self {
        self.allow_failure = allow;
        self
    }

    pub fn verbosity(mut self, level: u8) -> Self {
        self.verbosity = level;
        self
    }

    pub fn simulate(mut self, simulate: bool) -> Self {
        self.simulate = simulate;
        self
    }
}
