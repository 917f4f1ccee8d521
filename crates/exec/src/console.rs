// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Where a run's visible output goes.
//!
//! The executor never writes to the process's standard streams directly.
//! It hands diagnostic lines, echoed child stdout lines, and raw child
//! stderr bytes to a [`Console`].

use std::io::Write;

use parking_lot::Mutex;

/// Sink for everything a run makes visible.
pub trait Console: Send + Sync {
    /// A single-line diagnostic, e.g. the `$ cmd ...` echo.
    fn diagnostic(&self, line: &str);

    /// One line of child stdout, without its terminator.
    fn stdout_line(&self, line: &str);

    /// Raw bytes of child stderr, forwarded as they arrive.
    fn stderr(&self, bytes: &[u8]);
}

/// Writes to the parent's stdout and stderr, flushing after every write so
/// output from long-running children shows up live.
///
/// Diagnostics go to stdout unless [`diagnostics_on_stderr`] is set, which
/// keeps stdout free for machine-readable output.
///
/// [`diagnostics_on_stderr`]: StdConsole::diagnostics_on_stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole {
    diagnostics_on_stderr: bool,
}

impl StdConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send diagnostic lines to stderr instead of stdout.
    pub fn diagnostics_on_stderr(mut self) -> Self {
        self.diagnostics_on_stderr = true;
        self
    }

    fn write_stdout(bytes: &[u8]) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = out.write_all(bytes).and_then(|()| out.flush()) {
            tracing::debug!(error = %e, "failed to write to stdout");
        }
    }

    fn write_stderr(bytes: &[u8]) {
        let mut err = std::io::stderr().lock();
        if let Err(e) = err.write_all(bytes).and_then(|()| err.flush()) {
            tracing::debug!(error = %e, "failed to write to stderr");
        }
    }
}

impl Console for StdConsole {
    fn diagnostic(&self, line: &str) {
        let line = format!("{line}\n");
        if self.diagnostics_on_stderr {
            Self::write_stderr(line.as_bytes());
        } else {
            Self::write_stdout(line.as_bytes());
        }
    }

    fn stdout_line(&self, line: &str) {
        Self::write_stdout(format!("{line}\n").as_bytes());
    }

    fn stderr(&self, bytes: &[u8]) {
        Self::write_stderr(bytes);
    }
}

/// Records everything in memory.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    diagnostics: Mutex<Vec<String>>,
    stdout: Mutex<Vec<String>>,
    stderr: Mutex<Vec<u8>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostic lines in the order they were emitted.
    pub fn diagnostics(&self) -> Vec<String> {
        self.diagnostics.lock().clone()
    }

    /// Echoed stdout lines in the order they were emitted.
    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout.lock().clone()
    }

    /// Forwarded stderr, lossily decoded.
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr.lock()).into_owned()
    }
}

impl Console for MemoryConsole {
    fn diagnostic(&self, line: &str) {
        self.diagnostics.lock().push(line.to_string());
    }

    fn stdout_line(&self, line: &str) {
        self.stdout.lock().push(line.to_string());
    }

    fn stderr(&self, bytes: &[u8]) {
        self.stderr.lock().extend_from_slice(bytes);
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
