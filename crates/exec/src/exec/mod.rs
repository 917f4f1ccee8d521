// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-shot process execution.
//!
//! [`ProcessExecutor`] normalizes a command, resolves its program on the
//! search path, spawns it with piped stdout/stderr, streams both while the
//! child runs, and waits for it to exit before returning.

mod drain;
mod error;
mod options;
mod result;
mod run;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

pub use error::{ExecError, ExecErrorKind};
pub use options::ExecOptions;
pub use result::ExecResult;

use crate::{CommandSpec, Console, PathResolver, SearchPathResolver, StdConsole};

/// Runs commands as child processes.
///
/// An executor holds only configuration; every [`run`](Self::run) owns its
/// child and pipes, so one executor can serve many concurrent runs.
#[derive(Clone)]
pub struct ProcessExecutor {
    resolver: Arc<dyn PathResolver>,
    console: Arc<dyn Console>,
    cwd: Option<PathBuf>,
    env: HashMap<String, String>,
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProcessExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessExecutor")
            .field("cwd", &self.cwd)
            .field("env", &self.env)
            .finish_non_exhaustive()
    }
}

impl ProcessExecutor {
    /// Executor that resolves on `PATH` and writes to the parent's streams.
    pub fn new() -> Self {
        Self {
            resolver: Arc::new(SearchPathResolver::new()),
            console: Arc::new(StdConsole::new()),
            cwd: None,
            env: HashMap::new(),
        }
    }

    /// Replace the program resolver.
    pub fn resolver(mut self, resolver: impl PathResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Replace the output sink.
    pub fn console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = console;
        self
    }

    /// Set the working directory of spawned children.
    pub fn cwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.cwd = Some(path.into());
        self
    }

    /// Add an environment variable for spawned children.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Add multiple environment variables for spawned children.
    pub fn envs(
        mut self,
        vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        for (k, v) in vars {
            self.env.insert(k.into(), v.into());
        }
        self
    }

    /// Run a command to completion.
    ///
    /// Resolution happens before anything else, so a missing program fails
    /// with [`ExecError::NotFound`] even in simulate mode. The returned
    /// future completes only after the child has exited and both of its
    /// output streams are drained. Dropping the future kills the child.
    pub async fn run(
        &self,
        spec: impl Into<CommandSpec>,
        options: &ExecOptions,
    ) -> Result<ExecResult, ExecError> {
        run::run_command(self, spec.into(), options).await
    }
}

#[cfg(test)]
#[path = "../exec_tests/mod.rs"]
mod tests;
