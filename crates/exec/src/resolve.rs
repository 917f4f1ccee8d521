// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executable resolution.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

/// Maps a program name to the absolute path of an executable.
pub trait PathResolver: Send + Sync {
    /// Returns `None` when no executable matches `name`.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

impl<F> PathResolver for F
where
    F: Fn(&str) -> Option<PathBuf> + Send + Sync,
{
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self(name)
    }
}

/// Resolves names against a search path, like a shell does.
///
/// Bare names are looked up in each search path directory; names containing
/// a path separator are taken relative to the base directory. Both default
/// to the current process's `PATH` and working directory.
#[derive(Debug, Clone, Default)]
pub struct SearchPathResolver {
    search_path: Option<OsString>,
    cwd: Option<PathBuf>,
}

impl SearchPathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `paths` (in `PATH` syntax) instead of the `PATH` variable.
    pub fn search_path(mut self, paths: impl Into<OsString>) -> Self {
        self.search_path = Some(paths.into());
        self
    }

    /// Resolve relative names against `dir` instead of the current directory.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

impl PathResolver for SearchPathResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        let cwd = match &self.cwd {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().ok()?,
        };
        let paths = self
            .search_path
            .clone()
            .or_else(|| std::env::var_os("PATH"));

        match which::which_in(name, paths, &cwd) {
            Ok(path) if path.is_absolute() => Some(path),
            Ok(path) => std::path::absolute(path).ok(),
            Err(e) => {
                tracing::debug!(name, error = %e, "executable not found on search path");
                None
            }
        }
    }
}

/// A fixed name → path table.
///
/// Useful for pinning tools to known locations and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    entries: HashMap<String, PathBuf>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for `name`.
    pub fn with(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.entries.insert(name.into(), path.into());
        self
    }
}

impl PathResolver for StaticResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.entries.get(name).cloned()
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
