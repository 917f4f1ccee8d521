// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML configuration.
//!
//! ```toml
//! search_path = "/opt/tools/bin:/usr/bin"
//!
//! [run]
//! verbosity = 1
//! allow_failure = true
//! ```
//!
//! The file is looked up as `--config`, then `$XRUN_CONFIG`, then
//! `<config dir>/xrun/config.toml`. Only the last may be absent.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use xrun_exec::ExecOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Defaults for `xrun run`; command-line flags take precedence.
    pub run: ExecOptions,
    /// Search path (in `PATH` syntax) used instead of `PATH`.
    pub search_path: Option<String>,
}

impl Config {
    /// Load from the first configured location.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::read(path);
        }
        if let Some(path) = crate::env::config_file() {
            return Self::read(&path);
        }
        match crate::env::default_config_file() {
            Some(path) if path.is_file() => Self::read(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
