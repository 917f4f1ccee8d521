// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::ffi::OsString;
use std::path::PathBuf;

/// Log filter directives: XRUN_LOG > "warn"
pub fn log_filter() -> String {
    std::env::var("XRUN_LOG").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| "warn".to_string())
}

/// Explicit config file from `XRUN_CONFIG`, if set.
pub fn config_file() -> Option<PathBuf> {
    std::env::var_os("XRUN_CONFIG").filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Default config file: <config dir>/xrun/config.toml
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("xrun").join("config.toml"))
}

/// Search path replacing `PATH` for program resolution.
pub fn search_path() -> Option<OsString> {
    std::env::var_os("XRUN_SEARCH_PATH")
}

/// `NO_COLOR=1` disables color.
pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

/// `COLOR=1` forces color.
pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}
