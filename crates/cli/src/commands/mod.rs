// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod quote;
pub mod run;
pub mod split;
pub mod which;

use std::ffi::OsString;

use xrun_exec::SearchPathResolver;

use crate::config::Config;

/// Resolver honouring `XRUN_SEARCH_PATH`, then the config's `search_path`,
/// then `PATH`.
pub(crate) fn resolver(config: &Config) -> SearchPathResolver {
    match search_path(crate::env::search_path(), config) {
        Some(paths) => SearchPathResolver::new().search_path(paths),
        None => SearchPathResolver::new(),
    }
}

fn search_path(from_env: Option<OsString>, config: &Config) -> Option<OsString> {
    from_env.or_else(|| config.search_path.clone().map(OsString::from))
}
