// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the process executor.

use std::sync::Arc;

use super::*;
use crate::MemoryConsole;

mod basic;
mod builder;
mod capture;
mod concurrency;
mod errors;
mod options;
mod simulate;

/// Executor writing into a fresh in-memory console, returned alongside it.
pub(crate) fn executor() -> (ProcessExecutor, Arc<MemoryConsole>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("xrun_exec=debug")
        .with_test_writer()
        .try_init();
    let console = Arc::new(MemoryConsole::new());
    let exec = ProcessExecutor::new().console(console.clone());
    (exec, console)
}

/// Options that capture stdout without echoing it.
pub(crate) fn captured() -> ExecOptions {
    ExecOptions::new().capture_output(true).quiet(true)
}

/// Sync wrapper for async execution in parameterized tests.
pub(crate) fn run_async<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Runtime::new().unwrap().block_on(f)
}
