// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use xrun_exec::ExecResult;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

/// Machine-readable view of a finished run.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    #[serde(flatten)]
    pub result: &'a ExecResult,
    pub duration_ms: u64,
}

impl<'a> RunReport<'a> {
    pub fn new(result: &'a ExecResult) -> Self {
        Self {
            result,
            duration_ms: result.duration.as_millis() as u64,
        }
    }
}

/// Render a report as pretty JSON.
pub fn to_json(result: &ExecResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&RunReport::new(result))?)
}

/// Print a list as a JSON array of strings.
pub fn print_json_list<T: Serialize>(items: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(items)?);
    Ok(())
}
