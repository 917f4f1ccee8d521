// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `xrun run`

use std::sync::Arc;

use anyhow::Result;
use clap::{ArgAction, Args};
use xrun_exec::{CommandSpec, ExecOptions, ProcessExecutor, StdConsole};

use crate::config::Config;
use crate::exit_error::{process_exit_code, ExitError};
use crate::output;

#[derive(Args)]
pub struct RunArgs {
    /// Do not echo the command's stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Capture stdout; printed after exit when quiet, included in --json
    #[arg(short, long)]
    pub capture: bool,

    /// Exit with the command's code without reporting a failure
    #[arg(short, long)]
    pub allow_failure: bool,

    /// Echo the resolved command line before running
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Resolve and echo the command, but do not run it
    #[arg(short = 'n', long, visible_alias = "dry-run")]
    pub simulate: bool,

    /// Print the result as JSON (implies --quiet)
    #[arg(long)]
    pub json: bool,

    /// The command as one shell-style quoted string
    #[arg(long, value_name = "LINE", conflicts_with = "command")]
    pub line: Option<String>,

    /// Program and arguments, passed without a shell
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        required_unless_present = "line"
    )]
    pub command: Vec<String>,
}

impl RunArgs {
    /// Flags layered over configured defaults. A flag can only switch an
    /// option on; `-v` replaces the configured verbosity.
    pub fn options(&self, defaults: &ExecOptions) -> ExecOptions {
        ExecOptions {
            quiet: self.quiet || self.json || defaults.quiet,
            capture_output: self.capture || defaults.capture_output,
            allow_failure: self.allow_failure || defaults.allow_failure,
            verbosity: if self.verbose > 0 { self.verbose } else { defaults.verbosity },
            simulate: self.simulate || defaults.simulate,
        }
    }

    pub fn into_spec(self) -> CommandSpec {
        match self.line {
            Some(line) => CommandSpec::Quoted(line),
            None => CommandSpec::Args(self.command),
        }
    }
}

pub async fn handle(args: RunArgs, config: &Config) -> Result<()> {
    let options = args.options(&config.run);
    let json = args.json;
    let mut executor = ProcessExecutor::new().resolver(super::resolver(config));
    if json {
        executor = executor.console(Arc::new(StdConsole::new().diagnostics_on_stderr()));
    }

    let result = executor.run(args.into_spec(), &options).await.map_err(ExitError::from)?;
    tracing::debug!(exit_code = result.exit_code, program = %result.program.display(), "run finished");

    if json {
        println!("{}", output::to_json(&result)?);
    } else if options.quiet && options.capture_output {
        print!("{}", result.output);
    }

    if result.exit_code != 0 {
        return Err(ExitError::silent(process_exit_code(result.exit_code)).into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
