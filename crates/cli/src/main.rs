// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! xrun: run a command without a shell.

mod color;
mod commands;
mod config;
mod env;
mod exit_error;
mod logging;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{quote, run, split, which};
use crate::exit_error::ExitError;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("XRUN_BUILD_HASH"), ")");

#[derive(Parser)]
#[command(
    name = "xrun",
    version = VERSION,
    about = "Run a command without a shell: resolve, echo, stream and classify",
    styles = color::styles(),
    arg_required_else_help = true,
)]
struct Cli {
    /// Configuration file (default: $XRUN_CONFIG, then <config dir>/xrun/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a command and exit with its exit code
    Run(run::RunArgs),
    /// Render arguments as one quoted command line
    Quote(quote::QuoteArgs),
    /// Split a quoted command line into arguments, one per line
    Split(split::SplitArgs),
    /// Show the absolute path a program name resolves to
    Which(which::WhichArgs),
}

#[tokio::main]
async fn main() {
    logging::init(&env::log_filter());

    if let Err(e) = dispatch(Cli::parse()).await {
        if let Some(exit) = e.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("xrun: {}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("xrun: {e:#}");
        std::process::exit(1);
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run(args) => {
            let config = config::Config::load(cli.config.as_deref())?;
            run::handle(args, &config).await
        }
        Command::Quote(args) => quote::handle(args),
        Command::Split(args) => split::handle(args),
        Command::Which(args) => {
            let config = config::Config::load(cli.config.as_deref())?;
            which::handle(args, &config)
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
