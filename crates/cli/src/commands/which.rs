// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `xrun which`

use anyhow::Result;
use clap::Args;
use xrun_exec::PathResolver;

use crate::config::Config;
use crate::exit_error::ExitError;

#[derive(Args)]
pub struct WhichArgs {
    /// Program names to resolve
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

/// Prints one absolute path per resolved name; exits 1 if any is missing.
pub fn handle(args: WhichArgs, config: &Config) -> Result<()> {
    let resolver = super::resolver(config);
    let mut missing = 0;
    for name in &args.names {
        match resolver.resolve(name) {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!("xrun: {name}: command not found");
                missing += 1;
            }
        }
    }
    if missing > 0 {
        return Err(ExitError::silent(1).into());
    }
    Ok(())
}
