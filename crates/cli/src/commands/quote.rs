// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `xrun quote`

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct QuoteArgs {
    /// Arguments to render as one command line
    #[arg(value_name = "ARG", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

pub fn handle(args: QuoteArgs) -> Result<()> {
    println!("{}", xrun_exec::to_quoted_string(&args.args));
    Ok(())
}
