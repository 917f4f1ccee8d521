// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `xrun split`

use anyhow::Result;
use clap::Args;

use crate::exit_error::{ExitError, USAGE};
use crate::output;

#[derive(Args)]
pub struct SplitArgs {
    /// Quoted command line; read from stdin when omitted
    #[arg(value_name = "LINE", allow_hyphen_values = true)]
    pub line: Option<String>,

    /// Print the words as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn handle(args: SplitArgs) -> Result<()> {
    let line = match args.line {
        Some(line) => line,
        None => std::io::read_to_string(std::io::stdin())?,
    };

    let words = match xrun_exec::split_quoted_string(&line) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{}", e.diagnostic(&line));
            return Err(ExitError::silent(USAGE).into());
        }
    };

    if args.json {
        output::print_json_list(&words)?;
    } else {
        for word in &words {
            println!("{word}");
        }
    }
    Ok(())
}
