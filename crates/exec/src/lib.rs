// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! xrun-exec: argument normalization and single-shot process execution.
//!
//! A command is given either as an argument vector or as one shell-style
//! quoted string. [`normalize`] turns both into an [`ArgumentList`], and
//! [`ProcessExecutor::run`] resolves the program on the search path, spawns
//! it, streams its output while it runs and classifies the outcome.
//!
//! ```no_run
//! # async fn demo() -> Result<(), xrun_exec::ExecError> {
//! use xrun_exec::{ExecOptions, ProcessExecutor};
//!
//! let options = ExecOptions::new().capture_output(true).quiet(true);
//! let result = ProcessExecutor::new().run("git rev-parse HEAD", &options).await?;
//! println!("HEAD is {}", result.output.trim());
//! # Ok(())
//! # }
//! ```

pub mod console;
mod error;
pub mod exec;
pub mod lexer;
mod normalize;
mod quote;
pub mod resolve;
mod span;

pub use console::{Console, MemoryConsole, StdConsole};
pub use error::LexerError;
pub use exec::{ExecError, ExecErrorKind, ExecOptions, ExecResult, ProcessExecutor};
pub use lexer::{split_quoted_string, Lexer, Word};
pub use normalize::{normalize, ArgumentList, CommandSpec, NormalizeError};
pub use quote::{quote_arg, to_quoted_string};
pub use resolve::{PathResolver, SearchPathResolver, StaticResolver};
pub use span::{context_snippet, diagnostic_context, locate_span, Span};
