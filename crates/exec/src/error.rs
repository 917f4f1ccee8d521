// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Split failures.

use thiserror::Error;

use crate::{context_snippet, diagnostic_context, Span};

/// Why a quoted command line could not be split into words.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// A `'` that is never closed. Spans from the quote to the end of input.
    #[error("unterminated single quote at position {}", span.start)]
    UnterminatedSingleQuote { span: Span },

    /// A `"` that is never closed. Spans from the quote to the end of input.
    #[error("unterminated double quote at position {}", span.start)]
    UnterminatedDoubleQuote { span: Span },

    /// A `\` with nothing after it to escape.
    #[error("trailing backslash at position {}", span.start)]
    TrailingBackslash { span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnterminatedSingleQuote { span }
            | Self::UnterminatedDoubleQuote { span }
            | Self::TrailingBackslash { span } => *span,
        }
    }

    /// One-line excerpt of `input` around the error, with carets.
    pub fn context(&self, input: &str, context_chars: usize) -> String {
        context_snippet(input, self.span(), context_chars)
    }

    /// Full diagnostic with line and column, as `xrun split` prints it.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span(), &self.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
