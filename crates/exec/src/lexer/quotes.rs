// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single- and double-quoted segments. Both return the byte offset just
//! past the closing quote.

use super::{Lexer, LexerError};
use crate::Span;

impl Lexer<'_> {
    /// Everything up to the closing `'` is literal.
    pub(super) fn single_quoted(&mut self, text: &mut String) -> Result<usize, LexerError> {
        let open = self.pos;
        let body = &self.rest()[1..];
        match body.find('\'') {
            Some(len) => {
                text.push_str(&body[..len]);
                self.pos = open + len + 2;
                Ok(self.pos)
            }
            None => Err(LexerError::UnterminatedSingleQuote {
                span: Span::new(open, self.input.len()),
            }),
        }
    }

    /// A backslash escapes only `\`, `"`, `$`, `` ` `` and newline; before
    /// anything else it is kept.
    pub(super) fn double_quoted(&mut self, text: &mut String) -> Result<usize, LexerError> {
        let open = self.pos;
        self.pos += 1;
        while let Some(ch) = self.bump() {
            match ch {
                '"' => return Ok(self.pos),
                '\\' => match self.peek() {
                    Some(c @ ('\\' | '"' | '$' | '`')) => {
                        text.push(c);
                        self.pos += 1;
                    }
                    Some('\n') => self.pos += 1,
                    Some('\r') if self.rest().starts_with("\r\n") => self.pos += 2,
                    _ => text.push('\\'),
                },
                c => text.push(c),
            }
        }
        Err(LexerError::UnterminatedDoubleQuote {
            span: Span::new(open, self.input.len()),
        })
    }
}
