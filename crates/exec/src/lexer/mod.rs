// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! POSIX-style word splitting for quoted command lines.
//!
//! Only quoting and escaping are interpreted: there is no variable or
//! command expansion, and shell operators (`|`, `;`, `&`, `#`, ...) are
//! ordinary word characters.

mod quotes;

use crate::Span;

pub use crate::error::LexerError;

/// One word of a split command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The word with quotes and escapes removed.
    pub text: String,
    /// From the first to the last source character of the word, quotes
    /// included.
    pub span: Span,
}

/// Cursor over a command line, yielding one [`Word`] at a time.
///
/// Iteration stops after the first error.
pub struct Lexer<'a> {
    input: &'a str,
    /// Byte offset of the next unread character; always a char boundary.
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Split the entire input into words.
    pub fn tokenize(input: &str) -> Result<Vec<Word>, LexerError> {
        Lexer::new(input).collect()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume a backslash-newline (LF or CRLF) pair, if one is next.
    fn eat_continuation(&mut self) -> bool {
        let rest = self.rest();
        let len = if rest.starts_with("\\\n") {
            2
        } else if rest.starts_with("\\\r\n") {
            3
        } else {
            return false;
        };
        self.pos += len;
        true
    }

    fn skip_blanks(&mut self) {
        loop {
            if self.peek().is_some_and(is_blank) {
                self.pos += 1;
            } else if !self.eat_continuation() {
                return;
            }
        }
    }

    /// Quoted and unquoted segments that touch form one word, so
    /// `--name="a b"'c'` is the single word `--name=a bc`.
    fn word(&mut self) -> Result<Option<Word>, LexerError> {
        self.skip_blanks();
        let start = self.pos;
        if start == self.input.len() {
            return Ok(None);
        }

        let mut text = String::new();
        let mut end = start;
        while let Some(ch) = self.peek() {
            end = match ch {
                c if is_blank(c) => break,
                '\'' => self.single_quoted(&mut text)?,
                '"' => self.double_quoted(&mut text)?,
                '\\' => self.escaped(&mut text)?,
                c => {
                    text.push(c);
                    self.pos += c.len_utf8();
                    self.pos
                }
            };
        }

        Ok(Some(Word {
            text,
            span: Span::new(start, end),
        }))
    }

    /// Unquoted backslash: the next character is literal. A continuation
    /// contributes nothing to the word.
    fn escaped(&mut self, text: &mut String) -> Result<usize, LexerError> {
        let at = self.pos;
        if self.eat_continuation() {
            return Ok(at + 1);
        }
        self.pos += 1;
        match self.bump() {
            Some(ch) => {
                text.push(ch);
                Ok(self.pos)
            }
            None => Err(LexerError::TrailingBackslash {
                span: Span::new(at, at + 1),
            }),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Word, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.word() {
            Ok(word) => word.map(Ok),
            Err(e) => {
                self.pos = self.input.len();
                Some(Err(e))
            }
        }
    }
}

/// Word separators. Everything else, operators included, is word content.
fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Split a shell-style quoted string into its words.
///
/// This is the inverse of [`to_quoted_string`](crate::to_quoted_string):
///
/// ```
/// use xrun_exec::split_quoted_string;
///
/// let words = split_quoted_string(r#"cp "my file.txt" 'it'\''s here'"#).unwrap();
/// assert_eq!(words, ["cp", "my file.txt", "it's here"]);
/// ```
pub fn split_quoted_string(input: &str) -> Result<Vec<String>, LexerError> {
    Lexer::new(input).map(|word| word.map(|w| w.text)).collect()
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;
