// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte spans into a quoted command line, and caret rendering for errors.

use std::fmt::Write;

/// Half-open byte range `start..end` into the text being split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The spanned text, or `""` when the span does not fit `source`.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Up to `context_chars` characters either side of `span.start`, with a
/// caret line underneath:
///
/// ```text
/// grep 'unclosed
///      ^^^^^^^^^
/// ```
pub fn context_snippet(input: &str, span: Span, context_chars: usize) -> String {
    let anchor = clamp_to_boundary(input, span.start);
    let (head, tail) = input.split_at(anchor);

    let lead: usize = head.chars().rev().take(context_chars).map(char::len_utf8).sum();
    let trail: usize = tail.chars().take(context_chars + 1).map(char::len_utf8).sum();

    let snippet = &input[anchor - lead..anchor + trail];
    let indent = head[anchor - lead..].chars().count();
    format!("{snippet}\n{}{}", " ".repeat(indent), "^".repeat(span.len().max(1)))
}

/// Returns `(line, column, line_text)` for the start of `span`.
///
/// Lines count from 1, columns from 0 in characters. A span past the end of
/// `source` is clamped to it.
pub fn locate_span(source: &str, span: Span) -> (usize, usize, &str) {
    let offset = clamp_to_boundary(source, span.start);
    let before = &source[..offset];

    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[offset..].find('\n').map_or(source.len(), |i| offset + i);
    let line = before.matches('\n').count() + 1;
    let column = source[line_start..offset].chars().count();

    (line, column, &source[line_start..line_end])
}

/// Multi-line diagnostic in the style of a compiler error:
///
/// ```text
/// error: unterminated double quote at position 5
///   --> line 1, column 6
///    |
///   1 | echo "hello
///    |      ^^^^^^
/// ```
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let (line, column, text) = locate_span(source, span);

    let mut out = String::new();
    let _ = writeln!(out, "error: {message}");
    let _ = writeln!(out, "  --> line {line}, column {}", column + 1);
    let _ = writeln!(out, "   |");
    let _ = writeln!(out, "{line:>3} | {text}");
    let _ = write!(out, "   | {}{}", " ".repeat(column), "^".repeat(span.len().max(1)));
    out
}

/// Largest char boundary at or before `pos`.
fn clamp_to_boundary(input: &str, pos: usize) -> usize {
    (0..=pos.min(input.len())).rev().find(|&i| input.is_char_boundary(i)).unwrap_or(0)
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
