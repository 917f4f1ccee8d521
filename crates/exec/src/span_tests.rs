// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

// =============================================================================
// Span
// =============================================================================

#[test]
fn slice_extracts_spanned_text() {
    let source = "grep 'needle' file";
    assert_eq!(Span::new(5, 13).slice(source), "'needle'");
}

#[test]
fn slice_out_of_bounds_is_empty() {
    assert_eq!(Span::new(3, 40).slice("abc"), "");
}

#[test]
fn len_and_is_empty() {
    assert_eq!(Span::new(2, 7).len(), 5);
    assert!(Span::new(4, 4).is_empty());
    assert!(!Span::new(4, 5).is_empty());
}

// =============================================================================
// locate_span
// =============================================================================

#[yare::parameterized(
    first_line   = { "echo hello world", Span::new(5, 10), 1, 5, "echo hello world" },
    second_line  = { "echo hello\necho world", Span::new(11, 15), 2, 0, "echo world" },
    middle       = { "echo hello\nfoo bar baz\nqux", Span::new(15, 18), 2, 4, "foo bar baz" },
    at_newline   = { "hello\nworld", Span::new(5, 6), 1, 5, "hello" },
    after_unicode = { "日本語\nhello", Span::new(10, 15), 2, 0, "hello" },
    at_end       = { "hello world", Span::new(11, 11), 1, 11, "hello world" },
)]
fn locate(source: &str, span: Span, line: usize, col: usize, content: &str) {
    assert_eq!(locate_span(source, span), (line, col, content));
}

#[test]
fn locate_span_beyond_source_does_not_panic() {
    let (line, _col, content) = locate_span("hello", Span::new(100, 105));
    assert_eq!(line, 1);
    assert_eq!(content, "hello");
}

// =============================================================================
// context_snippet / diagnostic_context
// =============================================================================

#[test]
fn context_snippet_places_carets_under_span() {
    let snippet = context_snippet("ls 'open", Span::new(3, 8), 3);
    assert_eq!(snippet, "ls 'ope\n   ^^^^^");
}

#[test]
fn context_snippet_counts_columns_in_chars() {
    let snippet = context_snippet("é \"x", Span::new(3, 5), 5);
    let caret_line = snippet.lines().nth(1).unwrap();
    assert_eq!(caret_line, "  ^^");
}

#[test]
fn diagnostic_context_reports_line_and_column() {
    let diag = diagnostic_context("echo ok\nls \"open", Span::new(11, 16), "unterminated");
    assert!(diag.starts_with("error: unterminated\n"));
    assert!(diag.contains("--> line 2, column 4"));
    assert!(diag.contains("  2 | ls \"open"));
    assert!(diag.ends_with("|    ^^^^^"));
}
