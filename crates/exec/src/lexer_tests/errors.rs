// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Malformed input.

use crate::lexer::LexerError;
use crate::Span;

split_error_tests! {
    unterminated_single: "'" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_single_after_word: "echo 'hello" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_double: "\"" => LexerError::UnterminatedDoubleQuote { .. },
    unterminated_double_after_escape: r#""abc\"# => LexerError::UnterminatedDoubleQuote { .. },
    unterminated_double_escaped_close: r#""abc\""# => LexerError::UnterminatedDoubleQuote { .. },
    trailing_backslash: r"echo \" => LexerError::TrailingBackslash { .. },
}

#[yare::parameterized(
    single   = { "echo 'hello", Span::new(5, 11) },
    double   = { "ls \"a b", Span::new(3, 7) },
    trailing = { "echo x\\", Span::new(6, 7) },
)]
fn error_span(input: &str, expected: Span) {
    let err = crate::lexer::Lexer::tokenize(input).unwrap_err();
    assert_eq!(err.span(), expected);
}

#[test]
fn diagnostic_points_at_opening_quote() {
    let input = "grep \"needle";
    let err = crate::lexer::Lexer::tokenize(input).unwrap_err();
    let diag = err.diagnostic(input);
    assert!(diag.contains("line 1, column 6"), "diag = {diag}");
}
