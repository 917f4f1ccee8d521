// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test macros for lexer tests.

/// Generate splitting success tests.
///
/// ```ignore
/// split_tests! {
///     two_words: "echo hello" => ["echo", "hello"],
/// }
/// ```
macro_rules! split_tests {
    ($($name:ident: $input:expr => [$($word:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let words = crate::lexer::split_quoted_string($input)
                    .expect(concat!("failed to split: ", $input));
                let expected: Vec<&str> = vec![$($word),*];
                assert_eq!(words, expected, "input: {:?}", $input);
            }
        )*
    };
}

/// Generate splitting error tests.
///
/// ```ignore
/// split_error_tests! {
///     unterminated_sq: "'" => LexerError::UnterminatedSingleQuote { .. },
/// }
/// ```
macro_rules! split_error_tests {
    ($($name:ident: $input:expr => $error:pat),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let result = crate::lexer::Lexer::tokenize($input);
                assert!(
                    matches!(result, Err($error)),
                    "expected error {:?} for input {:?}, got {:?}",
                    stringify!($error), $input, result
                );
            }
        )*
    };
}

/// Generate span accuracy tests: each word's span must match `(start, end)`.
macro_rules! span_tests {
    ($($name:ident: $input:expr => [$(($start:expr, $end:expr)),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let words = crate::lexer::Lexer::tokenize($input)
                    .expect(concat!("failed to split: ", $input));
                let actual: Vec<(usize, usize)> =
                    words.iter().map(|w| (w.span.start, w.span.end)).collect();
                let expected: Vec<(usize, usize)> = vec![$(($start, $end)),*];
                assert_eq!(actual, expected, "input: {:?}", $input);
            }
        )*
    };
}
