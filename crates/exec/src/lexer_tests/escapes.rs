// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unquoted backslash escapes and line continuations.

split_tests! {
    escaped_space_joins: r"my\ file" => ["my file"],
    escaped_quote_is_literal: r#"say\"hi\""# => [r#"say"hi""#],
    escaped_single_quote: r"it\'s" => ["it's"],
    escaped_backslash: r"a\\b" => [r"a\b"],
    escaped_letter: r"\n" => ["n"],
    line_continuation_between_words: "echo hello \\\nworld" => ["echo", "hello", "world"],
    line_continuation_inside_word: "ab\\\ncd" => ["abcd"],
    crlf_line_continuation: "ab\\\r\ncd" => ["abcd"],
    leading_line_continuation: "\\\necho" => ["echo"],
    line_continuation_in_double_quotes: "\"a\\\nb\"" => ["ab"],
    crlf_line_continuation_in_double_quotes: "\"a\\\r\nb\"" => ["ab"],
    lone_cr_after_backslash_in_double_quotes: "\"a\\\rb\"" => ["a\\\rb"],
}
