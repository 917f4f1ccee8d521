// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single quotes, double quotes, and word concatenation.

// =============================================================================
// Single quotes
// =============================================================================

split_tests! {
    single_quote_basic: "'hello'" => ["hello"],
    single_quote_with_spaces: "echo 'hello world'" => ["echo", "hello world"],
    single_quote_empty: "''" => [""],
    single_quote_empty_between: "a '' b" => ["a", "", "b"],
    single_quote_preserves_backslash: r"'back\slash\n'" => [r"back\slash\n"],
    single_quote_preserves_double_quote: r#"'say "hi"'"# => [r#"say "hi""#],
    single_quote_preserves_newline: "'line1\nline2'" => ["line1\nline2"],
    single_quote_unicode: "'hello 世界'" => ["hello 世界"],
}

// =============================================================================
// Double quotes
// =============================================================================

split_tests! {
    double_quote_basic: r#""hello""# => ["hello"],
    double_quote_with_spaces: r#"echo "hello world""# => ["echo", "hello world"],
    double_quote_empty: r#""""# => [""],
    double_quote_preserves_single_quote: r#""it's""# => ["it's"],
    double_quote_escaped_quote: r#""say \"hi\"""# => [r#"say "hi""#],
    double_quote_escaped_backslash: r#""a\\b""# => [r"a\b"],
    double_quote_escaped_dollar: r#""\$HOME""# => ["$HOME"],
    double_quote_escaped_backtick: r#""\`cmd\`""# => ["`cmd`"],
    double_quote_other_escape_kept: r#""a\nb""# => [r"a\nb"],
    double_quote_line_continuation: "\"ab\\\ncd\"" => ["abcd"],
    double_quote_literal_newline: "\"a\nb\"" => ["a\nb"],
}

// =============================================================================
// Concatenation of adjacent segments
// =============================================================================

split_tests! {
    word_then_single: "cmd'arg'" => ["cmdarg"],
    single_then_word: "'arg'cmd" => ["argcmd"],
    mixed_segments: r#"a"b c"'d'e"# => ["ab cde"],
    option_with_quoted_value: r#"--name="John Smith""# => ["--name=John Smith"],
    single_quote_escape_idiom: r"'it'\''s'" => ["it's"],
    empty_quotes_glue_words: r#"a""b"# => ["ab"],
}
