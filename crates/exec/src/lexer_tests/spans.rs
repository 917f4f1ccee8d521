// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word span accuracy.

span_tests! {
    span_single_word: "ls" => [(0, 2)],
    span_two_words: "echo hello" => [(0, 4), (5, 10)],
    span_leading_blanks: "   ls" => [(3, 5)],
    span_single_quoted: "echo 'a b'" => [(0, 4), (5, 10)],
    span_double_quoted: r#"echo "a b""# => [(0, 4), (5, 10)],
    span_concatenated: r#"x'y'"z""# => [(0, 7)],
    span_escape: r"a\ b c" => [(0, 4), (5, 6)],
    span_empty_quotes: "a '' b" => [(0, 1), (2, 4), (5, 6)],
    span_unicode: "日本 x" => [(0, 6), (7, 8)],
}

#[test]
fn span_slices_back_to_source() {
    let input = r#"cp "my file" dest"#;
    let words = crate::lexer::Lexer::tokenize(input).unwrap();
    let slices: Vec<&str> = words.iter().map(|w| w.span.slice(input)).collect();
    assert_eq!(slices, ["cp", "\"my file\"", "dest"]);
}
