// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unquoted words and blank handling.

split_tests! {
    empty_input: "" => [],
    only_blanks: " \t \n\r\n " => [],
    single_word: "ls" => ["ls"],
    two_words: "echo hello" => ["echo", "hello"],
    collapses_blank_runs: "  a \t\t b   c  " => ["a", "b", "c"],
    newline_separates_words: "a\nb\r\nc" => ["a", "b", "c"],
    flags_and_values: "git log -n 5 --oneline" => ["git", "log", "-n", "5", "--oneline"],
    unicode_words: "grüß 日本 🦀" => ["grüß", "日本", "🦀"],

    // No operator or expansion layer: these are plain characters.
    pipe_is_literal: "a|b | c" => ["a|b", "|", "c"],
    semicolon_is_literal: "a;b" => ["a;b"],
    dollar_is_literal: "echo $HOME ${X}" => ["echo", "$HOME", "${X}"],
    hash_is_literal: "echo #not-a-comment" => ["echo", "#not-a-comment"],
    glob_is_literal: "ls *.rs" => ["ls", "*.rs"],
    redirect_is_literal: "cmd >out 2>&1" => ["cmd", ">out", "2>&1"],
}

#[test]
fn lexer_yields_words_lazily() {
    let mut lexer = crate::lexer::Lexer::new("first second");
    assert_eq!(lexer.next().unwrap().unwrap().text, "first");
    assert_eq!(lexer.next().unwrap().unwrap().text, "second");
    assert!(lexer.next().is_none());
}

#[test]
fn lexer_stops_after_error() {
    let mut lexer = crate::lexer::Lexer::new("ok 'broken more");
    assert_eq!(lexer.next().unwrap().unwrap().text, "ok");
    assert!(lexer.next().unwrap().is_err());
    assert!(lexer.next().is_none());
}
