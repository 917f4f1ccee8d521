//! `xrun split` specs

use crate::prelude::*;

#[test]
fn splits_into_one_word_per_line() {
    cli()
        .args(&["split", r#"cp "my file" 'your file' plain"#])
        .passes()
        .stdout_eq("cp\nmy file\nyour file\nplain\n");
}

#[test]
fn reads_stdin_when_no_line_given() {
    cli()
        .args(&["split"])
        .stdin("echo a\\ b\n")
        .passes()
        .stdout_eq("echo\na b\n");
}

#[test]
fn json_prints_array() {
    let run = cli().args(&["split", "--json", r#"a "" b"#]).passes();
    assert_eq!(run.stdout_json(), serde_json::json!(["a", "", "b"]));
}

#[test]
fn unterminated_quote_shows_diagnostic() {
    cli()
        .args(&["split", r#"echo "open"#])
        .exits(2)
        .stderr_has("unterminated double quote")
        .stderr_has("^");
}

#[test]
fn quote_output_splits_back() {
    let quoted = cli()
        .args(&["quote", "--", "a b", "c\"d", "e\\f", ""])
        .passes()
        .stdout();
    cli()
        .args(&["split", quoted.trim_end_matches('\n')])
        .passes()
        .stdout_eq("a b\nc\"d\ne\\f\n\n");
}
