//! `xrun quote` specs

use crate::prelude::*;

#[test]
fn plain_arguments_are_joined() {
    cli().args(&["quote", "ls", "-la", "/tmp"]).passes().stdout_eq("ls -la /tmp\n");
}

#[test]
fn whitespace_and_quotes_are_wrapped() {
    cli()
        .args(&["quote", "--", "echo", "a b", "it's", r#"say "hi""#, ""])
        .passes()
        .stdout_eq(concat!(r#"echo "a b" "it's" "say \"hi\"" """#, "\n"));
}
