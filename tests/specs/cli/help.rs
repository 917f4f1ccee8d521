//! CLI help output specs

use crate::prelude::*;

#[test]
fn xrun_no_args_shows_usage() {
    cli().exits(2).stderr_has("Usage:");
}

#[test]
fn xrun_help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("quote")
        .stdout_has("split")
        .stdout_has("which");
}

#[test]
fn xrun_run_help_shows_flags() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--quiet")
        .stdout_has("--allow-failure")
        .stdout_has("--simulate")
        .stdout_has("--line");
}

#[test]
fn xrun_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}
