// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("xrun").chain(args.iter().copied()))
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn run_collects_trailing_command() {
    let cli = parse(&["run", "-q", "-c", "--", "ls", "-la", "/tmp"]).unwrap();
    let Command::Run(args) = cli.command else {
        panic!("expected run");
    };
    assert!(args.quiet);
    assert!(args.capture);
    assert_eq!(args.command, ["ls", "-la", "/tmp"]);
}

#[test]
fn run_passes_hyphen_arguments_after_program() {
    let cli = parse(&["run", "echo", "-n", "hi"]).unwrap();
    let Command::Run(args) = cli.command else {
        panic!("expected run");
    };
    assert_eq!(args.command, ["echo", "-n", "hi"]);
}

#[test]
fn run_counts_verbose_flags() {
    let cli = parse(&["run", "-vvv", "--", "true"]).unwrap();
    let Command::Run(args) = cli.command else {
        panic!("expected run");
    };
    assert_eq!(args.verbose, 3);
}

#[test]
fn run_accepts_quoted_line() {
    let cli = parse(&["run", "--line", "echo 'a b'"]).unwrap();
    let Command::Run(args) = cli.command else {
        panic!("expected run");
    };
    assert_eq!(args.line.as_deref(), Some("echo 'a b'"));
    assert!(args.command.is_empty());
}

#[yare::parameterized(
    nothing          = { &["run"] },
    line_and_command = { &["run", "--line", "true", "--", "false"] },
)]
fn run_rejects_ambiguous_input(args: &[&str]) {
    assert!(parse(args).is_err());
}

#[test]
fn config_flag_is_global() {
    let cli = parse(&["which", "sh", "--config", "/tmp/x.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
}

#[test]
fn quote_accepts_hyphen_arguments() {
    let cli = parse(&["quote", "--", "-x", "a b"]).unwrap();
    let Command::Quote(args) = cli.command else {
        panic!("expected quote");
    };
    assert_eq!(args.args, ["-x", "a b"]);
}
