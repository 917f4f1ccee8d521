// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Option parsing from configuration tables.

use crate::exec::ExecOptions;

#[test]
fn default_options_are_all_off() {
    let options = ExecOptions::default();
    assert!(!options.quiet);
    assert!(!options.capture_output);
    assert!(!options.allow_failure);
    assert_eq!(options.verbosity, 0);
    assert!(!options.simulate);
}

#[test]
fn builder_sets_each_field() {
    let options = ExecOptions::new()
        .quiet(true)
        .capture_output(true)
        .allow_failure(true)
        .verbosity(2)
        .simulate(true);
    assert_eq!(
        options,
        ExecOptions {
            quiet: true,
            capture_output: true,
            allow_failure: true,
            verbosity: 2,
            simulate: true,
        }
    );
}

#[test]
fn partial_table_fills_defaults() {
    let options: ExecOptions = toml::from_str("quiet = true\nverbosity = 1\n").unwrap();
    assert_eq!(options, ExecOptions::new().quiet(true).verbosity(1));
}

#[test]
fn empty_table_is_default() {
    let options: ExecOptions = toml::from_str("").unwrap();
    assert_eq!(options, ExecOptions::default());
}

#[test]
fn unknown_key_is_rejected() {
    let err = toml::from_str::<ExecOptions>("quite = true\n").unwrap_err();
    assert!(err.to_string().contains("quite"), "{err}");
}
