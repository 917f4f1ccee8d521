//! Configuration file specs

use crate::prelude::*;

#[test]
fn config_defaults_apply_to_run() {
    let project = Project::empty();
    let config = project.file("xrun.toml", "[run]\nverbosity = 1\n");
    cli()
        .args(&["run", "--config", config.to_str().unwrap(), "--", "true"])
        .passes()
        .stdout_has("$ /");
}

#[test]
fn config_from_environment() {
    let project = Project::empty();
    let config = project.file("xrun.toml", "[run]\nallow_failure = true\n");
    cli()
        .env("XRUN_CONFIG", &config)
        .args(&["run", "--", "false"])
        .exits(1)
        .stderr_eq("");
}

#[cfg(target_os = "linux")]
#[test]
fn default_location_under_config_dir() {
    let project = Project::empty();
    project.file("xrun/config.toml", "[run]\nsimulate = true\nverbosity = 1\n");
    cli()
        .env("XDG_CONFIG_HOME", project.path())
        .args(&["run", "--", "false"])
        .passes()
        .stdout_has("(simulated)");
}

#[cfg(unix)]
#[test]
fn config_search_path_is_used() {
    let project = Project::empty();
    project.script("cfg-tool", "echo from-config");
    let config = project.file(
        "xrun.toml",
        &format!("search_path = {:?}\n", project.bin_dir().display().to_string()),
    );
    cli()
        .args(&["run", "--config", config.to_str().unwrap(), "--", "cfg-tool"])
        .passes()
        .stdout_eq("from-config\n");
}

#[test]
fn missing_explicit_config_fails() {
    cli()
        .args(&["run", "--config", "/nonexistent/xrun.toml", "--", "true"])
        .exits(1)
        .stderr_has("cannot read config");
}

#[test]
fn invalid_config_fails() {
    let project = Project::empty();
    let config = project.file("xrun.toml", "[run]\nloud = true\n");
    cli()
        .args(&["run", "--config", config.to_str().unwrap(), "--", "true"])
        .exits(1)
        .stderr_has("invalid config");
}
