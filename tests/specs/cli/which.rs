//! `xrun which` specs

use crate::prelude::*;

#[test]
fn resolves_to_absolute_path() {
    let run = cli().args(&["which", "sh"]).passes();
    let stdout = run.stdout();
    assert!(stdout.starts_with('/'), "{stdout}");
    assert!(stdout.trim_end().ends_with("/sh"), "{stdout}");
}

#[test]
fn missing_name_fails() {
    cli()
        .args(&["which", "sh", "nonexistent_command_xyz_12345"])
        .exits(1)
        .stdout_has("/sh")
        .stderr_has("nonexistent_command_xyz_12345: command not found");
}

#[cfg(unix)]
#[test]
fn honours_search_path_override() {
    let project = Project::empty();
    let tool = project.script("only-here", "true");
    cli()
        .env("XRUN_SEARCH_PATH", project.bin_dir())
        .args(&["which", "only-here"])
        .passes()
        .stdout_eq(&format!("{}\n", tool.display()));
}
