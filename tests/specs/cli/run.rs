//! `xrun run` specs

use crate::prelude::*;

#[test]
fn runs_command_and_echoes_stdout() {
    cli().args(&["run", "--", "echo", "hello"]).passes().stdout_eq("hello\n");
}

#[test]
fn arguments_are_not_shell_interpreted() {
    cli()
        .args(&["run", "echo", "$HOME", "a;b", "*"])
        .passes()
        .stdout_eq("$HOME a;b *\n");
}

#[test]
fn quoted_line_is_split() {
    cli()
        .args(&["run", "--line", r#"printf '%s|' "a b" c"#])
        .passes()
        .stdout_eq("a b|c|\n");
}

#[test]
fn exits_with_child_code_and_reports_failure() {
    cli()
        .args(&["run", "--", "sh", "-c", "exit 3"])
        .exits(3)
        .stderr_has("command failed with exit code 3")
        .stderr_has(r#"-c "exit 3""#);
}

#[test]
fn allow_failure_exits_with_child_code_silently() {
    cli()
        .args(&["run", "-a", "--", "sh", "-c", "exit 3"])
        .exits(3)
        .stderr_eq("");
}

#[test]
fn missing_program_exits_127() {
    cli()
        .args(&["run", "--", "nonexistent_command_xyz_12345"])
        .exits(127)
        .stderr_has("nonexistent_command_xyz_12345: command not found");
}

#[test]
fn malformed_line_exits_2() {
    cli()
        .args(&["run", "--line", "echo 'open"])
        .exits(2)
        .stderr_has("unterminated single quote");
}

#[test]
fn quiet_suppresses_stdout_but_not_stderr() {
    cli()
        .args(&["run", "-q", "--", "sh", "-c", "echo out; echo err >&2"])
        .passes()
        .stdout_eq("")
        .stderr_eq("err\n");
}

#[test]
fn quiet_capture_prints_after_exit() {
    cli()
        .args(&["run", "-q", "-c", "--", "printf", "one\\ntwo\\n"])
        .passes()
        .stdout_eq("one\ntwo\n");
}

#[test]
fn verbose_echoes_resolved_command_line() {
    cli()
        .args(&["run", "-v", "--", "echo", "a b"])
        .passes()
        .stdout_has("$ /")
        .stdout_has(r#"echo "a b""#)
        .stdout_has("a b\n");
}

#[test]
fn simulate_does_not_run() {
    let project = Project::empty();
    let marker = project.path().join("marker");
    cli()
        .args(&["run", "-n", "-v", "--", "touch", marker.to_str().unwrap()])
        .passes()
        .stdout_has("(simulated)");
    assert!(!marker.exists());
}

#[test]
fn simulate_still_reports_missing_program() {
    cli()
        .args(&["run", "-n", "--", "nonexistent_command_xyz_12345"])
        .exits(127);
}

#[test]
fn json_reports_result() {
    let run = cli()
        .args(&["run", "--json", "-c", "-a", "--", "sh", "-c", "echo hi; exit 4"])
        .exits(4);
    let json = run.stdout_json();
    assert_eq!(json["exit_code"], 4);
    assert_eq!(json["output"], "hi\n");
    assert!(json["program"].as_str().unwrap().ends_with("sh"));
}

#[test]
fn json_with_verbose_echoes_to_stderr() {
    let run = cli().args(&["run", "--json", "-v", "--", "echo", "hi"]).passes();
    let json = run.stdout_json();
    assert_eq!(json["exit_code"], 0);
    run.stderr_has("$ /").stderr_has(" hi");
}

#[cfg(unix)]
#[test]
fn signal_exit_maps_to_128_plus_signal() {
    cli()
        .args(&["run", "-a", "--", "sh", "-c", "kill -TERM $$"])
        .exits(143);
}

#[cfg(unix)]
#[test]
fn search_path_override_finds_private_tool() {
    let project = Project::empty();
    project.script("greet", r#"echo "hi $1""#);
    cli()
        .env("XRUN_SEARCH_PATH", project.bin_dir())
        .args(&["run", "greet", "there"])
        .passes()
        .stdout_eq("hi there\n");
}

#[cfg(unix)]
#[test]
fn non_executable_file_is_not_resolved() {
    use std::os::unix::fs::PermissionsExt;

    let project = Project::empty();
    let path = project.file("tool", "#!/bin/sh\necho never\n");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
    project
        .xrun()
        .args(&["run", "--", "./tool"])
        .exits(127)
        .stdout_lacks("never");
}
