//! Shared helpers for specs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;
use std::sync::OnceLock;

/// Path to the `xrun` binary, building it once if this run has not.
///
/// Specs live in the root package, so cargo does not export
/// `CARGO_BIN_EXE_xrun`. The binary sits next to `deps/`, which holds this
/// test executable.
fn xrun_bin() -> &'static Path {
    static BIN: OnceLock<PathBuf> = OnceLock::new();
    BIN.get_or_init(|| {
        let exe = std::env::current_exe().expect("spec executable path");
        let target_dir = exe
            .parent()
            .and_then(Path::parent)
            .expect("spec executable lives under target/<profile>/deps");
        let path = target_dir.join(format!("xrun{}", std::env::consts::EXE_SUFFIX));
        if !path.exists() {
            let status = std::process::Command::new(env!("CARGO"))
                .args(["build", "--quiet", "-p", "xrun", "--bin", "xrun"])
                .status()
                .expect("cargo build");
            assert!(status.success(), "failed to build xrun");
        }
        path
    })
}

/// An `xrun` invocation isolated from the user's environment.
pub fn cli() -> Cli {
    let mut cmd = assert_cmd::Command::new(xrun_bin());
    cmd.env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", "/nonexistent/xrun-specs")
        .env_remove("COLOR")
        .env_remove("XRUN_CONFIG")
        .env_remove("XRUN_SEARCH_PATH")
        .env_remove("XRUN_LOG");
    Cli { cmd }
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input);
        self
    }

    /// Expect exit code 0.
    pub fn passes(self) -> Run {
        self.exits(0)
    }

    /// Expect a non-zero exit code.
    pub fn fails(mut self) -> Run {
        let output = self.cmd.assert().failure().get_output().clone();
        Run { output }
    }

    /// Expect a specific exit code.
    pub fn exits(mut self, code: i32) -> Run {
        let output = self.cmd.assert().code(code).get_output().clone();
        Run { output }
    }
}

/// The finished invocation.
pub struct Run {
    output: Output,
}

impl Run {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout lacks {needle:?}:\n{stdout}");
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(!stdout.contains(needle), "stdout has {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr lacks {needle:?}:\n{stderr}");
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stderr_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stderr(), expected);
        self
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout is JSON")
    }
}

/// A scratch directory for config files and fixture scripts.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    /// Write an executable shell script under `bin/`.
    #[cfg(unix)]
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.file(&format!("bin/{name}"), &format!("#!/bin/sh\n{body}\n"));
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod");
        path
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    /// An invocation running inside the project directory.
    pub fn xrun(&self) -> Cli {
        cli().current_dir(self.path())
    }
}
