// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Draining child output pipes.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};

use super::ExecOptions;
use crate::Console;

const STDERR_CHUNK: usize = 8 * 1024;

/// Read child stdout line by line until EOF.
///
/// Each line is echoed unless `quiet`, and appended to the returned buffer
/// (with a `\n` terminator) when `capture_output` is set. Invalid UTF-8 is
/// replaced rather than rejected.
pub(super) async fn drain_stdout<R>(
    pipe: R,
    options: &ExecOptions,
    console: &dyn Console,
) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(pipe);
    let mut buf = Vec::new();
    let mut captured = String::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        if options.capture_output {
            captured.push_str(&line);
            captured.push('\n');
        }
        if !options.quiet {
            console.stdout_line(&line);
        }
    }

    Ok(captured)
}

/// Forward child stderr to the console verbatim until EOF.
pub(super) async fn forward_stderr<R>(mut pipe: R, console: Arc<dyn Console>) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; STDERR_CHUNK];
    loop {
        let n = pipe.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        console.stderr(&buf[..n]);
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryConsole;

    fn run_async<F: std::future::Future>(f: F) -> F::Output {
        tokio::runtime::Runtime::new().unwrap().block_on(f)
    }

    #[yare::parameterized(
        lf          = { b"a\nb\n", "a\nb\n" },
        crlf        = { b"a\r\nb\r\n", "a\nb\n" },
        no_final_lf = { b"a\nb", "a\nb\n" },
        blank_lines = { b"\n\nx\n", "\n\nx\n" },
        empty       = { b"", "" },
        invalid     = { b"o\xffk\n", "o\u{fffd}k\n" },
    )]
    fn capture_normalizes_lines(input: &[u8], expected: &str) {
        let console = MemoryConsole::new();
        let options = ExecOptions::new().capture_output(true).quiet(true);
        let captured = run_async(drain_stdout(input, &options, &console)).unwrap();
        assert_eq!(captured, expected);
        assert!(console.stdout_lines().is_empty());
    }

    #[test]
    fn echo_without_capture() {
        let console = MemoryConsole::new();
        let captured = run_async(drain_stdout(&b"one\ntwo\n"[..], &ExecOptions::new(), &console)).unwrap();
        assert_eq!(captured, "");
        assert_eq!(console.stdout_lines(), ["one", "two"]);
    }

    #[test]
    fn quiet_without_capture_still_drains() {
        let console = MemoryConsole::new();
        let input = "x\n".repeat(10_000);
        let options = ExecOptions::new().quiet(true);
        let captured = run_async(drain_stdout(input.as_bytes(), &options, &console)).unwrap();
        assert_eq!(captured, "");
        assert!(console.stdout_lines().is_empty());
    }

    #[test]
    fn stderr_is_forwarded_verbatim() {
        let console = Arc::new(MemoryConsole::new());
        let input = "partial line without newline\r\nnext".repeat(1000);
        run_async(forward_stderr(input.as_bytes(), console.clone())).unwrap();
        assert_eq!(console.stderr_text(), input);
    }

    #[test]
    fn trims_only_one_terminator() {
        assert_eq!(trim_line_ending(b"a\r\n"), b"a");
        assert_eq!(trim_line_ending(b"a\n\n"), b"a\n");
        assert_eq!(trim_line_ending(b"a"), b"a");
    }
}
