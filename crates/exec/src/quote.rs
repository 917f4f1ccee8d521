// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering argument vectors as a single display string.
//!
//! The rendering is meant for logging the command about to run and for
//! feeding back into [`split_quoted_string`](crate::split_quoted_string).
//! It is not shell-safe: `$`, `` ` `` and friends are left untouched.

use std::borrow::Cow;

/// Render one argument.
///
/// Backslashes and double quotes are escaped with a backslash. The result is
/// wrapped in double quotes when the argument is empty or contains
/// whitespace, a single quote, or a double quote.
pub fn quote_arg(arg: &str) -> Cow<'_, str> {
    let needs_escape = arg.contains(['\\', '"']);
    let needs_wrap = arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"');

    if !needs_escape && !needs_wrap {
        return Cow::Borrowed(arg);
    }

    let mut out = String::with_capacity(arg.len() + 2);
    if needs_wrap {
        out.push('"');
    }
    for ch in arg.chars() {
        if matches!(ch, '\\' | '"') {
            out.push('\\');
        }
        out.push(ch);
    }
    if needs_wrap {
        out.push('"');
    }
    Cow::Owned(out)
}

/// Render an argument vector as one space-separated string.
///
/// ```
/// use xrun_exec::to_quoted_string;
///
/// let line = to_quoted_string(["grep", "-e", "two words", r#"say "hi""#]);
/// assert_eq!(line, r#"grep -e "two words" "say \"hi\"""#);
/// ```
pub fn to_quoted_string<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (i, arg) in args.into_iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&quote_arg(arg.as_ref()));
    }
    line
}

#[cfg(test)]
#[path = "quote_tests.rs"]
mod tests;
