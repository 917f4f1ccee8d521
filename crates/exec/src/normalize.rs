// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Normalization of command specifications into argument lists.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::{split_quoted_string, to_quoted_string, LexerError};

/// A command as the caller wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSpec {
    /// Program followed by its arguments.
    Args(Vec<String>),
    /// One shell-style quoted string, split on normalization.
    Quoted(String),
}

impl CommandSpec {
    /// Build an argument-vector spec from anything displayable.
    ///
    /// ```
    /// use xrun_exec::CommandSpec;
    ///
    /// let spec = CommandSpec::from_args([4, 8, 15]);
    /// assert_eq!(spec, CommandSpec::Args(vec!["4".into(), "8".into(), "15".into()]));
    /// ```
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        CommandSpec::Args(args.into_iter().map(|a| a.to_string()).collect())
    }
}

impl From<&str> for CommandSpec {
    fn from(line: &str) -> Self {
        CommandSpec::Quoted(line.to_string())
    }
}

impl From<String> for CommandSpec {
    fn from(line: String) -> Self {
        CommandSpec::Quoted(line)
    }
}

impl From<&String> for CommandSpec {
    fn from(line: &String) -> Self {
        CommandSpec::Quoted(line.clone())
    }
}

impl<T: ToString> From<Vec<T>> for CommandSpec {
    fn from(args: Vec<T>) -> Self {
        CommandSpec::from_args(args)
    }
}

impl<T: ToString> From<&[T]> for CommandSpec {
    fn from(args: &[T]) -> Self {
        CommandSpec::Args(args.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for CommandSpec {
    fn from(args: [T; N]) -> Self {
        CommandSpec::from_args(args)
    }
}

impl From<ArgumentList> for CommandSpec {
    fn from(list: ArgumentList) -> Self {
        CommandSpec::Args(list.0)
    }
}

/// Reasons a command specification cannot be normalized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// Nothing to run: no words at all, or an empty program name.
    #[error("empty command: no program name given")]
    Empty,

    /// The quoted string could not be split.
    #[error(transparent)]
    Split(#[from] LexerError),
}

/// A normalized command: program name or path first, then its arguments.
///
/// Never empty, and the program name is never the empty string. Arguments
/// may be empty strings when the caller passed them explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgumentList(Vec<String>);

impl ArgumentList {
    /// Validate an already-split argument vector.
    pub fn new<I, T>(args: I) -> Result<Self, NormalizeError>
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.to_string()).collect();
        match args.first() {
            Some(program) if !program.is_empty() => Ok(Self(args)),
            _ => Err(NormalizeError::Empty),
        }
    }

    /// The program name or path (`argv[0]`).
    pub fn program(&self) -> &str {
        &self.0[0]
    }

    /// Everything after the program (`argv[1..]`).
    pub fn args(&self) -> &[String] {
        &self.0[1..]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Replace `argv[0]`, e.g. with the resolved absolute path.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.0[0] = program.into();
        self
    }

    /// Render for display; see [`to_quoted_string`](crate::to_quoted_string).
    pub fn to_quoted_string(&self) -> String {
        to_quoted_string(&self.0)
    }
}

impl fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_quoted_string())
    }
}

impl<'a> IntoIterator for &'a ArgumentList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Normalize a command specification into an [`ArgumentList`].
///
/// Argument vectors are taken element by element; a quoted string is split
/// with [`split_quoted_string`](crate::split_quoted_string).
///
/// ```
/// use xrun_exec::normalize;
///
/// let from_line = normalize("printf '%s\\n' \"a b\"").unwrap();
/// let from_vec = normalize(vec!["printf", "%s\\n", "a b"]).unwrap();
/// assert_eq!(from_line, from_vec);
/// ```
pub fn normalize(spec: impl Into<CommandSpec>) -> Result<ArgumentList, NormalizeError> {
    match spec.into() {
        CommandSpec::Args(args) => ArgumentList::new(args),
        CommandSpec::Quoted(line) => ArgumentList::new(split_quoted_string(&line)?),
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
