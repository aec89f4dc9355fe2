// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while reading or validating path data.

/// An error which can be returned when parsing or validating a path.
///
/// `position` is a byte offset into the input text for errors raised by
/// [`parse`](crate::parse), and the index of the offending command for errors
/// raised by [`Path::from_commands`](crate::Path::from_commands).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind} at position {position}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Where it went wrong.
    pub position: usize,
}

/// The kind of [`ParseError`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A letter that is not a path command.
    #[error("unknown command {0:?}")]
    UnknownCommand(char),
    /// A command whose argument count is not a positive multiple of its arity,
    /// or a close-path command with arguments.
    #[error("command {command:?} takes groups of {arity} arguments, found {count}")]
    InvalidArity {
        /// The command letter.
        command: char,
        /// Arguments per group.
        arity: usize,
        /// Arguments supplied.
        count: usize,
    },
    /// A numeric token that is not a number, such as a lone `-` or `.`.
    #[error("malformed number")]
    MalformedNumber,
    /// A number before the first command letter.
    #[error("argument before first command")]
    ArgumentBeforeCommand,
    /// An arc flag other than `0` or `1`.
    #[error("arc flag must be 0 or 1, found {0}")]
    InvalidFlag(f64),
}

impl ParseError {
    #[inline]
    pub(crate) fn new(kind: ErrorKind, position: usize) -> Self {
        ParseError { kind, position }
    }
}
