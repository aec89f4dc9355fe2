// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This module handles converting path data text into a [`Path`].
//!
//! The text form is written by the `Display` implementations in the parent
//! module.

use alloc::vec::Vec;
use core::str::FromStr;

use crate::path::{Args, Command, CommandKind, ErrorKind, ParseError, Path};

/// Try to parse the input as path data.
///
/// The grammar is deliberately loose: any character that is not a letter,
/// digit, `.` or `-` separates numbers, and `-` always starts a new
/// number. Empty input is an empty path.
///
/// # Errors
///
/// Fails on the first problem, with `position` giving its byte offset:
///
/// - [`ErrorKind::UnknownCommand`] for a letter that is not a command,
/// - [`ErrorKind::MalformedNumber`] for a token such as `-` or `1.2.3`,
/// - [`ErrorKind::ArgumentBeforeCommand`] for a number before any command,
/// - [`ErrorKind::InvalidArity`] and [`ErrorKind::InvalidFlag`] at the letter
///   of a command whose arguments do not fit it.
///
/// ```
/// use pathdata::{parse, ErrorKind};
///
/// let path = parse("M 10,10 l 10-10").unwrap();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path[1].args.as_slice(), &[10.0, -10.0]);
///
/// let err = parse("M 1").unwrap_err();
/// assert!(matches!(err.kind, ErrorKind::InvalidArity { .. }));
/// ```
pub fn parse(text: &str) -> Result<Path, ParseError> {
    let mut parser = Parser::new(text);
    for (pos, ch) in text.char_indices() {
        parser.feed(pos, ch)?;
    }
    match parser.finish() {
        Ok(path) => {
            log::debug!("parsed {} commands from {} bytes", path.len(), text.len());
            Ok(path)
        }
        Err(err) => {
            log::debug!("rejected path data: {err}");
            Err(err)
        }
    }
}

impl FromStr for Path {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Path, ParseError> {
        parse(s)
    }
}

/// A command whose arguments are still being read.
struct Pending {
    kind: CommandKind,
    relative: bool,
    /// Byte offset of the command letter.
    position: usize,
    args: Args,
}

/// An open numeric token.
struct Token {
    start: usize,
    seen_dot: bool,
}

struct Parser<'a> {
    text: &'a str,
    /// Commands read so far, with the byte offset of each letter.
    commands: Vec<(Command, usize)>,
    pending: Option<Pending>,
    token: Option<Token>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Parser {
            text,
            commands: Vec::new(),
            pending: None,
            token: None,
        }
    }

    fn feed(&mut self, pos: usize, ch: char) -> Result<(), ParseError> {
        match ch {
            '0'..='9' => {
                if self.token.is_none() {
                    self.token = Some(Token {
                        start: pos,
                        seen_dot: false,
                    });
                }
            }
            '.' => match &mut self.token {
                Some(token) if token.seen_dot => {
                    return Err(ParseError::new(ErrorKind::MalformedNumber, pos));
                }
                Some(token) => token.seen_dot = true,
                None => {
                    self.token = Some(Token {
                        start: pos,
                        seen_dot: true,
                    });
                }
            },
            '-' => {
                self.close_token(pos)?;
                self.token = Some(Token {
                    start: pos,
                    seen_dot: false,
                });
            }
            _ if ch.is_alphabetic() => {
                let Some((kind, relative)) = CommandKind::from_letter(ch) else {
                    return Err(ParseError::new(ErrorKind::UnknownCommand(ch), pos));
                };
                self.close_token(pos)?;
                self.flush();
                self.pending = Some(Pending {
                    kind,
                    relative,
                    position: pos,
                    args: Args::new(),
                });
            }
            _ => self.close_token(pos)?,
        }
        Ok(())
    }

    /// Convert the open token, which ends at `end`, into an argument.
    fn close_token(&mut self, end: usize) -> Result<(), ParseError> {
        let Some(token) = self.token.take() else {
            return Ok(());
        };
        let value: f64 = self.text[token.start..end]
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or(ParseError::new(ErrorKind::MalformedNumber, token.start))?;
        match &mut self.pending {
            Some(pending) => {
                pending.args.push(value);
                Ok(())
            }
            None => Err(ParseError::new(
                ErrorKind::ArgumentBeforeCommand,
                token.start,
            )),
        }
    }

    /// Append the pending command, if any.
    fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            let command = Command {
                kind: pending.kind,
                relative: pending.relative,
                args: pending.args,
            };
            log::trace!(
                "command {} with {} arguments at {}",
                command.letter(),
                command.args.len(),
                pending.position
            );
            self.commands.push((command, pending.position));
        }
    }

    /// Close the input, then check every command against the arity table.
    fn finish(mut self) -> Result<Path, ParseError> {
        self.close_token(self.text.len())?;
        self.flush();
        let mut commands = Vec::with_capacity(self.commands.len());
        for (command, position) in self.commands {
            command
                .check()
                .map_err(|kind| ParseError::new(kind, position))?;
            commands.push(command);
        }
        Ok(Path::from_valid(commands))
    }
}
