// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path data: the command model, its text form, and the passes that bring
//! it into canonical form.
//!
//! A [`Path`] is always valid. The only ways to get one are [`parse`] and
//! [`Path::from_commands`], both of which check every command's argument
//! count, so the transforms on `Path` never fail.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

use smallvec::SmallVec;

use crate::{
    ParamCurveArclen, ParamCurveExtrema, Point, Rect, Segment, Segments, DEFAULT_SAMPLE_STEP,
};

mod error;
mod normalize;
mod string_repr;

pub use self::error::{ErrorKind, ParseError};
pub use self::string_repr::parse;

/// The kind of a path command, independent of whether it is relative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    /// `M`: start a new subpath. Extra coordinate pairs are implicit line-tos.
    MoveTo,
    /// `L`: straight line to a point.
    LineTo,
    /// `H`: horizontal line to an x coordinate.
    HorizLineTo,
    /// `V`: vertical line to a y coordinate.
    VertLineTo,
    /// `C`: cubic Bézier with two control points.
    CubicTo,
    /// `S`: cubic Bézier whose first control point is implied.
    SmoothCubicTo,
    /// `Q`: quadratic Bézier.
    QuadTo,
    /// `T`: quadratic Bézier whose control point is implied.
    SmoothQuadTo,
    /// `A`: elliptical arc.
    ArcTo,
    /// `Z`: close the current subpath.
    ClosePath,
}

impl CommandKind {
    /// Every command kind, in letter order of the path data grammar.
    pub const ALL: [CommandKind; 10] = [
        CommandKind::MoveTo,
        CommandKind::LineTo,
        CommandKind::HorizLineTo,
        CommandKind::VertLineTo,
        CommandKind::CubicTo,
        CommandKind::SmoothCubicTo,
        CommandKind::QuadTo,
        CommandKind::SmoothQuadTo,
        CommandKind::ArcTo,
        CommandKind::ClosePath,
    ];

    /// Look up a command letter.
    ///
    /// Returns the kind and whether the letter is the relative (lowercase)
    /// form, or `None` if the letter is not a path command.
    pub fn from_letter(letter: char) -> Option<(CommandKind, bool)> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::HorizLineTo,
            'V' => CommandKind::VertLineTo,
            'C' => CommandKind::CubicTo,
            'S' => CommandKind::SmoothCubicTo,
            'Q' => CommandKind::QuadTo,
            'T' => CommandKind::SmoothQuadTo,
            'A' => CommandKind::ArcTo,
            'Z' => CommandKind::ClosePath,
            _ => return None,
        };
        Some((kind, letter.is_ascii_lowercase()))
    }

    /// The command's letter; lowercase when `relative`.
    pub fn letter(self, relative: bool) -> char {
        let upper = match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::HorizLineTo => 'H',
            CommandKind::VertLineTo => 'V',
            CommandKind::CubicTo => 'C',
            CommandKind::SmoothCubicTo => 'S',
            CommandKind::QuadTo => 'Q',
            CommandKind::SmoothQuadTo => 'T',
            CommandKind::ArcTo => 'A',
            CommandKind::ClosePath => 'Z',
        };
        if relative {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }

    /// The number of arguments in one group of this command.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadTo => 2,
            CommandKind::HorizLineTo | CommandKind::VertLineTo => 1,
            CommandKind::CubicTo => 6,
            CommandKind::SmoothCubicTo | CommandKind::QuadTo => 4,
            CommandKind::ArcTo => 7,
            CommandKind::ClosePath => 0,
        }
    }
}

/// Arguments of a command. One group of any command fits inline.
pub type Args = SmallVec<[f64; 7]>;

/// One command of a path: a kind, a relativity flag and a flat argument list.
///
/// A command may carry several argument groups (a "multicall"), so
/// `args.len()` is a multiple of [`CommandKind::arity`]. For arcs, the seven
/// arguments of each group are `rx ry x-rotation large-arc sweep x y`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    /// What the command draws.
    pub kind: CommandKind,
    /// Whether coordinates are offsets from the current point.
    pub relative: bool,
    /// The flat argument list.
    pub args: Args,
}

impl Command {
    /// Create a new command.
    pub fn new(kind: CommandKind, relative: bool, args: impl IntoIterator<Item = f64>) -> Command {
        Command {
            kind,
            relative,
            args: args.into_iter().collect(),
        }
    }

    /// An absolute command with a single argument group.
    pub(crate) fn absolute(kind: CommandKind, args: &[f64]) -> Command {
        Command {
            kind,
            relative: false,
            args: SmallVec::from_slice(args),
        }
    }

    /// The command letter, lowercase for relative commands.
    #[inline]
    pub fn letter(&self) -> char {
        self.kind.letter(self.relative)
    }

    /// The argument groups of this command.
    ///
    /// A close-path command has no groups.
    pub fn groups(&self) -> core::slice::ChunksExact<'_, f64> {
        // `chunks_exact` rejects a chunk size of zero.
        self.args.chunks_exact(self.kind.arity().max(1))
    }

    /// The number of argument groups.
    #[inline]
    pub fn group_count(&self) -> usize {
        self.groups().len()
    }

    /// The last coordinate pair, if this command's groups end in one.
    ///
    /// This is the point a command moves the pen to; `H`, `V` and `Z` have
    /// no such pair.
    pub fn end_point(&self) -> Option<Point> {
        match self.kind {
            CommandKind::HorizLineTo | CommandKind::VertLineTo | CommandKind::ClosePath => None,
            _ => match self.args[..] {
                [.., x, y] => Some(Point::new(x, y)),
                _ => None,
            },
        }
    }

    /// Check the argument list against the arity table.
    pub(crate) fn check(&self) -> Result<(), ErrorKind> {
        let arity = self.kind.arity();
        let count = self.args.len();
        let well_formed = if arity == 0 {
            count == 0
        } else {
            count > 0 && count % arity == 0
        };
        if !well_formed {
            return Err(ErrorKind::InvalidArity {
                command: self.letter(),
                arity,
                count,
            });
        }
        if self.kind == CommandKind::ArcTo {
            for group in self.groups() {
                for &flag in &group[3..5] {
                    if flag != 0.0 && flag != 1.0 {
                        return Err(ErrorKind::InvalidFlag(flag));
                    }
                }
            }
        }
        Ok(())
    }
}

/// A validated sequence of path commands.
///
/// Derefs to `[Command]` for read access. The transforms
/// ([`to_absolute`](Path::to_absolute), [`split_multicalls`](Path::split_multicalls),
/// [`normalize`](Path::normalize)) return new paths and leave `self`
/// untouched.
///
/// The [`Display`](fmt::Display) implementation writes path data text that
/// [`parse`] reads back to an equal path.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(transparent))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Command>", into = "Vec<Command>")
)]
pub struct Path {
    commands: Vec<Command>,
}

impl Path {
    /// An empty path.
    #[inline]
    pub fn new() -> Path {
        Path::default()
    }

    /// Parse path data text. See [`parse`].
    #[inline]
    pub fn parse(text: &str) -> Result<Path, ParseError> {
        parse(text)
    }

    /// Build a path from commands, checking each one.
    ///
    /// On failure, the error's `position` is the index of the first
    /// offending command. Non-finite arguments are reported as
    /// [`ErrorKind::MalformedNumber`].
    pub fn from_commands(commands: Vec<Command>) -> Result<Path, ParseError> {
        for (i, command) in commands.iter().enumerate() {
            if command.args.iter().any(|a| !a.is_finite()) {
                return Err(ParseError::new(ErrorKind::MalformedNumber, i));
            }
            command.check().map_err(|kind| ParseError::new(kind, i))?;
        }
        Ok(Path { commands })
    }

    /// Wrap commands that are valid by construction.
    #[inline]
    pub(crate) fn from_valid(commands: Vec<Command>) -> Path {
        debug_assert!(
            commands.iter().all(|c| c.check().is_ok()),
            "derived path failed validation"
        );
        Path { commands }
    }

    /// The commands of this path.
    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Consume the path, returning its commands.
    #[inline]
    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    /// The geometric segments this path traces, in order.
    ///
    /// The path is normalized first; move-tos produce no segment, and a
    /// close-path produces a closing line only when the pen is away from
    /// the subpath start.
    pub fn segments(&self) -> Segments {
        Segments::new(self.normalize())
    }

    /// The geometric segments, collected. See [`segments`](Path::segments).
    pub fn to_segments(&self) -> Vec<Segment> {
        let segments: Vec<Segment> = self.segments().collect();
        log::debug!(
            "built {} segments from {} commands",
            segments.len(),
            self.commands.len()
        );
        segments
    }

    /// The exact bounding box of every segment, or `None` if the path
    /// traces nothing.
    ///
    /// A path that only moves the pen has no segments and therefore no box.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.segments()
            .map(|seg| seg.bounding_box())
            .reduce(|acc, bbox| acc.union(bbox))
    }

    /// The approximate total length, sampled with [`DEFAULT_SAMPLE_STEP`].
    #[inline]
    pub fn length(&self) -> f64 {
        self.arclen(DEFAULT_SAMPLE_STEP)
    }

    /// The approximate total length, sampling curves with `step`.
    ///
    /// Lines and degenerate arcs are measured exactly.
    pub fn arclen(&self, step: f64) -> f64 {
        self.segments().map(|seg| seg.arclen(step)).sum()
    }
}

impl Deref for Path {
    type Target = [Command];

    #[inline]
    fn deref(&self) -> &[Command] {
        &self.commands
    }
}

impl TryFrom<Vec<Command>> for Path {
    type Error = ParseError;

    #[inline]
    fn try_from(commands: Vec<Command>) -> Result<Path, ParseError> {
        Path::from_commands(commands)
    }
}

impl From<Path> for Vec<Command> {
    #[inline]
    fn from(path: Path) -> Vec<Command> {
        path.commands
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Command;
    type IntoIter = core::slice::Iter<'a, Command>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        let mut args = self.args.iter();
        if let Some(first) = args.next() {
            write!(f, "{first}")?;
        }
        for arg in args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.commands.iter();
        if let Some(command) = iter.next() {
            write!(f, "{command}")?;
        }
        for command in iter {
            write!(f, " {command}")?;
        }
        Ok(())
    }
}
