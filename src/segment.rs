// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometric segments traced by a path.

use alloc::vec;

use arrayvec::ArrayVec;

use crate::path::{Command, CommandKind, Path};
use crate::{
    Arc, CubicBez, Line, ParamCurve, ParamCurveArclen, ParamCurveExtrema, Point, QuadBez, Rect,
    DEFAULT_SAMPLE_STEP, MAX_EXTREMA,
};

/// A segment of a path: a line, a quadratic or cubic Bézier, or an
/// elliptical arc.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// A line segment.
    Line(Line),
    /// A quadratic Bézier segment.
    Quad(QuadBez),
    /// A cubic Bézier segment.
    Cubic(CubicBez),
    /// An elliptical arc.
    Arc(Arc),
}

impl Segment {
    /// Returns a new `Segment` describing the same path but in reverse
    /// direction.
    #[must_use]
    pub fn reversed(&self) -> Segment {
        match self {
            Segment::Line(line) => Segment::Line(line.reversed()),
            Segment::Quad(quad) => Segment::Quad(quad.reversed()),
            Segment::Cubic(cubic) => Segment::Cubic(cubic.reversed()),
            Segment::Arc(arc) => Segment::Arc(arc.reversed()),
        }
    }

    /// The length of the segment.
    ///
    /// Exact for lines and degenerate arcs, otherwise sampled with
    /// [`DEFAULT_SAMPLE_STEP`].
    #[inline]
    pub fn length(&self) -> f64 {
        self.arclen(DEFAULT_SAMPLE_STEP)
    }

    /// Is this segment [finite]?
    ///
    /// [finite]: f64::is_finite
    pub fn is_finite(&self) -> bool {
        match self {
            Segment::Line(line) => line.is_finite(),
            Segment::Quad(quad) => quad.is_finite(),
            Segment::Cubic(cubic) => cubic.is_finite(),
            Segment::Arc(arc) => {
                arc.from.is_finite()
                    && arc.to.is_finite()
                    && arc.radii.is_finite()
                    && arc.x_rotation.is_finite()
            }
        }
    }
}

impl From<Line> for Segment {
    fn from(line: Line) -> Segment {
        Segment::Line(line)
    }
}

impl From<QuadBez> for Segment {
    fn from(quad: QuadBez) -> Segment {
        Segment::Quad(quad)
    }
}

impl From<CubicBez> for Segment {
    fn from(cubic: CubicBez) -> Segment {
        Segment::Cubic(cubic)
    }
}

impl From<Arc> for Segment {
    fn from(arc: Arc) -> Segment {
        Segment::Arc(arc)
    }
}

impl ParamCurve for Segment {
    fn eval(&self, t: f64) -> Point {
        match self {
            Segment::Line(line) => line.eval(t),
            Segment::Quad(quad) => quad.eval(t),
            Segment::Cubic(cubic) => cubic.eval(t),
            Segment::Arc(arc) => arc.eval(t),
        }
    }

    fn start(&self) -> Point {
        match self {
            Segment::Line(line) => line.p0,
            Segment::Quad(quad) => quad.p0,
            Segment::Cubic(cubic) => cubic.p0,
            Segment::Arc(arc) => arc.from,
        }
    }

    fn end(&self) -> Point {
        match self {
            Segment::Line(line) => line.p1,
            Segment::Quad(quad) => quad.p2,
            Segment::Cubic(cubic) => cubic.p3,
            Segment::Arc(arc) => arc.to,
        }
    }
}

impl ParamCurveArclen for Segment {
    fn arclen(&self, step: f64) -> f64 {
        match self {
            Segment::Line(line) => line.arclen(step),
            Segment::Quad(quad) => quad.arclen(step),
            Segment::Cubic(cubic) => cubic.arclen(step),
            Segment::Arc(arc) => arc.arclen(step),
        }
    }
}

impl ParamCurveExtrema for Segment {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        match self {
            Segment::Line(line) => line.extrema(),
            Segment::Quad(quad) => quad.extrema(),
            Segment::Cubic(cubic) => cubic.extrema(),
            Segment::Arc(arc) => arc.extrema(),
        }
    }

    fn bounding_box(&self) -> Rect {
        match self {
            Segment::Line(line) => line.bounding_box(),
            Segment::Quad(quad) => quad.bounding_box(),
            Segment::Cubic(cubic) => cubic.bounding_box(),
            Segment::Arc(arc) => arc.bounding_box(),
        }
    }
}

/// An iterator over the segments traced by a path.
///
/// Created by [`Path::segments`]. The pen starts at the origin. A move-to
/// lifts the pen and starts a new subpath; a close-path draws a line back to
/// the subpath start unless the pen is already there.
#[derive(Clone, Debug)]
pub struct Segments {
    commands: vec::IntoIter<Command>,
    current: Point,
    subpath_start: Point,
}

impl Segments {
    /// Expects a path in the form produced by [`Path::normalize`].
    pub(crate) fn new(path: Path) -> Segments {
        debug_assert!(path.is_normalized());
        Segments {
            commands: path.into_commands().into_iter(),
            current: Point::ORIGIN,
            subpath_start: Point::ORIGIN,
        }
    }
}

#[inline]
fn pt(args: &[f64], i: usize) -> Point {
    Point::new(args[i], args[i + 1])
}

impl Iterator for Segments {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        for command in self.commands.by_ref() {
            let a = &command.args;
            let seg = match command.kind {
                CommandKind::MoveTo => {
                    self.current = pt(a, 0);
                    self.subpath_start = self.current;
                    continue;
                }
                CommandKind::LineTo => Segment::Line(Line::new(self.current, pt(a, 0))),
                CommandKind::QuadTo => {
                    Segment::Quad(QuadBez::new(self.current, pt(a, 0), pt(a, 2)))
                }
                CommandKind::CubicTo => Segment::Cubic(CubicBez::new(
                    self.current,
                    pt(a, 0),
                    pt(a, 2),
                    pt(a, 4),
                )),
                CommandKind::ArcTo => Segment::Arc(Arc::new(
                    self.current,
                    pt(a, 5),
                    (a[0], a[1]),
                    a[2],
                    a[3] != 0.0,
                    a[4] != 0.0,
                )),
                CommandKind::ClosePath => {
                    let from = core::mem::replace(&mut self.current, self.subpath_start);
                    if from == self.subpath_start {
                        continue;
                    }
                    Segment::Line(Line::new(from, self.subpath_start))
                }
                // Expanded away by normalization.
                CommandKind::HorizLineTo
                | CommandKind::VertLineTo
                | CommandKind::SmoothCubicTo
                | CommandKind::SmoothQuadTo => continue,
            };
            self.current = seg.end();
            return Some(seg);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.commands.size_hint().1)
    }
}

impl core::iter::FusedIterator for Segments {}
