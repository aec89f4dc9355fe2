// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use arrayvec::ArrayVec;

use crate::{
    ParamCurve, ParamCurveArclen, ParamCurveExtrema, Point, Rect, Vec2, MAX_EXTREMA,
};

/// A single line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// Returns a copy of this `Line` with the end points swapped so that it
    /// points in the opposite direction.
    #[must_use]
    #[inline(always)]
    pub fn reversed(&self) -> Line {
        Self {
            p0: self.p1,
            p1: self.p0,
        }
    }

    /// The length of the line.
    ///
    /// This is exact; no sampling is involved.
    #[inline]
    pub fn length(self) -> f64 {
        (self.p1 - self.p0).hypot()
    }

    /// The midpoint of the line.
    ///
    /// This is the same as calling [`Point::midpoint`] with
    /// the endpoints of this line.
    #[must_use]
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// Is this line [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.p0.is_finite() && self.p1.is_finite()
    }
}

impl From<(Point, Point)> for Line {
    #[inline(always)]
    fn from((from, to): (Point, Point)) -> Self {
        Line::new(from, to)
    }
}

impl From<(Point, Vec2)> for Line {
    #[inline(always)]
    fn from((origin, displacement): (Point, Vec2)) -> Self {
        Line::new(origin, origin + displacement)
    }
}

impl ParamCurve for Line {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }

    #[inline(always)]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline(always)]
    fn end(&self) -> Point {
        self.p1
    }
}

impl ParamCurveArclen for Line {
    /// The exact length; `step` is ignored.
    #[inline]
    fn arclen(&self, _step: f64) -> f64 {
        self.length()
    }
}

impl ParamCurveExtrema for Line {
    #[inline]
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        ArrayVec::new()
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        Rect::from_points(self.p0, self.p1)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Line, ParamCurve, ParamCurveArclen, ParamCurveExtrema, Point, Rect};

    #[test]
    fn line_reversed() {
        let l = Line::new((0.0, 0.0), (1.0, 1.0));
        let f = l.reversed();

        assert_eq!(l.p0, f.p1);
        assert_eq!(l.p1, f.p0);

        // Reversing it again should result in the original line
        assert_eq!(l, f.reversed());
    }

    #[test]
    fn line_length() {
        let l = Line::new((0.0, 0.0), (3.0, 4.0));
        assert_eq!(l.length(), 5.0);
        assert_eq!(l.arclen(0.5), 5.0);
    }

    #[test]
    fn line_eval() {
        let l = Line::new((0.0, 0.0), (3.0, 4.0));
        assert_eq!(l.eval(0.0), Point::new(0.0, 0.0));
        assert_eq!(l.eval(1.0), Point::new(3.0, 4.0));
        assert_eq!(l.eval(0.5), l.midpoint());
        assert_eq!(l.midpoint(), Point::new(1.5, 2.0));
    }

    #[test]
    fn line_bounding_box() {
        let l = Line::new((30.0, 5.0), (10.0, 25.0));
        assert!(l.extrema().is_empty());
        assert_eq!(l.bounding_box(), Rect::new(10.0, 5.0, 30.0, 25.0));
    }

    #[test]
    fn line_is_finite() {
        assert!(Line::new((0.0, 0.0), (1.0, 1.0)).is_finite());
        assert!(!Line::new((0.0, 0.0), (f64::INFINITY, 1.0)).is_finite());
    }
}
