// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use core::iter::FusedIterator;

use arrayvec::ArrayVec;

use crate::{Point, Rect};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The sampling step used by the `length` methods when none is given.
///
/// A step of `0.005` evaluates each curve at 201 evenly spaced parameter
/// values.
pub const DEFAULT_SAMPLE_STEP: f64 = 0.005;

/// The maximum number of extrema that can be reported in the `ParamCurveExtrema` trait.
///
/// This is 4 to accommodate cubic Béziers, and elliptical arcs which can
/// cross both axes twice.
pub const MAX_EXTREMA: usize = 4;

/// A curve parametrized by a scalar.
///
/// The parameter `t` runs from `0.0` at [`start`](ParamCurve::start) to
/// `1.0` at [`end`](ParamCurve::end).
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1].
    fn eval(&self, t: f64) -> Point;

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }

    /// Evenly spaced points along the curve.
    ///
    /// Yields `eval(i / n)` for `i` in `0..=n`, where `n = ceil(1 / step)`.
    /// The first and last items are exactly [`start`](ParamCurve::start) and
    /// [`end`](ParamCurve::end). A step that is not positive and finite
    /// yields the two endpoints only.
    ///
    /// The returned iterator borrows the curve and can be cloned to restart.
    fn samples(&self, step: f64) -> Samples<'_, Self> {
        Samples::new(self, step)
    }
}

/// A parametrized curve that can have its arc length measured.
pub trait ParamCurveArclen: ParamCurve {
    /// The arc length of the curve, approximated by sampling.
    ///
    /// The default implementation sums the chord lengths between
    /// consecutive points of [`samples(step)`](ParamCurve::samples), so the
    /// result never exceeds the true length and converges to it as `step`
    /// shrinks.
    fn arclen(&self, step: f64) -> f64 {
        let mut samples = self.samples(step);
        let Some(mut last) = samples.next() else {
            return 0.0;
        };
        let mut sum = 0.0;
        for p in samples {
            sum += last.distance(p);
            last = p;
        }
        sum
    }
}

/// A parametrized curve that reports its extrema.
pub trait ParamCurveExtrema: ParamCurve {
    /// Compute the extrema of the curve.
    ///
    /// Only extrema within the interior of the curve count.
    /// At most four extrema can be reported, which is sufficient for
    /// cubic Béziers and elliptical arcs.
    ///
    /// The extrema should be reported in increasing parameter order.
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA>;

    /// The smallest rectangle that encloses the curve in the range (0..1).
    fn bounding_box(&self) -> Rect {
        let mut bbox = Rect::from_points(self.start(), self.end());
        for t in self.extrema() {
            bbox = bbox.union_pt(self.eval(t));
        }
        bbox
    }
}

/// Iterator over evenly spaced points of a curve.
///
/// Created by [`ParamCurve::samples`].
#[derive(Debug)]
pub struct Samples<'a, C> {
    curve: &'a C,
    next: usize,
    n: usize,
}

impl<'a, C: ParamCurve> Samples<'a, C> {
    fn new(curve: &'a C, step: f64) -> Self {
        let n = if step > 0.0 && step.is_finite() {
            // Saturates for absurdly small steps.
            ((1.0 / step).ceil() as usize).max(1)
        } else {
            1
        };
        Samples { curve, next: 0, n }
    }
}

impl<C> Clone for Samples<'_, C> {
    fn clone(&self) -> Self {
        Samples {
            curve: self.curve,
            next: self.next,
            n: self.n,
        }
    }
}

impl<C: ParamCurve> Iterator for Samples<'_, C> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let i = self.next;
        if i > self.n {
            return None;
        }
        self.next += 1;
        Some(if i == 0 {
            self.curve.start()
        } else if i == self.n {
            self.curve.end()
        } else {
            self.curve.eval(i as f64 / self.n as f64)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.n + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<C: ParamCurve> ExactSizeIterator for Samples<'_, C> {}

impl<C: ParamCurve> FusedIterator for Samples<'_, C> {}
