// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use arrayvec::ArrayVec;

use crate::common::solve_quadratic;
use crate::{
    ParamCurve, ParamCurveArclen, ParamCurveExtrema, Point, QuadBez, DEFAULT_SAMPLE_STEP,
    MAX_EXTREMA,
};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct CubicBez {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline(always)]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Returns a cubic Bézier segment with the points reversed.
    #[must_use]
    #[inline]
    pub fn reversed(&self) -> CubicBez {
        CubicBez {
            p0: self.p3,
            p1: self.p2,
            p2: self.p1,
            p3: self.p0,
        }
    }

    /// The approximate length, sampled with [`DEFAULT_SAMPLE_STEP`].
    #[inline]
    pub fn length(&self) -> f64 {
        self.arclen(DEFAULT_SAMPLE_STEP)
    }

    /// The derivative of the curve, as a quadratic in displacement space.
    ///
    /// The points of the result are velocities, not positions.
    #[inline]
    pub fn deriv(&self) -> QuadBez {
        QuadBez::new(
            (3.0 * (self.p1 - self.p0)).to_point(),
            (3.0 * (self.p2 - self.p1)).to_point(),
            (3.0 * (self.p3 - self.p2)).to_point(),
        )
    }

    /// Is this cubic Bezier curve [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    #[inline(always)]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline(always)]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ParamCurveArclen for CubicBez {}

impl ParamCurveExtrema for CubicBez {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        fn one_coord(result: &mut ArrayVec<f64, MAX_EXTREMA>, d0: f64, d1: f64, d2: f64) {
            let a = d0 - 2.0 * d1 + d2;
            let b = 2.0 * (d1 - d0);
            let c = d0;
            let roots = solve_quadratic(c, b, a);
            for &t in &roots {
                if t > 0.0 && t < 1.0 {
                    result.push(t);
                }
            }
        }
        let mut result = ArrayVec::new();
        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        let d2 = self.p3 - self.p2;
        one_coord(&mut result, d0.x, d1.x, d2.x);
        one_coord(&mut result, d0.y, d1.y, d2.y);
        result.sort_by(f64::total_cmp);
        result
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::{CubicBez, Line, ParamCurve, ParamCurveArclen, ParamCurveExtrema, Point, Rect};

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!((p1 - p0).hypot() < epsilon, "{p0:?} != {p1:?}");
    }

    #[test]
    fn cubicbez_deriv() {
        // y = x^2
        let c = CubicBez::new(
            (0.0, 0.0),
            (1.0 / 3.0, 0.0),
            (2.0 / 3.0, 1.0 / 3.0),
            (1.0, 1.0),
        );
        let deriv = c.deriv();

        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let delta = 1e-6;
            let p = c.eval(t);
            let p1 = c.eval(t + delta);
            let d_approx = (p1 - p) * delta.recip();
            let d = deriv.eval(t).to_vec2();
            assert!((d - d_approx).hypot() < delta * 2.0);
        }
    }

    #[test]
    fn cubicbez_extrema() {
        // y = x^2
        let q = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        let extrema = q.extrema();
        assert_eq!(extrema.len(), 1);
        assert!((extrema[0] - 0.5).abs() < 1e-6);

        let q = CubicBez::new((0.4, 0.5), (0.0, 1.0), (1.0, 0.0), (0.5, 0.4));
        let extrema = q.extrema();
        assert_eq!(extrema.len(), 4);
        assert!(extrema.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn cubicbez_bounding_box() {
        let cases = [
            (
                [(10.0, 50.0), (40.0, 10.0), (70.0, 90.0), (100.0, 50.0)],
                (10.0, 38.452994616207484, 100.0, 61.547005383792516),
            ),
            (
                [(96.0, 89.0), (13.0, 46.0), (14.0, 64.0), (15.0, 91.0)],
                (14.781782109764007, 63.23187046009383, 96.0, 91.0),
            ),
            (
                [(50.0, 10.0), (10.0, 40.0), (90.0, 70.0), (50.0, 100.0)],
                (38.452994616207484, 10.0, 61.547005383792516, 100.0),
            ),
        ];
        for ([p0, p1, p2, p3], (x0, y0, x1, y1)) in cases {
            let bbox = CubicBez::new(p0, p1, p2, p3).bounding_box();
            assert!(
                bbox.is_near(Rect::new(x0, y0, x1, y1), 1e-9),
                "{p0:?}..{p3:?}: {bbox}"
            );
        }
    }

    #[test]
    fn cubicbez_straight_line() {
        // Control points evenly spaced along the chord.
        let line = Line::new((10.0, 10.0), (40.0, 40.0));
        let c = CubicBez::new(line.p0, line.eval(1.0 / 3.0), line.eval(2.0 / 3.0), line.p1);
        assert!(c.extrema().is_empty());
        assert!(c.bounding_box().is_near(Rect::new(10.0, 10.0, 40.0, 40.0), 1e-12));
        assert!((c.length() - line.length()).abs() < 1e-9);
        assert_near(c.eval(0.25), line.eval(0.25), 1e-12);

        // Both control points on the midpoint.
        let mid = line.midpoint();
        let c = CubicBez::new(line.p0, mid, mid, line.p1);
        assert!(c.bounding_box().is_near(Rect::new(10.0, 10.0, 40.0, 40.0), 1e-12));
    }

    #[test]
    fn cubicbez_arclen_converges() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0));
        let a = c.arclen(0.1);
        let b = c.arclen(0.01);
        let d = c.arclen(0.001);
        assert!(a < b && b < d);
        assert!(d - b < b - a);
        // Never longer than the control polygon.
        assert!(d < 300.0);
    }

    #[test]
    fn cubicbez_bbox_contains_samples() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let mut pt = || {
                Point::new(
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-100.0..100.0),
                )
            };
            let c = CubicBez::new(pt(), pt(), pt(), pt());
            let bbox = c.bounding_box();
            let mut touched = [false; 4];
            for p in c.samples(0.001) {
                assert!(
                    p.x >= bbox.min.x - 1e-9
                        && p.x <= bbox.max.x + 1e-9
                        && p.y >= bbox.min.y - 1e-9
                        && p.y <= bbox.max.y + 1e-9,
                    "{p:?} outside {bbox}"
                );
                touched[0] |= p.x - bbox.min.x < 1e-3;
                touched[1] |= bbox.max.x - p.x < 1e-3;
                touched[2] |= p.y - bbox.min.y < 1e-3;
                touched[3] |= bbox.max.y - p.y < 1e-3;
            }
            // The box is tight: the curve comes close to every edge.
            assert!(touched.iter().all(|&t| t), "{c:?} not tight in {bbox}");
        }
    }
}
