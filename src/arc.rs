// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elliptical arcs, in endpoint and center parameterization.

use arrayvec::ArrayVec;

use crate::common::{angle_between, normalize_degrees};
use crate::{
    Line, ParamCurve, ParamCurveArclen, ParamCurveExtrema, Point, Rect, Vec2, DEFAULT_SAMPLE_STEP,
    MAX_EXTREMA,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// An elliptical arc in endpoint parameterization, as written in path data.
///
/// The arc runs from `from` to `to` along an ellipse with semi-axes `radii`
/// whose x axis is rotated by `x_rotation` degrees. Of the (up to) four arcs
/// that fit, `large_arc` picks the one spanning more than 180° and `sweep`
/// picks the one drawn in the direction of increasing angle.
///
/// If either radius is zero, or the two endpoints coincide, the arc is
/// degenerate and behaves as the straight [`Line`] between its endpoints for
/// every query.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    /// The start point.
    pub from: Point,
    /// The end point.
    pub to: Point,
    /// The x and y radii. The sign is ignored.
    pub radii: Vec2,
    /// Rotation of the ellipse's x axis, in degrees.
    pub x_rotation: f64,
    /// Whether the arc spans more than 180°.
    pub large_arc: bool,
    /// Whether the arc is drawn in the direction of increasing angle.
    pub sweep: bool,
}

/// An elliptical arc in center parameterization.
///
/// All angles are in degrees and held in `[0, 360)`. Computed by
/// [`Arc::center_params`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcCenterParams {
    /// The center of the ellipse.
    pub center: Point,
    /// The x and y radii, both positive, after any scale-up.
    pub radii: Vec2,
    /// Rotation of the ellipse's x axis.
    pub x_rotation: f64,
    /// Angle of the start point, measured in the ellipse's own frame.
    pub start_angle: f64,
    /// Angle of the end point, measured in the ellipse's own frame.
    pub end_angle: f64,
    /// Whether the arc runs from `start_angle` towards increasing angles.
    pub sweep: bool,
}

impl Arc {
    /// Create a new arc.
    #[inline]
    pub fn new(
        from: impl Into<Point>,
        to: impl Into<Point>,
        radii: impl Into<Vec2>,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
    ) -> Arc {
        Arc {
            from: from.into(),
            to: to.into(),
            radii: radii.into(),
            x_rotation,
            large_arc,
            sweep,
        }
    }

    /// Whether this arc collapses to a straight line.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.radii.x == 0.0 || self.radii.y == 0.0 || self.from == self.to
    }

    /// The straight line between the endpoints.
    #[inline]
    pub fn chord(&self) -> Line {
        Line::new(self.from, self.to)
    }

    /// Returns the same arc traced from `to` back to `from`.
    #[must_use]
    #[inline]
    pub fn reversed(&self) -> Arc {
        Arc {
            from: self.to,
            to: self.from,
            sweep: !self.sweep,
            ..*self
        }
    }

    /// The approximate length, sampled with [`DEFAULT_SAMPLE_STEP`].
    #[inline]
    pub fn length(&self) -> f64 {
        self.arclen(DEFAULT_SAMPLE_STEP)
    }

    /// Convert to center parameterization.
    ///
    /// Returns `None` for a degenerate arc, and for a small arc whose
    /// endpoints are too close to resolve distinct angles. Radii too small
    /// to span the endpoints are scaled up uniformly until they just do.
    pub fn center_params(&self) -> Option<ArcCenterParams> {
        if self.is_degenerate() {
            return None;
        }
        let mut rx = self.radii.x.abs();
        let mut ry = self.radii.y.abs();
        let (sin, cos) = self.x_rotation.to_radians().sin_cos();

        // Midpoint-relative start point, in the ellipse's unrotated frame.
        let half = (self.from - self.to) * 0.5;
        let x1p = cos * half.x + sin * half.y;
        let y1p = -sin * half.x + cos * half.y;

        let lambda = (x1p / rx) * (x1p / rx) + (y1p / ry) * (y1p / ry);
        if lambda > 1.0 {
            let scale = lambda.sqrt();
            rx *= scale;
            ry *= scale;
        }

        let rxy1 = rx * y1p;
        let ryx1 = ry * x1p;
        let radicand = ((rx * ry) * (rx * ry) - rxy1 * rxy1 - ryx1 * ryx1)
            / (rxy1 * rxy1 + ryx1 * ryx1);
        let mut coefficient = radicand.max(0.0).sqrt();
        if self.large_arc == self.sweep {
            coefficient = -coefficient;
        }
        let cxp = coefficient * rx * y1p / ry;
        let cyp = -coefficient * ry * x1p / rx;
        let mid = self.from.midpoint(self.to);
        let center = Point::new(cos * cxp - sin * cyp + mid.x, sin * cxp + cos * cyp + mid.y);

        let ux = (x1p - cxp) / rx;
        let uy = (y1p - cyp) / ry;
        let vx = (-x1p - cxp) / rx;
        let vy = (-y1p - cyp) / ry;
        let start = angle_between(1.0, 0.0, ux, uy);
        let delta = angle_between(ux, uy, vx, vy);
        let start_angle = normalize_degrees(start);
        let end_angle = normalize_degrees(start + delta);
        // Endpoints closer than angle precision: the small arc is its chord.
        if start_angle == end_angle && !self.large_arc {
            return None;
        }

        Some(ArcCenterParams {
            center,
            radii: Vec2::new(rx, ry),
            x_rotation: normalize_degrees(self.x_rotation),
            start_angle,
            end_angle,
            sweep: self.sweep,
        })
    }
}

impl ArcCenterParams {
    /// The angle swept from start to end, in `[0, 360)`.
    ///
    /// This is measured in the direction given by `sweep`.
    #[inline]
    pub fn sweep_span(&self) -> f64 {
        if self.sweep {
            normalize_degrees(self.end_angle - self.start_angle)
        } else {
            normalize_degrees(self.start_angle - self.end_angle)
        }
    }

    /// The point on the full ellipse at `angle` degrees.
    pub fn eval_angle(&self, angle: f64) -> Point {
        let (sin, cos) = angle.to_radians().sin_cos();
        let (sin_rot, cos_rot) = self.x_rotation.to_radians().sin_cos();
        let Vec2 { x: rx, y: ry } = self.radii;
        Point::new(
            rx * cos * cos_rot - ry * sin * sin_rot + self.center.x,
            rx * cos * sin_rot + ry * sin * cos_rot + self.center.y,
        )
    }

    /// Whether `angle` lies on the arc, endpoints included.
    ///
    /// `angle` is normalized first, so any finite value is accepted.
    pub fn includes_angle(&self, angle: f64) -> bool {
        let angle = normalize_degrees(angle);
        let (s, e) = (self.start_angle, self.end_angle);
        match (s < e, self.sweep) {
            (true, true) => s <= angle && angle <= e,
            (true, false) => angle <= s || angle >= e,
            (false, true) => angle <= e || angle >= s,
            (false, false) => e <= angle && angle <= s,
        }
    }

    /// Angles at which the x and y coordinates reach their extremes on
    /// the full ellipse, as `([x0, x1], [y0, y1])`.
    fn critical_angles(&self) -> ([f64; 2], [f64; 2]) {
        let (sin_rot, cos_rot) = self.x_rotation.to_radians().sin_cos();
        let Vec2 { x: rx, y: ry } = self.radii;
        let ax = normalize_degrees((-ry * sin_rot).atan2(rx * cos_rot).to_degrees());
        let ay = normalize_degrees((ry * cos_rot).atan2(rx * sin_rot).to_degrees());
        (
            [ax, normalize_degrees(ax + 180.0)],
            [ay, normalize_degrees(ay + 180.0)],
        )
    }

    /// Map an angle on the arc to its curve parameter.
    fn angle_to_t(&self, angle: f64) -> f64 {
        let span = self.sweep_span();
        let delta = if self.sweep {
            normalize_degrees(angle - self.start_angle)
        } else {
            normalize_degrees(self.start_angle - angle)
        };
        delta / span
    }

    /// Union of the endpoints with every included critical point.
    fn bounds_from(&self, from: Point, to: Point) -> Rect {
        let mut bbox = Rect::from_points(from, to);
        let (xs, ys) = self.critical_angles();
        for angle in xs {
            if self.includes_angle(angle) {
                let p = self.eval_angle(angle);
                bbox.min.x = bbox.min.x.min(p.x);
                bbox.max.x = bbox.max.x.max(p.x);
            }
        }
        for angle in ys {
            if self.includes_angle(angle) {
                let p = self.eval_angle(angle);
                bbox.min.y = bbox.min.y.min(p.y);
                bbox.max.y = bbox.max.y.max(p.y);
            }
        }
        bbox
    }
}

impl ParamCurve for ArcCenterParams {
    fn eval(&self, t: f64) -> Point {
        let delta = t * self.sweep_span();
        let angle = if self.sweep {
            self.start_angle + delta
        } else {
            self.start_angle - delta
        };
        self.eval_angle(normalize_degrees(angle))
    }
}

impl ParamCurveArclen for ArcCenterParams {}

impl ParamCurveExtrema for ArcCenterParams {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        let mut result = ArrayVec::new();
        let (xs, ys) = self.critical_angles();
        for angle in xs.into_iter().chain(ys) {
            if self.includes_angle(angle) {
                let t = self.angle_to_t(angle);
                if t > 0.0 && t < 1.0 {
                    result.push(t);
                }
            }
        }
        result.sort_by(f64::total_cmp);
        result
    }

    fn bounding_box(&self) -> Rect {
        self.bounds_from(self.start(), self.end())
    }
}

impl ParamCurve for Arc {
    fn eval(&self, t: f64) -> Point {
        match self.center_params() {
            Some(params) => params.eval(t),
            None => self.chord().eval(t),
        }
    }

    #[inline(always)]
    fn start(&self) -> Point {
        self.from
    }

    #[inline(always)]
    fn end(&self) -> Point {
        self.to
    }
}

impl ParamCurveArclen for Arc {
    fn arclen(&self, step: f64) -> f64 {
        match self.center_params() {
            Some(params) => params.arclen(step),
            None => self.chord().length(),
        }
    }
}

impl ParamCurveExtrema for Arc {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        match self.center_params() {
            Some(params) => params.extrema(),
            None => ArrayVec::new(),
        }
    }

    fn bounding_box(&self) -> Rect {
        match self.center_params() {
            Some(params) => params.bounds_from(self.from, self.to),
            None => self.chord().bounding_box(),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::PI;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::{
        Arc, ArcCenterParams, Line, ParamCurve, ParamCurveArclen, ParamCurveExtrema, Point, Rect,
        Vec2,
    };

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!((p1 - p0).hypot() < epsilon, "{p0:?} != {p1:?}");
    }

    #[test]
    fn arc_bounding_box() {
        #[rustfmt::skip]
        let cases = [
            (Arc::new((10.0, 10.0), (30.0, 30.0), (0.0, 50.0), 0.0, true, true),
                Rect::new(10.0, 10.0, 30.0, 30.0)),
            (Arc::new((10.0, 10.0), (30.0, 30.0), (50.0, 0.0), 0.0, false, false),
                Rect::new(10.0, 10.0, 30.0, 30.0)),
            (Arc::new((50.0, 10.0), (60.0, 20.0), (10.0, 10.0), 30.0, true, false),
                Rect::new(40.0, 10.0, 60.0, 30.0)),
            (Arc::new((50.0, 10.0), (60.0, 20.0), (10.0, 20.0), 30.0, true, false),
                Rect::new(33.755562782270175, 10.0, 60.0, 44.98681871515589)),
            (Arc::new((60.0, 20.0), (50.0, 10.0), (10.0, 20.0), 30.0, true, true),
                Rect::new(33.755562782270175, 10.0, 60.0, 44.98681871515589)),
            (Arc::new((10.0, 10.0), (30.0, 10.0), (20.0, 10.0), 90.0, false, false),
                Rect::new(10.0, 10.0, 30.0, 30.0)),
            (Arc::new((10.0, 10.0), (20.0, 20.0), (10.0, 10.0), 0.0, false, false),
                Rect::new(10.0, 10.0, 20.0, 20.0)),
            (Arc::new((10.0, 10.0), (20.0, 20.0), (10.0, 10.0), 0.0, true, false),
                Rect::new(0.0, 10.0, 20.0, 30.0)),
            (Arc::new((10.0, 10.0), (20.0, 25.0), (10.0, 15.0), 0.0, true, false),
                Rect::new(0.0, 10.0, 20.0, 40.0)),
        ];
        for (i, (arc, expected)) in cases.iter().enumerate() {
            let bbox = arc.bounding_box();
            assert!(
                bbox.is_near(*expected, 1e-6),
                "case {i}: expected {expected}, got {bbox}"
            );
        }
    }

    #[test]
    fn semicircle() {
        let arc = Arc::new((0.0, 0.0), (20.0, 0.0), (10.0, 10.0), 0.0, false, true);
        let params = arc.center_params().unwrap();
        assert_near(params.center, Point::new(10.0, 0.0), 1e-12);
        assert_eq!(params.radii, Vec2::new(10.0, 10.0));
        assert!((params.sweep_span() - 180.0).abs() < 1e-9);
        assert_near(arc.eval(0.5), Point::new(10.0, -10.0), 1e-9);
        assert_near(arc.reversed().eval(0.5), Point::new(10.0, -10.0), 1e-9);

        let other = Arc { sweep: false, ..arc };
        assert_near(other.eval(0.5), Point::new(10.0, 10.0), 1e-9);

        assert!((arc.length() - PI * 10.0).abs() < 1e-3);
        assert!(arc.bounding_box().is_near(Rect::new(0.0, -10.0, 20.0, 0.0), 1e-9));
    }

    #[test]
    fn radii_scaled_up() {
        let arc = Arc::new((0.0, 0.0), (40.0, 0.0), (5.0, 5.0), 0.0, false, true);
        let params = arc.center_params().unwrap();
        assert!((params.radii.x - 20.0).abs() < 1e-9);
        assert!((params.radii.y - 20.0).abs() < 1e-9);
        assert_near(params.center, Point::new(20.0, 0.0), 1e-9);
        assert_near(arc.eval(0.0), arc.from, 1e-9);
        assert_near(params.eval(1.0), arc.to, 1e-9);
    }

    #[test]
    fn degenerate_arcs_are_lines() {
        let zero_rx = Arc::new((0.0, 0.0), (3.0, 4.0), (0.0, 10.0), 0.0, true, true);
        let zero_ry = Arc::new((0.0, 0.0), (3.0, 4.0), (10.0, 0.0), 45.0, false, true);
        let line = Line::new((0.0, 0.0), (3.0, 4.0));
        for arc in [zero_rx, zero_ry] {
            assert!(arc.is_degenerate());
            assert_eq!(arc.center_params(), None);
            assert_eq!(arc.length(), 5.0);
            assert_eq!(arc.bounding_box(), line.bounding_box());
            assert_eq!(arc.eval(0.5), line.eval(0.5));
            assert!(arc.extrema().is_empty());
        }

        let point = Arc::new((7.0, 7.0), (7.0, 7.0), (10.0, 10.0), 0.0, true, true);
        assert!(point.is_degenerate());
        assert_eq!(point.length(), 0.0);
        assert_eq!(point.bounding_box(), Rect::new(7.0, 7.0, 7.0, 7.0));
        assert!(!point.eval(0.3).is_nan());
    }

    #[test]
    fn unresolvable_small_arc_is_chord() {
        // The endpoints are distinct but map to the same angle.
        let arc = Arc::new((0.0, 0.0), (1e-13, 0.0), (1e4, 1e4), 0.0, false, true);
        assert!(!arc.is_degenerate());
        assert_eq!(arc.center_params(), None);
        assert_eq!(arc.bounding_box(), arc.chord().bounding_box());
        assert!(arc.bounding_box().is_near(Rect::new(0.0, 0.0, 1e-13, 0.0), 1e-12));
        assert!(arc.length() < 1e-12);
    }

    #[test]
    fn negative_radii_use_magnitude() {
        let a = Arc::new((0.0, 0.0), (20.0, 0.0), (10.0, 10.0), 0.0, false, true);
        let b = Arc::new((0.0, 0.0), (20.0, 0.0), (-10.0, -10.0), 0.0, false, true);
        assert_eq!(a.center_params(), b.center_params());
    }

    #[test]
    fn includes_angle_wraps() {
        let params = ArcCenterParams {
            center: Point::ZERO,
            radii: Vec2::new(1.0, 1.0),
            x_rotation: 0.0,
            start_angle: 300.0,
            end_angle: 60.0,
            sweep: true,
        };
        assert!(params.includes_angle(0.0));
        assert!(params.includes_angle(350.0));
        assert!(params.includes_angle(30.0));
        assert!(params.includes_angle(-10.0));
        assert!(!params.includes_angle(180.0));
        assert!((params.sweep_span() - 120.0).abs() < 1e-12);

        let reverse = ArcCenterParams {
            sweep: false,
            ..params
        };
        assert!(reverse.includes_angle(180.0));
        assert!(!reverse.includes_angle(0.0));
        assert!((reverse.sweep_span() - 240.0).abs() < 1e-12);
    }

    fn random_arc(rng: &mut StdRng) -> Arc {
        let mut coord = || rng.random_range(-100.0..100.0);
        let from = Point::new(coord(), coord());
        let to = Point::new(coord(), coord());
        Arc::new(
            from,
            to,
            (rng.random_range(1.0..80.0), rng.random_range(1.0..80.0)),
            rng.random_range(-360.0..360.0),
            rng.random_bool(0.5),
            rng.random_bool(0.5),
        )
    }

    #[test]
    fn endpoints_and_reversal() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let arc = random_arc(&mut rng);
            let params = arc.center_params().unwrap();
            assert_near(params.eval(0.0), arc.from, 1e-6);
            assert_near(params.eval(1.0), arc.to, 1e-6);
            let reversed = arc.reversed();
            for t in [0.1, 0.5, 0.8] {
                assert_near(reversed.eval(t), arc.eval(1.0 - t), 1e-6);
            }
        }
    }

    #[test]
    fn large_arc_flag_selects_span() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let arc = random_arc(&mut rng);
            let params = arc.center_params().unwrap();
            let span = params.sweep_span();
            // Scaled-up radii give exactly a half ellipse either way.
            if (span - 180.0).abs() > 1e-6 {
                assert_eq!(span > 180.0, arc.large_arc, "{arc:?} spans {span}");
            }
        }
    }

    #[test]
    fn bbox_contains_samples() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..300 {
            let arc = random_arc(&mut rng);
            let bbox = arc.bounding_box();
            let params = arc.center_params().unwrap();
            for p in params.samples(0.002) {
                assert!(
                    p.x >= bbox.min.x - 1e-6
                        && p.x <= bbox.max.x + 1e-6
                        && p.y >= bbox.min.y - 1e-6
                        && p.y <= bbox.max.y + 1e-6,
                    "{p:?} outside {bbox} for {arc:?}"
                );
            }
            for t in arc.extrema() {
                assert!(t > 0.0 && t < 1.0);
            }
        }
    }
}
