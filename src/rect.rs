// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding rectangles.

use core::fmt;

use crate::Point;

/// An axis-aligned rectangle, given by its minimum and maximum corners.
///
/// Every `Rect` produced by this crate keeps `min.x <= max.x` and
/// `min.y <= max.y`. Constructing one directly with the fields bypasses that,
/// so prefer [`Rect::from_points`].
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The corner with the smallest coordinates.
    pub min: Point,
    /// The corner with the largest coordinates.
    pub max: Point,
}

impl Rect {
    /// A new rectangle from minimum and maximum coordinates.
    ///
    /// The coordinates are ordered, so swapped inputs still produce a
    /// well-formed rectangle.
    #[inline]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect::from_points((x0, y0), (x1, y1))
    }

    /// A new rectangle from two points.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Rect {
        let p0 = p0.into();
        let p1 = p1.into();
        Rect {
            min: Point::new(p0.x.min(p1.x), p0.y.min(p1.y)),
            max: Point::new(p0.x.max(p1.x), p0.y.max(p1.y)),
        }
    }

    /// The smallest rectangle enclosing every point of an iterator.
    ///
    /// Returns `None` when the iterator is empty.
    pub fn from_point_iter(points: impl IntoIterator<Item = Point>) -> Option<Rect> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Rect::from_points(first, first), |r, p| r.union_pt(p)))
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// The center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    /// The smallest rectangle enclosing two rectangles.
    #[inline]
    pub fn union(&self, other: Rect) -> Rect {
        Rect {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Compute the union with one point.
    ///
    /// This method includes the perimeter of zero-area rectangles.
    /// Thus, a succession of `union_pt` operations on a series of
    /// points yields their enclosing rectangle.
    #[inline]
    pub fn union_pt(&self, pt: Point) -> Rect {
        Rect {
            min: Point::new(self.min.x.min(pt.x), self.min.y.min(pt.y)),
            max: Point::new(self.max.x.max(pt.x), self.max.y.max(pt.y)),
        }
    }

    /// Whether a point lies inside the rectangle, edges included.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.min.x && pt.x <= self.max.x && pt.y >= self.min.y && pt.y <= self.max.y
    }

    /// Returns `true` if both corners are within `tolerance` of `other`'s.
    #[inline]
    pub fn is_near(&self, other: Rect, tolerance: f64) -> bool {
        self.min.is_near(other.min, tolerance) && self.max.is_near(other.max, tolerance)
    }
}

impl From<(Point, Point)> for Rect {
    #[inline]
    fn from((p0, p1): (Point, Point)) -> Rect {
        Rect::from_points(p0, p1)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
