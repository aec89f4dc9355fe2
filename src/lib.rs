// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vector path data, with exact segment geometry.
//!
//! The pathdata library parses the compact path data text used by vector
//! graphics formats (`M 10,10 l 10-10 a 5 5 0 0 1 10 0 Z`) into a [`Path`]
//! of [`Command`]s, rewrites it into a canonical absolute form, and turns
//! it into geometric [`Segment`]s: lines, quadratic and cubic Béziers, and
//! elliptical arcs. Every segment can be evaluated, measured and bounded.
//!
//! # Examples
//!
//! Parse, normalize and measure a path:
//! ```
//! use pathdata::{parse, Point, Rect};
//!
//! let path = parse("M 10,10 h 20 v 20 h -20 z").unwrap();
//! assert_eq!(path.normalize().to_string(), "M10 10 L30 10 L30 30 L10 30 Z");
//!
//! assert_eq!(path.length(), 80.0);
//! assert_eq!(path.bounding_box(), Some(Rect::new(10.0, 10.0, 30.0, 30.0)));
//! ```
//!
//! Bounding boxes are exact, not taken from control points:
//!
//! ```
//! use pathdata::{parse, ParamCurve, ParamCurveExtrema};
//!
//! let path = parse("M 0,0 A 10 10 0 0 1 20 0").unwrap();
//! let segments = path.to_segments();
//! let bbox = segments[0].bounding_box();
//! assert!((bbox.min.y + 10.0).abs() < 1e-9);
//! assert!((segments[0].eval(0.5).y + 10.0).abs() < 1e-9);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments.
//!
//! - `mint`: conversions between [`Point`] and [`Vec2`] and the [`mint`]
//!   types.
//! - `serde`: serialization for the geometry types and [`Path`].
//! - `schemars`: JSON schemas for the same types.
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! Note that this crate does require that an allocator is available (i.e. it uses [alloc]).
//!
//! [`libm`]: https://docs.rs/libm
//! [`mint`]: https://docs.rs/mint

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision,
    clippy::bool_to_int_with_if
)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    missing_debug_implementations,
    elided_lifetimes_in_paths,
    single_use_lifetimes,
    trivial_numeric_casts,
    unnameable_types,
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::cast_possible_truncation,
    clippy::wildcard_imports,
    clippy::shadow_unrelated,
    clippy::missing_assert_message,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::exhaustive_enums,
    clippy::match_same_arms,
    clippy::partial_pub_fields,
    clippy::unseparated_literal_suffix,
    clippy::duplicated_attributes,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("pathdata requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

// Only the benchmarks use criterion.
#[cfg(test)]
use criterion as _;

extern crate alloc;

mod arc;
pub mod common;
mod cubicbez;
mod line;
mod param_curve;
mod path;
mod point;
mod quadbez;
mod rect;
mod segment;
mod vec2;

pub use crate::arc::{Arc, ArcCenterParams};
pub use crate::cubicbez::CubicBez;
pub use crate::line::Line;
pub use crate::param_curve::{
    ParamCurve, ParamCurveArclen, ParamCurveExtrema, Samples, DEFAULT_SAMPLE_STEP, MAX_EXTREMA,
};
pub use crate::path::{parse, Args, Command, CommandKind, ErrorKind, ParseError, Path};
pub use crate::point::Point;
pub use crate::quadbez::QuadBez;
pub use crate::rect::Rect;
pub use crate::segment::{Segment, Segments};
pub use crate::vec2::Vec2;
