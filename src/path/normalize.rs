// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Passes that rewrite a path into canonical form.
//!
//! [`Path::normalize`] chains the other two passes and then expands the
//! shorthand commands, leaving only absolute, single-group `M`, `L`, `C`,
//! `Q`, `A` and `Z` commands.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::path::{Args, Command, CommandKind, Path};
use crate::Point;

/// Resolve a coordinate pair against the current point.
#[inline]
fn resolve(relative: bool, current: Point, x: f64, y: f64) -> Point {
    if relative {
        Point::new(current.x + x, current.y + y)
    } else {
        Point::new(x, y)
    }
}

impl Path {
    /// Rewrite every relative command as its absolute equivalent.
    ///
    /// The current point and the subpath start both begin at the origin, so
    /// a leading relative move-to is taken from `(0, 0)`. Each group of a
    /// relative multicall is resolved against the point reached by the
    /// group before it. Arc radii, rotation and flags are copied unchanged.
    ///
    /// ```
    /// use pathdata::parse;
    ///
    /// let path = parse("m 10,10 10,-10").unwrap();
    /// assert_eq!(path.to_absolute(), parse("M 10,10 20,0").unwrap());
    /// ```
    pub fn to_absolute(&self) -> Path {
        let mut current = Point::ORIGIN;
        let mut subpath_start = Point::ORIGIN;
        let mut out = Vec::with_capacity(self.len());
        for command in self.iter() {
            let relative = command.relative;
            let mut args = Args::with_capacity(command.args.len());
            match command.kind {
                CommandKind::ClosePath => current = subpath_start,
                CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadTo => {
                    for (i, group) in command.groups().enumerate() {
                        let p = resolve(relative, current, group[0], group[1]);
                        if command.kind == CommandKind::MoveTo && i == 0 {
                            subpath_start = p;
                        }
                        current = p;
                        args.extend([p.x, p.y]);
                    }
                }
                CommandKind::HorizLineTo => {
                    for group in command.groups() {
                        current.x = if relative {
                            current.x + group[0]
                        } else {
                            group[0]
                        };
                        args.push(current.x);
                    }
                }
                CommandKind::VertLineTo => {
                    for group in command.groups() {
                        current.y = if relative {
                            current.y + group[0]
                        } else {
                            group[0]
                        };
                        args.push(current.y);
                    }
                }
                CommandKind::CubicTo | CommandKind::SmoothCubicTo | CommandKind::QuadTo => {
                    for group in command.groups() {
                        // Every pair in a group is relative to the group's start.
                        let base = current;
                        for pair in group.chunks_exact(2) {
                            current = resolve(relative, base, pair[0], pair[1]);
                            args.extend([current.x, current.y]);
                        }
                    }
                }
                CommandKind::ArcTo => {
                    for group in command.groups() {
                        args.extend_from_slice(&group[..5]);
                        current = resolve(relative, current, group[5], group[6]);
                        args.extend([current.x, current.y]);
                    }
                }
            }
            out.push(Command {
                kind: command.kind,
                relative: false,
                args,
            });
        }
        log::trace!("resolved {} commands to absolute", out.len());
        Path::from_valid(out)
    }

    /// Split every command with several argument groups into one command
    /// per group.
    ///
    /// Groups after the first of a move-to become line-tos of the same
    /// relativity. Close-path commands are copied as they are.
    ///
    /// ```
    /// use pathdata::parse;
    ///
    /// let path = parse("M1 2 3 4 l5 6 7 8").unwrap();
    /// assert_eq!(path.split_multicalls().to_string(), "M1 2 L3 4 l5 6 l7 8");
    /// ```
    pub fn split_multicalls(&self) -> Path {
        let mut out = Vec::with_capacity(self.len());
        for command in self.iter() {
            if command.kind == CommandKind::ClosePath {
                out.push(command.clone());
                continue;
            }
            for (i, group) in command.groups().enumerate() {
                let kind = if command.kind == CommandKind::MoveTo && i > 0 {
                    CommandKind::LineTo
                } else {
                    command.kind
                };
                out.push(Command {
                    kind,
                    relative: command.relative,
                    args: SmallVec::from_slice(group),
                });
            }
        }
        log::trace!("split {} commands into {}", self.len(), out.len());
        Path::from_valid(out)
    }

    /// Bring the path into canonical form.
    ///
    /// Runs [`to_absolute`](Path::to_absolute) and
    /// [`split_multicalls`](Path::split_multicalls), then expands shorthand:
    /// `H` and `V` become `L`; `S` becomes `C` and `T` becomes `Q`, with the
    /// implied control point reflected through the current point from the
    /// previous command's last control point when that command is a `C`
    /// (for `S`) or a `Q` (for `T`), or else placed on the current point.
    /// Arcs have no shorthand and pass through.
    ///
    /// The result satisfies [`is_normalized`](Path::is_normalized).
    pub fn normalize(&self) -> Path {
        let split = self.to_absolute().split_multicalls();
        let mut out: Vec<Command> = Vec::with_capacity(split.len());
        let mut current = Point::ORIGIN;
        let mut subpath_start = Point::ORIGIN;
        for command in split.into_commands() {
            let a = &command.args;
            match command.kind {
                CommandKind::HorizLineTo => {
                    current.x = a[0];
                    out.push(Command::absolute(
                        CommandKind::LineTo,
                        &[current.x, current.y],
                    ));
                }
                CommandKind::VertLineTo => {
                    current.y = a[0];
                    out.push(Command::absolute(
                        CommandKind::LineTo,
                        &[current.x, current.y],
                    ));
                }
                CommandKind::SmoothCubicTo => {
                    let ctrl = match out.last() {
                        Some(prev) if prev.kind == CommandKind::CubicTo => {
                            Point::new(prev.args[2], prev.args[3])
                        }
                        _ => current,
                    };
                    let ctrl1 = ctrl.reflect(current);
                    out.push(Command::absolute(
                        CommandKind::CubicTo,
                        &[ctrl1.x, ctrl1.y, a[0], a[1], a[2], a[3]],
                    ));
                    current = Point::new(a[2], a[3]);
                }
                CommandKind::SmoothQuadTo => {
                    let ctrl = match out.last() {
                        Some(prev) if prev.kind == CommandKind::QuadTo => {
                            Point::new(prev.args[0], prev.args[1])
                        }
                        _ => current,
                    };
                    let ctrl = ctrl.reflect(current);
                    out.push(Command::absolute(
                        CommandKind::QuadTo,
                        &[ctrl.x, ctrl.y, a[0], a[1]],
                    ));
                    current = Point::new(a[0], a[1]);
                }
                CommandKind::MoveTo => {
                    current = Point::new(a[0], a[1]);
                    subpath_start = current;
                    out.push(command);
                }
                CommandKind::ClosePath => {
                    current = subpath_start;
                    out.push(command);
                }
                CommandKind::LineTo | CommandKind::CubicTo | CommandKind::QuadTo | CommandKind::ArcTo => {
                    if let Some(end) = command.end_point() {
                        current = end;
                    }
                    out.push(command);
                }
            }
        }
        log::debug!(
            "normalized {} commands into {}",
            self.len(),
            out.len()
        );
        Path::from_valid(out)
    }

    /// Whether this path is in the form [`normalize`](Path::normalize)
    /// produces: absolute, single-group `M`, `L`, `C`, `Q`, `A` and `Z`
    /// commands only.
    pub fn is_normalized(&self) -> bool {
        self.iter().all(|command| {
            !command.relative
                && match command.kind {
                    CommandKind::ClosePath => true,
                    CommandKind::MoveTo
                    | CommandKind::LineTo
                    | CommandKind::CubicTo
                    | CommandKind::QuadTo
                    | CommandKind::ArcTo => command.group_count() == 1,
                    CommandKind::HorizLineTo
                    | CommandKind::VertLineTo
                    | CommandKind::SmoothCubicTo
                    | CommandKind::SmoothQuadTo => false,
                }
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use core::fmt::Write;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::{parse, Path};

    fn p(text: &str) -> Path {
        parse(text).unwrap()
    }

    #[test]
    fn absolute_relative_moveto() {
        assert_eq!(p("m 10,10 10,-10").to_absolute(), p("M 10,10 20,0"));
        assert_eq!(p("m5 5").to_absolute(), p("M5 5"));
    }

    #[test]
    fn absolute_after_close() {
        // Close-path returns the pen to the subpath start.
        assert_eq!(
            p("M10 10 l5 0 z m1 1 l1 1").to_absolute(),
            p("M10 10 L15 10 Z M11 11 L12 12")
        );
    }

    #[test]
    fn absolute_lines() {
        assert_eq!(
            p("M10 10 h5 3 v-5 V2 H1 l1 1 2 2").to_absolute(),
            p("M10 10 H15 18 V5 V2 H1 L2 3 4 5")
        );
    }

    #[test]
    fn absolute_curves() {
        assert_eq!(
            p("M10 10 c1 1 2 2 3 3 1 1 2 2 3 3").to_absolute(),
            p("M10 10 C11 11 12 12 13 13 14 14 15 15 16 16")
        );
        assert_eq!(
            p("M10 10 s1 2 3 4 q1 1 2 2 t5 5").to_absolute(),
            p("M10 10 S11 12 13 14 Q14 15 15 16 T20 21")
        );
    }

    #[test]
    fn absolute_arc() {
        assert_eq!(
            p("M10 10 a5 5 30 1 0 10 0 5 5 30 0 1 0 -10").to_absolute(),
            p("M10 10 A5 5 30 1 0 20 10 5 5 30 0 1 20 0")
        );
    }

    #[test]
    fn absolute_is_idempotent() {
        let path = p("M1 1 l2 2 z m3 3 h1 v1 c1 1 1 1 1 1 a 1 1 0 0 0 2 2");
        let abs = path.to_absolute();
        assert!(abs.iter().all(|c| !c.relative));
        assert_eq!(abs.to_absolute(), abs);
    }

    #[test]
    fn split() {
        assert_eq!(
            p("M1 2 3 4 5 6 L7 8 9 10 Z").split_multicalls(),
            p("M1 2 L3 4 L5 6 L7 8 L9 10 Z")
        );
        assert_eq!(p("m1 2 3 4").split_multicalls(), p("m1 2 l3 4"));
        assert_eq!(
            p("M0 0 c1 1 2 2 3 3 4 4 5 5 6 6 z").split_multicalls(),
            p("M0 0 c1 1 2 2 3 3 c4 4 5 5 6 6 z")
        );
    }

    #[test]
    fn expand_horizontal_vertical() {
        assert_eq!(
            p("M10 10 H20 V30 h5 v-5").normalize(),
            p("M10 10 L20 10 L20 30 L25 30 L25 25")
        );
    }

    #[test]
    fn expand_smooth_cubic() {
        assert_eq!(
            p("M0 0 C10 0 20 10 30 30 S50 60 60 60").normalize(),
            p("M0 0 C10 0 20 10 30 30 C40 50 50 60 60 60")
        );
        // Without a preceding cubic the control point is the current point.
        assert_eq!(
            p("M10 10 S20 20 30 10").normalize(),
            p("M10 10 C10 10 20 20 30 10")
        );
        assert_eq!(
            p("M10 10 Q0 0 20 20 S20 20 30 10").normalize(),
            p("M10 10 Q0 0 20 20 C20 20 20 20 30 10")
        );
        // A chain of smooth cubics reflects the expanded predecessor.
        assert_eq!(
            p("M0 0 S10 10 20 0 s10 -10 20 0").normalize(),
            p("M0 0 C0 0 10 10 20 0 C30 -10 30 -10 40 0")
        );
    }

    #[test]
    fn expand_smooth_quad() {
        assert_eq!(
            p("M0 0 Q10 10 20 0 T40 0 T60 0").normalize(),
            p("M0 0 Q10 10 20 0 Q30 -10 40 0 Q50 10 60 0")
        );
        assert_eq!(
            p("M0 0 C1 1 2 2 3 3 T10 10").normalize(),
            p("M0 0 C1 1 2 2 3 3 Q3 3 10 10")
        );
        assert_eq!(p("T10 10").normalize(), p("Q0 0 10 10"));
    }

    #[test]
    fn close_resets_current_point() {
        assert_eq!(
            p("M10 10 L20 10 Z H0").normalize(),
            p("M10 10 L20 10 Z L0 10")
        );
    }

    #[test]
    fn sample_path_normalizes() {
        let path = p(
            "M600,350 l 50,-25 a25,25 -30 0,1 50,-25 l50-25a25,50-30 0,1 50,-25 \
             c 0 -10 25 25 50 -25 0 -10 25 25 50 -25zL 100 100 H 200 V 200H100Z \
             M 200,200C300,300 0,0 400 400 S 425,375 450,350 Q 400 400 500,230 T 450 230",
        );
        assert!(!path.is_normalized());
        let normalized = path.normalize();
        assert!(normalized.is_normalized());
        assert_eq!(normalized.normalize(), normalized);
        let letters: String = normalized.iter().map(|c| c.letter()).collect();
        assert_eq!(letters, "MLALACCZLLLLZMCCQQ");
    }

    /// Random path data text using every command, both relativities and
    /// multicalls.
    fn random_path_text(rng: &mut StdRng) -> String {
        let mut text = String::new();
        let n = rng.random_range(1..12);
        for i in 0..n {
            let letters = "MLHVCSQTAZ";
            let idx = if i == 0 { 0 } else { rng.random_range(0..letters.len()) };
            let mut letter = char::from(letters.as_bytes()[idx]);
            if rng.random_bool(0.5) {
                letter = letter.to_ascii_lowercase();
            }
            text.push(letter);
            if letter.eq_ignore_ascii_case(&'z') {
                continue;
            }
            let groups = rng.random_range(1..4);
            for _ in 0..groups {
                let large_arc = f64::from(u8::from(rng.random_bool(0.5)));
                let sweep = f64::from(u8::from(rng.random_bool(0.5)));
                let mut coord = || f64::from(rng.random_range(-500..500)) / 4.0;
                let group: Vec<f64> = match letter.to_ascii_uppercase() {
                    'M' | 'L' | 'T' => vec![coord(), coord()],
                    'H' | 'V' => vec![coord()],
                    'C' => vec![coord(), coord(), coord(), coord(), coord(), coord()],
                    'S' | 'Q' => vec![coord(), coord(), coord(), coord()],
                    _ => vec![
                        coord().abs() + 1.0,
                        coord().abs() + 1.0,
                        coord(),
                        large_arc,
                        sweep,
                        coord(),
                        coord(),
                    ],
                };
                for value in group {
                    write!(text, " {value}").unwrap();
                }
            }
        }
        text
    }

    #[test]
    fn random_paths() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let text = random_path_text(&mut rng);
            let path = p(&text);

            let normalized = path.normalize();
            assert!(normalized.is_normalized(), "{text}");
            assert_eq!(normalized.normalize(), normalized, "{text}");
            assert_eq!(parse(&path.to_string()), Ok(path.clone()), "{text}");

            // The intermediate passes do not change what is traced.
            let segments = path.to_segments();
            assert_eq!(path.to_absolute().to_segments(), segments, "{text}");
            assert_eq!(path.split_multicalls().to_segments(), segments, "{text}");
            assert_eq!(normalized.to_segments(), segments, "{text}");
        }
    }
}
