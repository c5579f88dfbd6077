//! Procedural outlines made of straight and cubic bezier segments.

use crate::geometry::{Point, Rect};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        control1: Point,
        control2: Point,
        to: Point,
    },
    Close,
}

/// A single closed or open outline.
///
/// The gooey boundary needs at most a handful of segments, so the commands
/// live inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 8]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, to: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    pub fn line_to(&mut self, to: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    pub fn cubic_to(&mut self, control1: Point, control2: Point, to: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Bounds of every point and control point.
    ///
    /// A cubic segment never leaves the hull of its control points, so this
    /// is a conservative bound on the painted area.
    pub fn bounds(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        let mut include = |point: Point| {
            bounds = Some(match bounds {
                Some(rect) => rect.union_point(point),
                None => Rect::from_origin_size(point, Default::default()),
            });
        };
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(p),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    include(control1);
                    include(control2);
                    include(to);
                }
                PathCommand::Close => {}
            }
        }
        bounds
    }

    /// Returns a copy reflected about the vertical line `x = axis_x`.
    pub fn mirrored_x(&self, axis_x: f32) -> Path {
        let flip = |p: Point| Point::new(2.0 * axis_x - p.x, p.y);
        let commands = self
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(flip(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(flip(p)),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => PathCommand::CubicTo {
                    control1: flip(control1),
                    control2: flip(control2),
                    to: flip(to),
                },
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Path { commands }
    }

    /// Approximates the outline with line segments, for rasterizers that
    /// only fill polygons.
    pub fn flatten(&self, segments_per_curve: usize) -> Vec<Point> {
        let segments = segments_per_curve.max(1);
        let mut points = Vec::new();
        let mut current = Point::ZERO;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    points.push(p);
                    current = p;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    for step in 1..=segments {
                        let t = step as f32 / segments as f32;
                        points.push(cubic_point(current, control1, control2, to, t));
                    }
                    current = to;
                }
                PathCommand::Close => {}
            }
        }
        points
    }
}

/// Evaluates a cubic bezier at `t` in [0, 1].
pub fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

#[cfg(test)]
#[path = "tests/path_tests.rs"]
mod tests;
