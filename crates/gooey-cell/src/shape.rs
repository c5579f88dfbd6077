//! Procedural boundary of the gooey blob.
//!
//! Shapes are built for a swipe to the right, growing out of the left edge,
//! and mirrored for a swipe to the left. Two cubic segments meet at an apex
//! on the anchor line; the apex pushes out with progress until the
//! threshold, after which the base widens and flattens until the shape
//! covers the whole surface at 1.0.

use gooey_ui_graphics::{DrawScope, Path, Point, Rect, Size};

use crate::config::EffectConfig;
use crate::direction::SwipeDirection;

/// Glyph side at full scale, as a fraction of the surface height.
const GLYPH_SIZE_FRACTION: f32 = 0.3;
/// Half-height of the blob base at zero and full stretch.
const BASE_SPREAD_MIN: f32 = 0.35;
const BASE_SPREAD_GROWTH: f32 = 0.25;
/// How far along each half the control points pull toward the apex line.
const SHOULDER: f32 = 0.5;
const APEX_TANGENT: f32 = 0.45;

/// Everything the shape depends on besides progress. Fixed per effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryParams {
    pub bounds: Size,
    /// Anchor height as a fraction of the surface height.
    pub vertical_position: f32,
    pub direction: SwipeDirection,
    pub gap_progress_value: f32,
    pub bulge_fraction: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPlacement {
    pub center: Point,
    pub scale: f32,
    pub alpha: f32,
}

/// Boundary at one progress value.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryShape {
    pub path: Path,
    pub glyph: GlyphPlacement,
    /// Distance the boundary reaches in from its edge.
    pub extent: f32,
    /// 0 until the threshold, then rises to 1 when the surface is covered.
    pub coverage: f32,
    glyph_side: f32,
}

impl BoundaryParams {
    pub fn max_bulge(&self) -> f32 {
        (self.bounds.height * self.bulge_fraction).clamp(0.0, self.bounds.width.max(0.0))
    }

    pub fn shape(&self, progress: f32) -> BoundaryShape {
        let width = self.bounds.width.max(0.0);
        let height = self.bounds.height.max(0.0);
        let progress = progress.clamp(0.0, 1.0);
        let gap = self.gap_progress_value;

        let (stretch, coverage) = if progress < gap {
            (progress / gap, 0.0)
        } else {
            (1.0, (progress - gap) / (1.0 - gap))
        };

        let anchor_y = self.vertical_position.clamp(0.0, 1.0) * height;
        let spread = height * (BASE_SPREAD_MIN + BASE_SPREAD_GROWTH * stretch);
        let top = lerp((anchor_y - spread).max(0.0), 0.0, coverage);
        let bottom = lerp((anchor_y + spread).min(height), height, coverage);
        let flat = width * coverage;
        let apex = flat + self.max_bulge() * stretch * (1.0 - coverage);

        let mut path = Path::new();
        path.move_to(Point::new(0.0, top))
            .line_to(Point::new(flat, top))
            .cubic_to(
                Point::new(flat, lerp(top, anchor_y, SHOULDER)),
                Point::new(apex, anchor_y - (anchor_y - top) * APEX_TANGENT),
                Point::new(apex, anchor_y),
            )
            .cubic_to(
                Point::new(apex, anchor_y + (bottom - anchor_y) * APEX_TANGENT),
                Point::new(flat, lerp(anchor_y, bottom, SHOULDER)),
                Point::new(flat, bottom),
            )
            .line_to(Point::new(0.0, bottom))
            .close();

        let mut center = Point::new(apex * 0.5, anchor_y);
        if self.direction == SwipeDirection::ToLeft {
            path = path.mirrored_x(width * 0.5);
            center.x = width - center.x;
        }

        BoundaryShape {
            path,
            glyph: GlyphPlacement {
                center,
                scale: stretch,
                alpha: stretch,
            },
            extent: apex,
            coverage,
            glyph_side: height * GLYPH_SIZE_FRACTION,
        }
    }
}

impl BoundaryShape {
    /// True while the boundary still lies on the surface edge.
    pub fn is_collapsed(&self) -> bool {
        self.extent <= 0.0
    }

    pub fn glyph_rect(&self) -> Rect {
        let side = self.glyph_side * self.glyph.scale;
        Rect::from_center(self.glyph.center, Size::new(side, side))
    }

    /// Paints the filled boundary and the glyph. Nothing is drawn while collapsed.
    pub fn draw<S: DrawScope>(&self, scope: &mut S, config: &EffectConfig) {
        if self.is_collapsed() {
            return;
        }
        scope.draw_path(&self.path, config.color);
        scope.draw_glyph(config.glyph, self.glyph_rect(), self.glyph.alpha);
    }
}

fn lerp(from: f32, to: f32, fraction: f32) -> f32 {
    from + (to - from) * fraction
}

#[cfg(test)]
#[path = "tests/shape_tests.rs"]
mod tests;
