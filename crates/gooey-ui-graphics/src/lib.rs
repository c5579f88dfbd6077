//! Pure math/data for drawing the gooey swipe effect
//!
//! Geometry primitives, paths, colors and the recording draw scope used by
//! the effect to describe its boundary to whatever surface paints it.

mod color;
mod draw;
mod geometry;
mod glyph;
mod path;

pub use color::*;
pub use draw::*;
pub use geometry::*;
pub use glyph::*;
pub use path::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::draw::{DrawPrimitive, DrawScope, DrawScopeDefault};
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::glyph::GlyphHandle;
    pub use crate::path::{Path, PathCommand};
}
