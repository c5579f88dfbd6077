use crate::color::Color;
use crate::geometry::{Rect, Size};
use crate::glyph::GlyphHandle;
use crate::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Path {
        path: Path,
        color: Color,
    },
    Glyph {
        glyph: GlyphHandle,
        rect: Rect,
        alpha: f32,
    },
}

pub trait DrawScope {
    fn size(&self) -> Size;
    fn draw_path(&mut self, path: &Path, color: Color);
    /// Draws the glyph scaled into `rect`.
    fn draw_glyph(&mut self, glyph: GlyphHandle, rect: Rect, alpha: f32);
    fn into_primitives(self) -> Vec<DrawPrimitive>;
}

/// Records primitives instead of painting them.
#[derive(Default)]
pub struct DrawScopeDefault {
    size: Size,
    primitives: Vec<DrawPrimitive>,
}

impl DrawScopeDefault {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }
}

impl DrawScope for DrawScopeDefault {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_path(&mut self, path: &Path, color: Color) {
        if path.is_empty() || !color.is_visible() {
            return;
        }
        self.primitives.push(DrawPrimitive::Path {
            path: path.clone(),
            color,
        });
    }

    fn draw_glyph(&mut self, glyph: GlyphHandle, rect: Rect, alpha: f32) {
        if alpha <= 0.0 || rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        self.primitives.push(DrawPrimitive::Glyph { glyph, rect, alpha });
    }

    fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}
