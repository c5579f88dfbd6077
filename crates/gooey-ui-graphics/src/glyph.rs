/// Opaque reference to an image owned by the host (an icon atlas entry, a
/// texture id, an asset index). The effect only positions and fades it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlyphHandle(pub u32);

impl GlyphHandle {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}
