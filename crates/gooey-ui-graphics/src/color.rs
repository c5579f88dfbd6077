//! Fill colors for the effect, straight (non-premultiplied) RGBA in [0, 1].

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);

    /// Opaque color from float channels.
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self(red, green, blue, 1.0)
    }

    /// Opaque color from 8-bit channels, the way action colors are usually specified.
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(red as f32 / 255.0, green as f32 / 255.0, blue as f32 / 255.0)
    }

    /// Fully transparent colors paint nothing.
    pub fn is_visible(&self) -> bool {
        self.3 > 0.0
    }
}
