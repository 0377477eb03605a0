//! Color helpers.

use crate::Vec3;

/// Color type alias (RGB values, linear, non-negative)
pub type Color = Vec3;

/// Tone-mapping and packing for [`Color`].
pub trait ColorExt {
    /// Rescale so the brightest channel is at most 1, keeping the hue.
    /// Colors already within [0, 1] are returned unchanged.
    fn max_to_one(self) -> Self;

    /// Convert to 8 bits per channel. Non-finite channels become 0.
    fn to_rgb8(self) -> [u8; 3];

    /// Pack as `0x00RRGGBB`.
    fn to_packed_rgb(self) -> u32;
}

impl ColorExt for Color {
    fn max_to_one(self) -> Self {
        let max = self.max_element();
        if max > 1.0 {
            self / max
        } else {
            self
        }
    }

    fn to_rgb8(self) -> [u8; 3] {
        let channel = |c: f32| {
            if c.is_finite() {
                (c.clamp(0.0, 1.0) * 255.0) as u8
            } else {
                0
            }
        };
        [channel(self.x), channel(self.y), channel(self.z)]
    }

    fn to_packed_rgb(self) -> u32 {
        let [r, g, b] = self.to_rgb8();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }
}

/// Named colors.
pub mod colors {
    use super::Color;

    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5);
}
