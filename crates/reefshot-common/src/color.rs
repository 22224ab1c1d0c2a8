//! Brand palette for the generated store assets.
//!
//! Every shape and glyph the renderer paints uses one of these flat colors.
//! There are no gradients and no translucency: the "brutalist" look is solid
//! fills, hard black borders, and unblurred shadows.

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure white, the canvas background.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Pure black, used for borders, shadows, and primary text.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Accent color `#00FFD1`.
    pub const AQUAMARINE: Self = Self::rgb(0, 255, 209);
    /// Warning accent `#FF3D00`.
    pub const ORANGE: Self = Self::rgb(255, 61, 0);
    /// Secondary text.
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    /// Subtle surface fill.
    pub const LIGHT_GRAY: Self = Self::rgb(240, 240, 240);

    /// Create a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an `[r, g, b]` array.
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Blend `self` over `background` with the given coverage (0 = background,
    /// 255 = `self`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn blend_over(self, background: Self, coverage: u8) -> Self {
        let a = f32::from(coverage) / 255.0;
        let inv_a = 1.0 - a;
        let mix = |fg: u8, bg: u8| f32::from(fg).mul_add(a, f32::from(bg) * inv_a).round() as u8;

        Self {
            r: mix(self.r, background.r),
            g: mix(self.g, background.g),
            b: mix(self.b, background.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_extremes() {
        assert_eq!(Color::BLACK.blend_over(Color::WHITE, 255), Color::BLACK);
        assert_eq!(Color::BLACK.blend_over(Color::WHITE, 0), Color::WHITE);
    }

    #[test]
    fn test_blend_midpoint() {
        let mid = Color::BLACK.blend_over(Color::WHITE, 128);
        assert_eq!(mid, Color::rgb(127, 127, 127));
    }
}
