//! The 1024×1024 App Store icon: a monogram on the accent color.

use anyhow::Result;
use reefshot_common::Color;

use crate::canvas::{Bounds, Canvas};
use crate::font::{FontWeight, Fonts};
use crate::views::frac;

/// Edge length of the store icon in pixels.
pub const ICON_SIZE: u32 = 1024;

/// Letters drawn on the icon.
const MONOGRAM: &str = "RB";

/// Draw the app icon.
///
/// The monogram is centered from its measured ink box, so its exact
/// position depends on which face the font chain resolved. The canvas size
/// never does.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn render_icon(fonts: &Fonts) -> Canvas {
    let size = ICON_SIZE as i32;
    let mut canvas = Canvas::new(ICON_SIZE, ICON_SIZE, Color::AQUAMARINE);

    canvas.draw_border(
        Bounds::new(0, 0, size, size),
        frac(size, 0.03),
        Color::BLACK,
    );

    let face = fonts.get(FontWeight::Bold);
    let font_size = frac(size, 0.45) as f32;
    let bbox = canvas.text_bbox(MONOGRAM, face, font_size);
    let x = (size - bbox.width()).div_euclid(2);
    let y = (size - bbox.height()).div_euclid(2);

    canvas.draw_text_with_shadow(
        (x, y),
        MONOGRAM,
        face,
        font_size,
        Color::WHITE,
        Color::BLACK,
        frac(size, 0.02),
    );

    canvas
}

/// Draw the app icon and encode it as PNG bytes.
///
/// # Errors
///
/// Returns an error if the canvas cannot be encoded.
pub fn render_icon_png(fonts: &Fonts) -> Result<Vec<u8>> {
    render_icon(fonts).encode_png()
}
