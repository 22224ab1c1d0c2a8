//! Software canvas for procedural asset drawing.
//!
//! Executes drawing primitives directly on an RGB pixel buffer, using
//! fontdue for glyph rasterization.
//!
//! # Coordinates
//!
//! All shapes take inclusive integer [`Bounds`]: `Bounds::new(0, 0, 9, 9)`
//! covers a 10×10 block. Anything outside the canvas is clipped, so layouts
//! computed from canvas fractions never need to guard their own edges.
//!
//! The buffer has no alpha channel. App Store icons must be opaque, and
//! every other asset is drawn on an opaque background anyway.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgb, RgbImage};
use reefshot_common::Color;

use crate::font::Face;
use crate::font_metrics::{GlyphInk, TextBox};

/// An inclusive pixel rectangle `(x1, y1)`–`(x2, y2)`.
///
/// A rectangle with `x2 < x1` or `y2 < y1` is empty and paints nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Left edge.
    pub x1: i32,
    /// Top edge.
    pub y1: i32,
    /// Right edge (inclusive).
    pub x2: i32,
    /// Bottom edge (inclusive).
    pub y2: i32,
}

impl Bounds {
    /// Create bounds from two corners.
    #[must_use]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Bounds spanning `(x, y)` to `(x + width, y + height)`.
    ///
    /// Both corners are inclusive, so the painted block is one pixel larger
    /// than `width × height` in each direction.
    #[must_use]
    pub const fn from_origin(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// The same rectangle moved by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }

    /// Whether the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.x2 < self.x1 || self.y2 < self.y1
    }
}

/// A fixed-size opaque RGB drawing surface.
pub struct Canvas {
    buffer: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            buffer: RgbImage::from_pixel(width, height, Rgb(background.channels())),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Color of the pixel at `(x, y)`, or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.buffer
            .get_pixel_checked(x, y)
            .map(|&Rgb([r, g, b])| Color::rgb(r, g, b))
    }

    /// Signed extent for clipping arithmetic.
    fn extent(&self) -> (i32, i32) {
        let w = i32::try_from(self.width()).unwrap_or(i32::MAX);
        let h = i32::try_from(self.height()).unwrap_or(i32::MAX);
        (w, h)
    }

    /// Fill a rectangle with a solid color.
    #[allow(clippy::cast_sign_loss)]
    pub fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        let (w, h) = self.extent();
        let clipped = Bounds::new(
            bounds.x1.max(0),
            bounds.y1.max(0),
            bounds.x2.min(w - 1),
            bounds.y2.min(h - 1),
        );
        if clipped.is_empty() {
            return;
        }

        let rgb = Rgb(color.channels());
        for y in clipped.y1..=clipped.y2 {
            for x in clipped.x1..=clipped.x2 {
                self.buffer.put_pixel(x as u32, y as u32, rgb);
            }
        }
    }

    /// Draw a border of `width` pixels just inside `bounds` as four edge
    /// rectangles.
    pub fn draw_border(&mut self, bounds: Bounds, width: i32, color: Color) {
        let Bounds { x1, y1, x2, y2 } = bounds;
        self.fill_rect(Bounds::new(x1, y1, x2, y1 + width), color);
        self.fill_rect(Bounds::new(x1, y2 - width, x2, y2), color);
        self.fill_rect(Bounds::new(x1, y1, x1 + width, y2), color);
        self.fill_rect(Bounds::new(x2 - width, y1, x2, y2), color);
    }

    /// Fill `bounds` on top of a hard shadow: the same rectangle shifted by
    /// `offset` pixels right and down, painted in `shadow` first.
    pub fn fill_with_shadow(&mut self, bounds: Bounds, offset: i32, fill: Color, shadow: Color) {
        self.fill_rect(bounds.offset(offset, offset), shadow);
        self.fill_rect(bounds, fill);
    }

    /// Draw a straight line with a square pen of side `width`.
    ///
    /// The pen is stamped at every point of the Bresenham path between the
    /// two endpoints, both of which are included.
    #[allow(clippy::cast_possible_wrap)]
    pub fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), width: u32, color: Color) {
        let side = width.max(1) as i32;
        let lo = -(side / 2);
        let hi = lo + side - 1;

        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.fill_rect(Bounds::new(x + lo, y + lo, x + hi, y + hi), color);
            if (x, y) == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw `text` with its line box's top-left corner at `origin`.
    ///
    /// Glyph coverage is blended onto whatever is already on the canvas.
    /// Control characters are skipped.
    #[allow(clippy::cast_sign_loss)]
    pub fn draw_text(&mut self, origin: (i32, i32), text: &str, face: &Face, size: f32, color: Color) {
        let (w, h) = self.extent();

        for glyph in face.place_glyphs(text, size) {
            let gx = origin.0 + glyph.x;
            let gy = origin.1 + glyph.y;

            for row in 0..glyph.height {
                for col in 0..glyph.width {
                    let coverage = match &glyph.ink {
                        GlyphInk::Coverage(bitmap) => bitmap[row * glyph.width + col],
                        GlyphInk::Solid => u8::MAX,
                    };
                    if coverage == 0 {
                        continue;
                    }

                    let (Ok(col), Ok(row)) = (i32::try_from(col), i32::try_from(row)) else {
                        continue;
                    };
                    let (px, py) = (gx + col, gy + row);
                    if px < 0 || py < 0 || px >= w || py >= h {
                        continue;
                    }

                    let Rgb([r, g, b]) = *self.buffer.get_pixel(px as u32, py as u32);
                    let blended = color.blend_over(Color::rgb(r, g, b), coverage);
                    self.buffer
                        .put_pixel(px as u32, py as u32, Rgb(blended.channels()));
                }
            }
        }
    }

    /// Draw `text` over a hard shadow shifted by `offset` pixels right and
    /// down.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text_with_shadow(
        &mut self,
        origin: (i32, i32),
        text: &str,
        face: &Face,
        size: f32,
        color: Color,
        shadow: Color,
        offset: i32,
    ) {
        self.draw_text((origin.0 + offset, origin.1 + offset), text, face, size, shadow);
        self.draw_text(origin, text, face, size, color);
    }

    /// Ink bounding box of `text` relative to a draw origin of `(0, 0)`.
    #[must_use]
    pub fn text_bbox(&self, text: &str, face: &Face, size: f32) -> TextBox {
        face.text_bbox(text, size)
    }

    /// Encode the canvas as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the PNG encoder rejects the buffer (for example a
    /// zero-sized canvas).
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.buffer
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .context("failed to encode canvas as PNG")?;
        Ok(bytes)
    }

    /// Save the canvas to a file, choosing the format from the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be saved to the given path.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.buffer
            .save(path)
            .with_context(|| format!("failed to save image to '{}'", path.display()))
    }

    /// Borrow the underlying pixel buffer.
    #[must_use]
    pub const fn as_image(&self) -> &RgbImage {
        &self.buffer
    }

    /// Consume the canvas, returning its pixel buffer.
    #[must_use]
    pub fn into_image(self) -> RgbImage {
        self.buffer
    }
}
