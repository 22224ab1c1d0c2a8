//! Text measurement and glyph placement.
//!
//! Drawing and measuring share one placement routine, so a bounding box
//! computed here always matches the pixels [`Canvas::draw_text`] paints.
//!
//! [`Canvas::draw_text`]: crate::canvas::Canvas::draw_text

use crate::font::Face;

/// Average advance of a built-in glyph, as a fraction of the font size.
const BUILTIN_ADVANCE_RATIO: f32 = 0.6;

/// Distance from the top of the line box to the baseline for the built-in
/// face.
const BUILTIN_ASCENT_RATIO: f32 = 0.8;

/// Height of a built-in placeholder bar (its x-height).
const BUILTIN_X_HEIGHT_RATIO: f32 = 0.5;

/// Ink bounding box of a piece of text, relative to its draw origin.
///
/// `left`/`top` are inclusive, `right`/`bottom` exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBox {
    /// Leftmost inked column.
    pub left: i32,
    /// Topmost inked row.
    pub top: i32,
    /// One past the rightmost inked column.
    pub right: i32,
    /// One past the lowest inked row.
    pub bottom: i32,
}

impl TextBox {
    /// Horizontal extent of the ink.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Vertical extent of the ink.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    fn union(self, other: Self) -> Self {
        Self {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Pixels a placed glyph covers.
pub(crate) enum GlyphInk {
    /// Per-pixel coverage, row-major, `width * height` bytes.
    Coverage(Vec<u8>),
    /// Every pixel fully covered.
    Solid,
}

/// A glyph positioned relative to the text origin.
pub(crate) struct PlacedGlyph {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
    pub ink: GlyphInk,
}

impl PlacedGlyph {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn ink_box(&self) -> TextBox {
        TextBox {
            left: self.x,
            top: self.y,
            right: self.x + self.width as i32,
            bottom: self.y + self.height as i32,
        }
    }
}

impl Face {
    /// Distance from the top of the line box to the baseline.
    #[must_use]
    pub fn ascent(&self, size: f32) -> f32 {
        match self {
            Self::Truetype(font) => font
                .horizontal_line_metrics(size)
                .map_or(size, |metrics| metrics.ascent),
            Self::Builtin => size * BUILTIN_ASCENT_RATIO,
        }
    }

    /// Position every inked glyph of `text` relative to a `(0, 0)` origin.
    ///
    /// Whitespace advances the cursor without producing a glyph; control
    /// characters are ignored. A non-positive size places nothing.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub(crate) fn place_glyphs(&self, text: &str, size: f32) -> Vec<PlacedGlyph> {
        if size <= 0.0 || !size.is_finite() {
            return Vec::new();
        }

        let baseline = self.ascent(size).round() as i32;
        let mut glyphs = Vec::new();
        let mut cursor_x = 0.0_f32;

        for ch in text.chars().filter(|ch| !ch.is_control()) {
            match self {
                Self::Truetype(font) => {
                    let (metrics, bitmap) = font.rasterize(ch, size);
                    if metrics.width > 0 && metrics.height > 0 {
                        glyphs.push(PlacedGlyph {
                            x: cursor_x as i32 + metrics.xmin,
                            y: baseline - metrics.ymin - metrics.height as i32,
                            width: metrics.width,
                            height: metrics.height,
                            ink: GlyphInk::Coverage(bitmap),
                        });
                    }
                    cursor_x += metrics.advance_width;
                }
                Self::Builtin => {
                    let advance = size * BUILTIN_ADVANCE_RATIO;
                    if !ch.is_whitespace() {
                        let bar_height = (size * BUILTIN_X_HEIGHT_RATIO).round().max(1.0);
                        let bar_width = (advance * 0.8).round().max(1.0);
                        glyphs.push(PlacedGlyph {
                            x: (advance.mul_add(0.1, cursor_x)).round() as i32,
                            y: baseline - bar_height as i32,
                            width: bar_width as usize,
                            height: bar_height as usize,
                            ink: GlyphInk::Solid,
                        });
                    }
                    cursor_x += advance;
                }
            }
        }

        glyphs
    }

    /// Ink bounding box of `text` drawn at `(0, 0)`.
    ///
    /// Text without any ink (empty or all whitespace) yields a zero box.
    #[must_use]
    pub fn text_bbox(&self, text: &str, size: f32) -> TextBox {
        self.place_glyphs(text, size)
            .iter()
            .map(PlacedGlyph::ink_box)
            .reduce(TextBox::union)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_zero_box() {
        assert_eq!(Face::Builtin.text_bbox("", 40.0), TextBox::default());
        assert_eq!(Face::Builtin.text_bbox("   ", 40.0), TextBox::default());
    }

    #[test]
    fn test_builtin_box_grows_with_text() {
        let one = Face::Builtin.text_bbox("A", 50.0);
        let two = Face::Builtin.text_bbox("AA", 50.0);
        assert_eq!(one.height(), two.height());
        assert_eq!(two.width() - one.width(), 30);
    }

    #[test]
    fn test_builtin_box_sits_on_baseline() {
        let bbox = Face::Builtin.text_bbox("X", 100.0);
        assert_eq!(bbox.bottom, 80);
        assert_eq!(bbox.top, 30);
        assert_eq!(bbox.left, 6);
        assert_eq!(bbox.width(), 48);
    }

    #[test]
    fn test_zero_size_places_nothing() {
        assert!(Face::Builtin.place_glyphs("ABC", 0.0).is_empty());
    }
}
