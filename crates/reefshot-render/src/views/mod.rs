//! Mock UI screens for the store screenshots.
//!
//! Each view is a pure function from a canvas size to a fully drawn canvas.
//! Every offset and font size is a fixed fraction of the canvas dimensions,
//! truncated toward zero, so the same layout scales across iPhone and iPad
//! sizes. A few paddings (card insets, shadow offsets, border widths) are
//! absolute pixel counts and stay constant across sizes.

mod analysis;
mod chart;
mod measurement;
mod tank_list;

use anyhow::Result;
use reefshot_common::Color;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::canvas::{Bounds, Canvas};
use crate::font::{FontWeight, Fonts};
use crate::font_metrics::TextBox;

/// Offset of every card and button shadow, in pixels.
const SHADOW_OFFSET: i32 = 5;

/// Border width of cards, fields, and buttons, in pixels.
const CARD_BORDER: i32 = 3;

/// Top padding of a centered screen title below the header's top edge.
const TITLE_TOP_PADDING: i32 = 15;

/// One mock screen of the app.
///
/// Parses from and displays as its kebab-case key (`tank-list`, `analysis`,
/// `measurement`, `chart`), which is also the file-name suffix.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum View {
    /// Tank overview with cards and the tab bar.
    TankList,
    /// AI analysis results: parameter grid and a recommendation.
    Analysis,
    /// Water parameter entry form.
    Measurement,
    /// Parameter history chart and recent measurements.
    Chart,
}

impl View {
    /// Human-readable screen name.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TankList => "Tank List",
            Self::Analysis => "Analysis",
            Self::Measurement => "Measurement Entry",
            Self::Chart => "History & Charts",
        }
    }
}

/// Draw `view` on a new `width × height` canvas.
#[must_use]
pub fn render(view: View, width: u32, height: u32, fonts: &Fonts) -> Canvas {
    let mut screen = Screen::new(width, height, fonts);
    match view {
        View::TankList => tank_list::draw(&mut screen),
        View::Analysis => analysis::draw(&mut screen),
        View::Measurement => measurement::draw(&mut screen),
        View::Chart => chart::draw(&mut screen),
    }
    screen.canvas
}

/// Draw `view` and encode it as PNG bytes.
///
/// # Errors
///
/// Returns an error if the canvas cannot be encoded.
pub fn render_png(view: View, width: u32, height: u32, fonts: &Fonts) -> Result<Vec<u8>> {
    render(view, width, height, fonts).encode_png()
}

/// `int(dim * fraction)`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn frac(dim: i32, fraction: f64) -> i32 {
    (f64::from(dim) * fraction) as i32
}

/// Font weight and pixel size for one run of text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextStyle {
    weight: FontWeight,
    size: f32,
}

impl TextStyle {
    /// Bold text sized as a fraction of the canvas width.
    pub(crate) fn bold(width: i32, fraction: f64) -> Self {
        Self::sized(FontWeight::Bold, width, fraction)
    }

    /// Regular text sized as a fraction of the canvas width.
    pub(crate) fn regular(width: i32, fraction: f64) -> Self {
        Self::sized(FontWeight::Regular, width, fraction)
    }

    #[allow(clippy::cast_precision_loss)]
    fn sized(weight: FontWeight, width: i32, fraction: f64) -> Self {
        Self {
            weight,
            size: frac(width, fraction) as f32,
        }
    }
}

/// A canvas being drawn together with its fonts and signed dimensions.
pub(crate) struct Screen<'a> {
    pub canvas: Canvas,
    pub fonts: &'a Fonts,
    pub width: i32,
    pub height: i32,
}

impl<'a> Screen<'a> {
    fn new(width: u32, height: u32, fonts: &'a Fonts) -> Self {
        Self {
            canvas: Canvas::new(width, height, Color::WHITE),
            fonts,
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    /// Draw `text` with its line box at `origin`.
    pub(crate) fn text(&mut self, origin: (i32, i32), text: &str, style: TextStyle, color: Color) {
        let face = self.fonts.get(style.weight);
        self.canvas.draw_text(origin, text, face, style.size, color);
    }

    /// Measure `text` in `style`.
    pub(crate) fn measure(&self, text: &str, style: TextStyle) -> TextBox {
        self.canvas
            .text_bbox(text, self.fonts.get(style.weight), style.size)
    }

    /// A flat rectangle with a hard black shadow and a black border.
    pub(crate) fn card(&mut self, bounds: Bounds, fill: Color) {
        self.canvas
            .fill_with_shadow(bounds, SHADOW_OFFSET, fill, Color::BLACK);
        self.canvas.draw_border(bounds, CARD_BORDER, Color::BLACK);
    }

    /// A flat rectangle with a black border and no shadow.
    pub(crate) fn outlined(&mut self, bounds: Bounds, fill: Color, border: i32) {
        self.canvas.fill_rect(bounds, fill);
        self.canvas.draw_border(bounds, border, Color::BLACK);
    }

    /// Status bar height (6% of the screen).
    pub(crate) fn status_bar_height(&self) -> i32 {
        frac(self.height, 0.06)
    }

    /// White header band below the status bar with a horizontally centered
    /// bold title. Returns the header's bottom edge.
    pub(crate) fn centered_header(&mut self, title: &str) -> i32 {
        let header_y = self.status_bar_height();
        let header_height = frac(self.height, 0.1);
        self.canvas.fill_rect(
            Bounds::from_origin(0, header_y, self.width, header_height),
            Color::WHITE,
        );

        let style = TextStyle::bold(self.width, 0.06);
        let bbox = self.measure(title, style);
        let title_x = (self.width - bbox.width()).div_euclid(2);
        self.text(
            (title_x, header_y + TITLE_TOP_PADDING),
            title,
            style,
            Color::BLACK,
        );

        header_y + header_height
    }
}
