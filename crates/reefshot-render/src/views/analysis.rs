//! AI analysis results: a 2×2 parameter status grid and one recommendation.

use reefshot_common::Color;

use super::{Screen, TextStyle, frac};
use crate::canvas::Bounds;

/// Parameter name, reading, status mark, mark color.
const PARAMETERS: &[(&str, &str, &str, Color)] = &[
    ("pH", "8.2", "✓", Color::AQUAMARINE),
    ("Alkalinity", "8.5 dKH", "✓", Color::AQUAMARINE),
    ("Calcium", "420 ppm", "✓", Color::AQUAMARINE),
    ("Nitrate", "5 ppm", "⚠", Color::ORANGE),
];

const RECOMMENDATION: &str = "• Increase water changes to reduce nitrate";

pub(super) fn draw(screen: &mut Screen<'_>) {
    let (width, height) = (screen.width, screen.height);
    let margin = frac(width, 0.05);
    let header_y = screen.status_bar_height();

    let content_y = screen.centered_header("AI ANALYSIS");
    screen.text(
        (margin, header_y + 20),
        "← BACK",
        TextStyle::bold(width, 0.04),
        Color::BLACK,
    );

    let section_style = TextStyle::bold(width, 0.05);
    let mut scroll_y = content_y;

    // Parameter status grid
    screen.text(
        (margin, scroll_y + 20),
        "PARAMETER STATUS",
        section_style,
        Color::BLACK,
    );
    scroll_y += frac(height, 0.08);

    let card_width = frac(width, 0.42);
    let card_height = frac(height, 0.12);
    let card_spacing = frac(width, 0.03);
    let name_style = TextStyle::bold(width, 0.035);
    let value_style = TextStyle::regular(width, 0.04);
    let mark_style = TextStyle::bold(width, 0.05);

    for (index, &(name, value, mark, mark_color)) in (0..).zip(PARAMETERS) {
        let (row, col) = (index / 2, index % 2);
        let card_x = margin + col * (card_width + card_spacing);
        let card_y = scroll_y + row * (card_height + card_spacing);
        screen.card(
            Bounds::from_origin(card_x, card_y, card_width, card_height),
            Color::WHITE,
        );

        screen.text((card_x + 15, card_y + 10), name, name_style, Color::BLACK);
        screen.text((card_x + 15, card_y + 40), value, value_style, Color::GRAY);
        screen.text(
            (card_x + card_width - 40, card_y + 20),
            mark,
            mark_style,
            mark_color,
        );
    }

    scroll_y += frac(height, 0.3);

    // Recommendations
    screen.text(
        (margin, scroll_y + 20),
        "RECOMMENDATIONS",
        section_style,
        Color::BLACK,
    );
    scroll_y += frac(height, 0.08);

    let recommendation = Bounds::from_origin(
        margin,
        scroll_y,
        width - frac(width, 0.1),
        frac(height, 0.12),
    );
    screen.card(recommendation, Color::WHITE);
    screen.text(
        (recommendation.x1 + 15, recommendation.y1 + 20),
        RECOMMENDATION,
        TextStyle::regular(width, 0.035),
        Color::BLACK,
    );
}
