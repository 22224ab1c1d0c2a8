//! Water parameter entry form with an "analyze" call to action.

use reefshot_common::Color;

use super::{Screen, TextStyle, frac};
use crate::canvas::Bounds;

/// Field label, entered value, target range hint.
const FIELDS: &[(&str, &str, &str)] = &[
    ("pH", "8.2", "Target: 8.1-8.4"),
    ("Alkalinity (dKH)", "8.5", "Target: 8-12 dKH"),
    ("Calcium (ppm)", "420", "Target: 400-450 ppm"),
    ("Magnesium (ppm)", "1350", "Target: 1300-1400 ppm"),
];

const BUTTON_LABEL: &str = "ANALYZE PARAMETERS";

pub(super) fn draw(screen: &mut Screen<'_>) {
    let (width, height) = (screen.width, screen.height);
    let content_y = screen.centered_header("ENTER MEASUREMENTS");
    let scroll_y = content_y + frac(height, 0.02);

    let input_height = frac(height, 0.08);
    let input_width = width - frac(width, 0.1);
    let input_x = frac(width, 0.05);
    let input_spacing = frac(height, 0.02);

    let label_style = TextStyle::bold(width, 0.035);
    let value_style = TextStyle::regular(width, 0.04);
    let hint_style = TextStyle::regular(width, 0.025);

    for (index, &(label, value, target)) in (0..).zip(FIELDS) {
        let input_y = scroll_y + index * (input_height + input_spacing);
        screen.text((input_x, input_y), label, label_style, Color::BLACK);

        let field_y = input_y + frac(height, 0.04);
        screen.outlined(
            Bounds::from_origin(input_x, field_y, input_width, input_height),
            Color::WHITE,
            3,
        );
        screen.text(
            (input_x + 15, field_y + 15),
            value,
            value_style,
            Color::BLACK,
        );
        screen.text(
            (input_x, field_y + input_height + 5),
            target,
            hint_style,
            Color::GRAY,
        );
    }

    // Analyze button
    let rows = i32::try_from(FIELDS.len()).unwrap_or(i32::MAX);
    let button = Bounds::from_origin(
        frac(width, 0.05),
        scroll_y + rows * (input_height + input_spacing) + frac(height, 0.05),
        width - frac(width, 0.1),
        frac(height, 0.08),
    );
    screen.card(button, Color::AQUAMARINE);

    let button_style = TextStyle::bold(width, 0.045);
    let bbox = screen.measure(BUTTON_LABEL, button_style);
    let label_x = button.x1 + (button.x2 - button.x1 - bbox.width()).div_euclid(2);
    let label_y = button.y1 + (button.y2 - button.y1 - bbox.height()).div_euclid(2);
    screen.text((label_x, label_y), BUTTON_LABEL, button_style, Color::BLACK);
}
