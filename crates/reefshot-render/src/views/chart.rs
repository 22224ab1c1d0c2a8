//! Parameter history: a jagged line chart and the latest measurements.

use reefshot_common::Color;

use super::{Screen, TextStyle, frac};
use crate::canvas::Bounds;

/// Number of plotted samples.
const SAMPLES: i32 = 10;

/// Stroke width of the chart line.
const LINE_WIDTH: u32 = 4;

/// Date, summary of the readings.
const RECENT: &[(&str, &str)] = &[
    ("Jan 15, 2024", "pH: 8.2 | Alk: 8.5 | Ca: 420"),
    ("Jan 12, 2024", "pH: 8.1 | Alk: 8.3 | Ca: 415"),
    ("Jan 10, 2024", "pH: 8.3 | Alk: 8.4 | Ca: 425"),
];

/// Sample points of the chart line inside `chart`: evenly spaced, cycling
/// through 30%, 40%, and 50% of the chart height above its bottom edge.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn line_points(chart: Bounds) -> Vec<(i32, i32)> {
    let chart_width = f64::from(chart.x2 - chart.x1);
    let chart_height = f64::from(chart.y2 - chart.y1);
    (0..SAMPLES)
        .map(|i| {
            let x = chart.x1 + (f64::from(i) / f64::from(SAMPLES - 1) * chart_width) as i32;
            let level = 0.3 + f64::from(i % 3) * 0.1;
            let y = chart.y2 - (level * chart_height) as i32;
            (x, y)
        })
        .collect()
}

pub(super) fn draw(screen: &mut Screen<'_>) {
    let (width, height) = (screen.width, screen.height);
    let content_y = screen.centered_header("HISTORY & TRENDS");

    // Chart area
    let chart = Bounds::from_origin(
        frac(width, 0.05),
        content_y + frac(height, 0.03),
        width - frac(width, 0.1),
        frac(height, 0.4),
    );
    screen.outlined(chart, Color::WHITE, 3);

    for pair in line_points(chart).windows(2) {
        screen
            .canvas
            .draw_line(pair[0], pair[1], LINE_WIDTH, Color::BLACK);
    }

    let axis_style = TextStyle::regular(width, 0.025);
    screen.text((chart.x1 + 10, chart.y1 + 10), "pH", axis_style, Color::BLACK);
    screen.text((chart.x1 + 10, chart.y2 - 20), "8.0", axis_style, Color::GRAY);
    screen.text((chart.x2 - 50, chart.y2 - 20), "8.4", axis_style, Color::GRAY);

    // Recent measurements
    let mut list_y = chart.y2 + frac(height, 0.05);
    screen.text(
        (chart.x1, list_y),
        "RECENT MEASUREMENTS",
        TextStyle::bold(width, 0.04),
        Color::BLACK,
    );
    list_y += frac(height, 0.06);

    let item_height = frac(height, 0.06);
    let item_spacing = frac(height, 0.02);
    let date_style = TextStyle::bold(width, 0.03);
    let summary_style = TextStyle::regular(width, 0.025);

    for (index, &(date, summary)) in (0..).zip(RECENT) {
        let item_y = list_y + index * (item_height + item_spacing);
        screen.outlined(
            Bounds::from_origin(chart.x1, item_y, chart.x2 - chart.x1, item_height),
            Color::WHITE,
            2,
        );
        screen.text((chart.x1 + 10, item_y + 10), date, date_style, Color::BLACK);
        screen.text(
            (chart.x1 + 10, item_y + 35),
            summary,
            summary_style,
            Color::GRAY,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_points_span_chart() {
        let chart = Bounds::from_origin(100, 200, 900, 1000);
        let points = line_points(chart);
        assert_eq!(points.len(), 10);
        assert_eq!(points[0], (100, 900));
        assert_eq!(points[9].0, 1000);
        assert_eq!(points[1].1, 800);
        assert_eq!(points[2].1, 700);
        assert_eq!(points[3].1, 900);
    }
}
