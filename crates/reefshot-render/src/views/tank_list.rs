//! Tank overview: title header, tier badge, tank cards, and the tab bar.

use reefshot_common::Color;

use super::{Screen, TextStyle, frac};
use crate::canvas::Bounds;

/// One tank card: name, volume, whether it is active.
struct Tank {
    name: &'static str,
    volume: &'static str,
    active: bool,
}

const TANKS: &[Tank] = &[
    Tank {
        name: "Reef Tank 1",
        volume: "125 gal",
        active: true,
    },
    Tank {
        name: "Nano Reef",
        volume: "30 gal",
        active: true,
    },
    Tank {
        name: "Frag Tank",
        volume: "40 gal",
        active: false,
    },
];

/// Tab labels, left to right. The first one is selected.
const TABS: &[&str] = &["TANKS", "MEASURE", "HISTORY", "SETTINGS"];

pub(super) fn draw(screen: &mut Screen<'_>) {
    let (width, height) = (screen.width, screen.height);

    let status_height = screen.status_bar_height();
    screen
        .canvas
        .fill_rect(Bounds::new(0, 0, width, status_height), Color::WHITE);

    // Header
    let header_height = frac(height, 0.12);
    let header_y = status_height;
    screen.canvas.fill_rect(
        Bounds::from_origin(0, header_y, width, header_height),
        Color::WHITE,
    );

    let title = "REEFBUDDY";
    let title_style = TextStyle::bold(width, 0.08);
    let bbox = screen.measure(title, title_style);
    let title_x = frac(width, 0.05);
    let title_y = header_y + (header_height - bbox.height()).div_euclid(2);
    screen.text((title_x, title_y), title, title_style, Color::BLACK);

    // Free tier badge
    let badge = Bounds::from_origin(
        width - frac(width, 0.25),
        header_y + frac(header_height, 0.3),
        frac(width, 0.2),
        frac(header_height, 0.4),
    );
    screen.outlined(badge, Color::AQUAMARINE, 3);
    screen.text(
        (badge.x1 + 10, badge.y1 + 5),
        "FREE",
        TextStyle::bold(width, 0.03),
        Color::BLACK,
    );

    // Tank cards, leaving room for the tab bar
    let content_y = header_y + header_height;
    let content_height = height - content_y - frac(height, 0.1);
    let card_spacing = frac(height, 0.03);
    let card_height = frac(content_height, 0.25);
    let card_width = width - frac(width, 0.1);
    let card_x = frac(width, 0.05);

    let name_style = TextStyle::bold(width, 0.05);
    let volume_style = TextStyle::regular(width, 0.035);
    let badge_style = TextStyle::bold(width, 0.025);

    for (row, tank) in (0..).zip(TANKS) {
        let card_y = content_y + (card_height + card_spacing) * row + frac(height, 0.02);
        let card = Bounds::from_origin(card_x, card_y, card_width, card_height);
        screen.card(card, Color::WHITE);

        screen.text((card_x + 20, card_y + 15), tank.name, name_style, Color::BLACK);
        screen.text(
            (card_x + 20, card_y + 50),
            tank.volume,
            volume_style,
            Color::GRAY,
        );

        if tank.active {
            let status = Bounds::from_origin(
                card_x + card_width - frac(width, 0.15),
                card_y + 15,
                frac(width, 0.12),
                frac(card_height, 0.25),
            );
            screen.outlined(status, Color::AQUAMARINE, 2);
            screen.text(
                (status.x1 + 5, status.y1 + 3),
                "ACTIVE",
                badge_style,
                Color::BLACK,
            );
        }
    }

    // Tab bar
    let tab_y = height - frac(height, 0.1);
    screen.outlined(Bounds::new(0, tab_y, width, height), Color::WHITE, 3);

    let tab_count = i32::try_from(TABS.len()).unwrap_or(i32::MAX);
    let tab_width = width / tab_count;
    let tab_style = TextStyle::bold(width, 0.025);
    for (index, tab) in (0..).zip(TABS) {
        let tab_x = index * tab_width;
        if index == 0 {
            screen.canvas.fill_rect(
                Bounds::new(tab_x, tab_y, tab_x + tab_width, height),
                Color::AQUAMARINE,
            );
        }
        screen.text(
            (tab_x + tab_width / 4, tab_y + 10),
            tab,
            tab_style,
            Color::BLACK,
        );
    }
}
