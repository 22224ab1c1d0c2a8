//! Integration tests for the mockup and icon renderers.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use reefshot_common::Color;
use reefshot_render::{
    AssetPlan, Canvas, DEVICE_PROFILES, Face, FontChain, FontSource, FontWeight, Fonts, ICON_SIZE,
    TextBox, View, find_device, render, render_icon, render_icon_png, render_png,
};
use strum::IntoEnumIterator;

#[test]
fn test_every_device_and_view_has_exact_dimensions() {
    let fonts = Fonts::builtin();
    for device in DEVICE_PROFILES {
        for view in View::iter() {
            let canvas = render(view, device.width, device.height, &fonts);
            assert_eq!(
                (canvas.width(), canvas.height()),
                (device.width, device.height),
                "{} {view}",
                device.key
            );
        }
    }
}

#[test]
fn test_png_bytes_decode_to_requested_size() {
    let fonts = Fonts::builtin();
    let bytes = render_png(View::Chart, 1242, 2208, &fonts).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (1242, 2208));
}

#[test]
fn test_icon_is_1024_with_builtin_font() {
    let canvas = render_icon(&Fonts::builtin());
    assert_eq!((canvas.width(), canvas.height()), (ICON_SIZE, ICON_SIZE));
    assert_eq!(ICON_SIZE, 1024);
}

#[test]
fn test_icon_is_1024_with_system_fonts() {
    // Whatever the machine has installed, only the ink position may change.
    let canvas = render_icon(&Fonts::system());
    assert_eq!((canvas.width(), canvas.height()), (1024, 1024));
}

#[test]
fn test_icon_png_is_opaque_rgb() {
    let bytes = render_icon_png(&Fonts::builtin()).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.color(), image::ColorType::Rgb8);
}

#[test]
fn test_rendering_is_deterministic() {
    let fonts = Fonts::builtin();
    let device = find_device("iphone_55").unwrap();
    for view in View::iter() {
        let first = render_png(view, device.width, device.height, &fonts).unwrap();
        let second = render_png(view, device.width, device.height, &fonts).unwrap();
        assert!(first == second, "{view} differs between runs");
    }
}

#[test]
fn test_views_differ_from_each_other() {
    let fonts = Fonts::builtin();
    let images: Vec<_> = View::iter()
        .map(|view| render(view, 600, 1200, &fonts).into_image())
        .collect();
    for (i, a) in images.iter().enumerate() {
        for b in &images[i + 1..] {
            assert_ne!(a.as_raw(), b.as_raw());
        }
    }
}

#[test]
fn test_tank_list_selected_tab_is_aquamarine() {
    let canvas = render(View::TankList, 1290, 2796, &Fonts::builtin());
    // Inside the first tab, below its label row and above the bottom border.
    let tab_y = 2796 - 279;
    assert_eq!(canvas.pixel(100, tab_y + 200), Some(Color::AQUAMARINE));
    // The last tab stays white.
    assert_eq!(canvas.pixel(1290 - 20, tab_y + 200), Some(Color::WHITE));
}

#[test]
fn test_measurement_button_is_aquamarine() {
    let fonts = Fonts::builtin();
    let canvas = render(View::Measurement, 1290, 2796, &fonts);
    let black_or_accent = |x, y| {
        matches!(
            canvas.pixel(x, y),
            Some(Color::AQUAMARINE | Color::BLACK)
        )
    };
    // Status bar, header, top padding, four field rows, then the gap above
    // the button.
    let button_top = 167 + 279 + 55 + 4 * (223 + 55) + 139;
    assert!(black_or_accent(80, u32::try_from(button_top + 20).unwrap()));
}

#[test]
fn test_full_plan_renders_declared_dimensions() {
    let fonts = Fonts::builtin();
    let plan = AssetPlan::full();
    // Spot-check the icon and one screenshot per device.
    for (_, assets) in plan.by_device() {
        let asset = assets[0];
        let canvas = asset.render(&fonts);
        assert_eq!((canvas.width(), canvas.height()), asset.dimensions());
    }
    let icon = &plan.assets()[0];
    assert_eq!(icon.render(&fonts).width(), icon.dimensions().0);
}

/// Bounding box of every pixel that differs from `background`, relative to
/// `origin`.
fn ink_box(canvas: &Canvas, background: Color, origin: (i32, i32)) -> Option<TextBox> {
    let mut ink: Option<TextBox> = None;
    for (x, y, pixel) in canvas.as_image().enumerate_pixels() {
        if pixel.0 == background.channels() {
            continue;
        }
        let x = i32::try_from(x).unwrap() - origin.0;
        let y = i32::try_from(y).unwrap() - origin.1;
        let b = ink.get_or_insert(TextBox {
            left: x,
            top: y,
            right: x + 1,
            bottom: y + 1,
        });
        b.left = b.left.min(x);
        b.top = b.top.min(y);
        b.right = b.right.max(x + 1);
        b.bottom = b.bottom.max(y + 1);
    }
    ink
}

#[test]
fn test_truetype_text_box_matches_painted_ink() {
    let face = FontChain::system(FontWeight::Bold).resolve();
    if face.is_builtin() {
        // No system font on this machine.
        return;
    }

    let origin = (10, 10);
    let mut canvas = Canvas::new(400, 200, Color::WHITE);
    canvas.draw_text(origin, "RB", &face, 80.0, Color::BLACK);

    let bbox = canvas.text_bbox("RB", &face, 80.0);
    assert!(bbox.width() > 0 && bbox.height() > 0);
    assert_eq!(ink_box(&canvas, Color::WHITE, origin), Some(bbox));

    // Antialiased edges are blended, not just black and white.
    let blended = canvas
        .as_image()
        .pixels()
        .any(|p| p.0 != Color::WHITE.channels() && p.0 != Color::BLACK.channels());
    assert!(blended);
}

#[test]
fn test_font_bytes_source_loads_truetype() {
    let chain = FontChain::system(FontWeight::Regular);
    let Some(path) = chain.sources().iter().find_map(|source| match source {
        FontSource::File(path) if source.load().is_some() => Some(path.clone()),
        _ => None,
    }) else {
        return;
    };

    let bytes = std::fs::read(path).unwrap();
    let face = FontSource::Bytes(bytes).load().unwrap();
    assert!(matches!(face, Face::Truetype(_)));
    assert!(
        FontChain::new(vec![FontSource::Bytes(Vec::new())])
            .resolve()
            .is_builtin()
    );
}

#[test]
fn test_rendering_with_system_fonts_is_deterministic() {
    let fonts = Fonts::system();
    if fonts.get(FontWeight::Bold).is_builtin() {
        return;
    }
    for view in View::iter() {
        let first = render_png(view, 621, 1104, &fonts).unwrap();
        let second = render_png(view, 621, 1104, &fonts).unwrap();
        assert!(first == second, "{view} differs between runs");
    }
    let first = render_icon_png(&fonts).unwrap();
    assert!(first == render_icon_png(&fonts).unwrap());
}

#[quickcheck]
fn prop_any_size_renders_exactly(width: u16, height: u16) -> TestResult {
    let width = u32::from(width % 400) + 1;
    let height = u32::from(height % 400) + 1;
    let fonts = Fonts::builtin();
    for view in View::iter() {
        let canvas = render(view, width, height, &fonts);
        if (canvas.width(), canvas.height()) != (width, height) {
            return TestResult::failed();
        }
    }
    TestResult::passed()
}
