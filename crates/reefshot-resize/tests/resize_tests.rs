//! Integration tests for the screenshot resizer.

use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::png::CompressionType;
use image::imageops::FilterType;
use image::{DynamicImage, Rgb, RgbImage};
use quickcheck_macros::quickcheck;
use reefshot_resize::{
    OutcomeStatus, RESIZE_TARGETS, ResizeError, ResizeTarget, Resizer, TargetError, resize_to,
};
use tempfile::TempDir;

fn fast_resizer() -> Resizer {
    Resizer::new().compression(CompressionType::Fast)
}

/// Write a small gradient PNG and return its path.
fn write_input(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("input.png");
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            u8::try_from(x % 256).unwrap(),
            u8::try_from(y % 256).unwrap(),
            128,
        ])
    });
    image.save(&path).unwrap();
    path
}

#[test]
fn test_every_target_has_registered_dimensions() {
    let scratch = TempDir::new().unwrap();
    let input = write_input(scratch.path(), 60, 130);
    let out = scratch.path().join("out");

    let report = fast_resizer().resize(&input, &out, "tank-list").unwrap();

    assert_eq!(report.total(), RESIZE_TARGETS.len());
    assert!(report.is_complete());
    for (outcome, target) in report.outcomes.iter().zip(RESIZE_TARGETS) {
        assert!(matches!(outcome.status, OutcomeStatus::Created));
        assert_eq!(outcome.target, *target);
        assert_eq!(
            outcome.path,
            out.join(format!("{}_tank-list.png", target.name))
        );
        assert_eq!(
            image::image_dimensions(&outcome.path).unwrap(),
            (target.width, target.height)
        );
    }
}

#[test]
fn test_already_correct_size_keeps_dimensions() {
    let scratch = TempDir::new().unwrap();
    let target = RESIZE_TARGETS[2];
    let input = write_input(scratch.path(), target.width, target.height);
    let out = scratch.path().join("out");

    let resizer = Resizer::with_targets(vec![target]).compression(CompressionType::Fast);
    let report = resizer.resize(&input, &out, "chart").unwrap();

    assert_eq!(report.success_count(), 1);
    assert_eq!(
        image::image_dimensions(out.join("iphone_65_portrait_chart.png")).unwrap(),
        (1242, 2688)
    );
}

#[test]
fn test_missing_input_writes_nothing() {
    let scratch = TempDir::new().unwrap();
    let out = scratch.path().join("out");

    let result = fast_resizer().resize(&scratch.path().join("missing.png"), &out, "screenshot");

    assert!(matches!(result, Err(ResizeError::InputNotFound(_))));
    assert!(!out.exists());
}

#[test]
fn test_undecodable_input_writes_nothing() {
    let scratch = TempDir::new().unwrap();
    let input = scratch.path().join("broken.png");
    fs::write(&input, b"definitely not a png").unwrap();
    let out = scratch.path().join("out");

    let result = fast_resizer().resize(&input, &out, "screenshot");

    assert!(matches!(result, Err(ResizeError::Decode { .. })));
    assert!(!out.exists());
}

#[test]
fn test_format_is_detected_from_contents() {
    let scratch = TempDir::new().unwrap();
    let png = write_input(scratch.path(), 20, 40);
    let resizer = fast_resizer();

    for name in ["screenshot", "shot.jpg"] {
        let input = scratch.path().join(name);
        let _ = fs::copy(&png, &input).unwrap();
        let out = scratch.path().join(format!("out-{name}"));

        let report = resizer.resize(&input, &out, "tank-list").unwrap();

        assert_eq!(report.success_count(), 4, "{name}");
    }
}

#[test]
fn test_blocked_target_does_not_stop_the_batch() {
    let scratch = TempDir::new().unwrap();
    let input = write_input(scratch.path(), 40, 80);
    let out = scratch.path().join("out");
    // A directory where the output file should go makes that one write fail.
    fs::create_dir_all(out.join("iphone_65_portrait_analysis.png")).unwrap();

    let report = fast_resizer().resize(&input, &out, "analysis").unwrap();

    assert_eq!(report.success_count(), 3);
    assert_eq!(report.total(), 4);
    assert!(!report.is_complete());
    assert!(matches!(
        report.outcomes[2].status,
        OutcomeStatus::Failed(TargetError::Write(_))
    ));
    assert!(report.outcomes[3].is_success());
}

#[test]
fn test_error_messages() {
    let missing = ResizeError::InputNotFound(PathBuf::from("shot.png"));
    assert_eq!(missing.to_string(), "File not found: shot.png");

    // The CLI prefixes these with "Error: ".
    let scratch = TempDir::new().unwrap();
    let input = scratch.path().join("broken.png");
    fs::write(&input, b"nope").unwrap();
    let decode = Resizer::load(&input).unwrap_err();
    assert!(decode.to_string().starts_with("could not load image"));
}

#[quickcheck]
fn prop_resize_to_is_exact(width: u8, height: u8) -> bool {
    let target = ResizeTarget {
        name: "prop",
        width: u32::from(width) + 1,
        height: u32::from(height) + 1,
    };
    let source = DynamicImage::ImageRgb8(RgbImage::new(17, 9));
    let resized = resize_to(&source, &target, FilterType::Lanczos3);
    (resized.width(), resized.height()) == (target.width, target.height)
}
