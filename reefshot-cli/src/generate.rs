//! Generate the App Store icon and mockup screenshots.
//!
//! Run with: cargo run --bin generate-store-assets
//!
//! Writes `AppIcon-1024.png` plus one screenshot per view for every device
//! size into the output directory, printing progress as it goes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use reefshot_common::status::{Status, StatusLine, report};
use reefshot_render::{
    AssetKind, AssetPlan, DEFAULT_OUTPUT_DIR, DEVICE_PROFILES, DeviceProfile, Fonts,
    ICON_FILE_NAME, ICON_SIZE, View, find_device,
};
use strum::IntoEnumIterator;

/// Generate App Store icon and screenshot mockups
#[derive(Parser, Debug)]
#[command(name = "generate-store-assets")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Everything, into assets/upload-store
    generate-store-assets

    # Only the iPad Pro 12.9" chart screenshot
    generate-store-assets --device ipad_129 --view chart

    # Reproducible output independent of installed fonts
    generate-store-assets --builtin-font -o /tmp/store
"#)]
struct Cli {
    /// Root directory for the generated files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Only render this device size (repeatable)
    #[arg(long = "device", value_name = "KEY", value_parser = parse_device)]
    devices: Vec<&'static DeviceProfile>,

    /// Only render this view (repeatable)
    #[arg(long = "view", value_name = "VIEW", value_parser = parse_view)]
    views: Vec<View>,

    /// Use the built-in face instead of searching for system fonts
    #[arg(long)]
    builtin_font: bool,
}

fn parse_device(key: &str) -> Result<&'static DeviceProfile, String> {
    find_device(key).ok_or_else(|| {
        let known: Vec<&str> = DEVICE_PROFILES.iter().map(|device| device.key).collect();
        format!("unknown device '{key}' (expected one of: {})", known.join(", "))
    })
}

fn parse_view(key: &str) -> Result<View, String> {
    key.parse().map_err(|_| {
        let known: Vec<String> = View::iter().map(|view| view.to_string()).collect();
        format!("unknown view '{key}' (expected one of: {})", known.join(", "))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let fonts = if cli.builtin_font {
        Fonts::builtin()
    } else {
        Fonts::system()
    };
    let plan = AssetPlan::filtered(&cli.devices, &cli.views);

    println!("Generating App Store assets...");
    generate(&plan, &fonts, &cli.output_dir)?;

    println!();
    report(
        Status::Done,
        format!("All assets generated in {}/", cli.output_dir.display()),
    );
    println!("\nAsset structure:");
    print_structure(&plan, &cli.output_dir);

    Ok(())
}

/// Render and save every asset in the plan.
fn generate(plan: &AssetPlan, fonts: &Fonts, output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let mut current_device: Option<&'static DeviceProfile> = None;
    for asset in plan.assets() {
        let path = output_dir.join(asset.relative_path());
        match asset.kind() {
            AssetKind::Icon => {
                println!("  Creating app icon ({ICON_SIZE}x{ICON_SIZE})...");
            }
            AssetKind::Screenshot { device, .. } => {
                if current_device != Some(device) {
                    current_device = Some(device);
                    println!(
                        "  Creating screenshots for {} ({}x{})...",
                        device.name, device.width, device.height
                    );
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)
                            .with_context(|| format!("Failed to create {}", parent.display()))?;
                    }
                }
            }
        }

        asset.render(fonts).save(&path)?;

        if let AssetKind::Screenshot { view, .. } = asset.kind() {
            let name = path
                .file_name()
                .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
            let line = StatusLine::new(Status::Ok, format!("{name} ({})", view.title()));
            println!("    {}", line.green());
        }
    }
    Ok(())
}

/// Print the output tree: the icon, then one directory per device.
fn print_structure(plan: &AssetPlan, output_dir: &Path) {
    let groups = plan.by_device();
    println!("  {}/", output_dir.display());
    let connector = |last: bool| if last { "└──" } else { "├──" };
    println!("    {} {}", connector(groups.is_empty()), ICON_FILE_NAME);
    for (index, (device, assets)) in groups.iter().enumerate() {
        println!(
            "    {} {}/ ({} files)",
            connector(index + 1 == groups.len()),
            device.key,
            assets.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_device_and_view() {
        assert_eq!(parse_device("ipad_11").unwrap().width, 1668);
        assert!(parse_device("pixel_8").unwrap_err().contains("iphone_67"));
        assert_eq!(parse_view("tank-list").unwrap(), View::TankList);
        assert!(parse_view("settings").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["generate-store-assets"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(cli.devices.is_empty() && cli.views.is_empty());
        assert!(!cli.builtin_font);
    }

    #[test]
    fn test_cli_repeatable_filters() {
        let cli = Cli::try_parse_from([
            "generate-store-assets",
            "--device",
            "iphone_55",
            "--view",
            "chart",
            "--view",
            "analysis",
        ])
        .unwrap();
        assert_eq!(cli.devices.len(), 1);
        assert_eq!(cli.views, [View::Chart, View::Analysis]);
    }
}
