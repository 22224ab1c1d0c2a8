//! Resize a real screenshot to every App Store size.
//!
//! Usage: `resize-screenshots <input> [view-name] [output-dir]`
//!
//! Exits 0 only if every target was written and verified at its exact
//! size.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use reefshot_common::status::{Status, report};
use reefshot_resize::{
    DEFAULT_OUTPUT_DIR, DEFAULT_VIEW_NAME, OutcomeStatus, RESIZE_TARGETS, ResizeReport, Resizer,
};

/// Resize a screenshot to the App Store iPhone sizes
#[derive(Parser, Debug)]
#[command(name = "resize-screenshots")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Screenshot to resize
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Suffix used in the output file names
    #[arg(value_name = "VIEW_NAME", default_value = DEFAULT_VIEW_NAME)]
    view_name: String,

    /// Directory for the resized files
    #[arg(value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            print!("{}", usage());
            return ExitCode::FAILURE;
        }
    };

    report(Status::Camera, "App Store Screenshot Resizer");
    println!("{}", "=".repeat(40));
    println!("Input: {}", cli.input.display());
    println!("View name: {}", cli.view_name);
    println!();

    let image = match Resizer::load(&cli.input) {
        Ok(image) => image,
        Err(e) => {
            report(Status::Error, format!("Error: {e}"));
            return ExitCode::FAILURE;
        }
    };
    report(
        Status::Ok,
        format!(
            "Loaded: {} ({}x{})",
            cli.input.display(),
            image.width(),
            image.height()
        ),
    );

    let resizer = Resizer::new();
    match resizer.write_all(&image, &cli.output_dir, &cli.view_name) {
        Ok(result) => {
            print_report(&result);
            if result.is_complete() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            report(Status::Error, format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}

fn print_report(result: &ResizeReport) {
    for outcome in &result.outcomes {
        let path = outcome.path.display();
        match &outcome.status {
            OutcomeStatus::Created => report(
                Status::Ok,
                format!(
                    "Created: {path} ({}x{})",
                    outcome.target.width, outcome.target.height
                ),
            ),
            OutcomeStatus::WrongSize { width, height } => report(
                Status::Warning,
                format!("Warning: {path} has wrong size: {width}x{height}"),
            ),
            OutcomeStatus::Failed(e) => {
                report(Status::Error, format!("Error creating {path}: {e}"));
            }
        }
    }

    println!();
    report(
        Status::Done,
        format!(
            "Successfully created {}/{} screenshots",
            result.success_count(),
            result.total()
        ),
    );
    report(
        Status::Folder,
        format!("Output directory: {}", result.output_dir.display()),
    );
}

/// Usage text printed on bad arguments, listing the files a run creates.
fn usage() -> String {
    let mut text = String::from(
        "Usage: resize-screenshots <input-screenshot.png> [view-name] [output-dir]\n\n\
         Example:\n  resize-screenshots ~/Desktop/screenshot.png tank-list\n\n\
         This will create:\n",
    );
    for target in RESIZE_TARGETS {
        text.push_str(&format!(
            "  - {} ({}x{})\n",
            target.file_name("tank-list"),
            target.width,
            target.height
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_defaults() {
        let cli = Cli::try_parse_from(["resize-screenshots", "shot.png"]).unwrap();
        assert_eq!(cli.view_name, "screenshot");
        assert_eq!(cli.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let err = Cli::try_parse_from(["resize-screenshots"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_usage_lists_every_target() {
        let text = usage();
        assert!(text.starts_with("Usage: resize-screenshots <input-screenshot.png>"));
        assert!(text.contains("  - iphone_67_portrait_tank-list.png (1284x2778)\n"));
        assert!(text.contains("  - iphone_65_landscape_tank-list.png (2688x1242)\n"));
        assert_eq!(text.matches("  - ").count(), RESIZE_TARGETS.len());
    }
}
