//! Resize real screenshots to exact App Store dimensions.
//!
//! # Pipeline
//!
//! ```text
//! input ─→ load ─→ for each target: resize ─→ write PNG ─→ reopen & verify
//! ```
//!
//! Loading is all-or-nothing: a missing or undecodable input aborts before
//! anything is written. After that every target is attempted independently
//! and ends in a [`TargetOutcome`]; one failure never stops the others. The
//! caller turns the [`ResizeReport`] into output and an exit code.

pub mod error;
pub mod targets;

use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageReader};

pub use error::{ResizeError, TargetError};
pub use targets::{RESIZE_TARGETS, ResizeTarget, find_target};

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/upload-store/real-screenshots";

/// View name used when none is given.
pub const DEFAULT_VIEW_NAME: &str = "screenshot";

/// How a single target ended.
#[derive(Debug)]
pub enum OutcomeStatus {
    /// Written and verified at the target dimensions.
    Created,
    /// Written, but the file reads back at other dimensions. Reported as a
    /// warning; the batch continues.
    WrongSize {
        /// Width found in the written file.
        width: u32,
        /// Height found in the written file.
        height: u32,
    },
    /// Resizing, writing, or verifying failed.
    Failed(TargetError),
}

/// Result of one target in a batch.
#[derive(Debug)]
pub struct TargetOutcome {
    /// The size that was requested.
    pub target: ResizeTarget,
    /// Where the output was (or would have been) written.
    pub path: PathBuf,
    /// What happened.
    pub status: OutcomeStatus,
}

impl TargetOutcome {
    /// Whether the output was written and verified.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, OutcomeStatus::Created)
    }
}

/// Outcomes of a whole resize batch.
#[derive(Debug)]
pub struct ResizeReport {
    /// Directory the outputs went to.
    pub output_dir: PathBuf,
    /// One entry per target, in target order.
    pub outcomes: Vec<TargetOutcome>,
}

impl ResizeReport {
    /// Number of verified outputs.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.is_success())
            .count()
    }

    /// Number of targets attempted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether every target was written and verified.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.success_count() == self.total()
    }
}

/// Resizes one input to a fixed list of targets.
#[derive(Debug, Clone)]
pub struct Resizer {
    targets: Vec<ResizeTarget>,
    filter: FilterType,
    compression: CompressionType,
}

impl Resizer {
    /// The App Store targets with Lanczos3 resampling and maximum PNG
    /// compression.
    #[must_use]
    pub fn new() -> Self {
        Self::with_targets(RESIZE_TARGETS.to_vec())
    }

    /// Custom targets, same resampling and compression as [`Resizer::new`].
    #[must_use]
    pub const fn with_targets(targets: Vec<ResizeTarget>) -> Self {
        Self {
            targets,
            filter: FilterType::Lanczos3,
            compression: CompressionType::Best,
        }
    }

    /// Override the PNG compression level.
    #[must_use]
    pub fn compression(mut self, compression: CompressionType) -> Self {
        self.compression = compression;
        self
    }

    /// Targets in output order.
    #[must_use]
    pub fn targets(&self) -> &[ResizeTarget] {
        &self.targets
    }

    /// Load and decode the input screenshot.
    ///
    /// # Errors
    ///
    /// [`ResizeError::InputNotFound`] if `input` does not exist,
    /// [`ResizeError::Decode`] if it cannot be read or decoded. The format is
    /// detected from the file contents, not its extension.
    pub fn load(input: &Path) -> Result<DynamicImage, ResizeError> {
        if !input.exists() {
            return Err(ResizeError::InputNotFound(input.to_path_buf()));
        }
        let decode_error = |source| ResizeError::Decode {
            path: input.to_path_buf(),
            source,
        };
        // Sniff the format from the contents; the extension may be missing or wrong.
        ImageReader::open(input)
            .and_then(ImageReader::with_guessed_format)
            .map_err(|e| decode_error(ImageError::IoError(e)))?
            .decode()
            .map_err(decode_error)
    }

    /// Load `input` and write every target into `output_dir`.
    ///
    /// # Errors
    ///
    /// Fails only on setup: see [`Resizer::load`] and
    /// [`Resizer::write_all`]. Per-target failures are in the report.
    pub fn resize(
        &self,
        input: &Path,
        output_dir: &Path,
        view_name: &str,
    ) -> Result<ResizeReport, ResizeError> {
        let image = Self::load(input)?;
        self.write_all(&image, output_dir, view_name)
    }

    /// Write every target of an already loaded image into `output_dir`.
    ///
    /// # Errors
    ///
    /// [`ResizeError::OutputDir`] if `output_dir` cannot be created.
    pub fn write_all(
        &self,
        image: &DynamicImage,
        output_dir: &Path,
        view_name: &str,
    ) -> Result<ResizeReport, ResizeError> {
        fs::create_dir_all(output_dir).map_err(|source| ResizeError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let outcomes = self
            .targets
            .iter()
            .map(|target| {
                let path = output_dir.join(target.file_name(view_name));
                let status = match self.write_target(image, target, &path) {
                    Ok((width, height)) if (width, height) == (target.width, target.height) => {
                        OutcomeStatus::Created
                    }
                    Ok((width, height)) => OutcomeStatus::WrongSize { width, height },
                    Err(error) => OutcomeStatus::Failed(error),
                };
                TargetOutcome {
                    target: *target,
                    path,
                    status,
                }
            })
            .collect();

        Ok(ResizeReport {
            output_dir: output_dir.to_path_buf(),
            outcomes,
        })
    }

    /// Resize, write, and read back one target. Returns the dimensions found
    /// in the written file.
    fn write_target(
        &self,
        image: &DynamicImage,
        target: &ResizeTarget,
        path: &Path,
    ) -> Result<(u32, u32), TargetError> {
        let resized = resize_to(image, target, self.filter);

        let mut bytes = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut bytes, self.compression, PngFilterType::Adaptive);
        resized
            .write_with_encoder(encoder)
            .map_err(TargetError::Encode)?;
        fs::write(path, &bytes).map_err(TargetError::Write)?;

        image::image_dimensions(path).map_err(TargetError::Verify)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Resample `image` to exactly the target's dimensions, ignoring aspect
/// ratio.
#[must_use]
pub fn resize_to(image: &DynamicImage, target: &ResizeTarget, filter: FilterType) -> DynamicImage {
    image.resize_exact(target.width, target.height, filter)
}
