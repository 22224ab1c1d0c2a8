//! Error types for the screenshot resizer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Setup failures that abort a resize run before any output is written.
#[derive(Error, Debug)]
pub enum ResizeError {
    /// The input screenshot does not exist.
    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input exists but could not be decoded as an image.
    #[error("could not load image '{}': {source}", .path.display())]
    Decode {
        /// Input path.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: image::ImageError,
    },

    /// The output directory could not be created.
    #[error("could not create output directory '{}': {source}", .path.display())]
    OutputDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Filesystem error.
        #[source]
        source: io::Error,
    },
}

/// Failure of a single resize target. The rest of the batch still runs.
#[derive(Error, Debug)]
pub enum TargetError {
    /// The resized image could not be encoded as PNG.
    #[error("could not encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    /// The encoded file could not be written.
    #[error("could not write file: {0}")]
    Write(#[source] io::Error),

    /// The written file could not be read back for verification.
    #[error("could not verify written image: {0}")]
    Verify(#[source] image::ImageError),
}
