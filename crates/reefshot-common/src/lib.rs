//! Common utilities for the reefshot tools.
//!
//! This crate provides shared infrastructure used by the renderer, the
//! resizer, and both command-line entry points:
//! - **Palette** - the flat brand colors every drawing uses
//! - **Warning System** - deduplicated colored warnings on stderr
//! - **Status Lines** - glyph-prefixed progress output on stdout

pub mod color;
pub mod status;
pub mod warning;

pub use color::Color;
