//! Font sources and fallback resolution.
//!
//! A face is resolved from an ordered [`FontChain`]: each [`FontSource`] is
//! tried in turn and the first one that loads wins. Load failures are never
//! errors. A chain that runs dry resolves to [`Face::Builtin`], a
//! deterministic placeholder face that needs no font files at all.
//!
//! Tests and reproducible builds use [`Fonts::builtin`], which skips the
//! filesystem entirely so output no longer depends on installed fonts.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use fontdue::{Font, FontSettings};
use reefshot_common::warning::warn_once;

/// Regular sans-serif candidates, tried in order.
const REGULAR_FONT_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Bold sans-serif candidates, tried in order.
const BOLD_FONT_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Weight of a face used by the layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Body text.
    Regular,
    /// Titles, labels, badges.
    Bold,
}

/// A resolved face that can measure and rasterize text.
pub enum Face {
    /// A TrueType/OpenType font loaded through fontdue.
    Truetype(Box<Font>),
    /// Placeholder face with fixed-ratio metrics that paints each visible
    /// character as a solid bar ("greeked" text).
    Builtin,
}

impl Face {
    /// Whether this is the built-in placeholder face.
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }
}

impl fmt::Debug for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truetype(font) => f
                .debug_tuple("Truetype")
                .field(&font.name().unwrap_or("<unnamed>"))
                .finish(),
            Self::Builtin => f.write_str("Builtin"),
        }
    }
}

/// One place a face can come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A font file on disk.
    File(PathBuf),
    /// Font data already in memory.
    Bytes(Vec<u8>),
    /// The built-in placeholder face. Always loads.
    Builtin,
}

impl FontSource {
    /// Try to load a face from this source.
    ///
    /// Returns `None` if the file is missing or unreadable, or if the data is
    /// not a font fontdue can parse.
    #[must_use]
    pub fn load(&self) -> Option<Face> {
        match self {
            Self::File(path) => {
                let data = fs::read(path).ok()?;
                Font::from_bytes(data, FontSettings::default())
                    .ok()
                    .map(|font| Face::Truetype(Box::new(font)))
            }
            Self::Bytes(data) => Font::from_bytes(data.as_slice(), FontSettings::default())
                .ok()
                .map(|font| Face::Truetype(Box::new(font))),
            Self::Builtin => Some(Face::Builtin),
        }
    }
}

/// An ordered list of font sources with a single resolution rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontChain {
    sources: Vec<FontSource>,
}

impl FontChain {
    /// Create a chain from explicit sources, tried in the given order.
    #[must_use]
    pub const fn new(sources: Vec<FontSource>) -> Self {
        Self { sources }
    }

    /// The system sans-serif candidates for `weight`, then the built-in face.
    #[must_use]
    pub fn system(weight: FontWeight) -> Self {
        let paths = match weight {
            FontWeight::Regular => REGULAR_FONT_PATHS,
            FontWeight::Bold => BOLD_FONT_PATHS,
        };
        let mut sources: Vec<FontSource> = paths
            .iter()
            .map(|path| FontSource::File(PathBuf::from(path)))
            .collect();
        sources.push(FontSource::Builtin);
        Self { sources }
    }

    /// A chain holding only the built-in face.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            sources: vec![FontSource::Builtin],
        }
    }

    /// Sources in resolution order.
    #[must_use]
    pub fn sources(&self) -> &[FontSource] {
        &self.sources
    }

    /// Resolve the first source that loads.
    ///
    /// Never fails: an exhausted chain yields [`Face::Builtin`]. Falling back
    /// past real font sources emits a one-time warning.
    #[must_use]
    pub fn resolve(&self) -> Face {
        let face = self
            .sources
            .iter()
            .find_map(FontSource::load)
            .unwrap_or(Face::Builtin);

        let tried_real_fonts = self
            .sources
            .iter()
            .any(|source| !matches!(source, FontSource::Builtin));
        if face.is_builtin() && tried_real_fonts {
            warn_once(
                "font",
                "no usable font among the configured sources, text will be drawn as placeholder bars",
            );
        }

        face
    }
}

/// The resolved faces for one rendering run.
#[derive(Debug)]
pub struct Fonts {
    regular: Face,
    bold: Face,
}

impl Fonts {
    /// Build from already-resolved faces.
    #[must_use]
    pub const fn new(regular: Face, bold: Face) -> Self {
        Self { regular, bold }
    }

    /// Resolve both weights from explicit chains.
    #[must_use]
    pub fn from_chains(regular: &FontChain, bold: &FontChain) -> Self {
        Self::new(regular.resolve(), bold.resolve())
    }

    /// Resolve both weights from the system font locations.
    #[must_use]
    pub fn system() -> Self {
        Self::from_chains(
            &FontChain::system(FontWeight::Regular),
            &FontChain::system(FontWeight::Bold),
        )
    }

    /// Built-in faces only. Output is identical on every machine.
    #[must_use]
    pub const fn builtin() -> Self {
        Self::new(Face::Builtin, Face::Builtin)
    }

    /// The face for `weight`.
    #[must_use]
    pub const fn get(&self, weight: FontWeight) -> &Face {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}
