//! Procedural renderer for the ReefBuddy store assets.
//!
//! # Scope
//!
//! This crate provides:
//! - **Canvas** - an opaque RGB pixel buffer with rectangle, border, hard
//!   shadow, line, and text primitives
//! - **Fonts** - an ordered font source chain that always resolves to a face
//! - **Mockup Views** - four fixed screen layouts drawn at any canvas size
//! - **App Icon** - the 1024×1024 monogram icon
//! - **Asset Plan** - every file the generator writes, per device and view
//!
//! # Pipeline
//!
//! ```text
//! Fonts ─┐
//!        ├─→ View / Icon ─→ Canvas ─→ PNG
//! Size ──┘
//! ```
//!
//! Rendering is a pure function of the requested size and the resolved fonts.
//! With [`Fonts::builtin`] the output is byte-identical on every machine.

pub mod assets;
pub mod canvas;
pub mod devices;
pub mod font;
pub mod font_metrics;
pub mod icon;
pub mod views;

pub use assets::{Asset, AssetKind, AssetPlan, DEFAULT_OUTPUT_DIR, ICON_FILE_NAME};
pub use canvas::{Bounds, Canvas};
pub use devices::{DEVICE_PROFILES, DeviceProfile, find_device};
pub use font::{Face, FontChain, FontSource, FontWeight, Fonts};
pub use font_metrics::TextBox;
pub use icon::{ICON_SIZE, render_icon, render_icon_png};
pub use views::{View, render, render_png};
