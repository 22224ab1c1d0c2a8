//! The set of files the asset generator writes.
//!
//! ```text
//! assets/upload-store/
//!   ├── AppIcon-1024.png
//!   ├── iphone_67/
//!   │     ├── iphone_67_tank-list.png
//!   │     └── ...
//!   └── ...
//! ```
//!
//! The plan only describes and draws assets. Writing them, creating
//! directories, and reporting progress belong to the caller.

use std::path::{Path, PathBuf};

use strum::IntoEnumIterator;

use crate::canvas::Canvas;
use crate::devices::{DEVICE_PROFILES, DeviceProfile};
use crate::font::Fonts;
use crate::icon::{ICON_SIZE, render_icon};
use crate::views::{View, render};

/// Default root directory for generated assets.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/upload-store";

/// File name of the store icon inside the output root.
pub const ICON_FILE_NAME: &str = "AppIcon-1024.png";

/// What an asset depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// The app icon.
    Icon,
    /// One mock screen at one device size.
    Screenshot {
        /// Target device size.
        device: &'static DeviceProfile,
        /// Screen drawn.
        view: View,
    },
}

/// One output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    kind: AssetKind,
    relative_path: PathBuf,
}

impl Asset {
    /// The app icon asset.
    #[must_use]
    pub fn icon() -> Self {
        Self {
            kind: AssetKind::Icon,
            relative_path: PathBuf::from(ICON_FILE_NAME),
        }
    }

    /// A screenshot asset at `<device_key>/<device_key>_<view_key>.png`.
    #[must_use]
    pub fn screenshot(device: &'static DeviceProfile, view: View) -> Self {
        Self {
            kind: AssetKind::Screenshot { device, view },
            relative_path: PathBuf::from(device.key)
                .join(format!("{}_{}.png", device.key, view.as_ref())),
        }
    }

    /// What this asset depicts.
    #[must_use]
    pub const fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Path relative to the output root.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Pixel dimensions of the rendered image.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        match self.kind {
            AssetKind::Icon => (ICON_SIZE, ICON_SIZE),
            AssetKind::Screenshot { device, .. } => (device.width, device.height),
        }
    }

    /// Draw this asset.
    #[must_use]
    pub fn render(&self, fonts: &Fonts) -> Canvas {
        match self.kind {
            AssetKind::Icon => render_icon(fonts),
            AssetKind::Screenshot { device, view } => {
                render(view, device.width, device.height, fonts)
            }
        }
    }
}

/// An ordered list of assets: the icon first, then every selected view for
/// each selected device, device by device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPlan {
    assets: Vec<Asset>,
}

impl AssetPlan {
    /// Every device and every view.
    #[must_use]
    pub fn full() -> Self {
        Self::filtered(&[], &[])
    }

    /// Only the given devices and views. An empty selection means "all".
    ///
    /// The icon is always included.
    #[must_use]
    pub fn filtered(devices: &[&'static DeviceProfile], views: &[View]) -> Self {
        let devices: Vec<&'static DeviceProfile> = if devices.is_empty() {
            DEVICE_PROFILES.iter().collect()
        } else {
            DEVICE_PROFILES
                .iter()
                .filter(|profile| devices.contains(profile))
                .collect()
        };
        let views: Vec<View> = View::iter()
            .filter(|view| views.is_empty() || views.contains(view))
            .collect();

        let mut assets = vec![Asset::icon()];
        for device in devices {
            assets.extend(views.iter().map(|&view| Asset::screenshot(device, view)));
        }
        Self { assets }
    }

    /// Assets in generation order.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Screenshot assets grouped by device, in table order.
    #[must_use]
    pub fn by_device(&self) -> Vec<(&'static DeviceProfile, Vec<&Asset>)> {
        let mut groups: Vec<(&'static DeviceProfile, Vec<&Asset>)> = Vec::new();
        for asset in &self.assets {
            let AssetKind::Screenshot { device, .. } = asset.kind else {
                continue;
            };
            match groups.last_mut() {
                Some((current, members)) if *current == device => members.push(asset),
                _ => groups.push((device, vec![asset])),
            }
        }
        groups
    }

    /// Number of assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the plan is empty. A plan always holds at least the icon.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::find_device;

    #[test]
    fn test_full_plan_covers_every_device_and_view() {
        let plan = AssetPlan::full();
        assert_eq!(plan.len(), 1 + 5 * 4);
        assert_eq!(plan.assets()[0].relative_path(), Path::new("AppIcon-1024.png"));
        assert_eq!(
            plan.assets()[1].relative_path(),
            Path::new("iphone_67/iphone_67_tank-list.png")
        );
        assert_eq!(
            plan.assets()[20].relative_path(),
            Path::new("ipad_11/ipad_11_chart.png")
        );
    }

    #[test]
    fn test_filtered_plan() {
        let ipad = find_device("ipad_129").unwrap();
        let plan = AssetPlan::filtered(&[ipad], &[View::Chart, View::Analysis]);
        let paths: Vec<_> = plan
            .assets()
            .iter()
            .map(|asset| asset.relative_path().to_path_buf())
            .collect();
        assert_eq!(
            paths,
            [
                PathBuf::from("AppIcon-1024.png"),
                PathBuf::from("ipad_129/ipad_129_analysis.png"),
                PathBuf::from("ipad_129/ipad_129_chart.png"),
            ]
        );
    }

    #[test]
    fn test_by_device_groups() {
        let plan = AssetPlan::full();
        let groups = plan.by_device();
        assert_eq!(groups.len(), 5);
        assert!(groups.iter().all(|(_, assets)| assets.len() == 4));
        assert_eq!(groups[3].0.key, "ipad_129");
    }

    #[test]
    fn test_asset_dimensions() {
        let device = find_device("iphone_55").unwrap();
        assert_eq!(
            Asset::screenshot(device, View::Measurement).dimensions(),
            (1242, 2208)
        );
        assert_eq!(Asset::icon().dimensions(), (1024, 1024));
    }
}
