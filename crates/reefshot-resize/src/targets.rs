//! App Store screenshot sizes the resizer produces.

/// A named output size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeTarget {
    /// File-name prefix, e.g. `iphone_67_portrait`.
    pub name: &'static str,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

impl ResizeTarget {
    /// Output file name for a given view name: `<target>_<view>.png`.
    #[must_use]
    pub fn file_name(&self, view_name: &str) -> String {
        format!("{}_{view_name}.png", self.name)
    }
}

/// Every size a screenshot is resized to, in output order.
pub const RESIZE_TARGETS: &[ResizeTarget] = &[
    // iPhone 14/15 Pro Max
    ResizeTarget {
        name: "iphone_67_portrait",
        width: 1284,
        height: 2778,
    },
    ResizeTarget {
        name: "iphone_67_landscape",
        width: 2778,
        height: 1284,
    },
    // iPhone 11 Pro Max, XS Max
    ResizeTarget {
        name: "iphone_65_portrait",
        width: 1242,
        height: 2688,
    },
    ResizeTarget {
        name: "iphone_65_landscape",
        width: 2688,
        height: 1242,
    },
];

/// Look up a resize target by name.
#[must_use]
pub fn find_target(name: &str) -> Option<&'static ResizeTarget> {
    RESIZE_TARGETS.iter().find(|target| target.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_target() {
        let target = find_target("iphone_67_portrait").unwrap();
        assert_eq!((target.width, target.height), (1284, 2778));
        assert!(find_target("ipad_129_portrait").is_none());
    }

    #[test]
    fn test_landscape_mirrors_portrait() {
        for pair in RESIZE_TARGETS.chunks(2) {
            assert_eq!((pair[0].width, pair[0].height), (pair[1].height, pair[1].width));
        }
    }

    #[test]
    fn test_file_name() {
        let target = find_target("iphone_65_landscape").unwrap();
        assert_eq!(target.file_name("tank-list"), "iphone_65_landscape_tank-list.png");
    }
}
