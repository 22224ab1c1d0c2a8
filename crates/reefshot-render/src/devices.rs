//! Device screenshot sizes required for an App Store submission.
//!
//! The table is fixed data; supporting a new device means adding a row.

/// A named screenshot size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceProfile {
    /// Directory and file-name prefix, e.g. `iphone_67`.
    pub key: &'static str,
    /// Human-readable device class.
    pub name: &'static str,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

/// Every device size a mockup set is generated for, in output order.
pub const DEVICE_PROFILES: &[DeviceProfile] = &[
    // iPhone 14 Pro Max, 15 Pro Max
    DeviceProfile {
        key: "iphone_67",
        name: "iPhone 6.7\"",
        width: 1290,
        height: 2796,
    },
    // iPhone 11 Pro Max, XS Max
    DeviceProfile {
        key: "iphone_65",
        name: "iPhone 6.5\"",
        width: 1242,
        height: 2688,
    },
    // iPhone 8 Plus
    DeviceProfile {
        key: "iphone_55",
        name: "iPhone 5.5\"",
        width: 1242,
        height: 2208,
    },
    // iPad Pro 12.9" (3rd gen)
    DeviceProfile {
        key: "ipad_129",
        name: "iPad Pro 12.9\"",
        width: 2048,
        height: 2732,
    },
    // iPad Pro 11" (2nd gen)
    DeviceProfile {
        key: "ipad_11",
        name: "iPad Pro 11\"",
        width: 1668,
        height: 2388,
    },
];

/// Look up a device profile by key.
#[must_use]
pub fn find_device(key: &str) -> Option<&'static DeviceProfile> {
    DEVICE_PROFILES.iter().find(|device| device.key == key)
}
