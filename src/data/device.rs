//! Heuristic device profile estimation.
//!
//! The measurement tool has no physical reference object, so the only way to
//! get a pixels-per-centimeter scale is to *guess* the physical size of the
//! screen from coarse device signals (resolution, pixel ratio, handheld or
//! not).  The guess comes from an ordered rule table evaluated
//! first-match-wins; the last rule per device class is a catch-all, so every
//! input maps to exactly one assumed size.
//!
//! Accuracy caveat: the table is inherently approximate — the same resolution
//! bucket covers physically very different devices.  This is a known product
//! limitation, not something to correct without a real calibration reference.

use once_cell::sync::Lazy;

/// Ambient device signals, injected explicitly by the caller.
///
/// The UI adapter fills this from the egui context (monitor size and
/// `pixels_per_point`); tests and headless users construct it literally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceSignals {
    /// Full screen width in physical pixels.
    pub screen_width_px: u32,
    /// Full screen height in physical pixels.
    pub screen_height_px: u32,
    /// Width of the application window in physical pixels.
    pub window_width_px: u32,
    /// Height of the application window in physical pixels.
    pub window_height_px: u32,
    /// Device pixel ratio (logical-to-physical scale). Values `<= 0` are
    /// treated as `1.0` during estimation.
    pub device_pixel_ratio: f64,
    /// Whether this is a small/handheld device.
    pub is_mobile: bool,
}

impl DeviceSignals {
    /// Convenience constructor for the common case where the window covers
    /// the whole screen.
    pub fn fullscreen(
        screen_width_px: u32,
        screen_height_px: u32,
        device_pixel_ratio: f64,
        is_mobile: bool,
    ) -> Self {
        Self {
            screen_width_px,
            screen_height_px,
            window_width_px: screen_width_px,
            window_height_px: screen_height_px,
            device_pixel_ratio,
            is_mobile,
        }
    }
}

/// A device profile: the raw signals plus the assumed physical screen size.
///
/// Immutable once computed; a new profile is only produced by an explicit
/// recalibration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceProfile {
    /// The signals the profile was estimated from. `device_pixel_ratio` here
    /// is already normalized to be strictly positive.
    pub signals: DeviceSignals,
    /// Assumed physical screen width in centimeters. Strictly positive.
    pub assumed_physical_width_cm: f64,
    /// Assumed physical screen height in centimeters. Strictly positive.
    pub assumed_physical_height_cm: f64,
}

/// One row of the screen-size policy table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRule {
    /// Device class this rule applies to.
    pub mobile: bool,
    /// Rule matches when `screen_width_px <= max_screen_width_px`.
    /// `u32::MAX` marks the per-class catch-all.
    pub max_screen_width_px: u32,
    /// Assumed physical size `[width, height]` in centimeters.
    pub physical_cm: [f64; 2],
}

/// Ordered policy table mapping device class + resolution to an assumed
/// physical screen size. Evaluated first-match-wins; each class ends in a
/// catch-all row, so [`estimate`] always finds a match.
pub static SIZE_RULES: Lazy<Vec<SizeRule>> = Lazy::new(|| {
    vec![
        // Handheld devices: phone, large phone, tablet.
        SizeRule { mobile: true, max_screen_width_px: 480, physical_cm: [6.0, 10.7] },
        SizeRule { mobile: true, max_screen_width_px: 768, physical_cm: [7.0, 12.4] },
        SizeRule { mobile: true, max_screen_width_px: u32::MAX, physical_cm: [20.0, 26.7] },
        // Desktop/laptop displays: laptop, full HD monitor, larger.
        SizeRule { mobile: false, max_screen_width_px: 1366, physical_cm: [29.0, 16.3] },
        SizeRule { mobile: false, max_screen_width_px: 1920, physical_cm: [47.6, 26.8] },
        SizeRule { mobile: false, max_screen_width_px: u32::MAX, physical_cm: [59.7, 33.6] },
    ]
});

/// Estimate a [`DeviceProfile`] from ambient signals.
///
/// Pure function: identical signals always yield an identical profile.
/// A non-positive `device_pixel_ratio` is coerced to `1.0`.
pub fn estimate(signals: &DeviceSignals) -> DeviceProfile {
    let mut signals = *signals;
    if signals.device_pixel_ratio <= 0.0 {
        signals.device_pixel_ratio = 1.0;
    }

    // The catch-all rows guarantee a match for either device class.
    let rule = SIZE_RULES
        .iter()
        .find(|r| r.mobile == signals.is_mobile && signals.screen_width_px <= r.max_screen_width_px)
        .copied()
        .expect("size rule table ends in a catch-all per device class");

    DeviceProfile {
        signals,
        assumed_physical_width_cm: rule.physical_cm[0],
        assumed_physical_height_cm: rule.physical_cm[1],
    }
}
