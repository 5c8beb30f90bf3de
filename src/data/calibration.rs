//! Calibration: device profile → pixels-per-unit factors.

use serde::{Deserialize, Serialize};

use crate::data::device::DeviceProfile;

/// Centimeters per inch, used to derive the inch factor from the cm factor.
pub const CM_PER_INCH: f64 = 2.54;

/// Supported measurement units. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Cm,
    In,
}

impl Unit {
    /// Short unit symbol as shown next to linear measurements.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Cm => "cm",
            Unit::In => "in",
        }
    }

    /// Squared symbol as shown next to area measurements.
    pub fn squared_symbol(&self) -> &'static str {
        match self {
            Unit::Cm => "cm²",
            Unit::In => "in²",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Pixels-per-unit factors for all supported units.
///
/// Both factors derive from the same profile snapshot and are recomputed as a
/// unit — they are never partially stale. Strictly positive as long as the
/// profile invariants hold (positive physical width, positive pixel ratio).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationFactors {
    /// Pixels per centimeter, adjusted for the device pixel ratio.
    pub pixels_per_cm: f64,
    /// Pixels per inch, adjusted for the device pixel ratio.
    pub pixels_per_in: f64,
}

impl CalibrationFactors {
    /// The factor for the given unit.
    #[inline]
    pub fn factor(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Cm => self.pixels_per_cm,
            Unit::In => self.pixels_per_in,
        }
    }
}

/// Compute calibration factors from a device profile.
///
/// `pixels_per_cm = screen_width_px / assumed_physical_width_cm`, divided by
/// the device pixel ratio to compensate for high-density displays reporting
/// scaled logical pixels. Pure and idempotent: the same profile always yields
/// identical factors.
pub fn calibrate(profile: &DeviceProfile) -> CalibrationFactors {
    let pixels_per_cm = profile.signals.screen_width_px as f64 / profile.assumed_physical_width_cm;
    let pixels_per_in = pixels_per_cm * CM_PER_INCH;

    let dpr = profile.signals.device_pixel_ratio;
    CalibrationFactors {
        pixels_per_cm: pixels_per_cm / dpr,
        pixels_per_in: pixels_per_in / dpr,
    }
}
