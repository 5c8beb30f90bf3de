//! Configuration for the camruler UI.

use std::path::PathBuf;

use crate::controllers::{CameraController, SessionController};
use crate::data::calibration::Unit;
use crate::data::device::DeviceSignals;
use crate::data::session::{MeasureMode, CLOSURE_THRESHOLD_PX, MAX_DISTANCE_MEASUREMENTS};
use crate::events::EventController;

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI features on or off.
///
/// All features default to `true` (enabled). Disable features to create a
/// minimal, focused UI for embedded use.
#[derive(Clone, Debug)]
pub struct FeatureFlags {
    /// Show the top bar with mode/unit buttons.
    pub top_bar: bool,
    /// Show the calibration panel.
    pub calibration: bool,
    /// Show the measurements list panel.
    pub measurements: bool,
    /// Show the camera status line above the overlay.
    pub camera_status: bool,
    /// Show the clear-all button.
    pub clear_all: bool,
    /// Show the recalibrate button.
    pub recalibrate: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            top_bar: true,
            calibration: true,
            measurements: true,
            camera_status: true,
            clear_all: true,
            recalibrate: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CamRulerConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration passed to [`run_camruler`](crate::app::run_camruler).
///
/// Everything has a sensible default; attach controllers before launch to
/// interact with the session from external code.
pub struct CamRulerConfig {
    /// Window title.
    pub title: String,
    /// Initial measurement mode.
    pub mode: MeasureMode,
    /// Initial measurement unit.
    pub unit: Unit,
    /// Polygon closure threshold in pixels.
    pub closure_threshold_px: f64,
    /// Cap on completed distance measurements per session.
    pub max_distance_measurements: usize,
    /// UI feature toggles.
    pub features: FeatureFlags,
    /// When set, UI state (title, mode, unit, panel visibility) is loaded
    /// from this JSON file at startup and saved back on exit. A missing or
    /// unreadable file leaves the configured values untouched.
    pub ui_state_path: Option<PathBuf>,
    /// Override for the ambient device signals. When `None`, the app probes
    /// the egui context (monitor size, pixel ratio) on startup.
    pub device_signals: Option<DeviceSignals>,
    /// Optional controller for programmatic session requests and snapshots.
    pub session_controller: Option<SessionController>,
    /// Optional controller for the camera collaborator status.
    pub camera_controller: Option<CameraController>,
    /// Optional event controller for UI/session event subscriptions.
    pub event_controller: Option<EventController>,
    /// Optional eframe window options. A default window size is applied when
    /// none is given.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for CamRulerConfig {
    fn default() -> Self {
        Self {
            title: "CamRuler".to_string(),
            mode: MeasureMode::default(),
            unit: Unit::default(),
            closure_threshold_px: CLOSURE_THRESHOLD_PX,
            max_distance_measurements: MAX_DISTANCE_MEASUREMENTS,
            features: FeatureFlags::default(),
            ui_state_path: None,
            device_signals: None,
            session_controller: None,
            camera_controller: None,
            event_controller: None,
            native_options: None,
        }
    }
}
