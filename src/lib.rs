//! camruler crate root: re-exports and module wiring.
//!
//! This crate provides a click-to-measure overlay built on egui/eframe:
//! point a device camera at an object and read off distance, perimeter and
//! area from points clicked on the live view — no reference object needed.
//! The scale comes from a heuristic auto-calibration that guesses the
//! physical screen size from coarse device signals.
//!
//! The implementation is split into cohesive modules:
//! - `data`: the UI-free measurement core (device profile estimation,
//!   calibration, geometry, and the stateful session)
//! - `config`: launch configuration and feature flags
//! - `controllers`: external control of the session and camera status
//! - `events`: filtered event subscriptions for UI/session transitions
//! - `panels`: egui side panels and the measurement overlay
//! - `app`: the standalone eframe application and run helper
//! - `persistence`: interface-state save/load (measurements stay ephemeral)

pub mod app;
pub mod config;
pub mod controllers;
pub mod data;
pub mod events;
pub mod panels;
pub mod persistence;

// Public re-exports for a compact external API
pub use app::{run_camruler, MeasureApp};
pub use config::{CamRulerConfig, FeatureFlags};
pub use controllers::{CameraController, CameraStatus, SessionController, SessionInfo};
pub use data::calibration::{calibrate, CalibrationFactors, Unit, CM_PER_INCH};
pub use data::device::{estimate, DeviceProfile, DeviceSignals, SizeRule, SIZE_RULES};
pub use data::geometry::{
    area_in_units, distance, perimeter, pixel_distance, signed_area_px, Point,
};
pub use data::session::{
    AddPointOutcome, MeasureKind, MeasureMode, Measurement, MeasurementSession,
    CLOSURE_THRESHOLD_PX, MAX_DISTANCE_MEASUREMENTS,
};
pub use events::{EventController, EventFilter, EventKind, MeasureEvent};
