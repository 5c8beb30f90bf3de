//! UI-state persistence: save and load interface state to/from JSON files.
//!
//! Only *interface* state is persisted: window title, active mode, active
//! unit, and which panels are visible. Measurements are deliberately
//! ephemeral and never written to disk.
//!
//! The app loads this state at startup and saves it on exit when
//! [`CamRulerConfig::ui_state_path`](crate::config::CamRulerConfig) is set.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::calibration::Unit;
use crate::data::session::MeasureMode;

/// Serializable mirror of the app's interface state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiStateSerde {
    pub title: String,
    pub mode: MeasureMode,
    pub unit: Unit,
    pub calibration_visible: bool,
    pub measurements_visible: bool,
}

impl Default for UiStateSerde {
    fn default() -> Self {
        Self {
            title: "CamRuler".to_string(),
            mode: MeasureMode::default(),
            unit: Unit::default(),
            calibration_visible: true,
            measurements_visible: true,
        }
    }
}

/// Save interface state as pretty-printed JSON.
pub fn save_ui_state(path: &Path, state: &UiStateSerde) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(state)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

/// Load interface state from a JSON file written by [`save_ui_state`].
pub fn load_ui_state(path: &Path) -> std::io::Result<UiStateSerde> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
