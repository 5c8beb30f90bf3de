pub mod calibration_ui;
pub mod measurements_ui;
pub mod overlay_ui;
pub mod panel_trait;

pub use calibration_ui::CalibrationPanel;
pub use measurements_ui::MeasurementsPanel;
pub use overlay_ui::MeasureOverlay;
pub use panel_trait::{Panel, PanelState};
