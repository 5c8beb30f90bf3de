use egui::{Color32, Ui};
use egui_phosphor::regular::ARROWS_CLOCKWISE;

use super::panel_trait::{Panel, PanelState};
use crate::data::session::MeasurementSession;

/// Shows what the auto-calibration came up with: the assumed physical screen
/// size, resolution, pixel density, and the resulting scale line.
pub struct CalibrationPanel {
    state: PanelState,
    /// Decimal places of the "1 px = …" scale line. 4 after the initial
    /// calibration, 6 once the user switches units (matching the finer
    /// precision that an explicit unit choice implies).
    pub scale_precision: usize,
    /// Set when the user clicks Recalibrate; consumed by the app.
    pub recalibrate_requested: bool,
    /// Whether to offer the recalibrate button at all.
    pub show_recalibrate: bool,
}

impl Default for CalibrationPanel {
    fn default() -> Self {
        Self {
            state: PanelState::default(),
            scale_precision: 4,
            recalibrate_requested: false,
            show_recalibrate: true,
        }
    }
}

impl Panel for CalibrationPanel {
    fn name(&self) -> &'static str {
        "Calibration"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, session: &MeasurementSession) {
        let profile = session.profile();
        let signals = &profile.signals;

        ui.label("Auto-calibration estimate (heuristic, no reference object):");
        ui.add_space(4.0);

        egui::Grid::new("calibration_grid")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label("Screen size");
                ui.label(format!(
                    "{:.1} × {:.1} cm",
                    profile.assumed_physical_width_cm, profile.assumed_physical_height_cm
                ));
                ui.end_row();

                ui.label("Resolution");
                ui.label(format!(
                    "{} × {} px",
                    signals.screen_width_px, signals.screen_height_px
                ));
                ui.end_row();

                ui.label("Pixel density");
                ui.label(format!(
                    "{:.1} px/cm",
                    signals.screen_width_px as f64 / profile.assumed_physical_width_cm
                ));
                ui.end_row();

                let unit = session.unit();
                let factor = session.factors().factor(unit);
                ui.label("Scale");
                ui.colored_label(
                    Color32::LIGHT_GREEN,
                    format!(
                        "1 px = {:.prec$} {}",
                        1.0 / factor,
                        unit.symbol(),
                        prec = self.scale_precision
                    ),
                );
                ui.end_row();
            });

        if self.show_recalibrate {
            ui.add_space(6.0);
            if ui
                .button(format!("{ARROWS_CLOCKWISE} Recalibrate"))
                .on_hover_text("Re-estimate the device profile; clears all measurements")
                .clicked()
            {
                self.recalibrate_requested = true;
            }
        }
    }
}
