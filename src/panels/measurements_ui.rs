use egui::{Color32, Ui};
use egui_phosphor::regular::BROOM;

use super::panel_trait::{Panel, PanelState};
use crate::data::session::MeasurementSession;

/// Ordered list of committed measurements plus the distance counter.
pub struct MeasurementsPanel {
    state: PanelState,
    /// Set when the user clicks Clear All; consumed by the app.
    pub clear_requested: bool,
    /// Whether to offer the clear-all button at all.
    pub show_clear_all: bool,
}

impl Default for MeasurementsPanel {
    fn default() -> Self {
        Self {
            state: PanelState::default(),
            clear_requested: false,
            show_clear_all: true,
        }
    }
}

impl Panel for MeasurementsPanel {
    fn name(&self) -> &'static str {
        "Measurements"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, session: &MeasurementSession) {
        let at_cap = session.distance_count() >= session.distance_cap();
        let counter = format!(
            "Distance Measurements: {}/{}{}",
            session.distance_count(),
            session.distance_cap(),
            if at_cap { " (Maximum reached)" } else { "" }
        );
        if at_cap {
            ui.colored_label(Color32::from_rgb(255, 136, 0), counter);
        } else {
            ui.label(counter);
        }

        if self.show_clear_all {
            if ui.button(format!("{BROOM} Clear All")).clicked() {
                self.clear_requested = true;
            }
        }
        ui.separator();

        if session.measurements().is_empty() {
            ui.weak("No measurements yet.");
            return;
        }

        for (i, m) in session.measurements().iter().enumerate() {
            ui.horizontal(|ui| {
                ui.strong(format!("{} #{}", m.kind.label(), i + 1));
                ui.colored_label(
                    Color32::LIGHT_BLUE,
                    format!("{} {}", m.display_value(), m.unit_label),
                );
            });
            ui.weak(m.created_at.format("%H:%M:%S").to_string());
            ui.add_space(2.0);
        }
    }
}
