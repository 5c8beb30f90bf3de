use egui::Ui;

use crate::data::session::MeasurementSession;

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub visible: bool,
    pub detached: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            visible: true,
            detached: false,
        }
    }
}

pub trait Panel {
    fn name(&self) -> &'static str;
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    // Optional hook with a default empty impl
    fn render_panel(&mut self, _ui: &mut Ui, _session: &MeasurementSession) {}
}
