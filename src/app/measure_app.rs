//! The standalone camruler application.
//!
//! [`MeasureApp`] implements [`eframe::App`]: it owns the
//! [`MeasurementSession`], renders the top bar and side panels, forwards
//! overlay clicks into the session, processes controller requests once per
//! frame, and emits [`MeasureEvent`]s on every transition.

use eframe::egui;
use egui::Color32;
use egui_phosphor::regular::{ARROWS_CLOCKWISE, BROOM};

use crate::config::{CamRulerConfig, FeatureFlags};
use crate::controllers::{CameraController, SessionController, SessionInfo};
use crate::data::calibration::Unit;
use crate::data::device::DeviceSignals;
use crate::data::session::{AddPointOutcome, MeasureMode, MeasurementSession};
use crate::events::{
    CalibrationMeta, ClickMeta, EventController, EventKind, MeasureEvent, MeasurementMeta,
};
use crate::panels::{CalibrationPanel, MeasureOverlay, MeasurementsPanel, Panel};
use crate::persistence::{self, UiStateSerde};

/// Conservative desktop signals used until the first frame can probe the real
/// context, and as the monitor-size fallback when the backend reports none.
const FALLBACK_SIGNALS: DeviceSignals = DeviceSignals {
    screen_width_px: 1920,
    screen_height_px: 1080,
    window_width_px: 1920,
    window_height_px: 1080,
    device_pixel_ratio: 1.0,
    is_mobile: false,
};

/// Severity of the status line, mirrored in its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusLevel {
    Info,
    Success,
    Warning,
}

impl StatusLevel {
    fn color(self) -> Color32 {
        match self {
            StatusLevel::Info => Color32::LIGHT_BLUE,
            StatusLevel::Success => Color32::LIGHT_GREEN,
            StatusLevel::Warning => Color32::from_rgb(255, 136, 0),
        }
    }
}

/// Standalone measurement application that implements [`eframe::App`].
pub struct MeasureApp {
    session: MeasurementSession,
    overlay: MeasureOverlay,
    calibration_panel: CalibrationPanel,
    measurements_panel: MeasurementsPanel,
    features: FeatureFlags,

    // ── Optional external controllers ────────────────────────────────────
    session_ctrl: Option<SessionController>,
    camera_ctrl: Option<CameraController>,
    events: Option<EventController>,

    status: String,
    status_level: StatusLevel,
    /// Window title, carried so the UI state saved on exit round-trips it.
    title: String,
    /// When set, UI state is loaded at startup and saved back on exit.
    ui_state_path: Option<std::path::PathBuf>,
    /// Signals the session was last calibrated from. Refreshed on explicit
    /// recalibration (and on the first frame when no override was given).
    last_signals: DeviceSignals,
    /// When set, ambient probing is skipped entirely (tests, embedders).
    signals_override: Option<DeviceSignals>,
    signals_probed: bool,
}

impl MeasureApp {
    /// Build the app from a configuration, taking any attached controllers.
    pub fn new(cfg: &mut CamRulerConfig) -> Self {
        // Persisted interface state, when configured and readable, overrides
        // the configured title, mode, unit and panel visibility.
        if let Some(path) = &cfg.ui_state_path {
            if let Ok(saved) = persistence::load_ui_state(path) {
                cfg.title = saved.title;
                cfg.mode = saved.mode;
                cfg.unit = saved.unit;
                cfg.features.calibration = saved.calibration_visible;
                cfg.features.measurements = saved.measurements_visible;
            }
        }

        // Placeholder until the first frame can probe the real context;
        // an explicit override wins outright.
        let signals = cfg.device_signals.unwrap_or(FALLBACK_SIGNALS);
        let mut session =
            MeasurementSession::with_limits(&signals, cfg.max_distance_measurements, cfg.closure_threshold_px);
        session.switch_mode(cfg.mode);
        session.switch_unit(cfg.unit);

        let mut calibration_panel = CalibrationPanel::default();
        calibration_panel.show_recalibrate = cfg.features.recalibrate;
        calibration_panel.state_mut().visible = cfg.features.calibration;
        let mut measurements_panel = MeasurementsPanel::default();
        measurements_panel.show_clear_all = cfg.features.clear_all;
        measurements_panel.state_mut().visible = cfg.features.measurements;

        Self {
            session,
            overlay: MeasureOverlay::default(),
            calibration_panel,
            measurements_panel,
            features: cfg.features.clone(),
            session_ctrl: cfg.session_controller.take(),
            camera_ctrl: cfg.camera_controller.take(),
            events: cfg.event_controller.take(),
            status: "Auto-calibration complete! Ready to measure.".to_string(),
            status_level: StatusLevel::Success,
            title: cfg.title.clone(),
            ui_state_path: cfg.ui_state_path.take(),
            last_signals: signals,
            signals_override: cfg.device_signals,
            signals_probed: cfg.device_signals.is_some(),
        }
    }

    /// Read-only access to the session (for embedding and tests).
    pub fn session(&self) -> &MeasurementSession {
        &self.session
    }

    /// The device signals the session was last calibrated from.
    pub fn device_signals(&self) -> &DeviceSignals {
        &self.last_signals
    }

    /// The interface state that gets persisted on exit.
    pub fn ui_state(&self) -> UiStateSerde {
        UiStateSerde {
            title: self.title.clone(),
            mode: self.session.mode(),
            unit: self.session.unit(),
            calibration_visible: self.calibration_panel.state().visible,
            measurements_visible: self.measurements_panel.state().visible,
        }
    }

    // ── Signals ──────────────────────────────────────────────────────────

    /// Probe ambient device signals from the egui context: monitor size and
    /// window size in physical pixels, plus the pixel ratio.
    fn probe_signals(ctx: &egui::Context) -> DeviceSignals {
        let ppp = f64::from(ctx.pixels_per_point());
        let (monitor, window) = ctx.input(|i| {
            let vp = i.viewport();
            (vp.monitor_size, i.content_rect().size())
        });
        let monitor = monitor.unwrap_or(egui::vec2(
            FALLBACK_SIGNALS.screen_width_px as f32,
            FALLBACK_SIGNALS.screen_height_px as f32,
        ));
        let is_mobile = cfg!(any(target_os = "android", target_os = "ios"));
        DeviceSignals {
            screen_width_px: (f64::from(monitor.x) * ppp).round() as u32,
            screen_height_px: (f64::from(monitor.y) * ppp).round() as u32,
            window_width_px: (f64::from(window.x) * ppp).round() as u32,
            window_height_px: (f64::from(window.y) * ppp).round() as u32,
            device_pixel_ratio: ppp,
            is_mobile,
        }
    }

    // ── Transitions (with status + event side effects) ───────────────────

    fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = text.into();
        self.status_level = level;
    }

    fn emit(&self, event: MeasureEvent) {
        if let Some(events) = &self.events {
            events.emit(event);
        }
    }

    fn switch_mode(&mut self, mode: MeasureMode) {
        self.session.switch_mode(mode);
        self.set_status(mode.status_text(), StatusLevel::Info);
        let mut evt = MeasureEvent::new(EventKind::MODE_CHANGED);
        evt.mode = Some(mode);
        self.emit(evt);
    }

    fn switch_unit(&mut self, unit: Unit) {
        let cleared = self.session.switch_unit(unit);
        self.calibration_panel.scale_precision = 6;
        let mut kinds = EventKind::UNIT_CHANGED;
        if cleared {
            kinds |= EventKind::CLEARED;
            self.set_status(
                format!("Unit changed to {unit}. Previous measurements cleared."),
                StatusLevel::Info,
            );
        }
        let mut evt = MeasureEvent::new(kinds);
        evt.unit = Some(unit);
        self.emit(evt);
    }

    fn clear_all(&mut self) {
        self.session.clear_all();
        self.set_status("All measurements cleared", StatusLevel::Info);
        self.emit(MeasureEvent::new(EventKind::CLEARED));
    }

    fn recalibrate(&mut self, ctx: &egui::Context) {
        let signals = self
            .signals_override
            .unwrap_or_else(|| Self::probe_signals(ctx));
        self.last_signals = signals;
        self.session.recalibrate(&signals);
        self.set_status("Auto-calibration refreshed", StatusLevel::Success);

        let factors = self.session.factors();
        let mut evt = MeasureEvent::new(EventKind::RECALIBRATED | EventKind::CLEARED);
        evt.calibration = Some(CalibrationMeta {
            pixels_per_cm: factors.pixels_per_cm,
            pixels_per_in: factors.pixels_per_in,
        });
        self.emit(evt);
    }

    fn handle_click(&mut self, point: crate::data::geometry::Point, outcome: AddPointOutcome) {
        let mut kinds = EventKind::CLICK | EventKind::POINT_ADDED;
        let mut evt = MeasureEvent::new(kinds);
        match outcome {
            AddPointOutcome::Pending => {}
            AddPointOutcome::Completed(kind) => {
                kinds |= EventKind::MEASUREMENT_COMPLETE;
                // The committed measurement is the last history entry.
                if let Some(m) = self.session.measurements().last() {
                    evt.measurement = Some(MeasurementMeta {
                        kind,
                        value: m.value,
                        unit_label: m.unit_label.clone(),
                    });
                    self.set_status(
                        format!("{} recorded: {} {}", kind.label(), m.display_value(), m.unit_label),
                        StatusLevel::Success,
                    );
                }
            }
            AddPointOutcome::DistanceCapReached => {
                kinds |= EventKind::DISTANCE_CAP_REACHED;
                self.set_status(
                    format!(
                        "Maximum of {} distance measurements reached – clear to continue",
                        self.session.distance_cap()
                    ),
                    StatusLevel::Warning,
                );
            }
        }
        evt.kinds = kinds;
        evt.click = Some(ClickMeta {
            canvas_pos: [point.x, point.y],
            buffer_len: self.session.points().len(),
        });
        self.emit(evt);
    }

    // ── Controllers ──────────────────────────────────────────────────────

    /// Apply queued controller requests and publish state snapshots.
    fn apply_controllers(&mut self, ctx: &egui::Context) {
        // ── SessionController ────────────────────────────────────────────
        if let Some(ctrl) = self.session_ctrl.clone() {
            let (clear, recal, mode, unit) = {
                let mut inner = ctrl.inner.lock().unwrap();
                let clear = std::mem::take(&mut inner.request_clear);
                let recal = std::mem::take(&mut inner.request_recalibrate);
                (clear, recal, inner.request_mode.take(), inner.request_unit.take())
            };
            if let Some(mode) = mode {
                self.switch_mode(mode);
            }
            if let Some(unit) = unit {
                self.switch_unit(unit);
            }
            if clear {
                self.clear_all();
            }
            if recal {
                self.recalibrate(ctx);
            }

            let factors = self.session.factors();
            let info = SessionInfo {
                pixels_per_cm: factors.pixels_per_cm,
                pixels_per_in: factors.pixels_per_in,
                mode: self.session.mode(),
                unit: self.session.unit(),
                measurement_count: self.session.measurements().len(),
                distance_count: self.session.distance_count(),
                distance_cap: self.session.distance_cap(),
                pending_points: self.session.points().len(),
            };
            let mut inner = ctrl.inner.lock().unwrap();
            inner.listeners.retain(|s| s.send(info.clone()).is_ok());
        }

        // ── CameraController ─────────────────────────────────────────────
        if let Some(ctrl) = self.camera_ctrl.clone() {
            let fresh = {
                let mut inner = ctrl.inner.lock().unwrap();
                if std::mem::take(&mut inner.status_dirty) {
                    inner.status.clone()
                } else {
                    None
                }
            };
            if let Some(status) = fresh {
                let level = if status.ready {
                    StatusLevel::Success
                } else {
                    StatusLevel::Warning
                };
                self.set_status(status.message, level);
                self.emit(MeasureEvent::new(EventKind::CAMERA_READY));
            }
        }
    }

    // ── Rendering ────────────────────────────────────────────────────────

    fn render_top_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal_wrapped(|ui| {
            for mode in [MeasureMode::Distance, MeasureMode::Perimeter, MeasureMode::Area] {
                if ui
                    .selectable_label(self.session.mode() == mode, mode.label())
                    .clicked()
                {
                    self.switch_mode(mode);
                }
            }

            ui.separator();
            for unit in [Unit::Cm, Unit::In] {
                if ui
                    .selectable_label(self.session.unit() == unit, unit.symbol())
                    .clicked()
                {
                    self.switch_unit(unit);
                }
            }

            ui.separator();
            if self.features.clear_all && ui.button(format!("{BROOM} Clear All")).clicked() {
                self.clear_all();
            }
            if self.features.recalibrate
                && ui.button(format!("{ARROWS_CLOCKWISE} Recalibrate")).clicked()
            {
                self.recalibrate(ctx);
            }

            ui.separator();
            let cal_visible = self.calibration_panel.state().visible;
            if ui
                .selectable_label(cal_visible, self.calibration_panel.name())
                .clicked()
            {
                self.calibration_panel.state_mut().visible = !cal_visible;
            }
            let meas_visible = self.measurements_panel.state().visible;
            if ui
                .selectable_label(meas_visible, self.measurements_panel.name())
                .clicked()
            {
                self.measurements_panel.state_mut().visible = !meas_visible;
            }
        });
    }

    fn render_side_panels(&mut self, ctx: &egui::Context) {
        let show_side =
            self.calibration_panel.state().visible || self.measurements_panel.state().visible;
        if !show_side {
            return;
        }
        egui::SidePanel::right("camruler_side")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if self.calibration_panel.state().visible {
                        ui.heading(self.calibration_panel.name());
                        self.calibration_panel.render_panel(ui, &self.session);
                        ui.separator();
                    }
                    if self.measurements_panel.state().visible {
                        ui.heading(self.measurements_panel.name());
                        self.measurements_panel.render_panel(ui, &self.session);
                    }
                });
            });
    }
}

impl eframe::App for MeasureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // First frame: replace the placeholder calibration with signals read
        // from the real context.
        if !self.signals_probed {
            self.signals_probed = true;
            let signals = Self::probe_signals(ctx);
            self.last_signals = signals;
            self.session.recalibrate(&signals);
        }

        self.apply_controllers(ctx);

        if self.features.top_bar {
            egui::TopBottomPanel::top("camruler_top").show(ctx, |ui| {
                self.render_top_bar(ui, ctx);
            });
        }

        self.render_side_panels(ctx);

        // Panel-requested actions, consumed after rendering.
        if std::mem::take(&mut self.calibration_panel.recalibrate_requested) {
            self.recalibrate(ctx);
        }
        if std::mem::take(&mut self.measurements_panel.clear_requested) {
            self.clear_all();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.features.camera_status {
                let camera_line = self
                    .camera_ctrl
                    .as_ref()
                    .and_then(|c| c.status())
                    .map(|s| s.message)
                    .unwrap_or_else(|| "Camera not started".to_string());
                ui.horizontal(|ui| {
                    ui.colored_label(self.status_level.color(), self.status.as_str());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak(camera_line);
                    });
                });
                ui.separator();
            } else {
                ui.colored_label(self.status_level.color(), self.status.as_str());
                ui.separator();
            }

            if let Some((point, outcome)) = self.overlay.show(ui, &mut self.session) {
                self.handle_click(point, outcome);
            }
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(path) = &self.ui_state_path {
            if let Err(e) = persistence::save_ui_state(path, &self.ui_state()) {
                eprintln!("Failed to save UI state to {}: {e}", path.display());
            }
        }
    }
}
