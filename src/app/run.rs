//! Top-level entry point for running camruler as a native window.
//!
//! [`run_camruler`] is the primary public API for launching the measurement
//! UI: it consumes a configuration object (taking any attached controllers),
//! opens a native window and enters the eframe event loop.

use eframe::egui;

use crate::config::CamRulerConfig;

use super::MeasureApp;

/// Launch the camruler application in a native window.
///
/// The call blocks until the window is closed.
pub fn run_camruler(mut cfg: CamRulerConfig) -> eframe::Result<()> {
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a bigger default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1280.0, 820.0));
    }

    // Building the app may replace the configured title with a persisted one,
    // so read it back afterwards.
    let app = MeasureApp::new(&mut cfg);
    let title = cfg.title.clone();

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
