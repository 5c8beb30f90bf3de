//! Example: Full measurement UI
//!
//! What it demonstrates
//! - Launching the camruler window with the default configuration.
//! - Simulating the external camera collaborator via `CameraController`.
//!
//! How to run
//! ```bash
//! cargo run --example measure
//! ```
//! Click two points to measure a distance; switch to Perimeter or Area and
//! click out a polygon, finishing near the first point to close it.

use camruler::{run_camruler, CamRulerConfig, CameraController};
use std::time::Duration;

fn main() -> eframe::Result<()> {
    let camera = CameraController::new();
    let mut cfg = CamRulerConfig::default();
    cfg.camera_controller = Some(camera.clone());

    // Stand-in for real camera acquisition: report ready after a moment.
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(800));
        camera.mark_ready("Camera started. Auto-calibration active. Start measuring!");
    });

    // Run the UI until closed
    run_camruler(cfg)
}
