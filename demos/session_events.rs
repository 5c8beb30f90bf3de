//! Example: Subscribing to measurement events
//!
//! What it demonstrates
//! - Attaching an `EventController` and a `SessionController` to the UI.
//! - Receiving filtered events (completed measurements and the distance cap)
//!   on a background thread while the UI runs.
//!
//! How to run
//! ```bash
//! cargo run --example session_events
//! ```

use camruler::{
    run_camruler, CamRulerConfig, EventController, EventFilter, EventKind, SessionController,
};

fn main() -> eframe::Result<()> {
    let events = EventController::new();
    let session_ctrl = SessionController::new();

    let rx = events.subscribe(EventFilter::only(
        EventKind::MEASUREMENT_COMPLETE | EventKind::DISTANCE_CAP_REACHED | EventKind::UNIT_CHANGED,
    ));
    std::thread::spawn(move || {
        while let Ok(evt) = rx.recv() {
            if let Some(m) = &evt.measurement {
                println!(
                    "[{:.2}s] {}: {:.3} {}",
                    evt.timestamp,
                    evt.kinds,
                    m.value,
                    m.unit_label
                );
            } else {
                println!("[{:.2}s] {}", evt.timestamp, evt.kinds);
            }
        }
    });

    let mut cfg = CamRulerConfig::default();
    cfg.event_controller = Some(events);
    cfg.session_controller = Some(session_ctrl);
    run_camruler(cfg)
}
