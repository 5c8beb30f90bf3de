//! Example: Headless measurement session (no UI)
//!
//! What it demonstrates
//! - Using the measurement core directly: estimate a device profile from
//!   explicit signals, feed clicks into a `MeasurementSession`, and read the
//!   committed history.
//!
//! How to run
//! ```bash
//! cargo run --example headless_session
//! ```

use camruler::{DeviceSignals, MeasureMode, MeasurementSession, Point};

fn main() {
    // A full-HD desktop screen at pixel ratio 1.
    let signals = DeviceSignals::fullscreen(1920, 1080, 1.0, false);
    let mut session = MeasurementSession::new(&signals);

    let factors = session.factors();
    println!(
        "Calibrated: {:.3} px/cm, {:.3} px/in (assumed screen width {:.1} cm)",
        factors.pixels_per_cm,
        factors.pixels_per_in,
        session.profile().assumed_physical_width_cm
    );

    // Two clicks in distance mode.
    session.add_point(Point::new(100.0, 100.0));
    session.add_point(Point::new(503.36, 100.0));

    // A square in area mode, closed by clicking near the first corner.
    session.switch_mode(MeasureMode::Area);
    for p in [
        Point::new(0.0, 0.0),
        Point::new(200.0, 0.0),
        Point::new(200.0, 200.0),
        Point::new(0.0, 200.0),
        Point::new(4.0, 3.0),
    ] {
        session.add_point(p);
    }

    for (i, m) in session.measurements().iter().enumerate() {
        println!(
            "{} #{}: {} {}",
            m.kind.label(),
            i + 1,
            m.display_value(),
            m.unit_label
        );
    }
}
