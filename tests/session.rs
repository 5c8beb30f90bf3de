use camruler::{
    AddPointOutcome, DeviceSignals, MeasureKind, MeasureMode, MeasurementSession, Point, Unit,
    MAX_DISTANCE_MEASUREMENTS,
};

fn desktop_session() -> MeasurementSession {
    // Full-HD desktop at pixel ratio 1 -> ≈40.336 px/cm.
    MeasurementSession::new(&DeviceSignals::fullscreen(1920, 1080, 1.0, false))
}

fn complete_distance(session: &mut MeasurementSession, offset: f64) -> AddPointOutcome {
    session.add_point(Point::new(offset, 0.0));
    session.add_point(Point::new(offset + 50.0, 0.0))
}

#[test]
fn two_clicks_complete_a_distance() {
    let mut session = desktop_session();
    assert_eq!(
        session.add_point(Point::new(100.0, 100.0)),
        AddPointOutcome::Pending
    );
    assert_eq!(session.points().len(), 1);

    let outcome = session.add_point(Point::new(503.36, 100.0));
    assert_eq!(outcome, AddPointOutcome::Completed(MeasureKind::Distance));
    assert!(session.points().is_empty(), "buffer clears on completion");
    assert_eq!(session.distance_count(), 1);

    // 403.36 px at ≈40.336 px/cm is ≈10.000 cm.
    let m = &session.measurements()[0];
    assert_eq!(m.kind, MeasureKind::Distance);
    assert_eq!(m.unit_label, "cm");
    assert!((m.value - 10.0).abs() < 1e-3, "got {}", m.value);
    assert_eq!(m.display_value(), "10.000");
}

#[test]
fn distance_cap_discards_fifth_pair() {
    let mut session = desktop_session();
    for i in 0..MAX_DISTANCE_MEASUREMENTS {
        assert_eq!(
            complete_distance(&mut session, i as f64 * 10.0),
            AddPointOutcome::Completed(MeasureKind::Distance)
        );
    }
    assert_eq!(session.distance_count(), MAX_DISTANCE_MEASUREMENTS);

    // The fifth completed pair is discarded: no measurement, counter stays.
    assert_eq!(
        complete_distance(&mut session, 500.0),
        AddPointOutcome::DistanceCapReached
    );
    assert_eq!(session.distance_count(), MAX_DISTANCE_MEASUREMENTS);
    assert_eq!(session.measurements().len(), MAX_DISTANCE_MEASUREMENTS);
    assert!(session.points().is_empty(), "discarded pair still clears the buffer");
}

#[test]
fn polygon_closes_within_threshold() {
    let mut session = desktop_session();
    session.switch_mode(MeasureMode::Area);

    assert_eq!(session.add_point(Point::new(0.0, 0.0)), AddPointOutcome::Pending);
    assert_eq!(session.add_point(Point::new(100.0, 0.0)), AddPointOutcome::Pending);
    assert_eq!(session.add_point(Point::new(100.0, 100.0)), AddPointOutcome::Pending);

    // (5,5) is ~7.07 px from the first point, inside the 20 px threshold.
    let outcome = session.add_point(Point::new(5.0, 5.0));
    assert_eq!(outcome, AddPointOutcome::Completed(MeasureKind::Area));
    assert!(session.points().is_empty());

    // Shoelace over the clicked quadrilateral: 5000 px², divided by factor².
    let factor = session.factors().factor(Unit::Cm);
    let m = &session.measurements()[0];
    assert_eq!(m.unit_label, "cm²");
    assert!((m.value - 5000.0 / (factor * factor)).abs() < 1e-9);
}

#[test]
fn polygon_stays_open_without_closure() {
    let mut session = desktop_session();
    session.switch_mode(MeasureMode::Area);
    for p in [
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(50.0, 50.0),
        Point::new(30.0, 80.0),
    ] {
        assert_eq!(session.add_point(p), AddPointOutcome::Pending);
    }
    assert_eq!(session.points().len(), 5, "buffer keeps growing until closure");
    assert!(session.measurements().is_empty());
}

#[test]
fn two_points_never_close_a_polygon() {
    let mut session = desktop_session();
    session.switch_mode(MeasureMode::Perimeter);
    session.add_point(Point::new(0.0, 0.0));
    // Right on top of the first point, but the buffer is too short to close.
    assert_eq!(session.add_point(Point::new(1.0, 1.0)), AddPointOutcome::Pending);
    assert_eq!(session.points().len(), 2);
}

#[test]
fn perimeter_mode_commits_perimeter() {
    let mut session = desktop_session();
    session.switch_mode(MeasureMode::Perimeter);
    session.add_point(Point::new(0.0, 0.0));
    session.add_point(Point::new(300.0, 0.0));
    session.add_point(Point::new(300.0, 400.0));
    let outcome = session.add_point(Point::new(3.0, 4.0));
    assert_eq!(outcome, AddPointOutcome::Completed(MeasureKind::Perimeter));

    let m = &session.measurements()[0];
    assert_eq!(m.kind, MeasureKind::Perimeter);
    assert_eq!(m.unit_label, "cm");
    assert!(m.value > 0.0);
}

#[test]
fn mode_switch_discards_buffer() {
    let mut session = desktop_session();
    session.switch_mode(MeasureMode::Area);
    session.add_point(Point::new(10.0, 10.0));
    session.add_point(Point::new(20.0, 20.0));

    session.switch_mode(MeasureMode::Distance);
    session.switch_mode(MeasureMode::Area);
    assert!(session.points().is_empty(), "original 2 points are gone");
}

#[test]
fn unit_switch_clears_history() {
    let mut session = desktop_session();
    complete_distance(&mut session, 0.0);
    assert_eq!(session.measurements().len(), 1);

    // Even re-selecting the *current* unit clears a non-empty history.
    assert!(session.switch_unit(Unit::Cm));
    assert!(session.measurements().is_empty());
    assert_eq!(session.distance_count(), 0);

    complete_distance(&mut session, 0.0);
    assert!(session.switch_unit(Unit::In));
    assert!(session.measurements().is_empty());
    assert_eq!(session.unit(), Unit::In);
}

#[test]
fn unit_switch_with_empty_history_is_a_no_op_clear() {
    let mut session = desktop_session();
    assert!(!session.switch_unit(Unit::In));
    assert_eq!(session.unit(), Unit::In);

    // Inch measurements use the inch factor.
    session.add_point(Point::new(0.0, 0.0));
    session.add_point(Point::new(404.0, 0.0));
    let m = &session.measurements()[0];
    assert_eq!(m.unit_label, "in");
    let expected = 404.0 / session.factors().factor(Unit::In);
    assert!((m.value - expected).abs() < 1e-12);
}

#[test]
fn clear_all_is_idempotent() {
    let mut session = desktop_session();
    complete_distance(&mut session, 0.0);
    session.add_point(Point::new(1.0, 1.0));

    session.clear_all();
    assert!(session.points().is_empty());
    assert!(session.measurements().is_empty());
    assert_eq!(session.distance_count(), 0);

    session.clear_all();
    assert!(session.measurements().is_empty());
}

#[test]
fn recalibrate_recomputes_factors_and_clears() {
    let mut session = desktop_session();
    complete_distance(&mut session, 0.0);
    let old_factor = session.factors().pixels_per_cm;

    // Pretend the app moved to a small handheld screen.
    session.recalibrate(&DeviceSignals::fullscreen(480, 800, 2.0, true));
    assert!(session.measurements().is_empty());
    assert_eq!(session.distance_count(), 0);
    assert_ne!(session.factors().pixels_per_cm, old_factor);
    assert_eq!(session.profile().assumed_physical_width_cm, 6.0);
}

#[test]
fn custom_limits_are_honored() {
    let signals = DeviceSignals::fullscreen(1920, 1080, 1.0, false);
    let mut session = MeasurementSession::with_limits(&signals, 1, 5.0);

    complete_distance(&mut session, 0.0);
    assert_eq!(
        complete_distance(&mut session, 100.0),
        AddPointOutcome::DistanceCapReached
    );

    // 10 px away from the first point: outside the tightened 5 px threshold.
    session.switch_mode(MeasureMode::Area);
    session.add_point(Point::new(0.0, 0.0));
    session.add_point(Point::new(100.0, 0.0));
    session.add_point(Point::new(100.0, 100.0));
    assert_eq!(session.add_point(Point::new(10.0, 0.0)), AddPointOutcome::Pending);
}

#[test]
fn area_display_uses_six_decimals() {
    let mut session = desktop_session();
    session.switch_mode(MeasureMode::Area);
    session.add_point(Point::new(0.0, 0.0));
    session.add_point(Point::new(30.0, 0.0));
    session.add_point(Point::new(30.0, 30.0));
    session.add_point(Point::new(2.0, 2.0));

    let m = &session.measurements()[0];
    assert_eq!(m.kind, MeasureKind::Area);
    let dot = m.display_value().find('.').expect("decimal point");
    assert_eq!(m.display_value().len() - dot - 1, 6);
}
