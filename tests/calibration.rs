use camruler::{calibrate, estimate, DeviceSignals, Unit, CM_PER_INCH};

#[test]
fn full_hd_desktop_factor() {
    // 1920 px across an assumed 47.6 cm screen at pixel ratio 1.
    let profile = estimate(&DeviceSignals::fullscreen(1920, 1080, 1.0, false));
    let factors = calibrate(&profile);
    assert!(
        (factors.pixels_per_cm - 40.336).abs() < 1e-3,
        "expected ≈40.336 px/cm, got {}",
        factors.pixels_per_cm
    );
}

#[test]
fn inch_factor_derives_from_cm_factor() {
    let profile = estimate(&DeviceSignals::fullscreen(2560, 1440, 1.0, false));
    let factors = calibrate(&profile);
    assert_eq!(factors.pixels_per_in, factors.pixels_per_cm * CM_PER_INCH);
    assert_eq!(factors.factor(Unit::Cm), factors.pixels_per_cm);
    assert_eq!(factors.factor(Unit::In), factors.pixels_per_in);
}

#[test]
fn pixel_ratio_scales_factors_down() {
    let at_one = calibrate(&estimate(&DeviceSignals::fullscreen(1920, 1080, 1.0, false)));
    let at_two = calibrate(&estimate(&DeviceSignals::fullscreen(1920, 1080, 2.0, false)));
    assert!((at_two.pixels_per_cm - at_one.pixels_per_cm / 2.0).abs() < 1e-12);
    assert!((at_two.pixels_per_in - at_one.pixels_per_in / 2.0).abs() < 1e-12);
}

#[test]
fn factors_strictly_positive() {
    for (w, mobile) in [(320u32, true), (800, true), (1366, false), (4096, false)] {
        let factors = calibrate(&estimate(&DeviceSignals::fullscreen(w, w, 1.5, mobile)));
        assert!(factors.pixels_per_cm > 0.0);
        assert!(factors.pixels_per_in > 0.0);
    }
}

#[test]
fn calibrate_is_idempotent() {
    let profile = estimate(&DeviceSignals::fullscreen(1366, 768, 1.25, false));
    assert_eq!(calibrate(&profile), calibrate(&profile));
}
