use camruler::{estimate, DeviceSignals};

fn signals(width: u32, is_mobile: bool) -> DeviceSignals {
    DeviceSignals::fullscreen(width, width * 9 / 16, 1.0, is_mobile)
}

#[test]
fn mobile_buckets() {
    let p = estimate(&signals(320, true));
    assert_eq!((p.assumed_physical_width_cm, p.assumed_physical_height_cm), (6.0, 10.7));

    let p = estimate(&signals(600, true));
    assert_eq!((p.assumed_physical_width_cm, p.assumed_physical_height_cm), (7.0, 12.4));

    let p = estimate(&signals(1200, true));
    assert_eq!((p.assumed_physical_width_cm, p.assumed_physical_height_cm), (20.0, 26.7));
}

#[test]
fn desktop_buckets() {
    let p = estimate(&signals(1280, false));
    assert_eq!((p.assumed_physical_width_cm, p.assumed_physical_height_cm), (29.0, 16.3));

    let p = estimate(&signals(1920, false));
    assert_eq!((p.assumed_physical_width_cm, p.assumed_physical_height_cm), (47.6, 26.8));

    let p = estimate(&signals(3840, false));
    assert_eq!((p.assumed_physical_width_cm, p.assumed_physical_height_cm), (59.7, 33.6));
}

#[test]
fn bucket_boundaries_are_inclusive() {
    // Each rule matches via `<=`, so the boundary width still hits the
    // smaller bucket.
    assert_eq!(estimate(&signals(480, true)).assumed_physical_width_cm, 6.0);
    assert_eq!(estimate(&signals(481, true)).assumed_physical_width_cm, 7.0);
    assert_eq!(estimate(&signals(768, true)).assumed_physical_width_cm, 7.0);
    assert_eq!(estimate(&signals(769, true)).assumed_physical_width_cm, 20.0);
    assert_eq!(estimate(&signals(1366, false)).assumed_physical_width_cm, 29.0);
    assert_eq!(estimate(&signals(1367, false)).assumed_physical_width_cm, 47.6);
    assert_eq!(estimate(&signals(1921, false)).assumed_physical_width_cm, 59.7);
}

#[test]
fn non_positive_pixel_ratio_coerced_to_one() {
    let mut s = signals(1920, false);
    s.device_pixel_ratio = 0.0;
    assert_eq!(estimate(&s).signals.device_pixel_ratio, 1.0);

    s.device_pixel_ratio = -2.0;
    assert_eq!(estimate(&s).signals.device_pixel_ratio, 1.0);
}

#[test]
fn estimate_is_pure() {
    let s = signals(1920, false);
    assert_eq!(estimate(&s), estimate(&s));
}
