use camruler::{area_in_units, distance, perimeter, pixel_distance, signed_area_px, Point};

fn square_100() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 100.0),
    ]
}

#[test]
fn distance_to_self_is_zero() {
    let p = Point::new(12.5, -3.0);
    for factor in [0.1, 1.0, 40.336] {
        assert_eq!(distance(p, p, factor), 0.0);
    }
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(1.0, 2.0);
    let b = Point::new(-4.0, 7.5);
    assert_eq!(distance(a, b, 2.0), distance(b, a, 2.0));
}

#[test]
fn three_four_five_triangle() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(pixel_distance(a, b), 5.0);
    assert_eq!(distance(a, b, 2.0), 2.5);
}

#[test]
fn perimeter_of_square() {
    // 400 px around, factor 4 px/unit -> 100 units.
    assert!((perimeter(&square_100(), 4.0) - 100.0).abs() < 1e-12);
}

#[test]
fn degenerate_polygons_measure_zero() {
    let two = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    assert_eq!(perimeter(&two, 1.0), 0.0);
    assert_eq!(signed_area_px(&two), 0.0);
    assert_eq!(signed_area_px(&[]), 0.0);
}

#[test]
fn shoelace_area_of_square() {
    assert_eq!(signed_area_px(&square_100()), 10000.0);
    // factor 10 px/unit -> 100 square units.
    assert!((area_in_units(&square_100(), 10.0) - 100.0).abs() < 1e-12);
}

#[test]
fn perimeter_and_area_invariant_under_cyclic_rotation() {
    let pts = square_100();
    for shift in 1..pts.len() {
        let mut rotated = pts.clone();
        rotated.rotate_left(shift);
        assert!((perimeter(&rotated, 4.0) - perimeter(&pts, 4.0)).abs() < 1e-9);
        assert!((signed_area_px(&rotated) - signed_area_px(&pts)).abs() < 1e-9);
    }
}

#[test]
fn area_invariant_under_reflection() {
    // Reversing the winding flips the sign before the absolute value.
    let mut reversed = square_100();
    reversed.reverse();
    assert_eq!(signed_area_px(&reversed), signed_area_px(&square_100()));

    // Mirroring across the Y axis also leaves the magnitude unchanged.
    let mirrored: Vec<Point> = square_100()
        .iter()
        .map(|p| Point::new(-p.x, p.y))
        .collect();
    assert_eq!(signed_area_px(&mirrored), signed_area_px(&square_100()));
}

#[test]
fn non_convex_polygon_area() {
    // L-shape: 2x2 square with a 1x1 corner notch -> area 3.
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(2.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 2.0),
        Point::new(0.0, 2.0),
    ];
    assert!((signed_area_px(&pts) - 3.0).abs() < 1e-12);
}
