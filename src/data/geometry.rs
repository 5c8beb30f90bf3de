//! Pure geometry on canvas-local pixel coordinates.
//!
//! All functions take ordered point sequences and a strictly positive
//! pixels-per-unit factor, and compute in `f64` throughout. No rounding
//! happens here — display formatting is the panels' concern.

/// A point in canvas-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points, in pixels.
#[inline]
pub fn pixel_distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Euclidean distance between two points, converted to physical units.
///
/// `factor > 0` (pixels per unit) is a precondition, not checked at runtime.
#[inline]
pub fn distance(a: Point, b: Point, factor: f64) -> f64 {
    pixel_distance(a, b) / factor
}

/// Perimeter of the closed polygon through `points`, in physical units.
///
/// Sums [`distance`] over consecutive pairs including the last-to-first
/// wrap-around edge. Returns `0.0` for fewer than 3 points (no polygon).
pub fn perimeter(points: &[Point], factor: f64) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| distance(p, points[(i + 1) % points.len()], factor))
        .sum()
}

/// Area of the closed polygon through `points`, in square pixels.
///
/// Standard shoelace formula, `0.5 * |Σ (x_i·y_{i+1} − x_{i+1}·y_i)|` over
/// the wrap-around sequence. Returns `0.0` for fewer than 3 points.
pub fn signed_area_px(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (i, &p1) in points.iter().enumerate() {
        let p2 = points[(i + 1) % points.len()];
        sum += p1.x * p2.y - p2.x * p1.y;
    }
    sum.abs() / 2.0
}

/// Polygon area converted to physical square units: `signed_area_px / factor²`.
#[inline]
pub fn area_in_units(points: &[Point], factor: f64) -> f64 {
    signed_area_px(points) / (factor * factor)
}
