//! The measurement session: the single stateful object of the core.
//!
//! A [`MeasurementSession`] owns the in-progress point buffer, the committed
//! measurement history, the active mode/unit, and the capped distance
//! counter. Every method call is a complete, atomic transition; there is no
//! background work and no partial state observable between input and output.

use chrono::{DateTime, Local};

use crate::data::calibration::{calibrate, CalibrationFactors, Unit};
use crate::data::device::{estimate, DeviceProfile, DeviceSignals};
use crate::data::geometry::{self, Point};

/// Maximum number of completed distance measurements per session.
pub const MAX_DISTANCE_MEASUREMENTS: usize = 4;

/// Proximity (in pixels) between a polygon's first and most recent point at
/// which the shape counts as closed.
pub const CLOSURE_THRESHOLD_PX: f64 = 20.0;

/// Active measurement mode. Exactly one at a time; switching discards any
/// in-progress point buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum MeasureMode {
    #[default]
    Distance,
    Perimeter,
    Area,
}

impl MeasureMode {
    pub fn label(&self) -> &'static str {
        match self {
            MeasureMode::Distance => "Distance",
            MeasureMode::Perimeter => "Perimeter",
            MeasureMode::Area => "Area",
        }
    }

    /// Status line shown when this mode becomes active.
    pub fn status_text(&self) -> &'static str {
        match self {
            MeasureMode::Distance => "Distance Mode: Click two points to measure distance",
            MeasureMode::Perimeter => "Perimeter Mode: Click points to form a polygon",
            MeasureMode::Area => "Area Mode: Click points to form a polygon",
        }
    }
}

/// What kind of value a committed [`Measurement`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureKind {
    Distance,
    Perimeter,
    Area,
}

impl MeasureKind {
    pub fn label(&self) -> &'static str {
        match self {
            MeasureKind::Distance => "Distance",
            MeasureKind::Perimeter => "Perimeter",
            MeasureKind::Area => "Area",
        }
    }
}

/// A committed measurement. Immutable once appended; the history is
/// append-only until a bulk clear.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub kind: MeasureKind,
    /// Already unit-converted value (never a raw pixel quantity).
    pub value: f64,
    /// Unit label at commit time; area measurements carry the squared symbol.
    pub unit_label: String,
    pub created_at: DateTime<Local>,
}

impl Measurement {
    /// Value formatted for display: 3 decimals for linear measurements,
    /// 6 for areas (small areas would otherwise collapse to zero).
    pub fn display_value(&self) -> String {
        match self.kind {
            MeasureKind::Area => format!("{:.6}", self.value),
            _ => format!("{:.3}", self.value),
        }
    }
}

/// Outcome of [`MeasurementSession::add_point`].
///
/// The distance cap is a policy, not an error: a capped two-point sequence is
/// discarded exactly as before, but the outcome reports it so UI layers can
/// warn instead of staying silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPointOutcome {
    /// Point buffered; no measurement completed yet.
    Pending,
    /// A measurement of the given kind was appended to the history.
    Completed(MeasureKind),
    /// A two-point distance sequence completed while the counter was already
    /// at the cap; the buffer was cleared and nothing was recorded.
    DistanceCapReached,
}

/// Stateful measurement controller.
///
/// Lives for the lifetime of the UI session; there is no terminal state.
pub struct MeasurementSession {
    mode: MeasureMode,
    unit: Unit,
    points: Vec<Point>,
    measurements: Vec<Measurement>,
    distance_count: usize,
    distance_cap: usize,
    closure_threshold_px: f64,
    profile: DeviceProfile,
    factors: CalibrationFactors,
}

impl MeasurementSession {
    /// Create a session with default mode (`Distance`), unit (`cm`), cap and
    /// closure threshold, calibrated from the given device signals.
    pub fn new(signals: &DeviceSignals) -> Self {
        Self::with_limits(signals, MAX_DISTANCE_MEASUREMENTS, CLOSURE_THRESHOLD_PX)
    }

    /// Create a session with a custom distance cap and closure threshold.
    pub fn with_limits(signals: &DeviceSignals, distance_cap: usize, closure_threshold_px: f64) -> Self {
        let profile = estimate(signals);
        let factors = calibrate(&profile);
        Self {
            mode: MeasureMode::default(),
            unit: Unit::default(),
            points: Vec::new(),
            measurements: Vec::new(),
            distance_count: 0,
            distance_cap,
            closure_threshold_px,
            profile,
            factors,
        }
    }

    // ── Transitions ──────────────────────────────────────────────────────

    /// Append a clicked point (canvas-local coordinates) and run the
    /// per-mode completion rules.
    pub fn add_point(&mut self, p: Point) -> AddPointOutcome {
        self.points.push(p);
        match self.mode {
            MeasureMode::Distance => self.complete_distance(),
            MeasureMode::Perimeter | MeasureMode::Area => self.complete_polygon(),
        }
    }

    fn complete_distance(&mut self) -> AddPointOutcome {
        if self.points.len() < 2 {
            return AddPointOutcome::Pending;
        }
        if self.distance_count >= self.distance_cap {
            self.points.clear();
            return AddPointOutcome::DistanceCapReached;
        }
        let value = geometry::distance(self.points[0], self.points[1], self.factors.factor(self.unit));
        self.push_measurement(MeasureKind::Distance, value);
        self.distance_count += 1;
        self.points.clear();
        AddPointOutcome::Completed(MeasureKind::Distance)
    }

    fn complete_polygon(&mut self) -> AddPointOutcome {
        if self.points.len() < 3 {
            return AddPointOutcome::Pending;
        }
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if geometry::pixel_distance(first, last) >= self.closure_threshold_px {
            return AddPointOutcome::Pending;
        }

        let factor = self.factors.factor(self.unit);
        let kind = match self.mode {
            MeasureMode::Perimeter => {
                let value = geometry::perimeter(&self.points, factor);
                self.push_measurement(MeasureKind::Perimeter, value);
                MeasureKind::Perimeter
            }
            _ => {
                let value = geometry::area_in_units(&self.points, factor);
                self.push_measurement(MeasureKind::Area, value);
                MeasureKind::Area
            }
        };
        self.points.clear();
        AddPointOutcome::Completed(kind)
    }

    fn push_measurement(&mut self, kind: MeasureKind, value: f64) {
        let unit_label = match kind {
            MeasureKind::Area => self.unit.squared_symbol().to_string(),
            _ => self.unit.symbol().to_string(),
        };
        self.measurements.push(Measurement {
            kind,
            value,
            unit_label,
            created_at: Local::now(),
        });
    }

    /// Set the active mode. Unconditionally discards the in-progress buffer:
    /// a half-built shape under the old mode has no meaning under the new one.
    pub fn switch_mode(&mut self, mode: MeasureMode) {
        self.mode = mode;
        self.points.clear();
    }

    /// Set the active unit.
    ///
    /// Stored values are unit-converted (never raw pixels), so existing
    /// measurements cannot be retrofitted to a new unit. A non-empty history
    /// is therefore cleared as a whole — even when the selected unit equals
    /// the current one. Returns `true` when a clear happened, so the UI can
    /// tell the user why their list vanished.
    pub fn switch_unit(&mut self, unit: Unit) -> bool {
        self.unit = unit;
        if self.measurements.is_empty() {
            return false;
        }
        self.clear_all();
        true
    }

    /// Reset buffer, history and distance counter. Idempotent.
    pub fn clear_all(&mut self) {
        self.points.clear();
        self.measurements.clear();
        self.distance_count = 0;
    }

    /// Re-run profile estimation and calibration from fresh signals, then
    /// clear everything — measurements taken under the old factors are void.
    pub fn recalibrate(&mut self, signals: &DeviceSignals) {
        self.profile = estimate(signals);
        self.factors = calibrate(&self.profile);
        self.clear_all();
    }

    // ── Read-only projections for the UI layer ───────────────────────────

    pub fn mode(&self) -> MeasureMode {
        self.mode
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    pub fn factors(&self) -> &CalibrationFactors {
        &self.factors
    }

    /// The in-progress, not-yet-committed point buffer.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The ordered, append-only measurement history.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn distance_count(&self) -> usize {
        self.distance_count
    }

    pub fn distance_cap(&self) -> usize {
        self.distance_cap
    }

    pub fn closure_threshold_px(&self) -> f64 {
        self.closure_threshold_px
    }
}
