//! Generic event system for camruler.
//!
//! Callers can subscribe to UI and session events via [`EventController`].
//! Each event carries a set of [`EventKind`] flags (bitflags-style) so that a
//! single occurrence can match multiple categories (e.g. a click that
//! completes a polygon is *also* a `CLICK` event).
//!
//! The caller specifies an [`EventFilter`] to receive only the events they
//! care about.  The filter is a simple OR mask: an event is delivered when
//! `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::data::calibration::Unit;
use crate::data::session::{MeasureKind, MeasureMode};

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the *categories* an event belongs to.
///
/// A single [`MeasureEvent`] may have several bits set.  For example the
/// click that closes a polygon has `CLICK`, `POINT_ADDED` and
/// `MEASUREMENT_COMPLETE` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u64);

impl EventKind {
    // ── Pointer / interaction ────────────────────────────────────────────
    /// A single (primary) click on the measurement overlay.
    pub const CLICK: Self = Self(1 << 0);
    /// A point was appended to the in-progress buffer.
    pub const POINT_ADDED: Self = Self(1 << 1);

    // ── Measurement lifecycle ───────────────────────────────────────────
    /// A measurement (distance, perimeter or area) was committed.
    pub const MEASUREMENT_COMPLETE: Self = Self(1 << 2);
    /// A two-point distance sequence was discarded: the cap was reached.
    pub const DISTANCE_CAP_REACHED: Self = Self(1 << 3);

    // ── Mode / unit ─────────────────────────────────────────────────────
    /// The measurement mode changed.
    pub const MODE_CHANGED: Self = Self(1 << 4);
    /// The measurement unit changed (history is cleared as a side effect).
    pub const UNIT_CHANGED: Self = Self(1 << 5);

    // ── Session housekeeping ────────────────────────────────────────────
    /// Buffer, history and counter were cleared.
    pub const CLEARED: Self = Self(1 << 6);
    /// The device profile and calibration factors were recomputed.
    pub const RECALIBRATED: Self = Self(1 << 7);

    // ── Camera collaborator ─────────────────────────────────────────────
    /// The camera stream became available (or reported a status change).
    pub const CAMERA_READY: Self = Self(1 << 8);

    /// Wildcard: matches *every* event kind.
    pub const ALL: Self = Self(u64::MAX);

    /// Combine two event kinds (bitwise OR).
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` intersects with `other` (at least one bit in common).
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Returns `true` if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for EventKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        // Known kinds with their string names in declaration order.
        let pairs: &[(EventKind, &str)] = &[
            (EventKind::CLICK, "CLICK"),
            (EventKind::POINT_ADDED, "POINT_ADDED"),
            (EventKind::MEASUREMENT_COMPLETE, "MEASUREMENT_COMPLETE"),
            (EventKind::DISTANCE_CAP_REACHED, "DISTANCE_CAP_REACHED"),
            (EventKind::MODE_CHANGED, "MODE_CHANGED"),
            (EventKind::UNIT_CHANGED, "UNIT_CHANGED"),
            (EventKind::CLEARED, "CLEARED"),
            (EventKind::RECALIBRATED, "RECALIBRATED"),
            (EventKind::CAMERA_READY, "CAMERA_READY"),
        ];

        let mut names = Vec::new();
        let mut known_bits: u64 = 0;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }

        if names.is_empty() {
            write!(f, "0x{:x}", self.0)
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metadata – per-event-type payloads
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata attached to click / point events.
#[derive(Debug, Clone, Copy)]
pub struct ClickMeta {
    /// Canvas-local coordinates of the click in pixels.
    pub canvas_pos: [f64; 2],
    /// Length of the in-progress buffer *after* the point was processed
    /// (zero when the click completed or discarded a measurement).
    pub buffer_len: usize,
}

/// Metadata for completed measurements.
#[derive(Debug, Clone)]
pub struct MeasurementMeta {
    pub kind: MeasureKind,
    /// Unit-converted value.
    pub value: f64,
    /// Unit label at commit time ("cm", "in", "cm²", "in²").
    pub unit_label: String,
}

/// Metadata for calibration events.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationMeta {
    pub pixels_per_cm: f64,
    pub pixels_per_in: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// MeasureEvent – the top-level event type
// ─────────────────────────────────────────────────────────────────────────────

/// A rich event emitted by the camruler UI.
///
/// `kinds` is a bitflag set of [`EventKind`] categories.  The `Option<…>`
/// fields carry metadata relevant to the kinds that are set.
#[derive(Debug, Clone)]
pub struct MeasureEvent {
    /// Bitflag set of categories this event belongs to.
    pub kinds: EventKind,
    /// Monotonic timestamp (seconds since controller creation).
    pub timestamp: f64,

    // ── Optional metadata ────────────────────────────────────────────────
    pub click: Option<ClickMeta>,
    pub measurement: Option<MeasurementMeta>,
    pub calibration: Option<CalibrationMeta>,
    /// Active mode after the transition (for `MODE_CHANGED`).
    pub mode: Option<MeasureMode>,
    /// Active unit after the transition (for `UNIT_CHANGED`).
    pub unit: Option<Unit>,
}

impl MeasureEvent {
    /// Create a new event with the given kinds; the timestamp is filled in
    /// by the controller on emit.
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            click: None,
            measurement: None,
            calibration: None,
            mode: None,
            unit: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

/// A filter that selects which event categories a subscriber receives.
///
/// The filter is an OR-mask: an event is delivered when
/// `event.kinds.intersects(filter.mask)`.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    /// Accept all events.
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    /// Accept only the specified event kinds.
    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    /// Check whether an event passes this filter.
    #[inline]
    pub fn matches(&self, event: &MeasureEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) struct Subscriber {
    filter: EventFilter,
    sender: Sender<MeasureEvent>,
}

/// Controller that collects and distributes UI events to subscribers.
///
/// Attach it to [`CamRulerConfig`](crate::config::CamRulerConfig) before
/// launching the UI, then call [`subscribe`](Self::subscribe) (with an
/// optional filter) to receive events on an `mpsc` channel.
#[derive(Clone)]
pub struct EventController {
    pub(crate) inner: Arc<Mutex<EventCtrlInner>>,
}

pub(crate) struct EventCtrlInner {
    pub(crate) subscribers: Vec<Subscriber>,
    pub(crate) start_instant: std::time::Instant,
}

impl EventController {
    /// Create a new event controller.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Subscribe to events matching the given filter.
    ///
    /// Returns a receiver that will receive [`MeasureEvent`]s whenever the UI
    /// emits an event whose `kinds` intersect with the filter mask.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<MeasureEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    /// Subscribe to *all* events (no filtering).
    pub fn subscribe_all(&self) -> Receiver<MeasureEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Emit an event to all matching subscribers.
    ///
    /// Called internally by the camruler UI; public so that embedding code can
    /// inject synthetic events.
    pub fn emit(&self, mut event: MeasureEvent) {
        let mut inner = self.inner.lock().unwrap();
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────
