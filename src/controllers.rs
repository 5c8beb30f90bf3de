//! Controllers for interacting with the UI from external code.
//!
//! The controllers expose lightweight state and a subscription mechanism so
//! non-UI code can observe session state and push simple requests (like
//! clearing all measurements or forcing a recalibration). Requests are
//! queued and consumed by the app once per frame.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use crate::data::calibration::Unit;
use crate::data::session::MeasureMode;

// ─────────────────────────────────────────────────────────────────────────────
// SessionController
// ─────────────────────────────────────────────────────────────────────────────

/// Snapshot of the measurement session, published to listeners every frame.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub pixels_per_cm: f64,
    pub pixels_per_in: f64,
    pub mode: MeasureMode,
    pub unit: Unit,
    /// Number of committed measurements in the history.
    pub measurement_count: usize,
    /// Completed distance measurements and the fixed cap.
    pub distance_count: usize,
    pub distance_cap: usize,
    /// Length of the in-progress point buffer.
    pub pending_points: usize,
}

/// Controller to push session requests and subscribe to state snapshots.
#[derive(Clone)]
pub struct SessionController {
    pub(crate) inner: Arc<Mutex<SessionCtrlInner>>, // crate-visible for UI
}

pub(crate) struct SessionCtrlInner {
    pub(crate) request_clear: bool,
    pub(crate) request_recalibrate: bool,
    pub(crate) request_mode: Option<MeasureMode>,
    pub(crate) request_unit: Option<Unit>,
    pub(crate) listeners: Vec<Sender<SessionInfo>>,
}

impl SessionController {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionCtrlInner {
                request_clear: false,
                request_recalibrate: false,
                request_mode: None,
                request_unit: None,
                listeners: Vec::new(),
            })),
        }
    }

    /// Request clearing the buffer, history and distance counter.
    pub fn request_clear_all(&self) {
        self.inner.lock().unwrap().request_clear = true;
    }

    /// Request a recalibration (re-estimates the device profile and clears
    /// all measurements taken under the old factors).
    pub fn request_recalibrate(&self) {
        self.inner.lock().unwrap().request_recalibrate = true;
    }

    /// Request switching the measurement mode.
    pub fn request_mode(&self, mode: MeasureMode) {
        self.inner.lock().unwrap().request_mode = Some(mode);
    }

    /// Request switching the measurement unit.
    pub fn request_unit(&self, unit: Unit) {
        self.inner.lock().unwrap().request_unit = Some(unit);
    }

    /// Subscribe to per-frame session snapshots.
    pub fn subscribe(&self) -> std::sync::mpsc::Receiver<SessionInfo> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.listeners.push(tx);
        rx
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CameraController
// ─────────────────────────────────────────────────────────────────────────────

/// Status of the external camera collaborator.
///
/// The measurement core never consumes stream data; camera state only feeds
/// the status line. Unavailability is a message, not an error path.
#[derive(Debug, Clone)]
pub struct CameraStatus {
    pub ready: bool,
    pub message: String,
}

/// Controller for the fire-and-forget camera acquisition boundary.
///
/// Whatever code owns the actual camera stream calls [`mark_ready`] or
/// [`mark_unavailable`] once acquisition settles; the UI and any listeners
/// pick the status up asynchronously.
///
/// [`mark_ready`]: Self::mark_ready
/// [`mark_unavailable`]: Self::mark_unavailable
#[derive(Clone)]
pub struct CameraController {
    pub(crate) inner: Arc<Mutex<CameraCtrlInner>>, // crate-visible for UI
}

pub(crate) struct CameraCtrlInner {
    pub(crate) status: Option<CameraStatus>,
    pub(crate) status_dirty: bool,
    pub(crate) listeners: Vec<Sender<CameraStatus>>,
}

impl CameraController {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(CameraCtrlInner {
                status: None,
                status_dirty: false,
                listeners: Vec::new(),
            })),
        }
    }

    /// Report that the camera stream is up.
    pub fn mark_ready(&self, message: impl Into<String>) {
        self.set_status(CameraStatus {
            ready: true,
            message: message.into(),
        });
    }

    /// Report that camera access failed or was denied.
    pub fn mark_unavailable(&self, message: impl Into<String>) {
        self.set_status(CameraStatus {
            ready: false,
            message: message.into(),
        });
    }

    fn set_status(&self, status: CameraStatus) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .listeners
            .retain(|s| s.send(status.clone()).is_ok());
        inner.status = Some(status);
        inner.status_dirty = true;
    }

    /// Last reported camera status, if any.
    pub fn status(&self) -> Option<CameraStatus> {
        self.inner.lock().unwrap().status.clone()
    }

    /// Whether the camera has reported ready.
    pub fn is_ready(&self) -> bool {
        self.inner
            .lock()
            .unwrap()
            .status
            .as_ref()
            .is_some_and(|s| s.ready)
    }

    /// Subscribe to camera status changes.
    pub fn subscribe(&self) -> std::sync::mpsc::Receiver<CameraStatus> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.listeners.push(tx);
        rx
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}
