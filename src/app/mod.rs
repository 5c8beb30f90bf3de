//! Main application module for camruler.
//!
//! The measurement core in [`crate::data`] is UI-free; this module wires it
//! to egui/eframe:
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`measure_app`] | The [`MeasureApp`] eframe application: top bar, side panels, overlay, controller processing |
//! | [`run`]         | Top-level [`run_camruler()`] entry point |

mod measure_app;
mod run;

pub use measure_app::MeasureApp;
pub use run::run_camruler;
