use egui::{Color32, Pos2, Sense, Shape, Stroke, Ui};

use crate::data::geometry::Point;
use crate::data::session::{AddPointOutcome, MeasureMode, MeasurementSession};

/// The click-to-measure canvas drawn over the camera view.
///
/// Renders the in-progress point buffer (markers + connecting lines) and the
/// dashed closure hint, translates clicks into canvas-local coordinates and
/// feeds them to the session. The camera frame itself is the collaborator's
/// concern; without one the overlay paints a dark placeholder.
pub struct MeasureOverlay {
    pub point_color: Color32,
    pub line_color: Color32,
    pub closure_hint_color: Color32,
    pub point_radius: f32,
    pub stroke_width: f32,
}

impl Default for MeasureOverlay {
    fn default() -> Self {
        Self {
            point_color: Color32::from_rgb(0, 136, 255),
            line_color: Color32::from_rgb(0, 136, 255),
            closure_hint_color: Color32::from_rgb(255, 136, 0),
            point_radius: 5.0,
            stroke_width: 2.0,
        }
    }
}

impl MeasureOverlay {
    /// Render the overlay into the available space and process a click, if
    /// any. Returns the canvas-local point and the session outcome when the
    /// user clicked this frame.
    pub fn show(
        &self,
        ui: &mut Ui,
        session: &mut MeasurementSession,
    ) -> Option<(Point, AddPointOutcome)> {
        let size = ui.available_size();
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        let painter = ui.painter_at(rect);

        // Camera feed placeholder.
        painter.rect_filled(rect, egui::CornerRadius::same(4), Color32::from_gray(18));

        // Clicks first, so this frame already renders the new point.
        let mut clicked = None;
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let p = Point::new(f64::from(pos.x - rect.min.x), f64::from(pos.y - rect.min.y));
                let outcome = session.add_point(p);
                clicked = Some((p, outcome));
            }
        }

        let to_screen =
            |p: Point| Pos2::new(rect.min.x + p.x as f32, rect.min.y + p.y as f32);
        let points = session.points();
        let stroke = Stroke::new(self.stroke_width, self.line_color);

        for pair in points.windows(2) {
            painter.line_segment([to_screen(pair[0]), to_screen(pair[1])], stroke);
        }
        for &p in points {
            painter.circle_filled(to_screen(p), self.point_radius, self.point_color);
        }

        // Dashed hint from the most recent point back to the first one, so
        // the user sees where a click would close the polygon.
        let polygon_mode = matches!(
            session.mode(),
            MeasureMode::Perimeter | MeasureMode::Area
        );
        if polygon_mode && points.len() > 2 {
            let hint = Shape::dashed_line(
                &[to_screen(points[points.len() - 1]), to_screen(points[0])],
                Stroke::new(self.stroke_width, self.closure_hint_color),
                3.0,
                3.0,
            );
            painter.extend(hint);
        }

        clicked
    }
}
