//! Per-frame scatter rendering.
//!
//! One call draws the whole frame: background, then every point of the full
//! dataset in canonical order (painter's algorithm — later points draw over
//! earlier ones, no depth sort). Positions come from the shared
//! [`BlendedProjector`]; highlight membership and hover only affect alpha,
//! radius, and the accent ring. No state is retained between frames.

use std::collections::HashSet;

use egui::{Painter, Rect, Stroke};

use crate::data::point::DataPoint;
use crate::palette::ScenePalette;
use crate::projector::BlendedProjector;

/// Draw one frame of the point cloud into `rect`.
///
/// `highlight_ids` is the set of `loc_id`s in the current filtered view: a
/// point is highlighted when the set is empty (no filter active) or contains
/// its `loc_id`. `hover_id` additionally gets an accent-colored ring.
pub fn render_scatter(
    painter: &Painter,
    rect: Rect,
    points: &[DataPoint],
    blended: &BlendedProjector<'_>,
    highlight_ids: &HashSet<&str>,
    hover_id: Option<&str>,
    palette: &ScenePalette,
) {
    painter.rect_filled(rect, egui::CornerRadius::ZERO, palette.background);
    if points.is_empty() {
        return;
    }

    let ring_stroke = Stroke::new(palette.hover_ring_width, palette.accent_stroke);

    for point in points {
        let [px, py] = blended.project(point);
        let center = rect.min + egui::vec2(px as f32, py as f32);

        let highlighted =
            highlight_ids.is_empty() || highlight_ids.contains(point.loc_id.as_str());
        let radius = if highlighted {
            palette.highlight_radius
        } else {
            palette.muted_radius
        };
        painter.circle_filled(center, radius, palette.fill_color(&point.cat_a, highlighted));

        if hover_id == Some(point.id.as_str()) {
            painter.circle_stroke(center, palette.hover_ring_radius, ring_stroke);
        }
    }
}
