//! Central scene canvas for [`TerraLensApp`].
//!
//! Each frame: resolve (memoized) projectors for the current dataset and
//! viewport, derive the filtered view, resolve the pointer to a hover
//! candidate through the same blended projection the renderer uses, paint the
//! cloud, and place the tooltip beside the hovered point.

use std::collections::HashSet;

use eframe::egui;

use crate::data::filter::filtered_view;
use crate::data::point::DataPoint;
use crate::hit_test::hover_at;
use crate::projector::{BlendedProjector, ProjectorPair};
use crate::render::render_scatter;

use super::TerraLensApp;

/// Projector pair memoized strictly on its declared inputs: dataset identity
/// (revision) and viewport dimensions.
pub(super) struct ProjectorCache {
    dataset_revision: u64,
    width: f32,
    height: f32,
    pair: ProjectorPair,
}

impl TerraLensApp {
    pub(super) fn render_scene(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;

        self.canvas_size = accept_canvas_size(self.canvas_size, rect.size());
        let size = self.canvas_size;

        let Some(pair) = self.projector_pair(size) else {
            // Empty dataset: nothing to render or hit-test.
            painter.rect_filled(rect, egui::CornerRadius::ZERO, self.palette.background);
            self.store.set_hover(None);
            return;
        };

        let mode = self.store.layout();
        let (from, to, progress) = match self.transition.blend_modes() {
            Some((source, target)) => (
                pair.for_mode(source),
                pair.for_mode(target),
                self.transition.progress(),
            ),
            None => (pair.for_mode(mode), pair.for_mode(mode), 1.0),
        };
        let blended = BlendedProjector::new(from, to, progress);

        let filtered = filtered_view(self.store.dataset().points(), self.store.filter());

        // Pointer move resolves against the filtered view; pointer leave
        // clears the hover unconditionally.
        let hovered_point: Option<DataPoint> = response.hover_pos().and_then(|pos| {
            let local = [(pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64];
            hover_at(local, &filtered, &blended).cloned()
        });
        let hover_id = hovered_point.as_ref().map(|p| p.id.clone());

        let highlight_ids: HashSet<&str> = filtered.iter().map(|p| p.loc_id.as_str()).collect();
        render_scatter(
            &painter,
            rect,
            self.store.dataset().points(),
            &blended,
            &highlight_ids,
            hover_id.as_deref(),
            &self.palette,
        );

        if let Some(point) = &hovered_point {
            tooltip_ui(ui, rect, point, &blended);
        }
        self.store.set_hover(hover_id);
    }

    fn projector_pair(&mut self, size: egui::Vec2) -> Option<ProjectorPair> {
        let revision = self.store.dataset_revision();
        if let Some(cache) = &self.projector_cache {
            if cache.dataset_revision == revision
                && cache.width == size.x
                && cache.height == size.y
            {
                return Some(cache.pair);
            }
        }
        let pair =
            ProjectorPair::compute(self.store.dataset().points(), size.x as f64, size.y as f64)?;
        self.projector_cache = Some(ProjectorCache {
            dataset_revision: revision,
            width: size.x,
            height: size.y,
            pair,
        });
        Some(pair)
    }
}

/// A collapsed container can momentarily report degenerate dimensions; keep
/// the last valid size instead of rebuilding projectors against it.
pub fn accept_canvas_size(last: egui::Vec2, new: egui::Vec2) -> egui::Vec2 {
    if new.x >= 1.0 && new.y >= 1.0 {
        new
    } else {
        last
    }
}

/// Attribute card rendered beside the hovered point's blended position.
fn tooltip_ui(ui: &egui::Ui, rect: egui::Rect, point: &DataPoint, blended: &BlendedProjector<'_>) {
    let [px, py] = blended.project(point);
    let pos = rect.min + egui::vec2(px as f32 + 16.0, py as f32 + 16.0);

    egui::Area::new(egui::Id::new("terralens_tooltip"))
        .fixed_pos(pos)
        .order(egui::Order::Tooltip)
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.strong(&point.cat_a);
                egui::Grid::new("terralens_tooltip_grid")
                    .num_columns(2)
                    .show(ui, |ui| {
                        ui.weak("ID");
                        ui.label(truncated_id(&point.loc_id));
                        ui.end_row();
                        ui.weak("Timestamp");
                        ui.label(point.timestamp.format("%Y-%m-%d").to_string());
                        ui.end_row();
                        ui.weak("Compass");
                        ui.label(&point.cat_b);
                        ui.end_row();
                        ui.weak("Tier");
                        ui.label(&point.cat_c);
                        ui.end_row();
                        ui.weak("Num A");
                        ui.label(format!("{:.2}", point.num_a));
                        ui.end_row();
                        ui.weak("Num B");
                        ui.label(format!("{:.2}", point.num_b));
                        ui.end_row();
                    });
            });
        });
}

fn truncated_id(id: &str) -> String {
    let mut chars = id.chars();
    let head: String = chars.by_ref().take(8).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::data::point::Dataset;

    use super::*;

    fn sample_dataset() -> Dataset {
        Dataset::new(vec![DataPoint {
            id: "p1".to_owned(),
            loc_id: "loc-1".to_owned(),
            geo_lat: 44.0,
            geo_lon: -103.0,
            emb_x: 0.25,
            emb_y: -0.4,
            timestamp: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
            cat_a: "mine".to_owned(),
            cat_b: "north".to_owned(),
            cat_c: "tier1".to_owned(),
            num_a: 1.0,
            num_b: 2.0,
        }])
    }

    #[test]
    fn degenerate_dimensions_keep_the_last_valid_size() {
        let last = egui::vec2(960.0, 560.0);
        assert_eq!(accept_canvas_size(last, egui::vec2(0.0, 560.0)), last);
        assert_eq!(accept_canvas_size(last, egui::vec2(800.0, 0.0)), last);
        assert_eq!(accept_canvas_size(last, egui::vec2(0.5, 0.5)), last);

        let valid = egui::vec2(800.0, 600.0);
        assert_eq!(accept_canvas_size(last, valid), valid);
    }

    #[test]
    fn collapsed_frame_leaves_the_projector_cache_untouched() {
        let mut app = TerraLensApp::new();
        app.store_mut().set_dataset(sample_dataset());

        let size = app.canvas_size;
        let pair = app.projector_pair(size).expect("non-empty dataset");

        // A collapsed frame reports (0, h); the retained size is unchanged,
        // so the memoized pair is served as-is.
        let retained = accept_canvas_size(size, egui::vec2(0.0, 420.0));
        assert_eq!(retained, size);
        let again = app.projector_pair(retained).expect("cache hit");
        assert_eq!(again, pair);

        let cache = app.projector_cache.as_ref().expect("cache is populated");
        assert_eq!((cache.width, cache.height), (size.x, size.y));
    }
}
