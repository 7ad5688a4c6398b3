//! Filter sidebar: date range, facet value toggles, selection/clear actions.

use chrono::{DateTime, Utc};

use crate::data::filter::{unique_values, Facet};
use crate::data::store::SceneStore;

#[derive(Debug, Default)]
pub struct FiltersPanel;

impl FiltersPanel {
    pub fn ui(&mut self, ui: &mut egui::Ui, store: &mut SceneStore) {
        ui.heading("Filters");
        ui.separator();

        self.date_range_ui(ui, store);
        ui.separator();

        for facet in Facet::ALL {
            self.facet_ui(ui, store, facet);
        }

        ui.separator();
        if !store.filter().selection.is_empty() {
            ui.label(format!(
                "{} location(s) explicitly selected",
                store.filter().selection.len()
            ));
            if ui.button("Clear selection").clicked() {
                store.set_selection(std::iter::empty::<String>());
            }
        }
        if !store.filter().is_unconstrained() && ui.button("Clear all filters").clicked() {
            store.clear_filters();
        }
    }

    fn date_range_ui(&mut self, ui: &mut egui::Ui, store: &mut SceneStore) {
        let Some((span_start, span_end)) = store.dataset().time_span() else {
            ui.weak("No dataset loaded");
            return;
        };
        let span = span_start.timestamp()..=span_end.timestamp();

        let (cur_lower, cur_upper) = store.filter().date_range;
        let mut lower = cur_lower.unwrap_or(span_start).timestamp();
        let mut upper = cur_upper.unwrap_or(span_end).timestamp();

        ui.label("Date range");
        let lower_resp = ui.add(
            egui::Slider::new(&mut lower, span.clone())
                .custom_formatter(format_day)
                .text("from"),
        );
        let upper_resp = ui.add(
            egui::Slider::new(&mut upper, span)
                .custom_formatter(format_day)
                .text("to"),
        );

        if lower_resp.changed() || upper_resp.changed() {
            // Keep the bounds ordered; the slider that moved wins.
            if lower > upper {
                if lower_resp.changed() {
                    upper = lower;
                } else {
                    lower = upper;
                }
            }
            store.set_date_range(
                DateTime::<Utc>::from_timestamp(lower, 0),
                DateTime::<Utc>::from_timestamp(upper, 0),
            );
        }
    }

    fn facet_ui(&mut self, ui: &mut egui::Ui, store: &mut SceneStore, facet: Facet) {
        let values = unique_values(store.dataset().points(), facet);
        if values.is_empty() {
            return;
        }
        egui::CollapsingHeader::new(facet.label())
            .default_open(facet == Facet::CatA)
            .show(ui, |ui| {
                for value in &values {
                    let mut checked = store.filter().facet(facet).contains(value);
                    if ui.checkbox(&mut checked, value).changed() {
                        store.toggle_facet_value(facet, value);
                    }
                }
            });
    }
}

fn format_day(seconds: f64, _range: std::ops::RangeInclusive<usize>) -> String {
    DateTime::<Utc>::from_timestamp(seconds as i64, 0)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
