//! Process-wide scene state with a fixed set of mutation entry points.
//!
//! Everything the UI can change flows through a named method here; no other
//! code mutates these fields. Each dataset/filter mutation bumps a revision
//! counter, which is the immediate-mode equivalent of change notification:
//! memoized derivations (projector pair, filtered view) key on it and can
//! never desynchronize from their inputs.

use chrono::{DateTime, Utc};

use super::filter::{Facet, FilterState};
use super::point::{Dataset, LayoutMode};

/// One prompt/response pair in the query dock transcript.
#[derive(Debug, Clone)]
pub struct QueryExchange {
    pub prompt: String,
    pub response: String,
    pub at: DateTime<Utc>,
}

/// Fixed rotation of canned replies for the query dock. The query feature is
/// cosmetic and feeds nothing back into the scene.
const CANNED_RESPONSES: [&str; 3] = [
    "Telemetry queued. Highlighting requested subset.",
    "Intent parsed: applying radial filters to the cloud.",
    "Roger that. Updating deck overlays with new selection.",
];

/// Single-writer owner of the dataset, filter state, displayed layout mode,
/// hover state, and the query transcript.
#[derive(Debug, Default)]
pub struct SceneStore {
    dataset: Dataset,
    filter: FilterState,
    layout: LayoutMode,
    hover_id: Option<String>,
    query_log: Vec<QueryExchange>,
    revision: u64,
    dataset_revision: u64,
}

impl SceneStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The logical (displayed) layout mode. During a transition this already
    /// reflects the requested target; only the visuals lag behind.
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn hover_id(&self) -> Option<&str> {
        self.hover_id.as_deref()
    }

    pub fn query_log(&self) -> &[QueryExchange] {
        &self.query_log
    }

    /// Bumped on every dataset or filter mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Bumped only when the dataset itself is replaced; the projector pair is
    /// keyed on this (plus viewport size).
    pub fn dataset_revision(&self) -> u64 {
        self.dataset_revision
    }

    // ── Mutation entry points ────────────────────────────────────────────────

    /// Replace the dataset wholesale and reset the date range to its full
    /// timestamp span. Facet and selection filters persist across the swap,
    /// so a reload keeps the current narrowing in place.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.filter.date_range = match dataset.time_span() {
            Some((first, last)) => (Some(first), Some(last)),
            None => (None, None),
        };
        self.dataset = dataset;
        self.hover_id = None;
        self.revision += 1;
        self.dataset_revision += 1;
    }

    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
    }

    pub fn toggle_facet_value(&mut self, facet: Facet, value: &str) {
        self.filter.toggle(facet, value);
        self.revision += 1;
    }

    pub fn set_date_range(
        &mut self,
        lower: Option<DateTime<Utc>>,
        upper: Option<DateTime<Utc>>,
    ) {
        self.filter.date_range = (lower, upper);
        self.revision += 1;
    }

    /// Replace the explicit `loc_id` selection wholesale.
    pub fn set_selection<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.set_selection(ids);
        self.revision += 1;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.revision += 1;
    }

    pub fn set_hover(&mut self, id: Option<String>) {
        self.hover_id = id;
    }

    /// Record a prompt with the next canned response.
    pub fn push_query(&mut self, prompt: impl Into<String>) {
        let response = CANNED_RESPONSES[self.query_log.len() % CANNED_RESPONSES.len()];
        self.query_log.push(QueryExchange {
            prompt: prompt.into(),
            response: response.to_owned(),
            at: Utc::now(),
        });
    }
}
