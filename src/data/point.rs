//! Core record types for the point cloud.
//!
//! A [`Dataset`] is a value: it is built once from parsed records and replaced
//! wholesale on reload, never mutated in place. Its canonical order is
//! ascending by timestamp, which the renderer relies on for painter's-order
//! compositing.

use chrono::{DateTime, Utc};

/// Which spatial projection of the dataset is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// The point's intrinsic 2-D embedding coordinates (`emb_x`/`emb_y`).
    #[default]
    Embedding,
    /// Latitude/longitude, north-up.
    Geographic,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 2] = [LayoutMode::Embedding, LayoutMode::Geographic];

    /// Short label for UI buttons.
    pub fn label(&self) -> &'static str {
        match self {
            LayoutMode::Embedding => "Embedding",
            LayoutMode::Geographic => "Geo",
        }
    }
}

/// One multi-attribute point, immutable once loaded.
///
/// `id` is the primary key; `loc_id` is a secondary grouping key used for
/// highlight membership and explicit selection (several points may share one
/// `loc_id`, e.g. repeated observations of the same site).
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub id: String,
    pub loc_id: String,
    pub geo_lat: f64,
    pub geo_lon: f64,
    pub emb_x: f64,
    pub emb_y: f64,
    pub timestamp: DateTime<Utc>,
    pub cat_a: String,
    pub cat_b: String,
    pub cat_c: String,
    pub num_a: f64,
    pub num_b: f64,
}

/// Ordered, immutable-per-load collection of points.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    /// Build a dataset from parsed records, establishing the canonical
    /// ascending-timestamp order.
    pub fn new(mut points: Vec<DataPoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);
        Self { points }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last timestamp of the (sorted) dataset, or `None` when empty.
    pub fn time_span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        }
    }

    /// Look up a point by its primary key.
    pub fn point_by_id(&self, id: &str) -> Option<&DataPoint> {
        self.points.iter().find(|p| p.id == id)
    }
}
