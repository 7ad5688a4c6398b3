//! CSV ingestion for the point dataset.
//!
//! Parsing is deliberately forgiving: malformed or missing numeric fields
//! become a `f64::NAN` sentinel (the projector clamps these to a domain edge
//! instead of crashing), while rows without a usable timestamp are dropped
//! with a warning since they cannot participate in the canonical ordering.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use csv::StringRecord;
use log::warn;
use thiserror::Error;

use super::point::{DataPoint, Dataset};

/// Column names expected in the input header, in no particular order.
const REQUIRED_COLUMNS: [&str; 12] = [
    "id", "loc_id", "geo_lat", "geo_lon", "emb_x", "emb_y", "timestamp", "cat_a", "cat_b",
    "cat_c", "num_a", "num_b",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("dataset is missing column `{0}`")]
    MissingColumn(&'static str),
}

/// Column-name → index mapping resolved from the CSV header.
struct ColumnMap {
    indices: [usize; 12],
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let mut indices = [0usize; 12];
        for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
            indices[slot] = headers
                .iter()
                .position(|h| h.trim() == *name)
                .ok_or(LoadError::MissingColumn(name))?;
        }
        Ok(Self { indices })
    }

    fn text(&self, record: &StringRecord, slot: usize) -> String {
        record.get(self.indices[slot]).unwrap_or("").trim().to_owned()
    }

    fn number(&self, record: &StringRecord, slot: usize) -> f64 {
        record
            .get(self.indices[slot])
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    }
}

/// Load and canonicalize a dataset from a CSV file.
///
/// The returned dataset is sorted ascending by timestamp. An empty file (or
/// one whose rows all lack timestamps) yields an empty dataset, not an error.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns = ColumnMap::resolve(reader.headers()?)?;

    let mut points = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record?;
        let raw_ts = columns.text(&record, 6);
        let Some(timestamp) = parse_timestamp(&raw_ts) else {
            dropped += 1;
            continue;
        };
        points.push(DataPoint {
            id: columns.text(&record, 0),
            loc_id: columns.text(&record, 1),
            geo_lat: columns.number(&record, 2),
            geo_lon: columns.number(&record, 3),
            emb_x: columns.number(&record, 4),
            emb_y: columns.number(&record, 5),
            timestamp,
            cat_a: columns.text(&record, 7),
            cat_b: columns.text(&record, 8),
            cat_c: columns.text(&record, 9),
            num_a: columns.number(&record, 10),
            num_b: columns.number(&record, 11),
        });
    }

    if dropped > 0 {
        warn!(
            "dropped {dropped} row(s) with unparseable timestamps from {}",
            path.display()
        );
    }

    Ok(Dataset::new(points))
}

/// Parse a timestamp as RFC 3339, `YYYY-MM-DD HH:MM:SS`, or a bare date.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::parse_timestamp;

    #[test]
    fn accepts_all_supported_timestamp_shapes() {
        assert!(parse_timestamp("2023-04-01T12:30:00Z").is_some());
        assert!(parse_timestamp("2023-04-01 12:30:00").is_some());
        assert!(parse_timestamp("2023-04-01").is_some());
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("not-a-date").is_none());
        assert!(parse_timestamp("13/37/2023").is_none());
    }
}
