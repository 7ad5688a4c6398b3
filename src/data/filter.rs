//! Filter state and the derived (filtered) view of the dataset.
//!
//! All constraints combine by logical AND; within a single facet the test is
//! membership of the selected value set (logical OR). An empty set means the
//! facet is unconstrained, so a default [`FilterState`] passes every point.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use super::point::DataPoint;

/// One categorical filtering dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    CatA,
    CatB,
    CatC,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::CatA, Facet::CatB, Facet::CatC];

    pub fn label(&self) -> &'static str {
        match self {
            Facet::CatA => "Category",
            Facet::CatB => "Compass",
            Facet::CatC => "Tier",
        }
    }

    /// The point's value for this facet.
    pub fn value_of<'a>(&self, point: &'a DataPoint) -> &'a str {
        match self {
            Facet::CatA => &point.cat_a,
            Facet::CatB => &point.cat_b,
            Facet::CatC => &point.cat_c,
        }
    }

    fn index(&self) -> usize {
        match self {
            Facet::CatA => 0,
            Facet::CatB => 1,
            Facet::CatC => 2,
        }
    }
}

/// Current filter constraints over the dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Inclusive timestamp bounds; a missing bound is unbounded on that side.
    pub date_range: (Option<DateTime<Utc>>, Option<DateTime<Utc>>),
    /// Accepted values per facet; an empty set leaves the facet unconstrained.
    facets: [BTreeSet<String>; 3],
    /// Explicitly selected `loc_id`s; empty means unconstrained.
    pub selection: BTreeSet<String>,
}

impl FilterState {
    /// The accepted-value set for one facet.
    pub fn facet(&self, facet: Facet) -> &BTreeSet<String> {
        &self.facets[facet.index()]
    }

    /// Toggle a single value in a facet's accepted set.
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        let set = &mut self.facets[facet.index()];
        if !set.remove(value) {
            set.insert(value.to_owned());
        }
    }

    /// Replace the explicit `loc_id` selection wholesale.
    pub fn set_selection<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = ids.into_iter().map(Into::into).collect();
    }

    /// Drop every constraint (date range, facets, selection).
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    /// `true` when no constraint is active and every point passes.
    pub fn is_unconstrained(&self) -> bool {
        self.date_range == (None, None)
            && self.facets.iter().all(BTreeSet::is_empty)
            && self.selection.is_empty()
    }

    /// Pure composition predicate: date range AND every non-empty facet AND
    /// the explicit selection.
    pub fn matches(&self, point: &DataPoint) -> bool {
        if let Some(lower) = self.date_range.0 {
            if point.timestamp < lower {
                return false;
            }
        }
        if let Some(upper) = self.date_range.1 {
            if point.timestamp > upper {
                return false;
            }
        }

        for facet in Facet::ALL {
            let accepted = self.facet(facet);
            if !accepted.is_empty() && !accepted.contains(facet.value_of(point)) {
                return false;
            }
        }

        if !self.selection.is_empty() && !self.selection.contains(&point.loc_id) {
            return false;
        }

        true
    }
}

/// The derived view: exactly the points satisfying `filter`, in dataset order.
pub fn filtered_view<'a>(points: &'a [DataPoint], filter: &FilterState) -> Vec<&'a DataPoint> {
    points.iter().filter(|p| filter.matches(p)).collect()
}

/// Sorted distinct values of one facet across the dataset, for the filter UI.
pub fn unique_values(points: &[DataPoint], facet: Facet) -> Vec<String> {
    let set: BTreeSet<&str> = points.iter().map(|p| facet.value_of(p)).collect();
    set.into_iter().map(str::to_owned).collect()
}
