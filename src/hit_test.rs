//! Pointer-to-point resolution over the filtered view.
//!
//! A linear scan per pointer event is deliberate: the design targets moderate
//! point counts where no spatial index is warranted. The candidate set is the
//! *filtered* view, and positions come from the same [`BlendedProjector`] the
//! renderer uses, so hover always matches what is on screen mid-transition.

use crate::data::point::DataPoint;
use crate::projector::BlendedProjector;

/// Maximum squared screen distance (px²) for a pointer to be "over" a point.
pub const HOVER_MAX_DIST_SQ: f64 = 200.0;

/// The filtered point nearest to `pointer` (canvas-local coordinates), if its
/// squared distance is below [`HOVER_MAX_DIST_SQ`]. An empty candidate set
/// yields `None`; callers report `None` unconditionally on pointer-leave.
pub fn hover_at<'a>(
    pointer: [f64; 2],
    candidates: &[&'a DataPoint],
    blended: &BlendedProjector<'_>,
) -> Option<&'a DataPoint> {
    let mut nearest: Option<(&'a DataPoint, f64)> = None;
    for &point in candidates {
        let [x, y] = blended.project(point);
        let dx = x - pointer[0];
        let dy = y - pointer[1];
        let dist_sq = dx * dx + dy * dy;
        if nearest.map_or(true, |(_, best)| dist_sq < best) {
            nearest = Some((point, dist_sq));
        }
    }
    match nearest {
        Some((point, dist_sq)) if dist_sq < HOVER_MAX_DIST_SQ => Some(point),
        _ => None,
    }
}
