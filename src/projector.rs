//! Domain-to-screen projection for both layout modes.
//!
//! A [`ProjectorPair`] is recomputed whenever the dataset identity or the
//! viewport dimensions change and is otherwise a pure value. The
//! [`BlendedProjector`] is the single interpolation formula shared by the
//! renderer and the hit tester, so the visually nearest point is always the
//! one selected, even mid-transition.

use crate::data::point::{DataPoint, LayoutMode};

/// Pixel margin kept clear on every canvas edge.
pub const CANVAS_MARGIN: f64 = 32.0;

/// Fixed symmetric domain for the (pre-normalized) embedding axes.
const EMBEDDING_DOMAIN: f64 = 1.05;

/// Half-width applied to a degenerate (min == max) geographic extent.
const DEGENERATE_HALF_WIDTH: f64 = 0.5;

/// A 1-D linear scale with output clamped to the pixel range.
///
/// The range may be inverted (`r0 > r1`) for the screen-y axes; clamping is
/// done in normalized domain space so it works either way. Non-finite inputs
/// resolve deterministically to the position of the lower domain edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    /// `domain` must have `d0 < d1`; callers widen degenerate extents first.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.r0;
        }
        let t = ((value - self.d0) / (self.d1 - self.d0)).clamp(0.0, 1.0);
        self.r0 * (1.0 - t) + self.r1 * t
    }
}

/// Exact-endpoint linear interpolation: `t = 0` yields `a`, `t = 1` yields `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Maps a point to screen coordinates for one layout mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    mode: LayoutMode,
    x: LinearScale,
    y: LinearScale,
}

impl Projector {
    pub fn project(&self, point: &DataPoint) -> [f64; 2] {
        match self.mode {
            LayoutMode::Embedding => [self.x.apply(point.emb_x), self.y.apply(point.emb_y)],
            LayoutMode::Geographic => [self.x.apply(point.geo_lon), self.y.apply(point.geo_lat)],
        }
    }
}

/// One projector per layout mode, derived from the dataset and viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectorPair {
    pub embedding: Projector,
    pub geographic: Projector,
}

impl ProjectorPair {
    /// Compute both projectors, or `None` for an empty dataset (callers treat
    /// "no projector" as "nothing to render or hit-test").
    ///
    /// Both y-scales are inverted so larger latitude / `emb_y` map to smaller
    /// screen y (north-up convention in both modes).
    pub fn compute(points: &[DataPoint], width: f64, height: f64) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let x_range = (CANVAS_MARGIN, width - CANVAS_MARGIN);
        let y_range = (height - CANVAS_MARGIN, CANVAS_MARGIN);

        let embedding = Projector {
            mode: LayoutMode::Embedding,
            x: LinearScale::new((-EMBEDDING_DOMAIN, EMBEDDING_DOMAIN), x_range),
            y: LinearScale::new((-EMBEDDING_DOMAIN, EMBEDDING_DOMAIN), y_range),
        };

        let lon = finite_extent(points.iter().map(|p| p.geo_lon));
        let lat = finite_extent(points.iter().map(|p| p.geo_lat));
        let geographic = Projector {
            mode: LayoutMode::Geographic,
            x: LinearScale::new(widen_if_degenerate(lon), x_range),
            y: LinearScale::new(widen_if_degenerate(lat), y_range),
        };

        Some(Self {
            embedding,
            geographic,
        })
    }

    pub fn for_mode(&self, mode: LayoutMode) -> &Projector {
        match mode {
            LayoutMode::Embedding => &self.embedding,
            LayoutMode::Geographic => &self.geographic,
        }
    }
}

/// Min/max over the finite values of an axis; `(0, 1)` when none are finite.
fn finite_extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        (0.0, 1.0)
    } else {
        (min, max)
    }
}

fn widen_if_degenerate((min, max): (f64, f64)) -> (f64, f64) {
    if min == max {
        (min - DEGENERATE_HALF_WIDTH, max + DEGENERATE_HALF_WIDTH)
    } else {
        (min, max)
    }
}

/// The source→target interpolation applied at a given blend progress.
///
/// When no transition is active, construct this with the same projector on
/// both sides and progress 1; the blend then collapses to a single value.
#[derive(Debug, Clone, Copy)]
pub struct BlendedProjector<'a> {
    from: &'a Projector,
    to: &'a Projector,
    progress: f64,
}

impl<'a> BlendedProjector<'a> {
    pub fn new(from: &'a Projector, to: &'a Projector, progress: f64) -> Self {
        Self { from, to, progress }
    }

    pub fn project(&self, point: &DataPoint) -> [f64; 2] {
        let a = self.from.project(point);
        let b = self.to.project(point);
        [
            lerp(a[0], b[0], self.progress),
            lerp(a[1], b[1], self.progress),
        ]
    }
}
