//! TerraLens crate root: re-exports and module wiring.
//!
//! TerraLens visualizes a multi-attribute point set as an interactive 2D
//! cloud with two spatial layouts of the same data (embedding space and
//! geographic space), an eased animated blend between them, facet/date/
//! selection filtering, and nearest-point hover inspection.
//!
//! Cohesive modules:
//! - `data`: record types, CSV ingestion, filter state, and the scene store
//! - `projector`: per-mode domain→screen scales and the blended projection
//! - `transition`: the Idle/Animating layout transition state machine
//! - `render`: per-frame painter's-order scatter drawing
//! - `hit_test`: pointer-to-point resolution over the filtered view
//! - `palette`: category color resolution with explicit fallback
//! - `panels`, `app`: egui chrome and the eframe application shell

pub mod app;
pub mod data;
pub mod hit_test;
pub mod palette;
pub mod panels;
pub mod projector;
pub mod render;
pub mod transition;

// Public re-exports for a compact external API
pub use app::{run_terralens, TerraLensApp};
pub use data::filter::{filtered_view, unique_values, Facet, FilterState};
pub use data::loader::{load_csv, LoadError};
pub use data::point::{DataPoint, Dataset, LayoutMode};
pub use data::store::{QueryExchange, SceneStore};
pub use hit_test::{hover_at, HOVER_MAX_DIST_SQ};
pub use palette::ScenePalette;
pub use projector::{BlendedProjector, LinearScale, Projector, ProjectorPair, CANVAS_MARGIN};
pub use transition::{TransitionController, TransitionState, TRANSITION_SECS};
