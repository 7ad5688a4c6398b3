//! UI sub-panels surrounding the central scene canvas.

pub mod filters_ui;
pub mod query_ui;

pub use filters_ui::FiltersPanel;
pub use query_ui::QueryPanel;
