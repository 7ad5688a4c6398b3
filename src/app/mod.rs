//! Application shell for TerraLens.
//!
//! Wiring follows a fixed per-frame order so renderer and hit tester observe
//! the same transition progress: the controller is ticked exactly once at the
//! top of [`TerraLensApp::update`], and everything downstream reads the
//! stored progress instead of resampling the clock.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`scene`]  | Central canvas: projector memoization, pointer handling, tooltip |
//! | [`run`]    | Top-level [`run_terralens()`] native entry point |

mod run;
mod scene;

pub use run::run_terralens;

use std::path::{Path, PathBuf};

use eframe::egui;
use log::{error, info};

use crate::data::filter::filtered_view;
use crate::data::loader::load_csv;
use crate::data::point::{Dataset, LayoutMode};
use crate::data::store::SceneStore;
use crate::palette::ScenePalette;
use crate::panels::{FiltersPanel, QueryPanel};
use crate::transition::TransitionController;

use scene::ProjectorCache;

/// The viewer application: owns the scene store, the transition controller,
/// and the surrounding panels.
pub struct TerraLensApp {
    store: SceneStore,
    transition: TransitionController,
    palette: ScenePalette,
    filters_panel: FiltersPanel,
    query_panel: QueryPanel,
    projector_cache: Option<ProjectorCache>,
    /// Last valid canvas dimensions; retained across momentary collapses.
    canvas_size: egui::Vec2,
    dataset_path: Option<PathBuf>,
}

impl Default for TerraLensApp {
    fn default() -> Self {
        Self {
            store: SceneStore::new(),
            transition: TransitionController::new(),
            palette: ScenePalette::default(),
            filters_panel: FiltersPanel::default(),
            query_panel: QueryPanel::default(),
            projector_cache: None,
            canvas_size: egui::vec2(960.0, 560.0),
            dataset_path: None,
        }
    }
}

impl TerraLensApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// The scene store, for external collaborators that drive selection or
    /// filters programmatically.
    pub fn store_mut(&mut self) -> &mut SceneStore {
        &mut self.store
    }

    pub fn palette_mut(&mut self) -> &mut ScenePalette {
        &mut self.palette
    }

    /// Load (or reload) a dataset from a CSV file.
    ///
    /// A failed load is reported to the log and leaves the dataset empty; the
    /// viewer stays functional with an idle, empty scene.
    pub fn load_dataset(&mut self, path: &Path) {
        match load_csv(path) {
            Ok(dataset) => {
                info!("loaded {} point(s) from {}", dataset.len(), path.display());
                self.store.set_dataset(dataset);
                self.dataset_path = Some(path.to_owned());
            }
            Err(err) => {
                error!("failed to load {}: {err}", path.display());
                self.store.set_dataset(Dataset::default());
            }
        }
        self.transition.cancel();
        self.projector_cache = None;
    }

    /// Switch the displayed layout, arming the visual transition. The logical
    /// mode changes immediately; the scene interpolates from the prior mode.
    fn request_layout(&mut self, target: LayoutMode, now: f64) {
        if self.transition.request(self.store.layout(), target, now) {
            self.store.set_layout(target);
        }
    }

    fn top_bar_ui(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.horizontal(|ui| {
            ui.strong("TerraLens");
            ui.separator();

            for mode in LayoutMode::ALL {
                let active = self.store.layout() == mode;
                if ui.selectable_label(active, mode.label()).clicked() {
                    self.request_layout(mode, now);
                }
            }
            ui.separator();

            if ui.button("Open dataset…").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("CSV", &["csv"])
                    .pick_file()
                {
                    self.load_dataset(&path);
                }
            }
            if let Some(path) = self.dataset_path.clone() {
                if ui.button("Reload").clicked() {
                    self.load_dataset(&path);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let total = self.store.dataset().len();
                let shown =
                    filtered_view(self.store.dataset().points(), self.store.filter()).len();
                ui.weak(format!("{shown} / {total} points"));
            });
        });
    }
}

impl eframe::App for TerraLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Single progress sample per frame, shared by renderer and hit tester.
        let now = ctx.input(|i| i.time);
        self.transition.tick(now);

        egui::TopBottomPanel::top("terralens_top").show(ctx, |ui| self.top_bar_ui(ui, now));

        egui::SidePanel::right("terralens_filters")
            .default_width(220.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| self.filters_panel.ui(ui, &mut self.store));
            });

        egui::TopBottomPanel::bottom("terralens_query")
            .resizable(false)
            .show(ctx, |ui| self.query_panel.ui(ui, &mut self.store));

        egui::CentralPanel::default().show(ctx, |ui| self.render_scene(ui));

        if self.transition.is_animating() {
            ctx.request_repaint();
        }
    }
}
