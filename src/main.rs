//! Native TerraLens binary.
//!
//! Usage: `terralens [dataset.csv] [--palette overrides.json]`. Without a
//! dataset argument, a file dialog is offered; cancelling it starts the
//! viewer with an empty scene.

use std::path::PathBuf;

use log::{info, warn};

use terralens::{run_terralens, TerraLensApp};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut dataset_path: Option<PathBuf> = None;
    let mut palette_path: Option<PathBuf> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--palette" => palette_path = args.next().map(PathBuf::from),
            _ => dataset_path = Some(PathBuf::from(arg)),
        }
    }

    let mut app = TerraLensApp::new();

    if let Some(path) = palette_path {
        if let Err(err) = app.palette_mut().load_overrides(&path) {
            warn!("palette overrides not applied: {err}");
        }
    }

    let dataset_path = dataset_path.or_else(|| {
        rfd::FileDialog::new()
            .set_title("Open point dataset")
            .add_filter("CSV", &["csv"])
            .pick_file()
    });
    match dataset_path {
        Some(path) => app.load_dataset(&path),
        None => info!("no dataset selected; starting with an empty scene"),
    }

    run_terralens(app, "TerraLens")
}
