//! Top-level entry point for running TerraLens as a native window.

use eframe::egui;

use super::TerraLensApp;

/// Launch the viewer in a native window. Blocks until the window is closed;
/// closing it drops the app, which stops any pending animation ticks.
pub fn run_terralens(app: TerraLensApp, title: &str) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1280.0, 800.0)),
        ..Default::default()
    };
    eframe::run_native(title, options, Box::new(|_cc| Ok(Box::new(app))))
}
