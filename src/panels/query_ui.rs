//! Chat-style query dock with canned responses.
//!
//! Purely additive UI state: prompts are logged and answered from a fixed
//! rotation (see [`SceneStore::push_query`]); nothing here feeds back into
//! the projection/filter core.

use chrono::Local;

use crate::data::store::SceneStore;

/// Number of transcript entries shown above the prompt box.
const TRANSCRIPT_LEN: usize = 4;

#[derive(Debug, Default)]
pub struct QueryPanel {
    prompt: String,
}

impl QueryPanel {
    pub fn ui(&mut self, ui: &mut egui::Ui, store: &mut SceneStore) {
        let log = store.query_log();
        if !log.is_empty() {
            let start = log.len().saturating_sub(TRANSCRIPT_LEN);
            for entry in &log[start..] {
                ui.horizontal_wrapped(|ui| {
                    ui.strong(&entry.prompt);
                    ui.label("→");
                    ui.label(&entry.response);
                    ui.weak(
                        entry
                            .at
                            .with_timezone(&Local)
                            .format("%H:%M:%S")
                            .to_string(),
                    );
                });
            }
            ui.separator();
        }

        ui.horizontal(|ui| {
            let edit = egui::TextEdit::multiline(&mut self.prompt)
                .desired_rows(2)
                .desired_width(ui.available_width() - 80.0)
                .hint_text("e.g. show me mines in 2023");
            ui.add(edit);
            if ui.button("Transmit").clicked() {
                let prompt = self.prompt.trim();
                if !prompt.is_empty() {
                    store.push_query(prompt);
                    self.prompt.clear();
                }
            }
        });
    }
}
