use crate::image_file::ImageFile;
use crate::library::logger::interface::Logger;
use crate::prediction_api::interface::Prediction;
use crate::spotter::core::{Event, Phase, State};
use crate::spotter::preview::PreviewStore;
use chrono::{Datelike, Utc};
use std::path::Path;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct SpotterWindow {
    model: Arc<Mutex<State>>,
    event_sender: Sender<Event>,
    previews: Arc<PreviewStore>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl SpotterWindow {
    pub fn new(
        model: Arc<Mutex<State>>,
        event_sender: Sender<Event>,
        previews: Arc<PreviewStore>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            model,
            event_sender,
            previews,
            logger,
        }
    }

    fn select_path(&self, path: &Path) {
        match ImageFile::from_path(path) {
            Ok(file) => {
                let _ = self.event_sender.send(Event::FileSelected(file));
            }
            Err(error) => {
                let _ = self
                    .logger
                    .error(&format!("could not read {}: {}", path.display(), error));
            }
        }
    }

    fn handle_file_drops(&self, ctx: &egui::Context) {
        // First file of a multi-file drop wins; the rest are ignored.
        let dropped = ctx.input(|i| i.raw.dropped_files.first().cloned());
        if let Some(dropped) = dropped {
            if let Some(path) = dropped.path {
                self.select_path(&path);
            }
        }
    }

    fn draw_drop_zone(&self, ui: &mut egui::Ui, phase: &Phase, hovering_file: bool) {
        let text = match phase.file() {
            Some(file) => file.name.clone(),
            None => "Drag & drop an image here, or click to select one".to_string(),
        };

        let desired = egui::vec2(ui.available_width(), 120.0);
        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click());

        let (fill, stroke) = if hovering_file {
            (
                egui::Color32::from_rgb(229, 231, 255),
                egui::Stroke::new(2.0, egui::Color32::from_rgb(99, 102, 241)),
            )
        } else if phase.file().is_some() {
            (
                egui::Color32::from_rgb(224, 250, 243),
                egui::Stroke::new(2.0, egui::Color32::from_rgb(45, 212, 191)),
            )
        } else {
            (
                ui.visuals().extreme_bg_color,
                egui::Stroke::new(2.0, ui.visuals().weak_text_color()),
            )
        };

        ui.painter().rect_filled(rect, 12.0, fill);
        ui.painter().rect_stroke(rect, 12.0, stroke);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(14.0),
            ui.visuals().text_color(),
        );

        if response.clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                .pick_file()
            {
                self.select_path(&path);
            }
        }
    }

    fn draw_preview(&self, ui: &mut egui::Ui, ctx: &egui::Context, phase: &Phase) {
        let Some(handle) = phase.preview() else {
            return;
        };
        let Some((texture_id, size)) = self.previews.texture(ctx, handle) else {
            return;
        };

        let scale = (160.0 / size.x.max(size.y)).min(1.0);
        ui.vertical_centered(|ui| {
            ui.image((texture_id, size * scale));
        });
    }

    fn draw_submit_button(&self, ui: &mut egui::Ui, phase: &Phase) {
        let submitting = phase.is_submitting();
        let enabled = phase.file().is_some() && !submitting;

        ui.vertical_centered(|ui| {
            let label = if submitting {
                "Analyzing..."
            } else {
                "Identify Fish Species"
            };
            let button = egui::Button::new(egui::RichText::new(label).strong())
                .min_size(egui::vec2(220.0, 36.0));

            if ui.add_enabled(enabled, button).clicked() {
                let _ = self.event_sender.send(Event::SubmitPressed);
            }

            if submitting {
                ui.add_space(6.0);
                ui.spinner();
            }
        });
    }
}

impl eframe::App for SpotterWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_file_drops(ctx);

        if ctx.input(|i| i.viewport().close_requested()) {
            let _ = self.event_sender.send(Event::Shutdown);
        }

        let state = self.model.lock().unwrap().clone();
        let hovering_file = ctx.input(|i| !i.raw.hovered_files.is_empty());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading("Fish Species Classifier");
                ui.label("Upload an underwater shot and let the backend identify your catch.");
                ui.add_space(12.0);
            });

            self.draw_drop_zone(ui, &state.phase, hovering_file);
            ui.add_space(12.0);
            self.draw_preview(ui, ctx, &state.phase);
            ui.add_space(12.0);
            self.draw_submit_button(ui, &state.phase);
            ui.add_space(16.0);

            match &state.phase {
                Phase::Classified { prediction, .. } => draw_prediction_card(ui, prediction),
                Phase::Failed { message, .. } => draw_error_banner(ui, message),
                _ => {}
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                ui.weak(format!("© {} MarineAI Labs", Utc::now().year()));
            });
        });

        // Completion events arrive from worker threads without any input
        // to wake the window, so poll for them.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

fn draw_prediction_card(ui: &mut egui::Ui, prediction: &Prediction) {
    ui.vertical_centered(|ui| {
        egui::Frame::none()
            .fill(ui.visuals().extreme_bg_color)
            .stroke(egui::Stroke::new(1.0, ui.visuals().weak_text_color()))
            .rounding(8.0)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.heading(humanize_label(&prediction.species));
                ui.label(format!(
                    "Confidence: {}",
                    format_confidence(prediction.confidence)
                ));

                let info = &prediction.info;
                if info.common_name.is_some() || info.habitat.is_some() || info.fun_fact.is_some() {
                    ui.add_space(6.0);
                }
                if let Some(common_name) = &info.common_name {
                    ui.label(format!("Common Name: {}", common_name));
                }
                if let Some(habitat) = &info.habitat {
                    ui.label(format!("Habitat: {}", habitat));
                }
                if let Some(fun_fact) = &info.fun_fact {
                    ui.label(format!("Fun Fact: {}", fun_fact));
                }
            });
    });
}

fn draw_error_banner(ui: &mut egui::Ui, message: &str) {
    ui.vertical_centered(|ui| {
        egui::Frame::none()
            .fill(egui::Color32::from_rgb(254, 226, 226))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(252, 165, 165)))
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.colored_label(egui::Color32::from_rgb(153, 27, 27), message);
            });
    });
}

/// "clown_fish" -> "Clown Fish".
pub fn humanize_label(label: &str) -> String {
    label
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Confidence in [0, 1] rendered as a percentage with one decimal.
pub fn format_confidence(confidence: f32) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[cfg(test)]
mod render_test {
    use super::*;

    #[test]
    fn test_species_labels_are_humanized() {
        assert_eq!(humanize_label("clown_fish"), "Clown Fish");
        assert_eq!(humanize_label("striped_red_mullet"), "Striped Red Mullet");
        assert_eq!(humanize_label("salmon"), "Salmon");
    }

    #[test]
    fn test_humanize_collapses_repeated_separators() {
        assert_eq!(humanize_label("sea__bass"), "Sea Bass");
        assert_eq!(humanize_label("  trout "), "Trout");
        assert_eq!(humanize_label(""), "");
    }

    #[test]
    fn test_confidence_is_a_percentage_with_one_decimal() {
        assert_eq!(format_confidence(0.932), "93.2%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
        assert_eq!(format_confidence(0.5), "50.0%");
    }
}
