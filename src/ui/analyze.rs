// src/ui/analyze.rs
use eframe::egui;

use crate::state::{AppState, Notice};
use crate::state::history::AnalysisRecord;
use crate::ui::{pick_and_extract, show_notice, theme};

pub fn show_analyze_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Single Analysis");
    ui.label("Type or paste your text, or upload a document, then analyze it.");
    ui.add_space(8.0);

    egui::Grid::new("analyze_grid")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            // Left - text input
            ui.vertical(|ui| {
                ui.set_min_width(ui.available_width() * 0.55);
                ui.add(
                    egui::TextEdit::multiline(&mut state.analyze_input)
                        .hint_text("Type or paste your text here")
                        .desired_rows(8)
                        .desired_width(f32::INFINITY),
                );
                if !state.analyze_input.is_empty() {
                    ui.weak(format!(
                        "Character count: {}",
                        state.analyze_input.chars().count()
                    ));
                }
            });

            // Right - document upload
            ui.vertical(|ui| {
                ui.label("Or upload a document");
                if ui.button("📄 Upload PDF/DOCX...").clicked() {
                    if let Some((text, notice)) = pick_and_extract(state) {
                        if !text.is_empty() {
                            state.analyze_input = text;
                        }
                        state.analyze_notice = Some(notice);
                    }
                }
            });
        });

    ui.add_space(8.0);

    if ui.button("▶ Analyze").clicked() {
        let text = state.analyze_input.clone();
        match state.record_analysis(&text) {
            Some(record) => {
                state.last_analysis = Some(record);
                state.analyze_notice = None;
            }
            None => {
                state.analyze_notice =
                    Some(Notice::info("Nothing to analyze yet - enter some text first."));
            }
        }
    }

    if let Some(notice) = &state.analyze_notice {
        show_notice(ui, notice);
    }

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    if let Some(record) = state.last_analysis.clone() {
        show_result(ui, &record);
    } else {
        ui.centered_and_justified(|ui| {
            ui.label("Analyze a text to see its sentiment and emotions");
        });
    }
}

fn show_result(ui: &mut egui::Ui, record: &AnalysisRecord) {
    let color = theme::category_color(record.category);

    egui::Grid::new("result_grid")
        .num_columns(3)
        .spacing([32.0, 4.0])
        .show(ui, |ui| {
            // Score indicator
            ui.vertical(|ui| {
                ui.label("Sentiment Score");
                ui.label(
                    egui::RichText::new(format!("{}", record.score as i32))
                        .size(36.0)
                        .strong()
                        .color(color),
                );
            });

            // Category and subjectivity
            ui.vertical(|ui| {
                ui.group(|ui| {
                    ui.label(
                        egui::RichText::new(format!("Sentiment: {}", record.category.title()))
                            .strong()
                            .color(color),
                    );
                    ui.label(format!("Subjectivity: {}%", record.subjectivity as i32));
                });
            });

            // Emotion breakdown
            ui.vertical(|ui| {
                let dominant = record.emotions.dominant();
                ui.label("Emotion Breakdown");
                for (emotion, value) in record.emotions.iter() {
                    let mut text = egui::RichText::new(format!(
                        "{}: {}%",
                        emotion.title(),
                        value as i32
                    ))
                    .color(theme::emotion_color(emotion));
                    if emotion == dominant {
                        text = text.strong();
                    }
                    ui.label(text);
                }
            });
        });
}
