// src/ui/compare.rs
use eframe::egui;

use crate::chart::{self, ComparisonSeries};
use crate::state::{AppState, Notice};
use crate::ui::{pick_and_extract, show_notice, theme};

pub fn show_compare_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Comparative Analysis");
    ui.label("Add multiple texts to compare their sentiments and emotions.");
    ui.add_space(8.0);

    ui.add(
        egui::TextEdit::multiline(&mut state.compare_input)
            .hint_text("Enter text for comparison")
            .desired_rows(6)
            .desired_width(f32::INFINITY),
    );

    ui.horizontal(|ui| {
        if ui.button("📄 Upload PDF/DOCX...").clicked() {
            if let Some((text, notice)) = pick_and_extract(state) {
                if !text.is_empty() {
                    state.compare_input = text;
                }
                state.compare_notice = Some(notice);
            }
        }

        if ui.button("➕ Add to Comparison").clicked() {
            let text = state.compare_input.clone();
            if state.add_comparison(&text).is_some() {
                state.compare_notice = Some(Notice::success("Text added to comparison!"));
            } else {
                state.compare_notice =
                    Some(Notice::warning("Please enter some text or upload a file first."));
            }
        }

        if ui.button("🗑 Clear Comparison").clicked() {
            state.clear_comparison();
            state.compare_notice = Some(Notice::success("Comparison cleared!"));
        }
    });

    if let Some(notice) = &state.compare_notice {
        show_notice(ui, notice);
    }

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    match state.comparison.len() {
        0 => {
            ui.label("Add texts using the form above to start comparison.");
        }
        1 => {
            ui.label("Add at least one more text to see the comparison.");
        }
        _ => {
            if let Some(series) = chart::comparison_series(&state.comparison) {
                show_comparison_charts(ui, &series);
            }
            show_text_details(ui, state);
        }
    }
}

fn show_comparison_charts(ui: &mut egui::Ui, series: &ComparisonSeries) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading("Sentiment Analysis Comparison");
            let plot = egui_plot::Plot::new("comparison_sentiment")
                .height(200.0)
                .allow_zoom(false)
                .allow_drag(false)
                .show_background(false)
                .include_y(0.0)
                .include_y(100.0)
                .legend(egui_plot::Legend::default());

            plot.show(ui, |plot_ui| {
                let score_bars: Vec<egui_plot::Bar> = series
                    .scores
                    .iter()
                    .enumerate()
                    .map(|(i, &score)| {
                        egui_plot::Bar::new(i as f64 - 0.2, score)
                            .width(0.35)
                            .fill(theme::SCORE_LINE)
                            .name(&series.labels[i])
                    })
                    .collect();
                plot_ui.bar_chart(egui_plot::BarChart::new(score_bars).name("Sentiment Score"));

                let subjectivity_bars: Vec<egui_plot::Bar> = series
                    .subjectivity
                    .iter()
                    .enumerate()
                    .map(|(i, &subjectivity)| {
                        egui_plot::Bar::new(i as f64 + 0.2, subjectivity)
                            .width(0.35)
                            .fill(theme::POSITIVE)
                            .name(&series.labels[i])
                    })
                    .collect();
                plot_ui.bar_chart(egui_plot::BarChart::new(subjectivity_bars).name("Subjectivity"));
            });
        });
    });

    ui.add_space(8.0);

    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading("Emotion Analysis Comparison");
            let plot = egui_plot::Plot::new("comparison_emotion")
                .height(200.0)
                .allow_zoom(false)
                .allow_drag(false)
                .show_background(false)
                .include_y(0.0)
                .include_y(100.0)
                .legend(egui_plot::Legend::default());

            plot.show(ui, |plot_ui| {
                let emotion_series = [
                    ("Joy", &series.joy, theme::JOY, -0.25),
                    ("Sadness", &series.sadness, theme::SADNESS, 0.0),
                    ("Neutral", &series.neutral, theme::EMOTION_NEUTRAL, 0.25),
                ];

                for (name, values, color, offset) in emotion_series {
                    let bars: Vec<egui_plot::Bar> = values
                        .iter()
                        .enumerate()
                        .map(|(i, &value)| {
                            egui_plot::Bar::new(i as f64 + offset, value)
                                .width(0.22)
                                .fill(color)
                                .name(&series.labels[i])
                        })
                        .collect();
                    plot_ui.bar_chart(egui_plot::BarChart::new(bars).name(name));
                }
            });
        });
    });
}

fn show_text_details(ui: &mut egui::Ui, state: &AppState) {
    ui.add_space(8.0);
    ui.heading("Text Details");

    egui::ScrollArea::vertical()
        .id_source("comparison_details_scroll")
        .show(ui, |ui| {
            for (i, record) in state.comparison.iter().enumerate() {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.strong(format!("Text {}: {}", i + 1, record.preview));
                    ui.colored_label(
                        theme::category_color(record.category),
                        format!(
                            "Score: {} | Category: {}",
                            record.score as i32,
                            record.category.title()
                        ),
                    );
                    ui.horizontal(|ui| {
                        for (emotion, value) in record.emotions.iter() {
                            ui.colored_label(
                                theme::emotion_color(emotion),
                                format!("{}: {}%", emotion.title(), value as i32),
                            );
                        }
                    });
                });
                ui.add_space(4.0);
            }
        });
}
