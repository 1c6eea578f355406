// src/ui/history.rs
use eframe::egui;

use crate::analysis::{calculate_trend, Trend};
use crate::chart::{self, HistorySeries};
use crate::state::AppState;
use crate::ui::theme;

pub fn show_history_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Sentiment Trend Analysis");
    ui.add_space(8.0);

    if state.history.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No analyses yet - run one from the Analyze tab to start a history");
        });
        return;
    }

    let (trend, slope) = calculate_trend(&state.history);
    show_trend_banner(ui, trend, slope);

    ui.add_space(8.0);

    if let Some(series) = chart::history_series(&state.history) {
        show_history_charts(ui, &series);
    }

    ui.add_space(8.0);
    show_recent_analyses(ui, state);
}

fn show_trend_banner(ui: &mut egui::Ui, trend: Trend, slope: f64) {
    let color = theme::trend_color(trend);
    let label = if trend == Trend::Stable {
        format!("Current Trend: {}", trend.title())
    } else {
        format!(
            "Current Trend: {} (Rate of change: {:.2} points per analysis)",
            trend.title(),
            slope
        )
    };
    ui.group(|ui| {
        ui.label(egui::RichText::new(label).strong().color(color));
    });
}

fn show_history_charts(ui: &mut egui::Ui, series: &HistorySeries) {
    let indexed = |values: &[f64]| -> Vec<[f64; 2]> {
        values.iter().enumerate().map(|(i, &v)| [i as f64, v]).collect()
    };

    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading("Sentiment Score & Trend");
            let plot = egui_plot::Plot::new("history_scores")
                .height(180.0)
                .allow_zoom(false)
                .allow_drag(false)
                .show_background(false)
                .include_y(0.0)
                .include_y(100.0)
                .legend(egui_plot::Legend::default());

            plot.show(ui, |plot_ui| {
                plot_ui.line(
                    egui_plot::Line::new(indexed(&series.scores))
                        .color(theme::SCORE_LINE)
                        .width(2.0)
                        .name("Sentiment"),
                );
                plot_ui.line(
                    egui_plot::Line::new(series.trend_line.clone())
                        .color(theme::TREND_LINE)
                        .style(egui_plot::LineStyle::dashed_loose())
                        .name("Trend (Moving Avg)"),
                );
            });

            if let (Some(first), Some(last)) =
                (series.timestamps.first(), series.timestamps.last())
            {
                ui.weak(format!(
                    "From {} to {}",
                    first.format("%H:%M:%S"),
                    last.format("%H:%M:%S")
                ));
            }
        });
    });

    ui.add_space(8.0);

    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading("Subjectivity");
            let plot = egui_plot::Plot::new("history_subjectivity")
                .height(140.0)
                .allow_zoom(false)
                .allow_drag(false)
                .show_background(false)
                .include_y(0.0)
                .include_y(100.0);

            plot.show(ui, |plot_ui| {
                plot_ui.line(
                    egui_plot::Line::new(indexed(&series.subjectivity))
                        .color(theme::POSITIVE)
                        .width(2.0)
                        .name("Subjectivity"),
                );
            });
        });
    });

    ui.add_space(8.0);

    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading("Emotion Breakdown");
            let plot = egui_plot::Plot::new("history_emotions")
                .height(140.0)
                .allow_zoom(false)
                .allow_drag(false)
                .show_background(false)
                .include_y(0.0)
                .include_y(100.0)
                .legend(egui_plot::Legend::default());

            plot.show(ui, |plot_ui| {
                let emotion_series = [
                    ("Joy", &series.joy, theme::JOY),
                    ("Sadness", &series.sadness, theme::SADNESS),
                    ("Neutral", &series.neutral, theme::EMOTION_NEUTRAL),
                ];
                for (name, values, color) in emotion_series {
                    plot_ui.line(
                        egui_plot::Line::new(indexed(values))
                            .color(color)
                            .width(1.5)
                            .name(name),
                    );
                }
            });
        });
    });
}

fn show_recent_analyses(ui: &mut egui::Ui, state: &AppState) {
    ui.heading(format!("Recent Analyses ({})", state.history.len()));

    egui::ScrollArea::vertical()
        .id_source("history_list_scroll")
        .show(ui, |ui| {
            for record in state.history.recent() {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.weak(&record.preview);
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
                    ui.weak(format!(
                        "Analyzed at: {}",
                        record.timestamp.format("%Y-%m-%d %H:%M:%S")
                    ));
                });
                ui.add_space(4.0);
            }
        });
}
