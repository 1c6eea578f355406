// src/app.rs
use eframe::egui;

use crate::state::{AppState, Screen};
use crate::ui;

pub struct SentiscopeApp {
    state: AppState,
}

impl SentiscopeApp {
    pub fn new() -> Self {
        Self { state: AppState::new() }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close_menu();
                }
            });

            ui.separator();

            // Tab selection using buttons
            let tabs = [
                (Screen::Analyze, "Single Analysis"),
                (Screen::Compare, "Comparative Analysis"),
                (Screen::History, "History & Trends"),
            ];

            for (screen, label) in tabs {
                if ui.selectable_label(self.state.current_screen == screen, label).clicked() {
                    self.state.current_screen = screen;
                }
            }
        });
    }
}

impl eframe::App for SentiscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.state.current_screen {
                Screen::Analyze => {
                    ui::analyze::show_analyze_view(ui, &mut self.state);
                }
                Screen::Compare => {
                    ui::compare::show_compare_view(ui, &mut self.state);
                }
                Screen::History => {
                    ui::history::show_history_view(ui, &mut self.state);
                }
            });
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
