//! Shared UI components for the job matcher window

use eframe::egui::{self, RichText};

use crate::app::JobMatcherApp;

/// Render the header bar: title, dark mode toggle and About button
pub fn render_header(app: &mut JobMatcherApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    ui.horizontal(|ui| {
        ui.label(
            RichText::new("AI Job Matcher")
                .size(18.0)
                .strong()
                .color(theme.accent),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("About").clicked() {
                app.ui.show_about_dialog = true;
            }

            ui.add_space(8.0);

            let mut dark = app.form.display_mode().is_dark();
            if ui.checkbox(&mut dark, "Dark Mode").changed() {
                app.toggle_display_mode();
            }
        });
    });
}

/// Render the About dialog
pub fn render_about_dialog(app: &mut JobMatcherApp, ctx: &egui::Context) {
    if !app.ui.show_about_dialog {
        return;
    }

    let theme = &app.ui.current_theme;
    let mut close = false;

    egui::Window::new("About AI Job Matcher")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 200.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);

                ui.label(
                    RichText::new("AI Job Matcher")
                        .size(22.0)
                        .strong()
                        .color(theme.accent)
                );

                ui.add_space(12.0);

                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme.text_muted)
                );

                ui.add_space(12.0);

                ui.label(
                    RichText::new("Match your resume with job openings")
                        .color(theme.text_secondary)
                );

                ui.add_space(12.0);

                ui.label(
                    RichText::new("Built with Rust + egui")
                        .size(11.0)
                        .color(theme.text_muted)
                );

                ui.add_space(12.0);

                if ui.button("Close").clicked() {
                    close = true;
                }

                ui.add_space(8.0);
            });
        });

    if close {
        app.ui.show_about_dialog = false;
    }
}
