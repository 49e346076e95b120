//! Search view UI rendering

use eframe::egui::{self, RichText};
use egui_commonmark::CommonMarkViewer;

use super::results_table::render_results_table;
use super::theme::Theme;
use crate::app::JobMatcherApp;

const WELCOME_TEXT: &str = "Welcome to **AI Job Matcher**! This tool helps you find job \
opportunities that match your skills and experience. Simply upload your resume, specify \
the job titles you're interested in, and choose how many job listings you'd like to see. \
We'll analyze your resume and return a list of relevant job openings. The results will be \
displayed here and also emailed to you for convenience.";

const LABEL_WIDTH: f32 = 180.0;

/// Render the whole search view: description, form, error line and results
pub fn render_search_view(app: &mut JobMatcherApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("AI Job Matcher")
                .color(theme.text_primary)
                .size(28.0)
                .strong(),
        );
    });
    ui.add_space(8.0);

    CommonMarkViewer::new().show(ui, &mut app.ui.markdown_cache, WELCOME_TEXT);

    ui.add_space(16.0);

    render_form(app, ui, &theme);

    let error = app.form.error_message();
    if !error.is_empty() {
        ui.add_space(8.0);
        ui.label(RichText::new(error).color(theme.error));
    }

    let results = app.form.results();
    if !results.is_empty() {
        ui.add_space(16.0);
        render_results_table(ui, results, &theme);
    }
}

/// Render the input fields and buttons
fn render_form(app: &mut JobMatcherApp, ui: &mut egui::Ui, theme: &Theme) {
    egui::Frame::new()
        .fill(theme.bg_medium)
        .corner_radius(8.0)
        .inner_margin(16.0)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            // Resume picker
            ui.horizontal(|ui| {
                field_label(ui, "Upload Resume (PDF):", theme);
                if ui.button("Browse...").clicked() {
                    app.browse_for_resume();
                }
                let file_text = app
                    .form
                    .selected_file()
                    .map(|f| f.file_name().to_string())
                    .unwrap_or_else(|| "No file chosen".to_string());
                ui.label(RichText::new(file_text).color(theme.text_secondary));
            });

            ui.add_space(8.0);

            // Job titles
            ui.horizontal(|ui| {
                field_label(ui, "Job Titles:", theme);
                let mut titles = app.form.job_titles_text().to_string();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut titles)
                        .hint_text("e.g. Software Engineer, Data Scientist")
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    app.form.set_job_titles_text(titles);
                }
            });

            ui.add_space(8.0);

            // Job count
            ui.horizontal(|ui| {
                field_label(ui, "Number of Jobs:", theme);
                let mut count = app.form.job_count_text().to_string();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut count)
                        .hint_text("1")
                        .desired_width(80.0),
                );
                if response.changed() {
                    app.form.set_job_count_text(count);
                }
            });

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let pending = app.search.is_pending();
                let find = egui::Button::new(RichText::new("Find Jobs").color(theme.text_primary));
                if ui.add_enabled(!pending, find).clicked() {
                    app.submit();
                }

                if ui.button("Refresh").clicked() {
                    app.refresh();
                }

                if pending {
                    ui.spinner();
                    ui.label(RichText::new("Searching...").color(theme.text_muted));
                }
            });
        });
}

fn field_label(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.add_sized(
        [LABEL_WIDTH, 20.0],
        egui::Label::new(RichText::new(text).color(theme.text_secondary)),
    );
}
