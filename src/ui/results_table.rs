//! Results table rendering

use eframe::egui::{self, RichText};

use super::theme::Theme;
use crate::matching::ResultSet;

const HEADERS: [&str; 4] = ["Company", "Job Title", "Description", "Apply"];

/// Render the "Job Matches" table in the order the listings were delivered
pub fn render_results_table(ui: &mut egui::Ui, results: &ResultSet, theme: &Theme) {
    egui::Frame::new()
        .fill(theme.bg_medium)
        .corner_radius(8.0)
        .inner_margin(12.0)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Job Matches")
                        .color(theme.accent)
                        .size(18.0)
                        .strong(),
                );
                if let Some(at) = results.delivered_at() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("as of {}", at.format("%H:%M:%S")))
                                .color(theme.text_muted)
                                .small(),
                        );
                    });
                }
            });
            ui.add_space(8.0);

            egui::Grid::new("job_results")
                .num_columns(HEADERS.len())
                .striped(true)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    for header in HEADERS {
                        ui.label(RichText::new(header).color(theme.text_primary).strong());
                    }
                    ui.end_row();

                    for listing in results.listings() {
                        ui.label(RichText::new(&listing.company).color(theme.text_primary));
                        ui.label(RichText::new(&listing.title).color(theme.text_primary));
                        ui.add(
                            egui::Label::new(
                                RichText::new(&listing.description).color(theme.text_secondary),
                            )
                            .wrap(),
                        );
                        if ui
                            .link("Apply")
                            .on_hover_text(&listing.apply_link)
                            .clicked()
                        {
                            if let Err(e) = open::that(&listing.apply_link) {
                                tracing::warn!("Failed to open {}: {}", listing.apply_link, e);
                            }
                        }
                        ui.end_row();
                    }
                });
        });
}
