use std::sync::Arc;

use eframe::egui;

use crate::config::Config;
use crate::form::{DisplayMode, FormPhase, FormState};
use crate::matching::MockJobMatcher;
use crate::notify::LogNotifier;
use crate::resume::ResumeFile;
use crate::state::{SearchState, StateEvent, UiState};
use crate::ui::{render_about_dialog, render_header, render_search_view};

/// Main application state
pub struct JobMatcherApp {
    /// The job search form
    pub form: FormState,
    /// Pending search and notification work
    pub search: SearchState,
    /// Theme, dialogs and render caches
    pub ui: UiState,
    /// Status message for the status bar
    pub status_message: String,
}

impl JobMatcherApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        });

        let mode = config.launcher.display_mode();
        let search = SearchState::new(
            Arc::new(MockJobMatcher),
            Arc::new(LogNotifier),
            &config.notify,
        );

        Self {
            form: FormState::new(mode),
            search,
            ui: UiState::new(mode),
            status_message: "Ready".to_string(),
        }
    }

    /// Open a file picker and offer the chosen file to the form
    pub fn browse_for_resume(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Select Resume")
            .add_filter("PDF", &["pdf"])
            .pick_file()
            .map(ResumeFile::from_path);

        // A cancelled dialog clears the selection like an emptied file input
        match self.form.select_resume_file(picked) {
            Ok(()) => {
                if let Some(file) = self.form.selected_file() {
                    self.status_message = format!("Selected {}", file.file_name());
                }
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    pub fn submit(&mut self) {
        if let Some(event) = self.search.submit(&mut self.form) {
            self.handle_events(vec![event]);
        }
    }

    pub fn refresh(&mut self) {
        self.search.refresh(&mut self.form);
        self.status_message = "Ready".to_string();
    }

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        let mode = self.form.toggle_display_mode();
        self.ui.set_display_mode(mode);
        tracing::debug!("Display mode set to {}", mode.name());
        mode
    }

    fn handle_events(&mut self, events: Vec<StateEvent>) {
        for event in events {
            match event {
                StateEvent::StatusMessage(msg) => self.status_message = msg,
                StateEvent::LogError(msg) => tracing::error!("{}", msg),
                StateEvent::LogWarn(msg) => tracing::warn!("{}", msg),
                StateEvent::LogInfo(msg) => tracing::info!("{}", msg),
            }
        }
    }
}

impl eframe::App for JobMatcherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.search.poll(&mut self.form);
        self.handle_events(events);
        if self.search.is_busy() {
            ctx.request_repaint();
        }

        if self.ui.theme_dirty {
            self.ui.current_theme.apply(ctx);
            self.ui.theme_dirty = false;
        }

        let theme = self.ui.current_theme.clone();

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(theme.bg_darkest)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                render_header(self, ui);
            });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let color = if self.form.phase() == FormPhase::ReadyResults {
                    theme.success
                } else {
                    theme.text_muted
                };
                ui.label(egui::RichText::new(&self.status_message).color(color));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                render_search_view(self, ui);
            });
        });

        render_about_dialog(self, ctx);
    }
}
