//! UI-related application state

use egui_commonmark::CommonMarkCache;

use crate::form::DisplayMode;
use crate::ui::theme::Theme;

/// UI-related state
pub struct UiState {
    /// Cache for markdown rendering
    pub markdown_cache: CommonMarkCache,
    /// Theme for the display mode currently applied
    pub current_theme: Theme,
    /// Whether theme needs to be applied
    pub theme_dirty: bool,
    /// Whether to show the About dialog
    pub show_about_dialog: bool,
}

impl UiState {
    /// Create a new UiState for the given display mode
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            markdown_cache: CommonMarkCache::default(),
            current_theme: Theme::for_mode(mode),
            theme_dirty: true, // Apply theme on first frame
            show_about_dialog: false,
        }
    }

    /// Swap to the theme for `mode`; it is applied on the next frame
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.current_theme = Theme::for_mode(mode);
        self.theme_dirty = true;
    }
}
