use eframe::egui::{self, Color32, Stroke, Visuals};

use crate::form::DisplayMode;

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: DisplayMode,

    // Base colors
    pub bg_darkest: Color32,
    pub bg_dark: Color32,
    pub bg_medium: Color32,
    pub bg_light: Color32,

    // Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    // Accent colors
    pub accent: Color32,
    pub accent_hover: Color32,
    pub accent_muted: Color32,

    // Semantic colors
    pub success: Color32,
    pub error: Color32,

    // UI element colors
    pub border: Color32,
    pub selection: Color32,
}

impl Theme {
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Theme::light(),
            DisplayMode::Dark => Theme::dark(),
        }
    }

    /// Light theme - white panels, blue accent
    pub fn light() -> Self {
        Self {
            mode: DisplayMode::Light,

            bg_darkest: Color32::from_rgb(255, 255, 255),
            bg_dark: Color32::from_rgb(248, 250, 252),
            bg_medium: Color32::from_rgb(241, 245, 249),
            bg_light: Color32::from_rgb(226, 232, 240),

            text_primary: Color32::from_rgb(15, 23, 42),
            text_secondary: Color32::from_rgb(51, 65, 85),
            text_muted: Color32::from_rgb(100, 116, 139),

            accent: Color32::from_rgb(0, 112, 243),        // Link blue
            accent_hover: Color32::from_rgb(0, 90, 200),
            accent_muted: Color32::from_rgb(147, 197, 253),

            success: Color32::from_rgb(22, 163, 74),  // Green-600
            error: Color32::from_rgb(220, 38, 38),    // Red-600

            border: Color32::from_rgb(203, 213, 225),
            selection: Color32::from_rgb(0, 112, 243).gamma_multiply(0.25),
        }
    }

    /// Dark theme - near-black panels, light text
    pub fn dark() -> Self {
        Self {
            mode: DisplayMode::Dark,

            bg_darkest: Color32::from_rgb(12, 12, 14),
            bg_dark: Color32::from_rgb(18, 18, 18),
            bg_medium: Color32::from_rgb(30, 30, 34),
            bg_light: Color32::from_rgb(48, 48, 54),

            text_primary: Color32::from_rgb(245, 245, 245),
            text_secondary: Color32::from_rgb(200, 200, 200),
            text_muted: Color32::from_rgb(140, 140, 140),

            accent: Color32::from_rgb(96, 165, 250),       // Blue-400
            accent_hover: Color32::from_rgb(147, 197, 253),
            accent_muted: Color32::from_rgb(37, 99, 235),

            success: Color32::from_rgb(74, 222, 128),  // Green-400
            error: Color32::from_rgb(248, 113, 113),   // Red-400

            border: Color32::from_rgb(63, 63, 70),
            selection: Color32::from_rgb(96, 165, 250).gamma_multiply(0.3),
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        // Pin egui to our mode so the system theme never overrides it
        let (egui_theme, mut visuals) = if self.mode.is_dark() {
            (egui::Theme::Dark, Visuals::dark())
        } else {
            (egui::Theme::Light, Visuals::light())
        };
        ctx.set_theme(egui_theme);

        // Window and panel backgrounds
        visuals.window_fill = self.bg_dark;
        visuals.panel_fill = self.bg_dark;
        visuals.faint_bg_color = self.bg_medium;
        visuals.extreme_bg_color = self.bg_darkest;

        // Widget backgrounds
        visuals.widgets.noninteractive.bg_fill = self.bg_medium;
        visuals.widgets.noninteractive.weak_bg_fill = self.bg_light;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        // Inactive widgets
        visuals.widgets.inactive.bg_fill = self.bg_medium;
        visuals.widgets.inactive.weak_bg_fill = self.bg_light;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Hovered widgets
        visuals.widgets.hovered.bg_fill = self.bg_light;
        visuals.widgets.hovered.weak_bg_fill = self.bg_light;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Active/pressed widgets
        visuals.widgets.active.bg_fill = self.accent_muted;
        visuals.widgets.active.weak_bg_fill = self.accent_muted;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, self.accent_hover);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Selection
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.hyperlink_color = self.accent;
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        ctx.set_visuals(visuals);
    }
}
