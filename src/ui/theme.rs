//! UI theme definitions.
//!
//! The light theme follows the clinical blue palette of the dashboard; the
//! dark theme keeps the same accents on darker surfaces.

use egui::{Color32, Stroke, Visuals};

use crate::metrics::Color;
use crate::storage::config::Theme as ThemePreference;

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }

    /// Colors used by cards and labels.
    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK_PALETTE,
            Theme::Light => &LIGHT_PALETTE,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl From<ThemePreference> for Theme {
    fn from(pref: ThemePreference) -> Self {
        match pref {
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Light => Theme::Light,
        }
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => ThemePreference::Dark,
            Theme::Light => ThemePreference::Light,
        }
    }
}

/// Named colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Window background
    pub background: Color32,
    /// Card background
    pub card_bg: Color32,
    /// Primary text
    pub text_primary: Color32,
    /// Secondary text
    pub text_secondary: Color32,
    /// Brand blue
    pub primary: Color32,
    /// Lighter brand blue
    pub secondary: Color32,
    /// Healthy / good
    pub success: Color32,
    /// Caution
    pub warning: Color32,
    /// Critical
    pub danger: Color32,
    /// Card border
    pub border: Color32,
}

pub static LIGHT_PALETTE: Palette = Palette {
    background: Color32::from_rgb(248, 250, 252),
    card_bg: Color32::from_rgb(255, 255, 255),
    text_primary: Color32::from_rgb(30, 41, 59),
    text_secondary: Color32::from_rgb(100, 116, 139),
    primary: Color32::from_rgb(44, 95, 141),
    secondary: Color32::from_rgb(74, 144, 196),
    success: Color32::from_rgb(16, 185, 129),
    warning: Color32::from_rgb(245, 158, 11),
    danger: Color32::from_rgb(239, 68, 68),
    border: Color32::from_rgb(226, 232, 240),
};

pub static DARK_PALETTE: Palette = Palette {
    background: Color32::from_rgb(15, 23, 42),
    card_bg: Color32::from_rgb(30, 41, 59),
    text_primary: Color32::from_rgb(241, 245, 249),
    text_secondary: Color32::from_rgb(148, 163, 184),
    primary: Color32::from_rgb(96, 165, 250),
    secondary: Color32::from_rgb(74, 144, 196),
    success: Color32::from_rgb(16, 185, 129),
    warning: Color32::from_rgb(245, 158, 11),
    danger: Color32::from_rgb(239, 68, 68),
    border: Color32::from_rgb(51, 65, 85),
};

/// Convert internal Color to egui Color32.
pub fn to_color32(color: &Color) -> Color32 {
    let [r, g, b] = color.to_egui();
    Color32::from_rgb(r, g, b)
}

/// Standard card frame with an optional colored left accent.
pub fn card_frame(palette: &Palette, accent: Option<Color32>) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.card_bg)
        .stroke(Stroke::new(1.0, accent.unwrap_or(palette.border)))
        .inner_margin(16.0)
        .outer_margin(4.0)
        .corner_radius(10.0)
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    let palette = &DARK_PALETTE;

    visuals.window_fill = palette.card_bg;
    visuals.panel_fill = palette.background;
    visuals.faint_bg_color = palette.card_bg;
    visuals.extreme_bg_color = palette.background;

    visuals.widgets.noninteractive.bg_fill = palette.card_bg;
    visuals.widgets.inactive.bg_fill = palette.card_bg;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(51, 65, 85);
    visuals.widgets.active.bg_fill = palette.primary;

    visuals.selection.bg_fill = palette.primary.linear_multiply(0.4);
    visuals.selection.stroke.color = palette.primary;

    visuals.widgets.noninteractive.fg_stroke.color = palette.text_primary;
    visuals.widgets.inactive.fg_stroke.color = palette.text_secondary;
    visuals.widgets.hovered.fg_stroke.color = palette.text_primary;
    visuals.widgets.active.fg_stroke.color = palette.text_primary;

    visuals.widgets.noninteractive.bg_stroke.color = palette.border;
    visuals.widgets.inactive.bg_stroke.color = palette.border;

    visuals
}

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();
    let palette = &LIGHT_PALETTE;

    visuals.window_fill = palette.card_bg;
    visuals.panel_fill = palette.background;
    visuals.faint_bg_color = Color32::from_rgb(241, 245, 249);
    visuals.extreme_bg_color = palette.card_bg;

    visuals.widgets.noninteractive.bg_fill = palette.card_bg;
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(241, 245, 249);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(226, 232, 240);
    visuals.widgets.active.bg_fill = palette.primary;

    visuals.selection.bg_fill = palette.secondary.linear_multiply(0.4);
    visuals.selection.stroke.color = palette.primary;

    visuals.widgets.noninteractive.fg_stroke.color = palette.text_primary;
    visuals.widgets.inactive.fg_stroke.color = palette.text_secondary;
    visuals.widgets.hovered.fg_stroke.color = palette.text_primary;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = palette.border;
    visuals.widgets.inactive.bg_stroke.color = palette.border;

    visuals
}
