//! Theme module for the range picker
//!
//! Defines the PickerTheme colours and the per-cell palette derived from it.

use egui::Color32;

use crate::models::settings::PickerSettings;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Colours used by the trigger and the calendar panel
#[derive(Debug, Clone, PartialEq)]
pub struct PickerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Panel background colour
    pub panel_background: Color32,

    /// Regular day background colour
    pub day_background: Color32,

    /// Weekend day background colour
    pub weekend_background: Color32,

    /// Background for days strictly inside the highlighted range
    pub range_background: Color32,

    /// Background for the two range endpoints
    pub endpoint_background: Color32,

    /// Today's date border colour
    pub today_border: Color32,

    /// Primary text colour (day numbers, headings)
    pub text_primary: Color32,

    /// Secondary text colour (weekday headers, placeholder)
    pub text_secondary: Color32,

    /// Text drawn on top of endpoint backgrounds
    pub endpoint_text: Color32,
}

impl PickerTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            panel_background: Color32::from_rgb(255, 255, 255),
            day_background: Color32::from_rgb(255, 255, 255),
            weekend_background: Color32::from_rgb(248, 248, 250),
            range_background: Color32::from_rgb(220, 232, 255),
            endpoint_background: Color32::from_rgb(60, 120, 230),
            today_border: Color32::from_rgb(100, 150, 255),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(120, 120, 120),
            endpoint_text: Color32::WHITE,
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            panel_background: Color32::from_rgb(40, 40, 40),
            day_background: Color32::from_rgb(40, 40, 40),
            weekend_background: Color32::from_rgb(36, 36, 40),
            range_background: Color32::from_rgb(50, 64, 92),
            endpoint_background: Color32::from_rgb(90, 140, 240),
            today_border: Color32::from_rgb(100, 150, 255),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            endpoint_text: Color32::from_rgb(15, 15, 20),
        }
    }

    /// Look up a built-in theme by name, falling back to light.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "light" => Self::light(),
            other => {
                log::warn!("Unknown theme '{}', using light", other);
                Self::light()
            }
        }
    }

    pub fn from_settings(settings: &PickerSettings) -> Self {
        Self::from_name(&settings.theme)
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.panel_background;
        visuals.selection.bg_fill = self.endpoint_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

impl Default for PickerTheme {
    fn default() -> Self {
        Self::light()
    }
}

/// Per-cell colours, with the in-progress drag drawn in a lighter tint than
/// the committed range.
#[derive(Clone, Copy)]
pub(crate) struct DayCellPalette {
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub range_bg: Color32,
    pub endpoint_bg: Color32,
    pub preview_range_bg: Color32,
    pub preview_endpoint_bg: Color32,
    pub today_border: Color32,
    pub text: Color32,
    pub endpoint_text: Color32,
    pub header_text: Color32,
    pub hover_border: Color32,
}

impl DayCellPalette {
    pub fn from_theme(theme: &PickerTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            weekend_bg: theme.weekend_background,
            range_bg: theme.range_background,
            endpoint_bg: theme.endpoint_background,
            preview_range_bg: with_alpha(theme.range_background, 190),
            preview_endpoint_bg: with_alpha(theme.endpoint_background, 200),
            today_border: theme.today_border,
            text: theme.text_primary,
            endpoint_text: theme.endpoint_text,
            header_text: theme.text_secondary,
            hover_border: with_alpha(theme.today_border, if theme.is_dark { 160 } else { 120 }),
        }
    }
}
