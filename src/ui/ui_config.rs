use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub widget_border: Color32,

    /// Positive ROI values.
    pub success: Color32,
    /// Negative/zero ROI values.
    pub highlight: Color32,

    // Status banner palette, one hue per breakeven state.
    pub status_remaining: Color32,
    pub status_breakeven: Color32,
    pub status_profit: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(240, 240, 240),
        subsection_heading: Color32::from_rgb(6, 182, 212),
        central_panel: Color32::from_rgb(16, 18, 24),
        side_panel: Color32::from_rgb(25, 25, 25),
        card: Color32::from_rgb(30, 33, 41),
        widget_border: Color32::from_rgb(60, 60, 70),

        success: Color32::from_rgb(34, 197, 94),
        highlight: Color32::from_rgb(249, 115, 22),

        status_remaining: Color32::from_rgb(249, 115, 22),
        status_breakeven: Color32::from_rgb(6, 182, 212),
        status_profit: Color32::from_rgb(34, 197, 94),
    },
};

impl UiConfig {
    /// Frame for the top banner (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the scrolling page body
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(24, 0),
            ..Default::default()
        }
    }

    /// Frame for the calculator card
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.widget_border),
            inner_margin: Margin::same(16),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }
}
