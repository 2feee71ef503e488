use eframe::egui::{Color32, RichText, Ui};

use crate::ui::ui_config::UI_CONFIG;

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into())
        .color(UI_CONFIG.colors.subsection_heading)
        .size(18.0)
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

/// Success green above zero, highlight orange at or below.
pub fn roi_color(value: f64) -> Color32 {
    if value > 0.0 {
        UI_CONFIG.colors.success
    } else {
        UI_CONFIG.colors.highlight
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);

    /// One results-grid row: subdued label, strong colored value.
    fn metric(&mut self, label: &str, value: &str, color: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text.into()).color(UI_CONFIG.colors.label));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.label(RichText::new(label).color(UI_CONFIG.colors.label));
        self.label(RichText::new(value).strong().size(18.0).color(color));
        self.end_row();
    }
}
