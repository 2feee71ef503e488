use eframe::egui::{RichText, Ui};

use crate::ui::ui_config::UI_CONFIG;

/// One expandable FAQ entry.
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// Accordion controller: at most one item expanded at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn is_open(&self, idx: usize) -> bool {
        self.open == Some(idx)
    }

    /// Clicking the open item closes it; opening any item closes the
    /// previous one.
    pub fn toggle(&mut self, idx: usize) {
        self.open = if self.is_open(idx) { None } else { Some(idx) };
    }

    pub fn show(&mut self, ui: &mut Ui, items: &[FaqItem]) {
        for (idx, item) in items.iter().enumerate() {
            let open = self.is_open(idx);
            let marker = if open { "▾" } else { "▸" };
            let header_color = if open {
                UI_CONFIG.colors.subsection_heading
            } else {
                UI_CONFIG.colors.heading
            };
            let header = RichText::new(format!("{marker} {}", item.question))
                .strong()
                .color(header_color);

            if ui.selectable_label(open, header).clicked() {
                self.toggle(idx);
            }
            if self.is_open(idx) {
                ui.indent(("faq_body", idx), |ui| {
                    ui.label(RichText::new(&item.answer).color(UI_CONFIG.colors.label));
                });
            }
            ui.separator();
        }
    }
}
