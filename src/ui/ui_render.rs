use eframe::egui::{
    ComboBox, Context, CornerRadius, Frame, Grid, Margin, RichText, Slider, TopBottomPanel, Ui,
};
use egui_plot::{HLine, Line, LineStyle, Plot, PlotPoints, VLine};
use strum::IntoEnumIterator;

use crate::engine;
use crate::models::{BreakevenStatus, ModelCode};
use crate::ui::app::App;
use crate::ui::styles::{UiStyleExt, apply_opacity, colored_subsection_heading, roi_color};
use crate::ui::ui_config::{UI_CONFIG, UI_TEXT};

const ROI_PLOT_HEIGHT: f32 = 200.0;
const STATUS_BG_OPACITY: f32 = 0.1;

impl App {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_banner")
            .frame(UI_CONFIG.top_panel_frame())
            .min_height(36.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(&UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
                    ui.label_subdued(&UI_TEXT.app_subtitle);
                });
            });
    }

    pub(super) fn render_hero(&mut self, ui: &mut Ui) {
        self.revealed_section(ui, "hero", |_app, ui| {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.heading(
                    RichText::new(&UI_TEXT.hero_heading)
                        .size(28.0)
                        .color(UI_CONFIG.colors.heading),
                );
                ui.label_subdued(&UI_TEXT.hero_body);
            });
            ui.add_space(16.0);
        });
    }

    pub(super) fn render_calculator_card(&mut self, ui: &mut Ui) {
        self.revealed_section(ui, "calculator", |app, ui| {
            UI_CONFIG.card_frame().show(ui, |ui| {
                ui.label(colored_subsection_heading(&UI_TEXT.calc_heading));
                ui.add_space(8.0);
                app.render_inputs(ui);
                ui.add_space(12.0);
                ui.separator();
                app.render_results(ui);
                ui.add_space(8.0);
                app.render_status_banner(ui);
                ui.add_space(12.0);
                app.render_roi_plot(ui);
            });
        });
    }

    fn render_inputs(&mut self, ui: &mut Ui) {
        let mut dirty = false;

        // 1. MODEL SELECT
        let mut picked = None;
        ComboBox::from_id_salt("model_select")
            .selected_text(self.catalog.get(self.selected).name)
            .width(220.0)
            .show_ui(ui, |ui| {
                for code in ModelCode::iter() {
                    let entry = self.catalog.get(code);
                    if ui
                        .selectable_label(self.selected == code, entry.name)
                        .clicked()
                    {
                        picked = Some(code);
                    }
                }
            });
        if let Some(code) = picked {
            if code != self.selected {
                // select_model re-ranges the slider and recomputes.
                self.select_model(code);
            }
        }

        let (max, has_bonus) = {
            let model = self.catalog.get(self.selected);
            (model.max_patients, model.has_bonus_option)
        };

        // 2. PATIENT VOLUME
        if ui
            .add(Slider::new(&mut self.patient_volume, 0..=max).text(&UI_TEXT.label_patient_volume))
            .changed()
        {
            dirty = true;
        }

        // 3. BONUS (rendered only when the tier offers it; forced off otherwise)
        if has_bonus {
            if ui
                .checkbox(&mut self.bonus_requested, &UI_TEXT.label_bonus)
                .changed()
            {
                dirty = true;
            }
        }

        if dirty {
            self.recompute();
        }
    }

    fn render_results(&mut self, ui: &mut Ui) {
        let p = self.projection;
        let breakeven = self.catalog.get(self.selected).breakeven;

        Grid::new("results_grid")
            .num_columns(2)
            .spacing([48.0, 10.0])
            .show(ui, |ui| {
                ui.metric(
                    &UI_TEXT.label_gross_revenue,
                    &p.gross_revenue.to_string(),
                    UI_CONFIG.colors.heading,
                );
                ui.metric(
                    &UI_TEXT.label_investor_share,
                    &p.investor_share.to_string(),
                    UI_CONFIG.colors.heading,
                );
                ui.metric(&UI_TEXT.label_roi, &p.roi.to_string(), roi_color(p.roi.value()));
                ui.metric(
                    &UI_TEXT.label_breakeven,
                    &UI_TEXT.patients(breakeven),
                    UI_CONFIG.colors.subsection_heading,
                );
            });
    }

    fn render_status_banner(&mut self, ui: &mut Ui) {
        let (text, color) = match self.projection.status() {
            BreakevenStatus::Remaining(n) => (
                UI_TEXT.status_remaining(n),
                UI_CONFIG.colors.status_remaining,
            ),
            BreakevenStatus::Breakeven => (
                UI_TEXT.status_breakeven.clone(),
                UI_CONFIG.colors.status_breakeven,
            ),
            BreakevenStatus::Profit => {
                (UI_TEXT.status_profit.clone(), UI_CONFIG.colors.status_profit)
            }
        };

        let banner = Frame {
            fill: apply_opacity(color, STATUS_BG_OPACITY),
            inner_margin: Margin::symmetric(12, 10),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        };
        banner.show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(text).strong().color(color));
            });
        });
    }

    fn render_roi_plot(&mut self, ui: &mut Ui) {
        let model = self.catalog.get(self.selected);
        let breakeven = model.breakeven as f64;
        let curve = engine::projection_curve(model, self.bonus_requested, &self.config);
        let points: Vec<[f64; 2]> = curve
            .iter()
            .map(|(volume, p)| [*volume as f64, p.roi.value()])
            .collect();

        Plot::new("roi_curve")
            .height(ROI_PLOT_HEIGHT)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .x_axis_label(&UI_TEXT.plot_x_axis)
            .y_axis_label(&UI_TEXT.plot_y_axis)
            .show(ui, |plot_ui| {
                plot_ui.hline(HLine::new("", 0.0).color(UI_CONFIG.colors.label).width(1.0));
                plot_ui.vline(
                    VLine::new(UI_TEXT.label_breakeven.clone(), breakeven)
                        .color(UI_CONFIG.colors.status_breakeven)
                        .style(LineStyle::Dashed { length: 6.0 })
                        .width(1.5),
                );
                plot_ui.line(
                    Line::new(UI_TEXT.label_roi.clone(), PlotPoints::new(points))
                        .color(roi_color(self.projection.roi.value()))
                        .width(2.0),
                );
            });
    }

    pub(super) fn render_faq(&mut self, ui: &mut Ui) {
        self.revealed_section(ui, "faq", |app, ui| {
            ui.add_space(8.0);
            ui.label(colored_subsection_heading(&UI_TEXT.faq_heading));
            ui.add_space(4.0);
            app.faq.show(ui, &UI_TEXT.faq);
            ui.add_space(24.0);
        });
    }

    /// Wrap a section in the scroll-reveal fade. The rect observed this
    /// frame drives next frame's opacity.
    fn revealed_section(
        &mut self,
        ui: &mut Ui,
        id_salt: &str,
        add_contents: impl FnOnce(&mut Self, &mut Ui),
    ) {
        let opacity = self.reveal.opacity(ui.ctx(), id_salt);
        let viewport = ui.clip_rect();
        let response = ui
            .scope(|ui| {
                ui.multiply_opacity(opacity);
                add_contents(self, ui);
            })
            .response;
        self.reveal.observe(id_salt, response.rect, viewport);
    }
}
