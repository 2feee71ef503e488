use eframe::Frame;
use eframe::egui::{CentralPanel, Context, ScrollArea};

use crate::Cli;
use crate::config::{CALCULATOR, CalculatorConfig, DF};
use crate::engine;
use crate::models::{ModelCatalog, ModelCode, RoiProjection};
use crate::ui::accordion::Accordion;
use crate::ui::reveal::RevealTracker;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::utils::setup_custom_visuals;

pub struct App {
    pub(crate) catalog: ModelCatalog,
    pub(crate) config: CalculatorConfig,

    // Current input snapshot. The most recent values fully determine the
    // projection; there is no history.
    pub(crate) selected: ModelCode,
    pub(crate) patient_volume: u32,
    pub(crate) bonus_requested: bool,

    pub(crate) projection: RoiProjection,

    pub(crate) faq: Accordion,
    pub(crate) reveal: RevealTracker,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, args: Cli, catalog: ModelCatalog) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let config = CALCULATOR;
        let selected = args.model.unwrap_or_default();
        let patient_volume = catalog.get(selected).default_volume();
        let projection = engine::project(catalog.get(selected), patient_volume, false, &config);

        Self {
            catalog,
            config,
            selected,
            patient_volume,
            bonus_requested: false,
            projection,
            faq: Accordion::default(),
            reveal: RevealTracker::default(),
        }
    }

    /// Switch tiers: re-range the slider to the new capacity (reset to 50%)
    /// and drop a bonus the new model does not offer.
    pub(crate) fn select_model(&mut self, code: ModelCode) {
        self.selected = code;
        let model = self.catalog.get(code);
        self.patient_volume = model.default_volume();
        if !model.has_bonus_option {
            self.bonus_requested = false;
        }
        if DF.log_model_switch {
            log::info!("model switched to {code} ({})", model.name);
        }
        self.recompute();
    }

    /// One full, independent recomputation. Synchronous: the projection is a
    /// handful of multiplications, debouncing would cost more than it saves.
    pub(crate) fn recompute(&mut self) {
        let model = self.catalog.get(self.selected);
        self.patient_volume = self.patient_volume.min(model.max_patients);
        self.projection =
            engine::project(model, self.patient_volume, self.bonus_requested, &self.config);
        if DF.log_recompute {
            log::info!(
                "recompute: {} volume={} bonus={} -> {}",
                self.selected,
                self.patient_volume,
                self.bonus_requested,
                self.projection.status()
            );
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.render_top_panel(ctx);

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                    self.render_hero(ui);
                    self.render_calculator_card(ui);
                    self.render_faq(ui);
                });
            });
    }
}
