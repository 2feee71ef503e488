use std::sync::LazyLock;

use crate::ui::accordion::FaqItem;

pub struct UiText {
    pub app_title: String,
    pub app_subtitle: String,

    // --- Hero ---
    pub hero_heading: String,
    pub hero_body: String,

    // --- Calculator card ---
    pub calc_heading: String,
    pub label_patient_volume: String,
    pub label_bonus: String,
    pub label_gross_revenue: String,
    pub label_investor_share: String,
    pub label_roi: String,
    pub label_breakeven: String,
    pub label_patients: String,

    // --- Status banner (three mutually exclusive states) ---
    pub status_profit: String,
    pub status_breakeven: String,
    pub status_remaining_suffix: String,

    // --- ROI plot ---
    pub plot_x_axis: String,
    pub plot_y_axis: String,

    // --- FAQ ---
    pub faq_heading: String,
    pub faq: Vec<FaqItem>,
}

impl UiText {
    pub fn status_remaining(&self, remaining: u32) -> String {
        format!("{remaining} {}", self.status_remaining_suffix)
    }

    pub fn patients(&self, count: u32) -> String {
        format!("{count} {}", self.label_patients)
    }
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "WELLNESS•GLOBE".to_string(),
    app_subtitle: "Franchise ROI Calculator".to_string(),

    hero_heading: "Own the clinic. Share the revenue.".to_string(),
    hero_body: "Project your monthly return across our three franchise tiers \
                before you commit a single euro."
        .to_string(),

    calc_heading: "Calculate Your Return".to_string(),
    label_patient_volume: "patients / month".to_string(),
    label_bonus: "Full-capacity bonus (2x investor share)".to_string(),
    label_gross_revenue: "Gross Revenue".to_string(),
    label_investor_share: "Investor Share".to_string(),
    label_roi: "ROI".to_string(),
    label_breakeven: "Breakeven".to_string(),
    label_patients: "patients".to_string(),

    status_profit: "✓ INVESTMENT RECOVERED — PURE PROFIT MODE".to_string(),
    status_breakeven: "✓ BREAKEVEN REACHED — BUILDING MOMENTUM".to_string(),
    status_remaining_suffix: "more patients to breakeven".to_string(),

    plot_x_axis: "Patients / month".to_string(),
    plot_y_axis: "ROI %".to_string(),

    faq_heading: "Frequently Asked Questions".to_string(),
    faq: vec![
        FaqItem::new(
            "How is the investor share calculated?",
            "Every treated patient generates a fixed gross revenue of 7.500 €. \
             As an investor you receive 30% of that gross revenue, settled \
             monthly alongside the clinic's own accounts.",
        ),
        FaqItem::new(
            "What is the full-capacity bonus?",
            "Model A partners who keep their clinic at maximum patient volume \
             earn double the investor share for every month capacity stays \
             full. Models B and C price the larger rooms into the base share \
             instead.",
        ),
        FaqItem::new(
            "When do I break even?",
            "Each tier declares a fixed breakeven volume: 67 patients per \
             month for Model A, 134 for Model B and 200 for Model C. The \
             calculator above shows how many patients you are away from it at \
             any volume you pick.",
        ),
        FaqItem::new(
            "Which model should I choose?",
            "Model A is a single treatment room and the smallest capital \
             outlay. Model B doubles the rooms and the capacity; Model C is \
             the flagship build-out for metropolitan locations. The ROI curve \
             is the same shape for all three, so pick by the capital you want \
             to deploy.",
        ),
        FaqItem::new(
            "Are the projected figures guaranteed?",
            "No. The projection is an illustration based on the fixed revenue \
             per patient and your chosen volume; actual patient volume varies \
             by location and season.",
        ),
    ],
});
