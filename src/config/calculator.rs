use crate::config::SharePct;

/// Revenue/share assumptions shared by every investment model.
#[derive(Debug, Clone, Copy)]
pub struct CalculatorConfig {
    /// Fixed revenue per treated patient, whole EUR.
    pub revenue_per_patient: u32,
    /// Base fraction of gross revenue allocated to the investor.
    pub investor_share: SharePct,
    /// Applied to the share fraction when the full-capacity bonus triggers.
    pub bonus_multiplier: f64,
    /// ISO currency code, display only.
    pub currency: &'static str,
    /// Slider reset point after a model switch (fraction of max capacity).
    pub default_volume_factor: f64,
}

/// The live blueprint. There is exactly one revenue scheme across the
/// whole franchise program.
pub const CALCULATOR: CalculatorConfig = CalculatorConfig {
    revenue_per_patient: 7_500,
    investor_share: SharePct::new(0.30),
    bonus_multiplier: 2.0,
    currency: "EUR",
    default_volume_factor: 0.5,
};
