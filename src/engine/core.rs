use crate::config::{CalculatorConfig, Money, RoiPct};
use crate::models::{InvestmentModel, RoiProjection};

/// Project investor economics for one (model, volume, bonus) snapshot.
///
/// Pure arithmetic, no clamping: the presentation layer bounds
/// `patient_volume` to `[0, model.max_patients]` before calling in, and the
/// catalog guarantees a positive investment, so the ROI division is safe.
pub fn project(
    model: &InvestmentModel,
    patient_volume: u32,
    bonus_requested: bool,
    config: &CalculatorConfig,
) -> RoiProjection {
    let gross_revenue = patient_volume as f64 * config.revenue_per_patient as f64;

    // Bonus gating: requested, offered by the model, AND running at full
    // capacity. Not a graduated scale.
    let bonus_enabled = bonus_requested && model.has_bonus_option;
    let mut share = config.investor_share.value();
    if bonus_enabled && patient_volume >= model.max_patients {
        share *= config.bonus_multiplier;
    }
    let investor_share = gross_revenue * share;

    let investment = model.investment as f64;
    let roi = RoiPct::new((investor_share - investment) / investment * 100.0);

    RoiProjection {
        gross_revenue: Money::new(gross_revenue),
        investor_share: Money::new(investor_share),
        roi,
        breakeven_reached: patient_volume >= model.breakeven,
        // Strict: share equal to the outlay is breakeven, not profit.
        profit_mode: investor_share > investment,
        remaining_to_breakeven: model.breakeven.saturating_sub(patient_volume),
    }
}

/// Full volume sweep `0..=max_patients` for one model/bonus setting.
/// Feeds the ROI curve plot and the `projections` reporter.
pub fn projection_curve(
    model: &InvestmentModel,
    bonus_requested: bool,
    config: &CalculatorConfig,
) -> Vec<(u32, RoiProjection)> {
    (0..=model.max_patients)
        .map(|volume| (volume, project(model, volume, bonus_requested, config)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CALCULATOR;
    use crate::models::{BreakevenStatus, ModelCatalog, ModelCode};

    const EPS: f64 = 1e-6;

    fn model(code: ModelCode) -> InvestmentModel {
        *ModelCatalog::load().unwrap().get(code)
    }

    #[test]
    fn test_zero_volume_is_total_loss() {
        let p = project(&model(ModelCode::A), 0, false, &CALCULATOR);
        assert_eq!(p.gross_revenue.value(), 0.0);
        assert_eq!(p.investor_share.value(), 0.0);
        assert_eq!(p.roi.value(), -100.0);
        assert_eq!(p.status(), BreakevenStatus::Remaining(67));
    }

    #[test]
    fn test_model_a_at_breakeven_volume_is_already_profit() {
        // 67 * 7500 = 502_500 gross, 150_750 share: strictly above the
        // 150_000 outlay, so the threshold volume lands in profit mode.
        let p = project(&model(ModelCode::A), 67, false, &CALCULATOR);
        assert_eq!(p.gross_revenue.value(), 502_500.0);
        assert!((p.investor_share.value() - 150_750.0).abs() < EPS);
        assert!((p.roi.value() - 0.5).abs() < EPS);
        assert!(p.breakeven_reached);
        assert_eq!(p.status(), BreakevenStatus::Profit);
    }

    #[test]
    fn test_model_a_full_capacity_with_bonus() {
        let p = project(&model(ModelCode::A), 216, true, &CALCULATOR);
        assert_eq!(p.gross_revenue.value(), 1_620_000.0);
        assert!((p.investor_share.value() - 972_000.0).abs() < EPS);
        assert!((p.roi.value() - 548.0).abs() < EPS);
        assert_eq!(p.status(), BreakevenStatus::Profit);
    }

    #[test]
    fn test_model_a_full_capacity_without_bonus() {
        let p = project(&model(ModelCode::A), 216, false, &CALCULATOR);
        assert!((p.investor_share.value() - 486_000.0).abs() < EPS);
        assert!((p.roi.value() - 224.0).abs() < EPS);
        assert_eq!(p.status(), BreakevenStatus::Profit);
    }

    #[test]
    fn test_bonus_needs_full_capacity() {
        // One patient short of capacity: requested bonus must not apply.
        let at_215 = project(&model(ModelCode::A), 215, true, &CALCULATOR);
        let plain_215 = project(&model(ModelCode::A), 215, false, &CALCULATOR);
        assert_eq!(at_215, plain_215);
    }

    #[test]
    fn test_bonus_ignored_without_option() {
        // Model B has no bonus option: the flag must be a no-op everywhere,
        // including at full capacity.
        let m = model(ModelCode::B);
        for volume in [0, m.breakeven, m.max_patients] {
            let with = project(&m, volume, true, &CALCULATOR);
            let without = project(&m, volume, false, &CALCULATOR);
            assert_eq!(with, without, "volume {volume}");
        }
    }

    #[test]
    fn test_model_c_at_breakeven_builds_momentum() {
        // 200 * 7500 * 0.30 == 450_000 == the outlay. Strict comparison
        // keeps this in Breakeven, not Profit.
        let p = project(&model(ModelCode::C), 200, false, &CALCULATOR);
        assert!(p.breakeven_reached);
        assert!(!p.profit_mode);
        assert_eq!(p.status(), BreakevenStatus::Breakeven);
    }

    #[test]
    fn test_roi_monotonic_in_volume() {
        for code in [ModelCode::A, ModelCode::B, ModelCode::C] {
            let m = model(code);
            for bonus in [false, true] {
                let curve = projection_curve(&m, bonus, &CALCULATOR);
                for pair in curve.windows(2) {
                    assert!(
                        pair[1].1.roi.value() >= pair[0].1.roi.value(),
                        "{code} bonus={bonus} dipped at volume {}",
                        pair[1].0
                    );
                }
            }
        }
    }

    #[test]
    fn test_gross_revenue_identity() {
        // Integer products below 2^53 are exact in f64: no epsilon here.
        let m = model(ModelCode::B);
        for volume in [0, 1, 134, 431, 432] {
            let p = project(&m, volume, false, &CALCULATOR);
            assert_eq!(
                p.gross_revenue.value(),
                (volume * CALCULATOR.revenue_per_patient) as f64
            );
        }
    }

    #[test]
    fn test_remaining_counts_down_to_zero() {
        let m = model(ModelCode::A);
        assert_eq!(project(&m, 0, false, &CALCULATOR).remaining_to_breakeven, 67);
        assert_eq!(project(&m, 66, false, &CALCULATOR).remaining_to_breakeven, 1);
        assert_eq!(project(&m, 67, false, &CALCULATOR).remaining_to_breakeven, 0);
        assert_eq!(project(&m, 216, false, &CALCULATOR).remaining_to_breakeven, 0);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let m = model(ModelCode::A);
        let first = project(&m, 108, true, &CALCULATOR);
        let second = project(&m, 108, true, &CALCULATOR);
        assert_eq!(first, second);
    }

    #[test]
    fn test_curve_spans_full_range() {
        let m = model(ModelCode::A);
        let curve = projection_curve(&m, false, &CALCULATOR);
        assert_eq!(curve.len(), 217);
        assert_eq!(curve.first().unwrap().0, 0);
        assert_eq!(curve.last().unwrap().0, 216);
    }
}
