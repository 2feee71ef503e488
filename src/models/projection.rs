use serde::Serialize;

use crate::config::{Money, RoiPct};

/// Output of one projection run. Ephemeral: recomputed in full on every
/// input change, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiProjection {
    pub gross_revenue: Money,
    pub investor_share: Money,
    pub roi: RoiPct,
    pub breakeven_reached: bool,
    /// Investor share strictly exceeds the capital outlay. Computed
    /// unconditionally; only displayed once breakeven is reached.
    pub profit_mode: bool,
    /// Patients still missing to the breakeven threshold. Zero once reached.
    pub remaining_to_breakeven: u32,
}

impl RoiProjection {
    /// Derive the three-state classification from the two flags. Total and
    /// mutually exclusive: `profit_mode` is ignored below breakeven.
    pub fn status(&self) -> BreakevenStatus {
        if !self.breakeven_reached {
            BreakevenStatus::Remaining(self.remaining_to_breakeven)
        } else if self.profit_mode {
            BreakevenStatus::Profit
        } else {
            BreakevenStatus::Breakeven
        }
    }
}

/// Where the current volume sits relative to the model's breakeven point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakevenStatus {
    /// Below threshold; carries the patient count still missing.
    Remaining(u32),
    /// Threshold reached, investor share does not yet exceed the outlay.
    Breakeven,
    /// Investment recovered, share exceeds the outlay.
    Profit,
}

impl std::fmt::Display for BreakevenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remaining(n) => write!(f, "{n} to breakeven"),
            Self::Breakeven => write!(f, "BREAKEVEN"),
            Self::Profit => write!(f, "PROFIT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection(breakeven_reached: bool, profit_mode: bool, remaining: u32) -> RoiProjection {
        RoiProjection {
            gross_revenue: Money::new(0.0),
            investor_share: Money::new(0.0),
            roi: RoiPct::new(0.0),
            breakeven_reached,
            profit_mode,
            remaining_to_breakeven: remaining,
        }
    }

    #[test]
    fn test_status_partitions_both_flags() {
        // Every (breakeven_reached, profit_mode) pair maps to exactly one state.
        assert_eq!(
            projection(false, false, 10).status(),
            BreakevenStatus::Remaining(10)
        );
        // profit_mode below breakeven is computed but classified as Remaining.
        assert_eq!(
            projection(false, true, 10).status(),
            BreakevenStatus::Remaining(10)
        );
        assert_eq!(projection(true, false, 0).status(), BreakevenStatus::Breakeven);
        assert_eq!(projection(true, true, 0).status(), BreakevenStatus::Profit);
    }

    #[test]
    fn test_remaining_carries_count() {
        match projection(false, false, 67).status() {
            BreakevenStatus::Remaining(n) => assert_eq!(n, 67),
            other => panic!("expected Remaining, got {other:?}"),
        }
    }
}
