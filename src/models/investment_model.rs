use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::CALCULATOR;

/// The closed set of franchise offerings.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    Default,
)]
#[strum(ascii_case_insensitive)]
pub enum ModelCode {
    #[default]
    A,
    B,
    C,
}

/// One franchise investment tier. All figures are whole EUR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvestmentModel {
    pub code: ModelCode,
    pub name: &'static str,
    /// Required capital outlay.
    pub investment: u32,
    /// Upper bound on monthly patient volume for this tier.
    pub max_patients: u32,
    /// Declared breakeven threshold. Domain data, NOT derived from the
    /// investment/share ratio.
    pub breakeven: u32,
    /// Marketing figure only, never enters the projection arithmetic.
    pub max_annual_profit: u32,
    /// Whether the full-capacity bonus multiplier is available.
    pub has_bonus_option: bool,
}

impl InvestmentModel {
    /// Registry invariants. Violations are configuration-data errors and
    /// must abort startup before any projection runs.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.investment > 0,
            "{}: investment must be positive (got {})",
            self.name,
            self.investment
        );
        ensure!(
            self.max_patients > 0,
            "{}: max_patients must be positive",
            self.name
        );
        ensure!(
            self.breakeven <= self.max_patients,
            "{}: breakeven ({}) exceeds capacity ({})",
            self.name,
            self.breakeven,
            self.max_patients
        );
        Ok(())
    }

    /// Slider reset point: 50% of capacity, rounded.
    pub fn default_volume(&self) -> u32 {
        (self.max_patients as f64 * CALCULATOR.default_volume_factor).round() as u32
    }
}

const CATALOG_DATA: [InvestmentModel; 3] = [
    InvestmentModel {
        code: ModelCode::A,
        name: "Model A - Single Room",
        investment: 150_000,
        max_patients: 216,
        breakeven: 67,
        max_annual_profit: 500_000,
        has_bonus_option: true,
    },
    InvestmentModel {
        code: ModelCode::B,
        name: "Model B - Dual Room",
        investment: 300_000,
        max_patients: 432,
        breakeven: 134,
        max_annual_profit: 972_000,
        has_bonus_option: false,
    },
    InvestmentModel {
        code: ModelCode::C,
        name: "Model C - Flagship",
        investment: 450_000,
        max_patients: 648,
        breakeven: 200,
        max_annual_profit: 1_458_000,
        has_bonus_option: false,
    },
];

/// Immutable registry over the fixed model set, validated once at startup.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    models: Vec<InvestmentModel>,
}

impl ModelCatalog {
    /// Build and validate the registry. Any invariant violation fails loudly
    /// here instead of surfacing as NaN/Infinity at compute time.
    pub fn load() -> Result<Self> {
        let models = CATALOG_DATA.to_vec();
        for (idx, model) in models.iter().enumerate() {
            model.validate()?;
            // get() indexes by discriminant, so order must match the enum.
            ensure!(
                model.code as usize == idx,
                "catalog order mismatch at {}",
                model.name
            );
        }
        Ok(Self { models })
    }

    pub fn get(&self, code: ModelCode) -> &InvestmentModel {
        &self.models[code as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &InvestmentModel> {
        self.models.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_shipped_catalog_is_valid() {
        let catalog = ModelCatalog::load().unwrap();
        assert_eq!(catalog.iter().count(), 3);
    }

    #[test]
    fn test_get_covers_every_code() {
        let catalog = ModelCatalog::load().unwrap();
        for code in ModelCode::iter() {
            assert_eq!(catalog.get(code).code, code);
        }
    }

    #[test]
    fn test_zero_investment_is_rejected() {
        let broken = InvestmentModel {
            investment: 0,
            ..CATALOG_DATA[0]
        };
        assert!(broken.validate().is_err());
    }

    #[test]
    fn test_breakeven_above_capacity_is_rejected() {
        let broken = InvestmentModel {
            breakeven: 217,
            ..CATALOG_DATA[0]
        };
        assert!(broken.validate().is_err());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let broken = InvestmentModel {
            max_patients: 0,
            breakeven: 0,
            ..CATALOG_DATA[0]
        };
        assert!(broken.validate().is_err());
    }

    #[test]
    fn test_default_volume_is_half_capacity() {
        let catalog = ModelCatalog::load().unwrap();
        assert_eq!(catalog.get(ModelCode::A).default_volume(), 108);
        assert_eq!(catalog.get(ModelCode::B).default_volume(), 216);
        assert_eq!(catalog.get(ModelCode::C).default_volume(), 324);
    }

    #[test]
    fn test_code_parses_case_insensitive() {
        assert_eq!("a".parse::<ModelCode>().unwrap(), ModelCode::A);
        assert_eq!("C".parse::<ModelCode>().unwrap(), ModelCode::C);
        assert!("D".parse::<ModelCode>().is_err());
    }
}
