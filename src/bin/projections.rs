//! Headless checkpoint report over the investment model catalog.
//!
//! Prints one table per model covering the volumes an investor actually asks
//! about: empty clinic, quarter steps, the breakeven threshold and full
//! capacity (with the bonus row for models that offer it).

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tabled::{Table, Tabled};

use wellness_globe::config::{CALCULATOR, Money};
use wellness_globe::engine;
use wellness_globe::models::{InvestmentModel, ModelCatalog, ModelCode, RoiProjection};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print ROI projections for each investment model", long_about = None)]
struct Cli {
    /// Emit one JSON document instead of tables
    #[arg(long)]
    json: bool,

    /// Restrict the report to one model (A, B or C)
    #[arg(long)]
    model: Option<ModelCode>,
}

#[derive(Tabled)]
struct CheckpointRow {
    #[tabled(rename = "Patients")]
    patients: u32,
    #[tabled(rename = "Bonus")]
    bonus: &'static str,
    #[tabled(rename = "Gross Revenue")]
    gross_revenue: String,
    #[tabled(rename = "Investor Share")]
    investor_share: String,
    #[tabled(rename = "ROI")]
    roi: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl CheckpointRow {
    fn new(patients: u32, bonus: bool, p: &RoiProjection) -> Self {
        Self {
            patients,
            bonus: if bonus { "yes" } else { "-" },
            gross_revenue: p.gross_revenue.to_string(),
            investor_share: p.investor_share.to_string(),
            roi: p.roi.to_string(),
            status: p.status().to_string(),
        }
    }
}

#[derive(Serialize)]
struct CheckpointJson {
    model: ModelCode,
    patients: u32,
    bonus: bool,
    #[serde(flatten)]
    projection: RoiProjection,
}

/// Volumes worth reporting for one model, ascending and deduplicated
/// (breakeven can coincide with a quarter step).
fn checkpoint_volumes(model: &InvestmentModel) -> Vec<u32> {
    let max = model.max_patients;
    let mut volumes = vec![0, max / 4, max / 2, 3 * max / 4, model.breakeven, max];
    volumes.sort_unstable();
    volumes.dedup();
    volumes
}

fn checkpoint_runs(model: &InvestmentModel) -> Vec<(u32, bool)> {
    let mut runs: Vec<(u32, bool)> = checkpoint_volumes(model)
        .into_iter()
        .map(|volume| (volume, false))
        .collect();
    if model.has_bonus_option {
        // The doubled-share row only exists at full capacity.
        runs.push((model.max_patients, true));
    }
    runs
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let catalog = ModelCatalog::load()?;

    let models: Vec<&InvestmentModel> = match cli.model {
        Some(code) => vec![catalog.get(code)],
        None => catalog.iter().collect(),
    };

    if cli.json {
        let mut checkpoints = Vec::new();
        for model in models {
            for (patients, bonus) in checkpoint_runs(model) {
                checkpoints.push(CheckpointJson {
                    model: model.code,
                    patients,
                    bonus,
                    projection: engine::project(model, patients, bonus, &CALCULATOR),
                });
            }
        }
        println!("{}", serde_json::to_string_pretty(&checkpoints)?);
    } else {
        for model in models {
            let rows: Vec<CheckpointRow> = checkpoint_runs(model)
                .into_iter()
                .map(|(patients, bonus)| {
                    let p = engine::project(model, patients, bonus, &CALCULATOR);
                    CheckpointRow::new(patients, bonus, &p)
                })
                .collect();

            println!(
                "\n{}  (investment {}, max annual profit {})",
                model.name,
                Money::new(model.investment as f64),
                Money::new(model.max_annual_profit as f64)
            );
            println!("{}", Table::new(rows));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoints_are_sorted_and_unique() {
        let catalog = ModelCatalog::load().unwrap();
        for model in catalog.iter() {
            let volumes = checkpoint_volumes(model);
            let mut sorted = volumes.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(volumes, sorted);
            assert_eq!(*volumes.first().unwrap(), 0);
            assert_eq!(*volumes.last().unwrap(), model.max_patients);
        }
    }

    #[test]
    fn test_bonus_row_only_where_offered() {
        let catalog = ModelCatalog::load().unwrap();
        for model in catalog.iter() {
            let has_bonus_run = checkpoint_runs(model).iter().any(|(_, bonus)| *bonus);
            assert_eq!(has_bonus_run, model.has_bonus_option, "{}", model.name);
        }
    }
}
