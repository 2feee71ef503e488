mod investment_model;
mod projection;

pub use investment_model::{InvestmentModel, ModelCatalog, ModelCode};
pub use projection::{BreakevenStatus, RoiProjection};
