pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod format;
pub mod validation;

pub use config::{BuyMenu, Config};
pub use domain::{CalculationInput, CalculationResult, Decimal, Fund};
pub use engine::{CalcError, PricingEngine};
pub use error::AppError;
