//! Domain types for leveraged ETF sizing.
//!
//! This module provides:
//! - Lossless numeric handling via Decimal wrapper
//! - The Fund tag identifying a leveraged fund and its underlying index
//! - CalculationInput / CalculationResult values passed through the pricing engine

pub mod calculation;
pub mod decimal;
pub mod fund;

pub use calculation::{CalculationInput, CalculationResult};
pub use decimal::Decimal;
pub use fund::{Fund, FundParseError};
