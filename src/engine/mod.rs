//! Pure computation engine for leveraged ETF sizing.

pub mod pricing;

pub use pricing::{
    CalcError, PricingEngine, DEFAULT_PORTFOLIO_DIVISOR, DISTANCE_SENSITIVITY,
    LEGACY_PORTFOLIO_DIVISOR,
};
