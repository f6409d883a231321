//! Input and output values of the pricing formula.

use crate::domain::{Decimal, Fund};
use serde::{Deserialize, Serialize};

/// One sizing request for a single fund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    /// Which fund is being sized.
    #[serde(rename = "type")]
    pub fund: Fund,
    /// Available capital.
    pub cash_balance: Decimal,
    /// Price, or policy-selected notional amount, of the leveraged fund.
    pub asset_price: Decimal,
    /// Current price of the underlying index fund.
    pub underlying_asset_price: Decimal,
    /// 200-day moving average of the underlying index fund.
    #[serde(rename = "underlyingAsset200MaPrice")]
    pub underlying_asset_200ma_price: Decimal,
}

/// Recommended investment plus the factors that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    #[serde(rename = "type")]
    pub fund: Fund,
    /// Recommended dollar amount, unrounded.
    pub final_investment: Decimal,
    /// Whole-number multiplier, always >= 1.
    pub portfolio_scale_factor: Decimal,
    /// Signed fractional deviation of the underlying from its 200MA.
    pub distance: Decimal,
    pub distance_scale_factor: Decimal,
}

impl CalculationResult {
    /// True when the underlying trades strictly above its moving average.
    pub fn is_above_moving_average(&self) -> bool {
        self.distance.is_positive()
    }
}
