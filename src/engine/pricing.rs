use crate::domain::{CalculationInput, CalculationResult, Decimal};
use thiserror::Error;

/// Portfolio divisor used by the interactive and web calculators.
pub const DEFAULT_PORTFOLIO_DIVISOR: u32 = 1_500;

/// Divisor of the earlier calculator variant. Kept for reference; pick one
/// divisor per deployment via `PORTFOLIO_DIVISOR`.
pub const LEGACY_PORTFOLIO_DIVISOR: u32 = 250;

/// How strongly the distance from the 200MA bends the buy amount.
pub const DISTANCE_SENSITIVITY: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("200MA price must not be zero")]
    ZeroMovingAverage,
    #[error("calculation overflowed the decimal range")]
    Overflow,
    #[error("portfolio divisor must be greater than 0, got {0}")]
    InvalidDivisor(Decimal),
}

/// Sizes a leveraged ETF buy from cash balance and trend distance.
///
/// Pure: the same input always yields the same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingEngine {
    portfolio_divisor: Decimal,
    sensitivity: Decimal,
}

impl PricingEngine {
    pub fn new(portfolio_divisor: Decimal) -> Result<Self, CalcError> {
        if !portfolio_divisor.is_positive() {
            return Err(CalcError::InvalidDivisor(portfolio_divisor));
        }
        Ok(Self {
            portfolio_divisor,
            sensitivity: Decimal::from(DISTANCE_SENSITIVITY),
        })
    }

    pub fn portfolio_divisor(&self) -> Decimal {
        self.portfolio_divisor
    }

    /// `max(1, floor(cash_balance / K))`.
    pub fn portfolio_scale_factor(&self, cash_balance: Decimal) -> Result<Decimal, CalcError> {
        let units = cash_balance
            .checked_div(self.portfolio_divisor)
            .ok_or(CalcError::Overflow)?
            .floor();
        Ok(units.max(Decimal::one()))
    }

    /// Signed fractional deviation of `price` from `moving_average`.
    pub fn distance(&self, price: Decimal, moving_average: Decimal) -> Result<Decimal, CalcError> {
        if moving_average.is_zero() {
            return Err(CalcError::ZeroMovingAverage);
        }
        price
            .checked_sub(moving_average)
            .and_then(|diff| diff.checked_div(moving_average))
            .ok_or(CalcError::Overflow)
    }

    /// Dampens above trend (`1 / (1 + S*d)`), amplifies at or below it (`1 + S*|d|`).
    pub fn distance_scale_factor(&self, distance: Decimal) -> Result<Decimal, CalcError> {
        let bent = self
            .sensitivity
            .checked_mul(distance.abs())
            .and_then(|x| Decimal::one().checked_add(x))
            .ok_or(CalcError::Overflow)?;

        if distance.is_positive() {
            Decimal::one().checked_div(bent).ok_or(CalcError::Overflow)
        } else {
            Ok(bent)
        }
    }

    pub fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult, CalcError> {
        let portfolio_scale_factor = self.portfolio_scale_factor(input.cash_balance)?;
        let distance = self.distance(
            input.underlying_asset_price,
            input.underlying_asset_200ma_price,
        )?;
        let distance_scale_factor = self.distance_scale_factor(distance)?;

        let final_investment = input
            .asset_price
            .checked_mul(portfolio_scale_factor)
            .and_then(|x| x.checked_mul(distance_scale_factor))
            .ok_or(CalcError::Overflow)?;

        Ok(CalculationResult {
            fund: input.fund,
            final_investment,
            portfolio_scale_factor,
            distance,
            distance_scale_factor,
        })
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self {
            portfolio_divisor: Decimal::from(DEFAULT_PORTFOLIO_DIVISOR),
            sensitivity: Decimal::from(DISTANCE_SENSITIVITY),
        }
    }
}
