//! Display formatting shared by the terminal report and the HTML pages.

use crate::domain::{CalculationResult, Decimal};

pub const ABOVE_MA_LABEL: &str = "Above 200MA (reducing investment)";
pub const BELOW_MA_LABEL: &str = "Below 200MA (increasing investment)";

/// `$1,234.56`
pub fn usd(amount: Decimal) -> String {
    format!("${}", amount.to_grouped_fixed(2))
}

/// Fraction rendered as a percentage with two decimals, e.g. `0.0526` -> `5.26%`.
pub fn percent(fraction: Decimal) -> String {
    match fraction.checked_mul(Decimal::hundred()) {
        Some(pct) => format!("{}%", pct.to_fixed(2)),
        None => "n/a".to_string(),
    }
}

/// `2x`
pub fn scale_factor(factor: Decimal) -> String {
    format!("{}x", factor.to_canonical_string())
}

pub fn market_position(result: &CalculationResult) -> &'static str {
    if result.is_above_moving_average() {
        ABOVE_MA_LABEL
    } else {
        BELOW_MA_LABEL
    }
}
