//! Leveraged fund / underlying index pairs that can be sized.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which leveraged fund a calculation is for.
///
/// Serialized as the calculation type tag (`tqqq-investment`, `upro-investment`).
/// The tag is carried through to output only and never changes the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fund {
    /// ProShares UltraPro QQQ, tracks the Nasdaq-100 (QQQ).
    #[serde(rename = "tqqq-investment")]
    Tqqq,
    /// ProShares UltraPro S&P 500, tracks the S&P 500 (VOO).
    #[serde(rename = "upro-investment")]
    Upro,
}

impl Fund {
    /// Every fund, in prompt order.
    pub const ALL: [Fund; 2] = [Fund::Tqqq, Fund::Upro];

    /// The calculation type tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Fund::Tqqq => "tqqq-investment",
            Fund::Upro => "upro-investment",
        }
    }

    pub fn ticker(&self) -> &'static str {
        match self {
            Fund::Tqqq => "TQQQ",
            Fund::Upro => "UPRO",
        }
    }

    /// Ticker of the unleveraged index fund whose 200MA drives the sizing.
    pub fn underlying_ticker(&self) -> &'static str {
        match self {
            Fund::Tqqq => "QQQ",
            Fund::Upro => "VOO",
        }
    }

    /// Human readable title, e.g. "TQQQ Investment".
    pub fn title(&self) -> String {
        format!("{} Investment", self.ticker())
    }
}

impl fmt::Display for Fund {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown investment type: {0}")]
pub struct FundParseError(pub String);

impl FromStr for Fund {
    type Err = FundParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "tqqq-investment" => Ok(Fund::Tqqq),
            "upro-investment" => Ok(Fund::Upro),
            other => Err(FundParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fund_serialization_uses_tag() {
        assert_eq!(
            serde_json::to_string(&Fund::Tqqq).unwrap(),
            "\"tqqq-investment\""
        );
        let upro: Fund = serde_json::from_str("\"upro-investment\"").unwrap();
        assert_eq!(upro, Fund::Upro);
    }

    #[test]
    fn test_fund_from_str() {
        assert_eq!("tqqq-investment".parse::<Fund>().unwrap(), Fund::Tqqq);
        assert_eq!(" upro-investment ".parse::<Fund>().unwrap(), Fund::Upro);
        assert!("both".parse::<Fund>().is_err());
    }

    #[test]
    fn test_fund_tickers() {
        assert_eq!(Fund::Tqqq.underlying_ticker(), "QQQ");
        assert_eq!(Fund::Upro.underlying_ticker(), "VOO");
        assert_eq!(Fund::Upro.title(), "UPRO Investment");
        assert_eq!(Fund::Tqqq.to_string(), "tqqq-investment");
    }
}
