//! Parsing of raw user-entered strings into positive decimals.
//!
//! Nothing reaches the pricing engine until every field has passed here.

use crate::domain::{Decimal, Fund};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid number")]
    NotANumber,
    #[error("Number is too large or too precise")]
    OutOfRange,
    #[error("{field} must be greater than 0")]
    NotPositive { field: String },
    #[error("Please enter valid numbers in all fields")]
    InvalidFields,
    #[error("All values must be greater than zero")]
    NonPositiveFields,
    #[error("Please select an investment type")]
    UnknownInvestmentType,
}

/// Parse a single prompt answer. `field` names the value in the error message.
pub fn parse_positive(field: &str, raw: &str) -> Result<Decimal, InputError> {
    let value = parse_number(raw)?;
    if !value.is_positive() {
        return Err(InputError::NotPositive {
            field: field.to_string(),
        });
    }
    Ok(value)
}

/// Parse every field of a form submission at once.
///
/// Missing or unparsable fields are reported before non-positive ones.
pub fn parse_all_positive<const N: usize>(
    raw: [Option<&str>; N],
) -> Result<[Decimal; N], InputError> {
    let mut values = [Decimal::zero(); N];
    for (slot, field) in values.iter_mut().zip(raw) {
        *slot = field
            .and_then(|raw| parse_number(raw).ok())
            .ok_or(InputError::InvalidFields)?;
    }
    if values.iter().any(|v| !v.is_positive()) {
        return Err(InputError::NonPositiveFields);
    }
    Ok(values)
}

pub fn parse_fund(raw: Option<&str>) -> Result<Fund, InputError> {
    raw.and_then(|s| s.parse().ok())
        .ok_or(InputError::UnknownInvestmentType)
}

/// Digits with an optional sign, point and exponent. Digit separators (`1_000`)
/// are rejected even though `rust_decimal` accepts them.
fn parse_number(raw: &str) -> Result<Decimal, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains('_') {
        return Err(InputError::NotANumber);
    }
    match Decimal::from_str_canonical(trimmed) {
        Ok(value) => Ok(value),
        // A real number rust_decimal cannot hold, e.g. `1e29`.
        Err(_) if trimmed.parse::<f64>().is_ok_and(f64::is_finite) => {
            Err(InputError::OutOfRange)
        }
        Err(_) => Err(InputError::NotANumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_positive_accepts_numbers() {
        let v = parse_positive("Cash balance", " 2000.50 ").unwrap();
        assert_eq!(v.inner(), dec!(2000.50));
    }

    #[test]
    fn test_parse_positive_rejects_garbage() {
        assert_eq!(
            parse_positive("Cash balance", "abc"),
            Err(InputError::NotANumber)
        );
        assert_eq!(parse_positive("Cash balance", ""), Err(InputError::NotANumber));
    }

    #[test]
    fn test_parse_positive_rejects_digit_separators() {
        assert_eq!(parse_positive("Cash balance", "1_000"), Err(InputError::NotANumber));
        assert_eq!(parse_positive("Cash balance", "inf"), Err(InputError::NotANumber));
        assert_eq!(parse_positive("Cash balance", "NaN"), Err(InputError::NotANumber));
    }

    #[test]
    fn test_parse_positive_reports_out_of_range() {
        let err = parse_positive("Cash balance", "1e29").unwrap_err();
        assert_eq!(err, InputError::OutOfRange);
        assert_eq!(err.to_string(), "Number is too large or too precise");
        assert_eq!(parse_all_positive([Some("1e29")]), Err(InputError::InvalidFields));
    }

    #[test]
    fn test_parse_positive_rejects_non_positive() {
        let err = parse_positive("Cash balance", "-5").unwrap_err();
        assert_eq!(err.to_string(), "Cash balance must be greater than 0");
        let err = parse_positive("QQQ 200MA price", "0").unwrap_err();
        assert_eq!(err.to_string(), "QQQ 200MA price must be greater than 0");
    }

    #[test]
    fn test_parse_all_reports_invalid_before_non_positive() {
        let err = parse_all_positive([Some("-1"), Some("x"), Some("3")]).unwrap_err();
        assert_eq!(err, InputError::InvalidFields);
        assert_eq!(
            err.to_string(),
            "Please enter valid numbers in all fields"
        );
    }

    #[test]
    fn test_parse_all_missing_field() {
        let err = parse_all_positive([Some("1"), None]).unwrap_err();
        assert_eq!(err, InputError::InvalidFields);
    }

    #[test]
    fn test_parse_all_non_positive() {
        let err = parse_all_positive([Some("1"), Some("0")]).unwrap_err();
        assert_eq!(err.to_string(), "All values must be greater than zero");
    }

    #[test]
    fn test_parse_all_ok() {
        let [a, b] = parse_all_positive([Some("1.5"), Some("2")]).unwrap();
        assert_eq!(a.inner(), dec!(1.5));
        assert_eq!(b.inner(), dec!(2));
    }

    #[test]
    fn test_parse_fund() {
        assert_eq!(parse_fund(Some("upro-investment")), Ok(Fund::Upro));
        assert_eq!(parse_fund(Some("")), Err(InputError::UnknownInvestmentType));
        assert_eq!(parse_fund(None), Err(InputError::UnknownInvestmentType));
    }
}
