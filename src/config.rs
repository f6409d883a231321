use crate::domain::{Decimal, Fund};
use crate::engine::DEFAULT_PORTFOLIO_DIVISOR;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub portfolio_divisor: Decimal,
    pub tqqq_menu: BuyMenu,
    pub upro_menu: BuyMenu,
}

/// The two notional buy amounts offered for a fund.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyMenu {
    /// Used when the underlying is above its 100 and 200 day averages.
    pub above_ma: Decimal,
    /// Used when the underlying is below its 100 and 200 day averages.
    pub below_ma: Decimal,
}

impl BuyMenu {
    pub fn new(above_ma: Decimal, below_ma: Decimal) -> Self {
        Self { above_ma, below_ma }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let portfolio_divisor =
            positive_decimal(&env_map, "PORTFOLIO_DIVISOR", DEFAULT_PORTFOLIO_DIVISOR)?;

        let tqqq_menu = BuyMenu::new(
            positive_decimal(&env_map, "TQQQ_BUY_ABOVE_MA", 130)?,
            positive_decimal(&env_map, "TQQQ_BUY_BELOW_MA", 1000)?,
        );
        let upro_menu = BuyMenu::new(
            positive_decimal(&env_map, "UPRO_BUY_ABOVE_MA", 70)?,
            positive_decimal(&env_map, "UPRO_BUY_BELOW_MA", 750)?,
        );

        Ok(Config {
            port,
            portfolio_divisor,
            tqqq_menu,
            upro_menu,
        })
    }

    pub fn menu(&self, fund: Fund) -> BuyMenu {
        match fund {
            Fund::Tqqq => self.tqqq_menu,
            Fund::Upro => self.upro_menu,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            portfolio_divisor: Decimal::from(DEFAULT_PORTFOLIO_DIVISOR),
            tqqq_menu: BuyMenu::new(Decimal::from(130u32), Decimal::from(1000u32)),
            upro_menu: BuyMenu::new(Decimal::from(70u32), Decimal::from(750u32)),
        }
    }
}

fn positive_decimal(
    env_map: &HashMap<String, String>,
    key: &str,
    default: u32,
) -> Result<Decimal, ConfigError> {
    let Some(raw) = env_map.get(key) else {
        return Ok(Decimal::from(default));
    };
    let value = Decimal::from_str_canonical(raw.trim()).map_err(|_| {
        ConfigError::InvalidValue(key.to_string(), format!("not a number: {}", raw))
    })?;
    if !value.is_positive() {
        return Err(ConfigError::InvalidValue(
            key.to_string(),
            "must be greater than 0".to_string(),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_from_empty_env() {
        let config = Config::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.portfolio_divisor.inner(), dec!(1500));
        assert_eq!(config.menu(Fund::Tqqq).above_ma.inner(), dec!(130));
        assert_eq!(config.menu(Fund::Tqqq).below_ma.inner(), dec!(1000));
        assert_eq!(config.menu(Fund::Upro).above_ma.inner(), dec!(70));
        assert_eq!(config.menu(Fund::Upro).below_ma.inner(), dec!(750));
    }

    #[test]
    fn test_overrides() {
        let mut env_map = HashMap::new();
        env_map.insert("PORT".to_string(), "9000".to_string());
        env_map.insert("PORTFOLIO_DIVISOR".to_string(), "250".to_string());
        env_map.insert("UPRO_BUY_BELOW_MA".to_string(), " 800.5 ".to_string());
        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.portfolio_divisor.inner(), dec!(250));
        assert_eq!(config.upro_menu.below_ma.inner(), dec!(800.5));
    }

    #[test]
    fn test_invalid_port() {
        let mut env_map = HashMap::new();
        env_map.insert("PORT".to_string(), "not_a_number".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PORT"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_divisor() {
        let mut env_map = HashMap::new();
        env_map.insert("PORTFOLIO_DIVISOR".to_string(), "0".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, msg)) => {
                assert_eq!(k, "PORTFOLIO_DIVISOR");
                assert_eq!(msg, "must be greater than 0");
            }
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_menu_amount() {
        let mut env_map = HashMap::new();
        env_map.insert("TQQQ_BUY_ABOVE_MA".to_string(), "lots".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "TQQQ_BUY_ABOVE_MA"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}
