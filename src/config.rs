//! Load runtime configuration: the starting trade and the account's risk settings.

use anyhow::{anyhow, Context};
use chrono::{Days, NaiveDate};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::types::{AssetClass, OptionType, Region, TradeInputs};
use crate::utils::sanitize_symbol;

pub const CONFIG_ENV: &str = "RISK_TOOL_CONFIG";
const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TradeDefaults {
    pub option_type: OptionType,
    pub symbol: String,
    pub stock_price: f64,
    pub strike_price: f64,
    pub expiry_days: i64,
    pub volatility_pct: f64,    // 20 => 0.20
    pub interest_rate_pct: f64, // 5 => 0.05
    pub entry_price: f64,
    pub stop_loss_price: f64,
    pub take_profit_price: f64,
    pub contracts: u32,
}

impl Default for TradeDefaults {
    fn default() -> Self {
        Self {
            option_type: OptionType::Call,
            symbol: "SPY".into(),
            stock_price: 100.0,
            strike_price: 100.0,
            expiry_days: 30,
            volatility_pct: 20.0,
            interest_rate_pct: 5.0,
            entry_price: 5.0,
            stop_loss_price: 3.0,
            take_profit_price: 8.0,
            contracts: 1,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AccountCfg {
    pub total_capital: f64,
    pub risk_tolerance_pct: f64, // 0..=10
    pub asset_class: AssetClass,
    pub region: Region,
}

impl Default for AccountCfg {
    fn default() -> Self {
        Self {
            total_capital: 10_000.0,
            risk_tolerance_pct: 1.0,
            asset_class: AssetClass::Stocks,
            region: Region::Us,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub trade: TradeDefaults,
    pub account: AccountCfg,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&s).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_yaml(s: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Env override, then ./config.yaml, then the platform config dir.
    pub fn locate() -> Option<PathBuf> {
        if let Ok(p) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(p));
        }
        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }
        ProjectDirs::from("", "", "options-risk-tool")
            .map(|d| d.config_dir().join(CONFIG_FILE))
            .filter(|p| p.exists())
    }

    /// Starting inputs for a new session, with expiry counted from `today`.
    /// Negative `expiry_days` clamp to today; a date past the calendar range is an error.
    pub fn initial_inputs(&self, today: NaiveDate) -> anyhow::Result<TradeInputs> {
        let t = &self.trade;
        let a = &self.account;
        let expiration_date = today
            .checked_add_days(Days::new(t.expiry_days.max(0) as u64))
            .ok_or_else(|| anyhow!("trade.expiry_days = {} is out of range", t.expiry_days))?;
        Ok(TradeInputs {
            option_type: t.option_type,
            symbol: sanitize_symbol(&t.symbol),
            stock_price: t.stock_price,
            strike_price: t.strike_price,
            expiration_date,
            as_of: today,
            volatility: t.volatility_pct / 100.0,
            interest_rate: t.interest_rate_pct / 100.0,
            entry_price: t.entry_price,
            stop_loss_price: t.stop_loss_price,
            take_profit_price: t.take_profit_price,
            contracts: t.contracts,
            total_capital: a.total_capital,
            risk_tolerance: a.risk_tolerance_pct / 100.0,
            asset_class: a.asset_class,
            region: a.region,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = AppConfig::from_yaml("{}").unwrap();
        let t = cfg.initial_inputs(today()).unwrap();
        assert_eq!(t.symbol, "SPY");
        assert_eq!(t.option_type, OptionType::Call);
        assert_eq!(t.volatility, 0.2);
        assert_eq!(t.interest_rate, 0.05);
        assert_eq!(t.risk_tolerance, 0.01);
        assert_eq!(t.expiration_date, today() + Days::new(30));
        assert!(t.validate().is_ok());
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let yaml = r#"
trade:
  option_type: Put
  symbol: qqq
  expiry_days: 90
account:
  total_capital: 25000
  asset_class: ETFs
  region: Europe
"#;
        let cfg = AppConfig::from_yaml(yaml).unwrap();
        let t = cfg.initial_inputs(today()).unwrap();
        assert_eq!(t.option_type, OptionType::Put);
        assert_eq!(t.symbol, "QQQ");
        assert_eq!(t.total_capital, 25_000.0);
        assert_eq!(t.asset_class, AssetClass::Etfs);
        assert_eq!(t.region, Region::Europe);
        assert_eq!(t.entry_price, 5.0);
        assert_eq!((t.expiration_date - t.as_of).num_days(), 90);
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let cfg = AppConfig::from_yaml(include_str!("../config.yaml")).unwrap();
        let from_file = cfg.initial_inputs(today()).unwrap();
        let built_in = AppConfig::default().initial_inputs(today()).unwrap();
        assert_eq!(from_file, built_in);
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        assert!(AppConfig::from_yaml("trade:\n  option_type: Straddle\n").is_err());
    }

    #[test]
    fn negative_expiry_days_clamp_to_today() {
        let cfg = AppConfig::from_yaml("trade:\n  expiry_days: -5\n").unwrap();
        let t = cfg.initial_inputs(today()).unwrap();
        assert_eq!(t.expiration_date, today());
    }

    #[test]
    fn huge_expiry_days_is_an_error_not_a_panic() {
        let cfg = AppConfig::from_yaml("trade:\n  expiry_days: 9999999999\n").unwrap();
        let err = cfg.initial_inputs(today()).unwrap_err();
        assert!(err.to_string().contains("expiry_days"));
    }
}
