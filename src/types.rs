//! Core domain types: option side, descriptive categories and the per-evaluation trade inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::{DomainError, DomainResult};

/// Upper bound for the per-trade risk tolerance (10 % of capital).
pub const MAX_RISK_TOLERANCE: f64 = 0.10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        })
    }
}

impl FromStr for OptionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C" | "CALL" => Ok(OptionType::Call),
            "P" | "PUT" => Ok(OptionType::Put),
            _ => Err(DomainError::invalid_range(
                "option type",
                s,
                "expected Call or Put",
            )),
        }
    }
}

/// Descriptive only; never enters a calculation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssetClass {
    Stocks,
    #[serde(rename = "ETFs")]
    Etfs,
    Commodities,
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssetClass::Stocks => "Stocks",
            AssetClass::Etfs => "ETFs",
            AssetClass::Commodities => "Commodities",
        };
        f.pad(s)
    }
}

impl FromStr for AssetClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stocks" | "stock" => Ok(AssetClass::Stocks),
            "etfs" | "etf" => Ok(AssetClass::Etfs),
            "commodities" | "commodity" => Ok(AssetClass::Commodities),
            _ => Err(DomainError::invalid_range(
                "asset class",
                s,
                "expected Stocks, ETFs or Commodities",
            )),
        }
    }
}

/// Descriptive only; never enters a calculation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Region {
    #[serde(rename = "US")]
    Us,
    Europe,
    Asia,
    Global,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Region::Us => "US",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Global => "Global",
        })
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" => Ok(Region::Us),
            "europe" => Ok(Region::Europe),
            "asia" => Ok(Region::Asia),
            "global" => Ok(Region::Global),
            _ => Err(DomainError::invalid_range(
                "region",
                s,
                "expected US, Europe, Asia or Global",
            )),
        }
    }
}

/// Everything one evaluation needs. Rates are fractions, not percents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeInputs {
    pub option_type: OptionType,
    pub symbol: String,
    pub stock_price: f64,
    pub strike_price: f64,
    pub expiration_date: NaiveDate,
    /// Evaluation date; time to expiry is measured from here.
    pub as_of: NaiveDate,
    pub volatility: f64,
    pub interest_rate: f64,
    pub entry_price: f64,
    pub stop_loss_price: f64,
    pub take_profit_price: f64,
    pub contracts: u32,
    pub total_capital: f64,
    pub risk_tolerance: f64,
    pub asset_class: AssetClass,
    pub region: Region,
}

impl TradeInputs {
    /// Calendar days to expiry over 365.
    pub fn time_to_expiry_years(&self) -> f64 {
        (self.expiration_date - self.as_of).num_days() as f64 / 365.0
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.symbol.trim().is_empty() {
            return Err(DomainError::invalid_range(
                "symbol",
                "\"\"",
                "must not be empty",
            ));
        }

        let decimals = [
            ("stock price", self.stock_price),
            ("strike price", self.strike_price),
            ("volatility", self.volatility),
            ("interest rate", self.interest_rate),
            ("entry price", self.entry_price),
            ("stop-loss price", self.stop_loss_price),
            ("take-profit price", self.take_profit_price),
            ("total capital", self.total_capital),
            ("risk tolerance", self.risk_tolerance),
        ];
        for (field, v) in decimals {
            if !v.is_finite() || v < 0.0 {
                return Err(DomainError::invalid_range(
                    field,
                    v,
                    "must be a finite, non-negative number",
                ));
            }
        }

        if self.risk_tolerance > MAX_RISK_TOLERANCE {
            return Err(DomainError::invalid_range(
                "risk tolerance",
                self.risk_tolerance,
                format!("must not exceed {MAX_RISK_TOLERANCE}"),
            ));
        }
        if self.contracts < 1 {
            return Err(DomainError::invalid_range(
                "contracts",
                self.contracts,
                "must be at least 1",
            ));
        }
        if self.expiration_date < self.as_of {
            return Err(DomainError::invalid_range(
                "expiration date",
                self.expiration_date,
                format!("must not be before {}", self.as_of),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Same values the tool starts with out of the box.
    pub(crate) fn sample_inputs() -> TradeInputs {
        let as_of = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        TradeInputs {
            option_type: OptionType::Call,
            symbol: "SPY".into(),
            stock_price: 100.0,
            strike_price: 100.0,
            expiration_date: as_of + chrono::Duration::days(73),
            as_of,
            volatility: 0.20,
            interest_rate: 0.05,
            entry_price: 5.0,
            stop_loss_price: 3.0,
            take_profit_price: 8.0,
            contracts: 1,
            total_capital: 10_000.0,
            risk_tolerance: 0.01,
            asset_class: AssetClass::Stocks,
            region: Region::Us,
        }
    }

    #[test]
    fn time_to_expiry_counts_calendar_days() {
        let t = sample_inputs();
        assert!((t.time_to_expiry_years() - 0.2).abs() < 1e-12);

        let same_day = TradeInputs {
            expiration_date: t.as_of,
            ..t
        };
        assert_eq!(same_day.time_to_expiry_years(), 0.0);
        assert!(same_day.validate().is_ok());
    }

    #[test]
    fn defaults_validate() {
        assert!(sample_inputs().validate().is_ok());
    }

    // ---------- validation failures ----------

    #[test]
    fn rejects_negative_price() {
        let t = TradeInputs {
            stop_loss_price: -1.0,
            ..sample_inputs()
        };
        match t.validate() {
            Err(DomainError::InvalidRange { field, .. }) => assert_eq!(field, "stop-loss price"),
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn rejects_nan() {
        let t = TradeInputs {
            volatility: f64::NAN,
            ..sample_inputs()
        };
        assert!(matches!(
            t.validate(),
            Err(DomainError::InvalidRange { field: "volatility", .. })
        ));
    }

    #[test]
    fn rejects_zero_contracts() {
        let t = TradeInputs {
            contracts: 0,
            ..sample_inputs()
        };
        assert!(matches!(
            t.validate(),
            Err(DomainError::InvalidRange { field: "contracts", .. })
        ));
    }

    #[test]
    fn rejects_risk_tolerance_above_ten_percent() {
        let ok = TradeInputs {
            risk_tolerance: 0.10,
            ..sample_inputs()
        };
        assert!(ok.validate().is_ok());

        let too_high = TradeInputs {
            risk_tolerance: 0.11,
            ..sample_inputs()
        };
        assert!(matches!(
            too_high.validate(),
            Err(DomainError::InvalidRange { field: "risk tolerance", .. })
        ));
    }

    #[test]
    fn rejects_past_expiry_and_blank_symbol() {
        let base = sample_inputs();
        let expired = TradeInputs {
            expiration_date: base.as_of - chrono::Duration::days(1),
            ..base.clone()
        };
        assert!(matches!(
            expired.validate(),
            Err(DomainError::InvalidRange { field: "expiration date", .. })
        ));

        let blank = TradeInputs {
            symbol: "   ".into(),
            ..base
        };
        assert!(matches!(
            blank.validate(),
            Err(DomainError::InvalidRange { field: "symbol", .. })
        ));
    }

    #[test]
    fn enums_parse_loosely() {
        assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("C".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("etf".parse::<AssetClass>().unwrap(), AssetClass::Etfs);
        assert_eq!("Europe".parse::<Region>().unwrap(), Region::Europe);
        assert!("straddle".parse::<OptionType>().is_err());
        assert_eq!(AssetClass::Etfs.to_string(), "ETFs");
        assert_eq!("us".parse::<Region>().unwrap(), Region::Us);
        assert_eq!(Region::Us.to_string(), "US");
    }
}
