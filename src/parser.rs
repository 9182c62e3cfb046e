//! Parse shell commands typed at the prompt.
//! Supported: `set <field> <value>`, `eval`, `save`, `history [json]`, `show`, `new`,
//! `help`, `quit`.

use chrono::{Duration, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

use crate::types::{AssetClass, OptionType, Region, TradeInputs};
use crate::utils::sanitize_symbol;

static RE_SET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^set\s+([a-z\-]+)\s+(\S+)$").expect("valid regex"));
static RE_DAYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\+?(\d{1,5})d?$").expect("valid regex"));
static RE_HISTORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^history(?:\s+(json))?$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq)]
pub enum Expiry {
    On(NaiveDate),
    DaysOut(i64),
}

/// A single input change. Percent fields are already converted to fractions.
#[derive(Debug, Clone, PartialEq)]
pub enum Setting {
    OptionType(OptionType),
    Symbol(String),
    StockPrice(f64),
    StrikePrice(f64),
    Expiry(Expiry),
    Volatility(f64),
    InterestRate(f64),
    EntryPrice(f64),
    StopLossPrice(f64),
    TakeProfitPrice(f64),
    Contracts(u32),
    TotalCapital(f64),
    RiskTolerance(f64),
    AssetClass(AssetClass),
    Region(Region),
}

impl Setting {
    pub fn apply(self, t: &mut TradeInputs) {
        match self {
            Setting::OptionType(v) => t.option_type = v,
            Setting::Symbol(v) => t.symbol = v,
            Setting::StockPrice(v) => t.stock_price = v,
            Setting::StrikePrice(v) => t.strike_price = v,
            Setting::Expiry(Expiry::On(d)) => t.expiration_date = d,
            Setting::Expiry(Expiry::DaysOut(n)) => t.expiration_date = t.as_of + Duration::days(n),
            Setting::Volatility(v) => t.volatility = v,
            Setting::InterestRate(v) => t.interest_rate = v,
            Setting::EntryPrice(v) => t.entry_price = v,
            Setting::StopLossPrice(v) => t.stop_loss_price = v,
            Setting::TakeProfitPrice(v) => t.take_profit_price = v,
            Setting::Contracts(v) => t.contracts = v,
            Setting::TotalCapital(v) => t.total_capital = v,
            Setting::RiskTolerance(v) => t.risk_tolerance = v,
            Setting::AssetClass(v) => t.asset_class = v,
            Setting::Region(v) => t.region = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(Setting),
    Eval,
    Save,
    History { json: bool },
    Show,
    New,
    Help,
    Quit,
}

pub fn parse_command(text: &str) -> Option<Command> {
    let t = text.trim();

    match t.to_ascii_lowercase().as_str() {
        "eval" | "evaluate" => return Some(Command::Eval),
        "save" => return Some(Command::Save),
        "show" => return Some(Command::Show),
        "new" => return Some(Command::New),
        "help" | "?" => return Some(Command::Help),
        "quit" | "exit" | "q" => return Some(Command::Quit),
        _ => {}
    }

    if let Some(c) = RE_HISTORY.captures(t) {
        return Some(Command::History {
            json: c.get(1).is_some(),
        });
    }

    let c = RE_SET.captures(t)?;
    let value = &c[2];
    let setting = match &c[1].to_ascii_lowercase()[..] {
        "type" => Setting::OptionType(value.parse().ok()?),
        "symbol" => Setting::Symbol(sanitize_symbol(value)),
        "stock" | "spot" => Setting::StockPrice(value.parse().ok()?),
        "strike" => Setting::StrikePrice(value.parse().ok()?),
        "expiry" => Setting::Expiry(parse_expiry(value)?),
        "iv" | "vol" => Setting::Volatility(value.parse::<f64>().ok()? / 100.0),
        "rate" => Setting::InterestRate(value.parse::<f64>().ok()? / 100.0),
        "entry" => Setting::EntryPrice(value.parse().ok()?),
        "stop" => Setting::StopLossPrice(value.parse().ok()?),
        "target" | "tp" => Setting::TakeProfitPrice(value.parse().ok()?),
        "contracts" | "qty" => Setting::Contracts(value.parse().ok()?),
        "capital" => Setting::TotalCapital(value.parse().ok()?),
        "risk" => Setting::RiskTolerance(value.parse::<f64>().ok()? / 100.0),
        "class" => Setting::AssetClass(value.parse().ok()?),
        "region" => Setting::Region(value.parse().ok()?),
        _ => return None,
    };
    Some(Command::Set(setting))
}

fn parse_expiry(s: &str) -> Option<Expiry> {
    if let Some(c) = RE_DAYS.captures(s) {
        return Some(Expiry::DaysOut(c[1].parse().ok()?));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(Expiry::On)
}
