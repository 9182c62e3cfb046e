//! One evaluation cycle: Greeks, risk/reward and sizing for a set of trade inputs.

use serde::Serialize;
use tracing::debug;

use crate::error::DomainResult;
use crate::greeks::{self, Greeks};
use crate::risk;
use crate::types::TradeInputs;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub greeks: Greeks,
    /// May be `f64::INFINITY` when the stop sits at or above entry.
    #[serde(serialize_with = "crate::utils::serialize_ratio")]
    pub risk_reward_ratio: f64,
    pub position_size_dollars: f64,
    pub position_size_contracts: f64,
    pub max_risk_dollars: f64,
    pub time_to_expiry_years: f64,
}

/// Validates the inputs, then runs every calculator. Domain errors are
/// returned untouched; nothing is defaulted.
pub fn evaluate(inputs: &TradeInputs) -> DomainResult<RiskReport> {
    inputs.validate()?;

    let time_to_expiry_years = inputs.time_to_expiry_years();
    let greeks = greeks::compute(
        inputs.option_type,
        inputs.stock_price,
        inputs.strike_price,
        time_to_expiry_years,
        inputs.volatility,
        inputs.interest_rate,
    );
    let risk_reward_ratio = risk::risk_reward(
        inputs.entry_price,
        inputs.take_profit_price,
        inputs.stop_loss_price,
    );
    let position_size_dollars = risk::position_size(
        inputs.total_capital,
        inputs.risk_tolerance,
        inputs.entry_price,
        inputs.stop_loss_price,
        inputs.contracts,
    )?;
    let position_size_contracts =
        risk::position_contracts(position_size_dollars, inputs.entry_price)?;
    let max_risk_dollars = risk::max_risk(inputs.total_capital, inputs.risk_tolerance);

    debug!(
        symbol = %inputs.symbol,
        rr = risk_reward_ratio,
        size = position_size_dollars,
        "evaluated trade"
    );

    Ok(RiskReport {
        greeks,
        risk_reward_ratio,
        position_size_dollars,
        position_size_contracts,
        max_risk_dollars,
        time_to_expiry_years,
    })
}
