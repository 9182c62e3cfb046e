//! Risk/reward ratio and capital-constrained position sizing.

use crate::error::{DomainError, DomainResult};

/// Shares of underlying per standard option contract.
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

/// Reward (target - entry) over risk (entry - stop).
///
/// Returns 0 when there is no edge (zero entry or target at entry), checked
/// before the risk sign, and `f64::INFINITY` when the stop sits at or above
/// entry.
pub fn risk_reward(entry_price: f64, target_price: f64, stop_loss_price: f64) -> f64 {
    if entry_price == 0.0 || (target_price - entry_price) == 0.0 {
        return 0.0;
    }
    let risk = entry_price - stop_loss_price;
    let reward = target_price - entry_price;
    if risk > 0.0 {
        reward / risk
    } else {
        f64::INFINITY
    }
}

/// Dollars the account is willing to lose on one trade.
pub fn max_risk(total_capital: f64, risk_tolerance: f64) -> f64 {
    total_capital * risk_tolerance
}

/// Position size in dollars of underlying exposure: the smaller of what the
/// risk budget allows and what the held contracts represent.
pub fn position_size(
    total_capital: f64,
    risk_tolerance: f64,
    entry_price: f64,
    stop_loss_price: f64,
    contracts: u32,
) -> DomainResult<f64> {
    let per_unit_risk = entry_price - stop_loss_price;
    if per_unit_risk == 0.0 {
        return Err(DomainError::division_by_zero(format!(
            "entry price {entry_price} equals stop-loss price {stop_loss_price}"
        )));
    }
    let from_risk = max_risk(total_capital, risk_tolerance) / per_unit_risk;
    let from_holding = f64::from(contracts) * CONTRACT_MULTIPLIER * entry_price;
    Ok(from_risk.min(from_holding))
}

/// Converts a dollar position size into contracts at the entry premium.
pub fn position_contracts(position_size: f64, entry_price: f64) -> DomainResult<f64> {
    let per_contract = CONTRACT_MULTIPLIER * entry_price;
    if per_contract == 0.0 {
        return Err(DomainError::division_by_zero(
            "entry price is zero, contract value undefined",
        ));
    }
    Ok(position_size / per_contract)
}
