//! Option sensitivities.
//!
//! These are fixed placeholder formulas, not a pricing model: Delta and Gamma
//! do not react to moneyness, and Theta, Vega and Rho are linear in a single
//! input each. Callers must not read them as Black-Scholes values.

use serde::{Deserialize, Serialize};

use crate::types::OptionType;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}

impl Greeks {
    /// Display order: Delta, Gamma, Theta, Vega, Rho.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("Delta", self.delta),
            ("Gamma", self.gamma),
            ("Theta", self.theta),
            ("Vega", self.vega),
            ("Rho", self.rho),
        ]
    }
}

/// Total over all real inputs. Spot and strike are accepted but unused.
pub fn compute(
    option_type: OptionType,
    _stock_price: f64,
    _strike_price: f64,
    time_to_expiry_years: f64,
    volatility: f64,
    interest_rate: f64,
) -> Greeks {
    let delta = match option_type {
        OptionType::Call => 0.5,
        OptionType::Put => -0.5,
    };
    Greeks {
        delta,
        gamma: 0.1,
        theta: -0.01 * time_to_expiry_years,
        vega: 0.2 * volatility,
        rho: 0.05 * interest_rate,
    }
}
