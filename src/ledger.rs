//! Append-only, in-memory trade history for one session.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

use crate::types::OptionType;

/// What the user confirmed; the ledger adds identity and time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeSnapshot {
    pub asset: String,
    pub option_type: OptionType,
    pub strike_price: f64,
    pub entry_price: f64,
    /// Dollars of underlying exposure.
    pub position_size: f64,
    #[serde(serialize_with = "crate::utils::serialize_ratio")]
    pub risk_reward_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeRecord {
    pub trade_id: Uuid,
    #[serde(flatten)]
    pub trade: TradeSnapshot,
    pub saved_at: DateTime<Local>,
}

#[derive(Debug, Default)]
pub struct TradeLedger {
    records: Vec<TradeRecord>,
    issued: HashSet<Uuid>,
}

impl TradeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the trade at the end of the log and returns its fresh id.
    pub fn append(&mut self, trade: TradeSnapshot) -> Uuid {
        let mut trade_id = Uuid::new_v4();
        while !self.issued.insert(trade_id) {
            trade_id = Uuid::new_v4();
        }
        debug!(%trade_id, asset = %trade.asset, "trade appended");
        self.records.push(TradeRecord {
            trade_id,
            trade,
            saved_at: Local::now(),
        });
        trade_id
    }

    /// Oldest first.
    pub fn list(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn get(&self, trade_id: Uuid) -> Option<&TradeRecord> {
        self.records.iter().find(|r| r.trade_id == trade_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
