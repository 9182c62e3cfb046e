//! Session-scoped state. Each session owns its inputs and its own ledger; ending
//! a session drops both.

use chrono::{DateTime, Local, NaiveDate};
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

use crate::error::DomainResult;
use crate::ledger::{TradeLedger, TradeSnapshot};
use crate::report::{self, RiskReport};
use crate::types::TradeInputs;

pub type SessionId = Uuid;

#[derive(Debug)]
pub struct Session {
    pub id: SessionId,
    pub started_at: DateTime<Local>,
    pub inputs: TradeInputs,
    pub ledger: TradeLedger,
}

impl Session {
    fn new(inputs: TradeInputs) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Local::now(),
            inputs,
            ledger: TradeLedger::new(),
        }
    }

    /// Moves the evaluation date forward to `today`; never backwards.
    pub fn advance_to(&mut self, today: NaiveDate) {
        if today > self.inputs.as_of {
            self.inputs.as_of = today;
        }
    }

    pub fn evaluate(&self) -> DomainResult<RiskReport> {
        report::evaluate(&self.inputs)
    }

    /// Evaluates the current inputs and records the result. Nothing is stored
    /// if the evaluation fails.
    pub fn save_trade(&mut self) -> DomainResult<(Uuid, RiskReport)> {
        let r = self.evaluate()?;
        let id = self.ledger.append(TradeSnapshot {
            asset: self.inputs.symbol.clone(),
            option_type: self.inputs.option_type,
            strike_price: self.inputs.strike_price,
            entry_price: self.inputs.entry_price,
            position_size: r.position_size_dollars,
            risk_reward_ratio: r.risk_reward_ratio,
        });
        Ok((id, r))
    }
}

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, inputs: TradeInputs) -> SessionId {
        let s = Session::new(inputs);
        let id = s.id;
        info!(session = %id, "session started");
        self.sessions.insert(id, s);
        id
    }

    /// Removes the session; its ledger goes with it.
    pub fn end(&mut self, id: SessionId) -> Option<Session> {
        let s = self.sessions.remove(&id)?;
        let secs = (Local::now() - s.started_at).num_seconds();
        if s.ledger.is_empty() {
            info!(session = %id, secs, "session ended");
        } else {
            info!(session = %id, secs, trades = s.ledger.len(), "session ended, history discarded");
        }
        Some(s)
    }

    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.sessions.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}
