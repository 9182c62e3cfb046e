//! Domain errors raised by the risk engine.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The trade setup makes a formula divide by zero (e.g. stop-loss at entry).
    #[error("Division by zero: {context}")]
    DivisionByZero { context: String },

    /// An input violates its allowed range.
    #[error("Invalid {field} = {value}: {reason}")]
    InvalidRange {
        field: &'static str,
        value: String,
        reason: String,
    },
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    pub fn invalid_range(
        field: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRange {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
