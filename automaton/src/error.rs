// error.rs - Errors raised by rule construction and grid validation

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("invalid rule table: {reason}")]
    InvalidRuleTable { reason: String },

    #[error("invalid grid size {size}: size must be a positive integer")]
    InvalidSize { size: usize },

    #[error("invalid cell state {value}: expected 0 or 1")]
    InvalidCellState { value: u8 },

    #[error("invalid border value {value}: expected 0 or 1")]
    InvalidBorderValue { value: u8 },
}

pub type Result<T> = std::result::Result<T, AutomatonError>;
