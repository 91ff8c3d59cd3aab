//! Error types for the order board.

use thiserror::Error;

use crate::core::models::OrderId;

/// Errors raised by the card store and start-up configuration.
///
/// Event handlers never surface these to the user; they are logged and the
/// interaction is dropped.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardError {
    /// No order with this id exists in the card store.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// A column marker or config value named a column that does not exist.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// The inline board configuration could not be used.
    #[error("Invalid board config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        BoardError::InvalidConfig(err.to_string())
    }
}
