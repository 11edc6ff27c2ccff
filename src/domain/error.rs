//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid arguments to the pure exercise types.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("quaternion coefficients cannot be NaN")]
    NanCoefficient,

    #[error("amount cannot be negative: {0}")]
    NegativeAmount(i64),

    #[error("invalid denominations: {0}")]
    InvalidDenominations(String),

    #[error("amount {amount} cannot be paid exactly, {remainder} left over")]
    UnrepresentableAmount { amount: i64, remainder: u64 },

    #[error("stack has reached maximum capacity of {capacity}")]
    StackFull { capacity: usize },

    #[error("invalid quaternion literal '{input}': {reason}")]
    InvalidQuaternion { input: String, reason: String },
}
