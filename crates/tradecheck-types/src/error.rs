//! Error types for the tradecheck engine.
//!
//! All errors use the `TC_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Salary parsing errors
//! - 2xx: Matching / absorption rule errors
//! - 9xx: Configuration / general errors
//!
//! Every error is a local validation failure: nothing is retried and no
//! input is ever silently defaulted to zero.

use rust_decimal::Decimal;
use thiserror::Error;

/// Central error enum for all tradecheck operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TradeCheckError {
    // =================================================================
    // Parsing Errors (1xx)
    // =================================================================
    /// Raw salary text matches neither the plain numeric nor the
    /// millions-shorthand pattern.
    #[error("TC_ERR_100: Malformed salary amount: {input:?}")]
    MalformedAmount { input: String },

    /// A monetary amount was negative.
    #[error("TC_ERR_101: Amount must not be negative: {0}")]
    NegativeAmount(Decimal),

    /// The amount cannot be represented (non-finite or too large).
    #[error("TC_ERR_102: Amount out of range: {input}")]
    AmountOutOfRange { input: String },

    // =================================================================
    // Rule Errors (2xx)
    // =================================================================
    /// Outgoing salary must be strictly positive before any band applies.
    #[error("TC_ERR_200: Invalid outgoing salary: {outgoing} (must be greater than zero)")]
    InvalidOutgoingSalary { outgoing: Decimal },

    /// A limit computation left the representable decimal range.
    #[error("TC_ERR_201: Arithmetic overflow during {operation}")]
    ArithmeticOverflow { operation: &'static str },

    /// Contract length must be strictly positive.
    #[error("TC_ERR_202: Invalid contract length: {seasons} seasons")]
    InvalidContractLength { seasons: Decimal },

    // =================================================================
    // Configuration / General (9xx)
    // =================================================================
    /// Season rule constants are internally inconsistent.
    #[error("TC_ERR_900: Invalid rule constants: {reason}")]
    InvalidRuleConstants { reason: String },

    /// Configuration error (unreadable file, bad TOML, etc.).
    #[error("TC_ERR_901: Configuration error: {0}")]
    Configuration(String),

    /// I/O error.
    #[error("TC_ERR_902: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, TradeCheckError>;

// Conversion from std::io::Error
impl From<std::io::Error> for TradeCheckError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
