use std::fmt;

use rust_decimal::Decimal;

/// Result type for orderdesk-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Amount is negative (amounts are non-negative by contract)
    NegativeAmount(Decimal),
    /// Input could not be parsed as a decimal amount
    InvalidAmount(String),
    /// Input matched neither the canonical nor the display date form
    InvalidDate(String),
    /// A fetched record is missing or mangling a required field
    MalformedRecord(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NegativeAmount(value) => write!(f, "amount cannot be negative: {}", value),
            Error::InvalidAmount(raw) => write!(f, "not a valid amount: {:?}", raw),
            Error::InvalidDate(raw) => {
                write!(
                    f,
                    "not a valid date: {:?} (expected YYYY-MM-DD or DD/MM/YYYY)",
                    raw
                )
            }
            Error::MalformedRecord(reason) => write!(f, "malformed order record: {}", reason),
        }
    }
}

impl std::error::Error for Error {}
