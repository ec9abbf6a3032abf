use std::fmt;

/// Result type for orderdesk-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Validation failures raised before anything touches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required form field is empty
    MissingField(&'static str),
    /// The amount field does not parse as a non-negative decimal
    InvalidAmount(String),
    /// The date field matches neither accepted form
    InvalidDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingField(label) => write!(f, "{} is required", label),
            Error::InvalidAmount(raw) => {
                write!(f, "{:?} is not a valid non-negative amount", raw)
            }
            Error::InvalidDate(raw) => {
                write!(f, "{:?} is not a valid date (use DD/MM/YYYY)", raw)
            }
        }
    }
}

impl std::error::Error for Error {}
