use std::fmt;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Server-assigned order identifier. Opaque; the client never invents one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for narrow display columns.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order lifecycle status as reported by the API.
///
/// The member set is server-defined, so unknown values are preserved
/// verbatim: `as_str` returns exactly what the server sent, which keeps
/// status filtering an exact, case-sensitive match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match raw.as_str() {
            "pending" => OrderStatus::Pending,
            "confirmed" => OrderStatus::Confirmed,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(raw),
        }
    }

    /// The exact stored value (round-trips what the server sent).
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Other(raw) => raw,
        }
    }

    /// Lowercase key used to pick badge styling.
    pub fn badge_key(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        OrderStatus::parse(raw)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-negative monetary amount. Displays with exactly two decimal places;
/// crosses the wire as a JSON number, never a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(Error::NegativeAmount(value));
        }
        Ok(Self(value))
    }

    /// Parses user input. A comma is accepted as the decimal separator when
    /// no dot is present ("12,50" and "12.50" both parse to 12.50).
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(Error::InvalidAmount(input.to_string()));
        }
        let normalized = if raw.contains(',') && !raw.contains('.') {
            raw.replace(',', ".")
        } else {
            raw.to_string()
        };
        let value = normalized
            .parse::<Decimal>()
            .map_err(|_| Error::InvalidAmount(raw.to_string()))?;
        Self::new(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Wire representation. Amounts are well inside f64's exact range.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2}", rounded)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.to_f64())
    }
}

/// Calendar date of an order.
///
/// Canonical form `YYYY-MM-DD` is used for storage and transmission; the
/// display form is `DD/MM/YYYY`. Both parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderDate(NaiveDate);

impl OrderDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        let parsed = if raw.contains('/') {
            NaiveDate::parse_from_str(raw, "%d/%m/%Y")
        } else {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        };
        parsed
            .map(Self)
            .map_err(|_| Error::InvalidDate(raw.to_string()))
    }

    /// `YYYY-MM-DD`
    pub fn canonical(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// `DD/MM/YYYY`
    pub fn display(&self) -> String {
        self.0.format("%d/%m/%Y").to_string()
    }
}

impl fmt::Display for OrderDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// One customer order as confirmed by the API.
///
/// `salesperson` and `status` were added to the API later; older records
/// omit them and render blank rather than faulting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub client: String,
    pub amount: Amount,
    pub date: OrderDate,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salesperson: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

/// A validated form submission, ready to send.
///
/// Drafts carry no identifier: Create posts one as a new order, Edit puts
/// it under an existing id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub client: String,
    pub amount: Amount,
    pub date: OrderDate,
    pub company: String,
    pub salesperson: String,
    pub status: OrderStatus,
}
