//! Wire-format boundary for the order API.
//!
//! The API speaks Portuguese field names and is loose about shapes: the
//! identifier is spelled `_id` or `id`, `valor` arrives as a number or a
//! numeric string, and `data` arrives in canonical or display form.
//! Everything is normalized here, once, so the rest of the workspace only
//! ever sees well-formed [`Order`] values. A record that cannot yield the
//! required fields is rejected and counted, never half-parsed.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::order::{Amount, Order, OrderDate, OrderDraft, OrderId, OrderStatus};

/// Result of normalizing one fetched list payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBatch {
    /// Orders that parsed, in server response order (never re-sorted).
    pub orders: Vec<Order>,
    /// Count of records rejected at the boundary.
    pub rejected: usize,
}

/// Normalizes a fetched array of raw records.
pub fn parse_orders(records: &[Value]) -> OrderBatch {
    let mut batch = OrderBatch {
        orders: Vec::with_capacity(records.len()),
        rejected: 0,
    };
    for record in records {
        match parse_order(record) {
            Ok(order) => batch.orders.push(order),
            Err(_) => batch.rejected += 1,
        }
    }
    batch
}

/// Normalizes one raw record into an [`Order`].
///
/// Required: an identifier, `cliente`, `valor`, `data`, `empresa`. Missing
/// or empty `vendedor`/`status` degrade to `None`.
pub fn parse_order(record: &Value) -> Result<Order> {
    let obj = record
        .as_object()
        .ok_or_else(|| Error::MalformedRecord("not a JSON object".to_string()))?;

    let id = identifier(obj)
        .ok_or_else(|| Error::MalformedRecord("missing identifier".to_string()))?;
    let client = required_text(obj, "cliente")?;
    let amount = obj
        .get("valor")
        .and_then(parse_amount)
        .ok_or_else(|| Error::MalformedRecord("missing or invalid valor".to_string()))?;
    let date = obj
        .get("data")
        .and_then(Value::as_str)
        .and_then(|raw| OrderDate::parse(raw).ok())
        .ok_or_else(|| Error::MalformedRecord("missing or invalid data".to_string()))?;
    let company = required_text(obj, "empresa")?;

    Ok(Order {
        id: OrderId::new(id),
        client,
        amount,
        date,
        company,
        salesperson: optional_text(obj, "vendedor"),
        status: optional_text(obj, "status").map(OrderStatus::parse),
    })
}

fn identifier(obj: &Map<String, Value>) -> Option<String> {
    match obj.get("_id").or_else(|| obj.get("id"))? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_amount(value: &Value) -> Option<Amount> {
    match value {
        // Number's Display is the shortest round-tripping decimal form, so
        // going through it keeps 199.9 as 199.9 rather than a float tail.
        Value::Number(n) => Amount::parse(&n.to_string()).ok(),
        Value::String(s) => Amount::parse(s).ok(),
        _ => None,
    }
}

fn required_text(obj: &Map<String, Value>, key: &str) -> Result<String> {
    match obj.get(key).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(Error::MalformedRecord(format!("missing {}", key))),
    }
}

fn optional_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Outbound JSON body for create and update calls: Portuguese field names,
/// numeric `valor`, canonical `data`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderBody {
    pub cliente: String,
    pub valor: f64,
    pub data: String,
    pub empresa: String,
    pub vendedor: String,
    pub status: String,
}

impl From<&OrderDraft> for OrderBody {
    fn from(draft: &OrderDraft) -> Self {
        Self {
            cliente: draft.client.clone(),
            valor: draft.amount.to_f64(),
            data: draft.date.canonical(),
            empresa: draft.company.clone(),
            vendedor: draft.salesperson.clone(),
            status: draft.status.as_str().to_string(),
        }
    }
}
