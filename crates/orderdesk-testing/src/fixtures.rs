//! Wire-shaped record builders and draft fixtures.

use serde_json::{Value, json};

use orderdesk_types::{Amount, OrderDate, OrderDraft, OrderStatus};

/// A minimal wire record the way the API returns one.
pub fn record(id: &str, cliente: &str, valor: f64, data: &str, empresa: &str) -> Value {
    json!({
        "_id": id,
        "cliente": cliente,
        "valor": valor,
        "data": data,
        "empresa": empresa,
    })
}

/// A wire record carrying the extended fields too.
pub fn record_with_extras(
    id: &str,
    cliente: &str,
    valor: f64,
    data: &str,
    empresa: &str,
    vendedor: &str,
    status: &str,
) -> Value {
    json!({
        "_id": id,
        "cliente": cliente,
        "valor": valor,
        "data": data,
        "empresa": empresa,
        "vendedor": vendedor,
        "status": status,
    })
}

/// A valid draft ready to submit.
pub fn draft(client: &str, amount: &str, date: &str, company: &str) -> OrderDraft {
    OrderDraft {
        client: client.to_string(),
        amount: Amount::parse(amount).expect("fixture amount"),
        date: OrderDate::parse(date).expect("fixture date"),
        company: company.to_string(),
        salesperson: "Vera Lima".to_string(),
        status: OrderStatus::Pending,
    }
}
