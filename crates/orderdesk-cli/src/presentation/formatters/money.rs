use orderdesk_types::Amount;

/// Format an amount as Brazilian currency with exactly two decimals,
/// e.g. "R$ 1530.50".
pub fn brl(amount: Amount) -> String {
    format!("R$ {}", amount)
}
