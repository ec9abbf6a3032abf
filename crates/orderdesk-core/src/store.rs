use orderdesk_types::{Order, OrderId};

use crate::filter::OrderFilter;

/// The local order cache: the last successfully fetched snapshot.
///
/// Mutations never touch it in place. It is replaced wholesale on each
/// successful list fetch, so a create/update/delete only becomes visible
/// here after the following re-fetch succeeds.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the snapshot wholesale, keeping server response order.
    pub fn replace(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == id)
    }

    /// Borrowed view of the orders passing the filter, in snapshot order.
    pub fn filtered<'a>(&'a self, filter: &'a OrderFilter) -> impl Iterator<Item = &'a Order> {
        self.orders.iter().filter(move |order| filter.matches(order))
    }

    /// Distinct status values present, in first-seen order.
    pub fn status_values(&self) -> Vec<String> {
        distinct(
            self.orders
                .iter()
                .filter_map(|order| order.status.as_ref().map(|status| status.as_str())),
        )
    }

    /// Distinct salesperson values present, in first-seen order.
    pub fn vendor_values(&self) -> Vec<String> {
        distinct(
            self.orders
                .iter()
                .filter_map(|order| order.salesperson.as_deref()),
        )
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|known| known == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_types::{Amount, OrderDate, OrderStatus};

    fn order(id: &str, status: Option<&str>, vendor: Option<&str>) -> Order {
        Order {
            id: OrderId::new(id),
            client: format!("client {}", id),
            amount: Amount::parse("10.00").unwrap(),
            date: OrderDate::parse("2024-01-15").unwrap(),
            company: "Acme".to_string(),
            salesperson: vendor.map(str::to_string),
            status: status.map(OrderStatus::parse),
        }
    }

    #[test]
    fn replace_swaps_the_whole_snapshot() {
        let mut store = OrderStore::new();
        store.replace(vec![order("a", None, None), order("b", None, None)]);
        assert_eq!(store.len(), 2);

        store.replace(vec![order("c", None, None)]);
        assert_eq!(store.len(), 1);
        assert!(store.get(&OrderId::new("a")).is_none());
        assert!(store.get(&OrderId::new("c")).is_some());
    }

    #[test]
    fn filtered_respects_status_exactly() {
        let mut store = OrderStore::new();
        store.replace(vec![
            order("a", Some("pending"), None),
            order("b", Some("Pending"), None),
            order("c", Some("confirmed"), None),
            order("d", None, None),
        ]);

        let filter = OrderFilter::new().with_status("pending");
        let ids: Vec<&str> = store.filtered(&filter).map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn filtered_combines_status_and_vendor() {
        let mut store = OrderStore::new();
        store.replace(vec![
            order("a", Some("pending"), Some("Carlos")),
            order("b", Some("pending"), Some("Maria")),
            order("c", Some("cancelled"), Some("Carlos")),
        ]);

        let filter = OrderFilter::new()
            .with_status("pending")
            .with_vendor("Carlos");
        let ids: Vec<&str> = store.filtered(&filter).map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn match_all_filter_keeps_snapshot_order() {
        let mut store = OrderStore::new();
        store.replace(vec![
            order("z", None, None),
            order("a", None, None),
            order("m", None, None),
        ]);

        let filter = OrderFilter::new();
        let ids: Vec<&str> = store
            .filtered(&filter)
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn distinct_values_keep_first_seen_order() {
        let mut store = OrderStore::new();
        store.replace(vec![
            order("a", Some("confirmed"), Some("Maria")),
            order("b", Some("pending"), Some("Carlos")),
            order("c", Some("confirmed"), Some("Maria")),
            order("d", None, None),
        ]);

        assert_eq!(store.status_values(), vec!["confirmed", "pending"]);
        assert_eq!(store.vendor_values(), vec!["Maria", "Carlos"]);
    }
}
