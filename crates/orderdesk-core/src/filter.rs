use orderdesk_types::Order;

/// Optional status/vendor equality predicates over the cache.
///
/// An absent predicate matches everything. Comparisons are exact and
/// case-sensitive against the stored value, so filtering by "pending"
/// never picks up a record whose server-sent status is "Pending".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: Option<String>,
    pub vendor: Option<String>,
}

impl OrderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    pub fn clear(&mut self) {
        self.status = None;
        self.vendor = None;
    }

    pub fn matches(&self, order: &Order) -> bool {
        let status_ok = match &self.status {
            Some(want) => order
                .status
                .as_ref()
                .is_some_and(|status| status.as_str() == want),
            None => true,
        };
        let vendor_ok = match &self.vendor {
            Some(want) => order.salesperson.as_deref() == Some(want.as_str()),
            None => true,
        };
        status_ok && vendor_ok
    }

    /// Advances the status predicate through the given values:
    /// match-all, then each value in turn, then match-all again.
    pub fn cycle_status(&mut self, values: &[String]) {
        cycle(&mut self.status, values);
    }

    /// Same stepping for the vendor predicate.
    pub fn cycle_vendor(&mut self, values: &[String]) {
        cycle(&mut self.vendor, values);
    }
}

fn cycle(slot: &mut Option<String>, values: &[String]) {
    let next = match slot.as_ref() {
        None => values.first().cloned(),
        Some(current) => values
            .iter()
            .position(|value| value == current)
            .and_then(|idx| values.get(idx + 1))
            .cloned(),
    };
    *slot = next;
}
