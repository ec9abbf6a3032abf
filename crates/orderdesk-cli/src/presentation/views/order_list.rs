use std::fmt;

use crate::presentation::formatters::{brl, or_dash, truncate};
use crate::presentation::view_models::OrderListViewModel;

// --------------------------------------------------------
// Console order table
// --------------------------------------------------------

pub struct OrderListView<'a> {
    data: &'a OrderListViewModel,
}

impl<'a> OrderListView<'a> {
    pub fn new(data: &'a OrderListViewModel) -> Self {
        Self { data }
    }

    fn render_filter_line(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(status) = &self.data.status_filter {
            parts.push(format!("status={}", status));
        }
        if let Some(vendor) = &self.data.vendor_filter {
            parts.push(format!("vendor={}", vendor));
        }
        if !parts.is_empty() {
            writeln!(f, "Filter: {}", parts.join(" "))?;
        }
        Ok(())
    }

    fn render_table(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:<22} {:>12} {:<10} {:<22} {:<16} STATUS",
            "ID", "CLIENT", "AMOUNT", "DATE", "COMPANY", "VENDOR"
        )?;
        writeln!(f, "{}", "-".repeat(104))?;

        for row in &self.data.orders {
            writeln!(
                f,
                "{:<10} {:<22} {:>12} {:<10} {:<22} {:<16} {}",
                row.short_id,
                truncate(&row.client, 22),
                brl(row.amount),
                row.date.display(),
                truncate(&row.company, 22),
                truncate(&or_dash(row.salesperson.as_deref()), 16),
                or_dash(row.status.as_deref()),
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for OrderListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Orders from {} ({} of {})",
            self.data.api_url,
            self.data.orders.len(),
            self.data.total
        )?;
        self.render_filter_line(f)?;

        if self.data.empty {
            writeln!(f, "No orders found.")?;
            return Ok(());
        }

        self.render_table(f)
    }
}
