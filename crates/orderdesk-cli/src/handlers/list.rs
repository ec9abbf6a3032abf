use anyhow::Result;
use orderdesk_client::ApiClient;
use orderdesk_core::OrderFilter;
use orderdesk_types::Order;

use crate::presentation::presenters;
use crate::presentation::views::OrderListView;
use crate::types::OutputFormat;

pub async fn handle(
    client: &ApiClient,
    status: Option<String>,
    vendor: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let batch = client.list_orders().await?;

    let mut filter = OrderFilter::new();
    if let Some(status) = &status {
        filter = filter.with_status(status.clone());
    }
    if let Some(vendor) = &vendor {
        filter = filter.with_vendor(vendor.clone());
    }

    let orders: Vec<&Order> = batch.orders.iter().filter(|o| filter.matches(o)).collect();
    let view_model = presenters::present_order_list(
        &orders,
        batch.orders.len(),
        batch.rejected,
        client.base_url(),
        status,
        vendor,
    );

    if view_model.rejected > 0 {
        eprintln!(
            "Warning: {} record(s) could not be read and were skipped",
            view_model.rejected
        );
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view_model)?),
        OutputFormat::Plain => print!("{}", OrderListView::new(&view_model)),
    }

    Ok(())
}
