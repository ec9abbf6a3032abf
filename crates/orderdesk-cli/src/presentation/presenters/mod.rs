//! Pure conversions from core state to ViewModels. No formatting, no I/O.

use std::time::Instant;

use orderdesk_core::{FormField, NoticeKind, Overlay, Screen};
use orderdesk_types::Order;

use super::view_models::{
    BoardViewModel, ConfirmViewModel, FormFieldViewModel, FormViewModel, NoticeViewModel,
    OrderListViewModel, OrderRowViewModel, OverlayViewModel,
};

pub fn present_order_row(order: &Order) -> OrderRowViewModel {
    OrderRowViewModel {
        id: order.id.as_str().to_string(),
        short_id: order.id.short().to_string(),
        client: order.client.clone(),
        amount: order.amount,
        date: order.date,
        company: order.company.clone(),
        salesperson: order.salesperson.clone(),
        status: order.status.as_ref().map(|s| s.as_str().to_string()),
        badge_key: order.status.as_ref().map(|s| s.badge_key()),
    }
}

pub fn present_order_list(
    orders: &[&Order],
    total: usize,
    rejected: usize,
    api_url: &str,
    status_filter: Option<String>,
    vendor_filter: Option<String>,
) -> OrderListViewModel {
    let rows: Vec<OrderRowViewModel> = orders.iter().map(|o| present_order_row(o)).collect();
    let empty = rows.is_empty();

    OrderListViewModel {
        api_url: api_url.to_string(),
        orders: rows,
        total,
        status_filter,
        vendor_filter,
        empty,
        rejected,
    }
}

/// Snapshot the whole screen for one frame. `now` drives the notice fade.
pub fn present_board(screen: &Screen, api_url: &str, now: Instant) -> BoardViewModel {
    let rows: Vec<OrderRowViewModel> = screen
        .visible()
        .into_iter()
        .map(present_order_row)
        .collect();
    let empty = rows.is_empty();

    let notice = screen.notifier().current().map(|notice| NoticeViewModel {
        message: notice.message.clone(),
        success: notice.kind == NoticeKind::Success,
        fading: notice.fading(now),
    });

    let overlay = match screen.overlay() {
        Overlay::None => OverlayViewModel::None,
        Overlay::Form => OverlayViewModel::Form(present_form(screen)),
        Overlay::Confirm => OverlayViewModel::Confirm(present_confirm(screen)),
    };

    BoardViewModel {
        api_url: api_url.to_string(),
        rows,
        selected: screen.cursor_index(),
        total: screen.store().len(),
        status_filter: screen.filter().status.clone(),
        vendor_filter: screen.filter().vendor.clone(),
        empty,
        busy: screen.is_busy(),
        notice,
        overlay,
    }
}

fn present_form(screen: &Screen) -> FormViewModel {
    let form = screen.form();
    let focus = form.focus();

    let fields = FormField::ALL
        .iter()
        .map(|&field| FormFieldViewModel {
            label: field.label().to_string(),
            value: form.value(field).to_string(),
            focused: field == focus,
            choice: field == FormField::Status,
        })
        .collect();

    FormViewModel {
        editing: form.is_edit(),
        target: match form.mode() {
            orderdesk_core::FormMode::Edit(id) => Some(id.short().to_string()),
            orderdesk_core::FormMode::Create => None,
        },
        fields,
    }
}

fn present_confirm(screen: &Screen) -> ConfirmViewModel {
    let target = screen.confirm().target();
    let order = target.and_then(|id| screen.store().get(id));

    ConfirmViewModel {
        target_id: target.map(|id| id.as_str().to_string()).unwrap_or_default(),
        short_id: target.map(|id| id.short().to_string()).unwrap_or_default(),
        client: order.map(|o| o.client.clone()),
        company: order.map(|o| o.company.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_types::{Amount, OrderDate, OrderId, OrderStatus};

    fn order(id: &str, client: &str, status: Option<&str>) -> Order {
        Order {
            id: OrderId::new(id),
            client: client.to_string(),
            amount: Amount::parse("150.00").unwrap(),
            date: OrderDate::parse("2024-03-01").unwrap(),
            company: "Acme".to_string(),
            salesperson: None,
            status: status.map(OrderStatus::parse),
        }
    }

    #[test]
    fn test_empty_list_sets_empty_flag() {
        let vm = present_order_list(&[], 0, 0, "http://api", None, None);
        assert!(vm.empty);
        assert!(vm.orders.is_empty());
    }

    #[test]
    fn test_nonempty_list_clears_empty_flag() {
        let a = order("ord-1", "Ana", Some("pending"));
        let vm = present_order_list(&[&a], 1, 0, "http://api", None, None);
        assert!(!vm.empty);
        assert_eq!(vm.orders.len(), 1);
    }

    #[test]
    fn test_row_preserves_status_verbatim_and_lowercases_badge_key() {
        let a = order("ord-1", "Ana", Some("EmRota"));
        let row = present_order_row(&a);
        assert_eq!(row.status.as_deref(), Some("EmRota"));
        assert_eq!(row.badge_key.as_deref(), Some("emrota"));
    }

    #[test]
    fn test_row_survives_missing_optionals() {
        let a = order("ord-1", "Ana", None);
        let row = present_order_row(&a);
        assert!(row.salesperson.is_none());
        assert!(row.status.is_none());
        assert!(row.badge_key.is_none());
    }

    #[test]
    fn test_board_projection_tracks_selection_and_busy() {
        use orderdesk_core::{Action, Screen};
        use orderdesk_types::wire::OrderBatch;
        use std::time::Instant;

        let mut screen = Screen::new();
        let now = Instant::now();
        screen.apply(Action::Refresh, now);
        screen.finish_fetch(
            Ok(OrderBatch {
                orders: vec![order("ord-1", "Ana", None), order("ord-2", "Rui", None)],
                rejected: 0,
            }),
            now,
        );

        let vm = present_board(&screen, "http://api", now);
        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.selected, Some(0));
        assert!(!vm.busy);
        assert!(!vm.empty);
        assert!(matches!(vm.overlay, OverlayViewModel::None));
    }
}
