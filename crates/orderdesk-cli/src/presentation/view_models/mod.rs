//! ViewModels define the data contract between core state and rendering.
//!
//! They carry raw values only. Amounts and dates keep their typed forms
//! (both serialize to the wire shapes: number and `YYYY-MM-DD`); all derived
//! strings ("R$ ..", `DD/MM/YYYY`, badges) are produced by views at draw
//! time. `--format json` dumps these structs verbatim, so every field here
//! is part of the machine-readable output.

use orderdesk_types::{Amount, OrderDate};
use serde::Serialize;

/// One order, as shown in a table row or a card.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRowViewModel {
    pub id: String,
    /// First characters of the id, enough to act on in a narrow column.
    pub short_id: String,
    pub client: String,
    pub amount: Amount,
    pub date: OrderDate,
    pub company: String,
    pub salesperson: Option<String>,
    /// Server-provided status string, verbatim.
    pub status: Option<String>,
    /// Lowercased status used to pick a badge color.
    pub badge_key: Option<String>,
}

/// Output of `orderdesk list`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderListViewModel {
    pub api_url: String,
    pub orders: Vec<OrderRowViewModel>,
    /// Count before filtering.
    pub total: usize,
    pub status_filter: Option<String>,
    pub vendor_filter: Option<String>,
    /// True when the filtered sequence has no orders to draw.
    pub empty: bool,
    /// Records the last fetch rejected at the wire boundary.
    pub rejected: usize,
}

/// Complete screen state for one board frame. The TUI draws from this
/// struct alone; it never reaches back into core state.
#[derive(Debug, Clone, Serialize)]
pub struct BoardViewModel {
    pub api_url: String,
    pub rows: Vec<OrderRowViewModel>,
    /// Index into `rows`, already clamped by the presenter.
    pub selected: Option<usize>,
    pub total: usize,
    pub status_filter: Option<String>,
    pub vendor_filter: Option<String>,
    pub empty: bool,
    /// An API call is in flight; mutating inputs are ignored until it lands.
    pub busy: bool,
    pub notice: Option<NoticeViewModel>,
    pub overlay: OverlayViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct NoticeViewModel {
    pub message: String,
    pub success: bool,
    /// Inside the dismissal window; drawn dimmed.
    pub fading: bool,
}

#[derive(Debug, Clone, Serialize)]
pub enum OverlayViewModel {
    None,
    Form(FormViewModel),
    Confirm(ConfirmViewModel),
}

#[derive(Debug, Clone, Serialize)]
pub struct FormViewModel {
    /// True in Edit mode, false in Create mode.
    pub editing: bool,
    /// Short id of the order being edited.
    pub target: Option<String>,
    pub fields: Vec<FormFieldViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormFieldViewModel {
    pub label: String,
    pub value: String,
    pub focused: bool,
    /// Field cycles through fixed choices instead of taking typed input.
    pub choice: bool,
}

/// Confirmation prompt naming the order about to be deleted.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmViewModel {
    pub target_id: String,
    pub short_id: String,
    /// Client and company of the target when it is still in the store.
    pub client: Option<String>,
    pub company: Option<String>,
}
