//! The board reducer.
//!
//! `Screen` owns every piece of interaction state (cache, filter, form,
//! delete gate, notifier, cursor, overlay) and is the only thing that
//! mutates it. The event loop feeds it [`Action`]s and executes the
//! [`Directive`]s it returns; call outcomes come back through the
//! `finish_*` methods with errors already flattened to display strings.

use std::time::Instant;

use orderdesk_types::{Order, OrderBatch, OrderDraft, OrderId};

use crate::confirm::DeleteConfirmation;
use crate::filter::OrderFilter;
use crate::form::{FormMode, OrderForm};
use crate::notify::Notifier;
use crate::store::OrderStore;

/// Which modal surface sits above the board. Never more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Form,
    Confirm,
}

/// The API call currently in flight. At most one exists; actions that
/// would start another call are ignored until it settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingCall {
    Fetch,
    Save(FormMode),
    Delete(OrderId),
}

/// What the user asks the screen to do. Key mapping lives in the
/// renderer; these are already contextual intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectNext,
    SelectPrev,
    OpenCreate,
    OpenEdit,
    RequestDelete,
    Submit,
    ConfirmDelete,
    CloseOverlay,
    Refresh,
    CycleStatusFilter,
    CycleVendorFilter,
    ClearFilters,
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    CycleStatusChoice,
    Quit,
}

/// Side effect the event loop must run after a reduction. The screen
/// itself never touches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    None,
    /// Fetch the full list.
    Fetch,
    /// Create (Create mode) or update (Edit mode) from the draft.
    Save(FormMode, OrderDraft),
    /// Delete the order.
    Delete(OrderId),
    /// Tear down and leave.
    Quit,
}

/// Selection cursor over the filtered rows. `pos` stays inside `len`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cursor {
    pos: usize,
    len: usize,
}

impl Cursor {
    pub fn selected(&self) -> Option<usize> {
        if self.len == 0 { None } else { Some(self.pos) }
    }

    pub fn move_down(&mut self) {
        if self.len > 0 && self.pos + 1 < self.len {
            self.pos += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
        }
    }

    pub fn update_len(&mut self, len: usize) {
        self.len = len;
        if self.pos >= len {
            self.pos = len.saturating_sub(1);
        }
    }
}

/// The whole board state, explicitly owned in one place.
#[derive(Debug, Default)]
pub struct Screen {
    store: OrderStore,
    filter: OrderFilter,
    form: OrderForm,
    confirm: DeleteConfirmation,
    notifier: Notifier,
    overlay: Overlay,
    cursor: Cursor,
    pending: Option<PendingCall>,
    fetch_answered: bool,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    pub fn filter(&self) -> &OrderFilter {
        &self.filter
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn confirm(&self) -> &DeleteConfirmation {
        &self.confirm
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn pending(&self) -> Option<&PendingCall> {
        self.pending.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// The filtered rows, in snapshot order.
    pub fn visible(&self) -> Vec<&Order> {
        self.store.filtered(&self.filter).collect()
    }

    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor.selected()
    }

    pub fn selected(&self) -> Option<&Order> {
        let idx = self.cursor.selected()?;
        self.visible().get(idx).copied()
    }

    /// Drives time-based state (notice expiry). Called on every tick.
    pub fn tick(&mut self, now: Instant) {
        self.notifier.tick(now);
    }

    pub fn apply(&mut self, action: Action, now: Instant) -> Directive {
        match action {
            Action::Quit => Directive::Quit,

            Action::SelectNext => {
                if self.overlay == Overlay::None {
                    self.cursor.move_down();
                }
                Directive::None
            }
            Action::SelectPrev => {
                if self.overlay == Overlay::None {
                    self.cursor.move_up();
                }
                Directive::None
            }

            Action::OpenCreate => {
                if self.overlay == Overlay::None {
                    self.form.open_for_create();
                    self.overlay = Overlay::Form;
                }
                Directive::None
            }
            Action::OpenEdit => {
                if self.overlay == Overlay::None {
                    let selected = self.selected().cloned();
                    if let Some(order) = selected {
                        self.form.open_for_edit(&order);
                        self.overlay = Overlay::Form;
                    }
                }
                Directive::None
            }
            Action::RequestDelete => {
                if self.overlay == Overlay::None {
                    let target = self.selected().map(|order| order.id.clone());
                    if let Some(id) = target {
                        self.confirm.request(id);
                        self.overlay = Overlay::Confirm;
                    }
                }
                Directive::None
            }

            Action::Submit => {
                if self.overlay != Overlay::Form || self.is_busy() {
                    return Directive::None;
                }
                match self.form.submit() {
                    Ok((mode, draft)) => {
                        self.pending = Some(PendingCall::Save(mode.clone()));
                        Directive::Save(mode, draft)
                    }
                    Err(err) => {
                        self.notifier.error(err.to_string(), now);
                        Directive::None
                    }
                }
            }
            Action::ConfirmDelete => {
                if self.overlay != Overlay::Confirm || self.is_busy() {
                    return Directive::None;
                }
                match self.confirm.confirm() {
                    Some(id) => {
                        self.pending = Some(PendingCall::Delete(id.clone()));
                        Directive::Delete(id)
                    }
                    None => {
                        // Unarmed confirm just closes the prompt.
                        self.overlay = Overlay::None;
                        Directive::None
                    }
                }
            }
            Action::CloseOverlay => {
                if !self.overlay_locked() {
                    self.close_overlay();
                }
                Directive::None
            }

            Action::Refresh => {
                if self.overlay != Overlay::None || self.is_busy() {
                    return Directive::None;
                }
                self.pending = Some(PendingCall::Fetch);
                Directive::Fetch
            }

            Action::CycleStatusFilter => {
                if self.overlay == Overlay::None {
                    let values = self.store.status_values();
                    self.filter.cycle_status(&values);
                    self.sync_cursor();
                }
                Directive::None
            }
            Action::CycleVendorFilter => {
                if self.overlay == Overlay::None {
                    let values = self.store.vendor_values();
                    self.filter.cycle_vendor(&values);
                    self.sync_cursor();
                }
                Directive::None
            }
            Action::ClearFilters => {
                if self.overlay == Overlay::None {
                    self.filter.clear();
                    self.sync_cursor();
                }
                Directive::None
            }

            Action::Input(ch) => {
                if self.overlay == Overlay::Form {
                    self.form.push_char(ch);
                }
                Directive::None
            }
            Action::Backspace => {
                if self.overlay == Overlay::Form {
                    self.form.backspace();
                }
                Directive::None
            }
            Action::FocusNext => {
                if self.overlay == Overlay::Form {
                    self.form.focus_next();
                }
                Directive::None
            }
            Action::FocusPrev => {
                if self.overlay == Overlay::Form {
                    self.form.focus_prev();
                }
                Directive::None
            }
            Action::CycleStatusChoice => {
                if self.overlay == Overlay::Form {
                    self.form.cycle_status();
                }
                Directive::None
            }
        }
    }

    /// Applies a list-fetch outcome. Success replaces the cache wholesale;
    /// failure leaves it untouched, stale but consistent with the last
    /// successful fetch.
    pub fn finish_fetch(&mut self, outcome: Result<OrderBatch, String>, now: Instant) {
        if matches!(self.pending, Some(PendingCall::Fetch)) {
            self.pending = None;
        }
        self.fetch_answered = true;
        match outcome {
            Ok(batch) => {
                let rejected = batch.rejected;
                self.store.replace(batch.orders);
                self.sync_cursor();
                if rejected > 0 {
                    self.notifier.error(
                        format!("{} record(s) could not be read and were skipped", rejected),
                        now,
                    );
                }
            }
            Err(message) => self.notifier.error(message, now),
        }
    }

    /// Applies a create/update outcome. Success notifies, resets the form
    /// to Create, closes it, and asks for the one full re-fetch; failure
    /// notifies and leaves the form open and populated for retry.
    pub fn finish_save(&mut self, outcome: Result<(), String>, now: Instant) -> Directive {
        let mode = match self.pending.take() {
            Some(PendingCall::Save(mode)) => mode,
            other => {
                self.pending = other;
                return Directive::None;
            }
        };
        match outcome {
            Ok(()) => {
                let message = match mode {
                    FormMode::Create => "Order created",
                    FormMode::Edit(_) => "Order updated",
                };
                self.notifier.success(message, now);
                self.form.open_for_create();
                self.overlay = Overlay::None;
                self.pending = Some(PendingCall::Fetch);
                Directive::Fetch
            }
            Err(message) => {
                self.notifier.error(message, now);
                Directive::None
            }
        }
    }

    /// Applies a delete outcome. Either outcome closes the prompt; only
    /// success triggers the re-fetch that makes the removal visible.
    pub fn finish_delete(&mut self, outcome: Result<(), String>, now: Instant) -> Directive {
        match self.pending.take() {
            Some(PendingCall::Delete(_)) => {}
            other => {
                self.pending = other;
                return Directive::None;
            }
        }
        if self.overlay == Overlay::Confirm {
            self.overlay = Overlay::None;
        }
        match outcome {
            Ok(()) => {
                self.notifier.success("Order deleted", now);
                self.pending = Some(PendingCall::Fetch);
                Directive::Fetch
            }
            Err(message) => {
                self.notifier.error(message, now);
                Directive::None
            }
        }
    }

    /// Applies the advisory liveness result. A failure is worth a notice
    /// only while no fetch has answered yet; after that the fetch outcome
    /// already speaks for the connection.
    pub fn finish_health(&mut self, ok: bool, now: Instant) {
        if !ok && !self.fetch_answered {
            self.notifier.error("server is not responding (health check)", now);
        }
    }

    fn close_overlay(&mut self) {
        match self.overlay {
            Overlay::Form => self.form.open_for_create(),
            Overlay::Confirm => self.confirm.cancel(),
            Overlay::None => {}
        }
        self.overlay = Overlay::None;
    }

    /// An overlay whose call is in flight stays put until the outcome.
    fn overlay_locked(&self) -> bool {
        matches!(
            (&self.pending, self.overlay),
            (Some(PendingCall::Save(_)), Overlay::Form)
                | (Some(PendingCall::Delete(_)), Overlay::Confirm)
        )
    }

    fn sync_cursor(&mut self) {
        let len = self.store.filtered(&self.filter).count();
        self.cursor.update_len(len);
    }
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

    fn batch(orders: Vec<Order>) -> OrderBatch {
        OrderBatch {
            orders,
            rejected: 0,
        }
    }

    fn type_text(screen: &mut Screen, text: &str, now: Instant) {
        for ch in text.chars() {
            screen.apply(Action::Input(ch), now);
        }
    }

    fn fill_create_form(screen: &mut Screen, now: Instant) {
        screen.apply(Action::OpenCreate, now);
        type_text(screen, "Ana", now);
        screen.apply(Action::FocusNext, now);
        type_text(screen, "100.00", now);
        screen.apply(Action::FocusNext, now);
        type_text(screen, "07/03/2024", now);
        screen.apply(Action::FocusNext, now);
        type_text(screen, "Acme", now);
        screen.apply(Action::FocusNext, now);
        type_text(screen, "Bruno", now);
        screen.apply(Action::FocusNext, now);
        screen.apply(Action::CycleStatusChoice, now);
    }

    fn seeded(orders: Vec<Order>, now: Instant) -> Screen {
        let mut screen = Screen::new();
        assert_eq!(screen.apply(Action::Refresh, now), Directive::Fetch);
        screen.finish_fetch(Ok(batch(orders)), now);
        screen
    }

    #[test]
    fn refresh_fetches_and_populates_the_store() {
        let now = Instant::now();
        let mut screen = Screen::new();

        assert_eq!(screen.apply(Action::Refresh, now), Directive::Fetch);
        assert!(screen.is_busy());
        // A second refresh while one is in flight is ignored.
        assert_eq!(screen.apply(Action::Refresh, now), Directive::None);

        screen.finish_fetch(Ok(batch(vec![order("a", None, None)])), now);
        assert!(!screen.is_busy());
        assert_eq!(screen.store().len(), 1);
    }

    #[test]
    fn failed_fetch_keeps_the_previous_snapshot() {
        let now = Instant::now();
        let mut screen = seeded(vec![order("a", None, None)], now);

        screen.apply(Action::Refresh, now);
        screen.finish_fetch(Err("could not reach the server".to_string()), now);

        assert_eq!(screen.store().len(), 1);
        let notice = screen.notifier().current().unwrap();
        assert_eq!(notice.message, "could not reach the server");
    }

    #[test]
    fn rejected_records_are_surfaced_once() {
        let now = Instant::now();
        let mut screen = Screen::new();
        screen.apply(Action::Refresh, now);
        screen.finish_fetch(
            Ok(OrderBatch {
                orders: vec![order("a", None, None)],
                rejected: 2,
            }),
            now,
        );

        assert_eq!(screen.store().len(), 1);
        let notice = screen.notifier().current().unwrap();
        assert!(notice.message.contains("2 record(s)"));
    }

    #[test]
    fn validation_failure_notifies_and_emits_no_directive() {
        let now = Instant::now();
        let mut screen = Screen::new();
        screen.apply(Action::OpenCreate, now);

        assert_eq!(screen.apply(Action::Submit, now), Directive::None);
        assert!(!screen.is_busy());
        assert_eq!(screen.overlay(), Overlay::Form);
        let notice = screen.notifier().current().unwrap();
        assert_eq!(notice.message, "client is required");
    }

    #[test]
    fn successful_save_closes_form_and_refetches_exactly_once() {
        let now = Instant::now();
        let mut screen = Screen::new();
        fill_create_form(&mut screen, now);

        let directive = screen.apply(Action::Submit, now);
        let Directive::Save(mode, draft) = directive else {
            panic!("expected a save directive, got {:?}", directive);
        };
        assert_eq!(mode, FormMode::Create);
        assert_eq!(draft.date.canonical(), "2024-03-07");

        assert_eq!(screen.finish_save(Ok(()), now), Directive::Fetch);
        assert_eq!(screen.overlay(), Overlay::None);
        assert_eq!(
            screen.notifier().current().unwrap().message,
            "Order created"
        );

        screen.finish_fetch(Ok(batch(vec![order("a", None, None)])), now);
        assert!(!screen.is_busy());
    }

    #[test]
    fn failed_save_keeps_the_form_open_and_populated() {
        let now = Instant::now();
        let mut screen = Screen::new();
        fill_create_form(&mut screen, now);
        screen.apply(Action::Submit, now);

        let directive = screen.finish_save(Err("empresa already closed".to_string()), now);
        assert_eq!(directive, Directive::None);
        assert_eq!(screen.overlay(), Overlay::Form);
        assert_eq!(screen.form().value(crate::FormField::Client), "Ana");
        assert_eq!(
            screen.notifier().current().unwrap().message,
            "empresa already closed"
        );
    }

    #[test]
    fn duplicate_submit_is_ignored_while_in_flight() {
        let now = Instant::now();
        let mut screen = Screen::new();
        fill_create_form(&mut screen, now);

        assert!(matches!(
            screen.apply(Action::Submit, now),
            Directive::Save(..)
        ));
        assert_eq!(screen.apply(Action::Submit, now), Directive::None);
        assert!(matches!(screen.pending(), Some(PendingCall::Save(_))));
    }

    #[test]
    fn edit_populates_the_form_from_the_selected_order() {
        let now = Instant::now();
        let mut screen = seeded(
            vec![order("a", Some("pending"), None), order("b", None, None)],
            now,
        );

        screen.apply(Action::SelectNext, now);
        screen.apply(Action::OpenEdit, now);

        assert_eq!(screen.overlay(), Overlay::Form);
        assert!(screen.form().is_edit());
        assert_eq!(screen.form().value(crate::FormField::Client), "client b");

        let directive = screen.apply(Action::Submit, now);
        let Directive::Save(FormMode::Edit(id), _) = directive else {
            panic!("expected an edit save, got {:?}", directive);
        };
        assert_eq!(id, OrderId::new("b"));
    }

    #[test]
    fn closing_the_form_discards_edits_and_resets_to_create() {
        let now = Instant::now();
        let mut screen = seeded(vec![order("a", None, None)], now);
        screen.apply(Action::OpenEdit, now);
        assert!(screen.form().is_edit());

        screen.apply(Action::CloseOverlay, now);
        assert_eq!(screen.overlay(), Overlay::None);
        assert!(!screen.form().is_edit());
        assert_eq!(screen.form().value(crate::FormField::Client), "");
    }

    #[test]
    fn delete_flow_removes_the_target_after_the_refresh() {
        let now = Instant::now();
        let mut screen = seeded(vec![order("a", None, None), order("b", None, None)], now);

        screen.apply(Action::RequestDelete, now);
        assert_eq!(screen.overlay(), Overlay::Confirm);
        assert_eq!(screen.confirm().target(), Some(&OrderId::new("a")));

        assert_eq!(
            screen.apply(Action::ConfirmDelete, now),
            Directive::Delete(OrderId::new("a"))
        );
        assert_eq!(screen.finish_delete(Ok(()), now), Directive::Fetch);
        assert_eq!(screen.overlay(), Overlay::None);
        assert_eq!(screen.notifier().current().unwrap().message, "Order deleted");

        screen.finish_fetch(Ok(batch(vec![order("b", None, None)])), now);
        assert_eq!(screen.store().len(), 1);
        assert!(screen.store().get(&OrderId::new("a")).is_none());
    }

    #[test]
    fn failed_delete_leaves_the_cache_unchanged() {
        let now = Instant::now();
        let mut screen = seeded(vec![order("a", None, None), order("b", None, None)], now);

        screen.apply(Action::RequestDelete, now);
        screen.apply(Action::ConfirmDelete, now);
        let directive = screen.finish_delete(Err("order is locked".to_string()), now);

        assert_eq!(directive, Directive::None);
        assert_eq!(screen.overlay(), Overlay::None);
        assert_eq!(screen.store().len(), 2);
        assert_eq!(
            screen.notifier().current().unwrap().message,
            "order is locked"
        );
    }

    #[test]
    fn cancelling_the_prompt_never_dispatches() {
        let now = Instant::now();
        let mut screen = seeded(vec![order("a", None, None)], now);

        screen.apply(Action::RequestDelete, now);
        screen.apply(Action::CloseOverlay, now);

        assert_eq!(screen.overlay(), Overlay::None);
        assert!(!screen.confirm().is_armed());
        assert!(!screen.is_busy());
        assert_eq!(screen.store().len(), 1);
    }

    #[test]
    fn status_filter_cycle_narrows_the_view_and_clamps_the_cursor() {
        let now = Instant::now();
        let mut screen = seeded(
            vec![
                order("a", Some("pending"), None),
                order("b", Some("confirmed"), None),
                order("c", Some("pending"), None),
            ],
            now,
        );
        screen.apply(Action::SelectNext, now);
        screen.apply(Action::SelectNext, now);
        assert_eq!(screen.selected().unwrap().id, OrderId::new("c"));

        screen.apply(Action::CycleStatusFilter, now);
        assert_eq!(screen.filter().status.as_deref(), Some("pending"));
        let ids: Vec<&str> = screen.visible().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(screen.cursor_index(), Some(1));

        screen.apply(Action::ClearFilters, now);
        assert_eq!(screen.visible().len(), 3);
    }

    #[test]
    fn health_failure_notifies_only_before_the_first_fetch_outcome() {
        let now = Instant::now();

        let mut early = Screen::new();
        early.finish_health(false, now);
        assert!(
            early
                .notifier()
                .current()
                .unwrap()
                .message
                .contains("health")
        );

        let mut late = Screen::new();
        late.apply(Action::Refresh, now);
        late.finish_fetch(Err("could not reach the server".to_string()), now);
        late.finish_health(false, now);
        assert_eq!(
            late.notifier().current().unwrap().message,
            "could not reach the server"
        );
    }

    #[test]
    fn overlay_stays_locked_while_its_call_is_in_flight() {
        let now = Instant::now();
        let mut screen = Screen::new();
        fill_create_form(&mut screen, now);
        screen.apply(Action::Submit, now);

        screen.apply(Action::CloseOverlay, now);
        assert_eq!(screen.overlay(), Overlay::Form);

        screen.finish_save(Ok(()), now);
        assert_eq!(screen.overlay(), Overlay::None);
    }

    #[test]
    fn selection_stays_inside_the_visible_rows() {
        let now = Instant::now();
        let mut screen = seeded(vec![order("a", None, None), order("b", None, None)], now);

        screen.apply(Action::SelectPrev, now);
        assert_eq!(screen.cursor_index(), Some(0));
        screen.apply(Action::SelectNext, now);
        screen.apply(Action::SelectNext, now);
        screen.apply(Action::SelectNext, now);
        assert_eq!(screen.cursor_index(), Some(1));

        screen.apply(Action::Refresh, now);
        screen.finish_fetch(Ok(batch(vec![])), now);
        assert_eq!(screen.cursor_index(), None);
        assert!(screen.selected().is_none());
    }
}
