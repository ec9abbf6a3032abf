//! Pure interaction state for the order board.
//!
//! Everything here is synchronous and I/O-free. The [`Screen`] consumes
//! [`Action`]s and answers with [`Directive`]s naming the side effect the
//! event loop should run; call outcomes come back through the `finish_*`
//! methods. That keeps every rule about caching, validation, confirmation
//! and notification testable without a terminal or a server.

pub mod confirm;
pub mod error;
pub mod filter;
pub mod form;
pub mod notify;
pub mod screen;
pub mod store;

pub use confirm::DeleteConfirmation;
pub use error::{Error, Result};
pub use filter::OrderFilter;
pub use form::{FormField, FormMode, OrderForm, STATUS_CHOICES};
pub use notify::{NOTICE_FADE, NOTICE_TTL, Notice, NoticeKind, Notifier};
pub use screen::{Action, Cursor, Directive, Overlay, PendingCall, Screen};
pub use store::OrderStore;
