//! # Presentation Layer
//!
//! User interface logic for the CLI, split along an MVVM-style pipeline:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] ==(JSON)==> [ serde_json ] --> Output
//!                                                ==(Text)==> [ View ] --> Output
//!                                                ==(TUI)===> [ views::tui ] --> Frame
//! ```
//!
//! Rules of the split:
//!
//! 1. **ViewModels carry raw data, not formatted strings.** `--format json`
//!    dumps the complete ViewModel, so its fields are the machine contract.
//! 2. **Presenters are pure.** They convert core state into ViewModels and
//!    own every derived decision (empty flag, selection clamping, badge
//!    keys). No formatting, no I/O.
//! 3. **Views own layout and styling.** Console views implement
//!    `fmt::Display`; TUI components draw a ViewModel into a `Frame`. Only
//!    views call `formatters`.
//! 4. **Formatters are reusable string helpers** (`brl(..)`, `truncate(..)`)
//!    with no knowledge of view models.

pub mod formatters;
pub mod presenters;
pub mod view_models;
pub mod views;

pub use view_models::{
    BoardViewModel, ConfirmViewModel, FormFieldViewModel, FormViewModel, NoticeViewModel,
    OrderListViewModel, OrderRowViewModel, OverlayViewModel,
};
