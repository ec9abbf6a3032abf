// NOTE: orderdesk Architecture Rationale
//
// Why snapshot-and-refetch (not local cache mutation)?
// - The HTTP API is the only source of truth for order data
// - Every successful create/update/delete is followed by exactly one full
//   list re-fetch; the board shows nothing it has not read back
// - A failed call leaves the previous snapshot untouched, so the table is
//   stale at worst, never half-applied
// - Trade-off: one extra GET per mutation, acceptable at this data volume
//
// Why one API call in flight at a time?
// - The board is a single-user screen; concurrent mutations make the
//   refetch ordering ambiguous
// - While a call is pending, submit/confirm/refresh inputs are ignored and
//   the active overlay stays open until the outcome arrives
//
// Why a pure state core (orderdesk-core) under an I/O shell?
// - Key handling maps to Actions, the core answers with Directives naming
//   the side effect to run; the event loop is the only place that touches
//   the network or the terminal
// - Every interaction rule (validation, confirmation, refresh-after-save)
//   is testable without a terminal or a server

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
