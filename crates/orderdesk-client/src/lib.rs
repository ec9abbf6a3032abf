//! Async HTTP client for the order-storage API.
//!
//! Wraps the five calls the API exposes (list, create, update, delete,
//! health) and translates failures into the taxonomy the UI notifies with.
//! One attempt per call; no retries.

pub mod client;
pub mod error;

pub use client::{ApiClient, DEFAULT_TIMEOUT_SECS};
pub use error::{Error, Result};
