//! Testing infrastructure for orderdesk integration tests.
//!
//! - `MockApi`: an in-process HTTP server speaking the order API contract,
//!   with request capture and scriptable failures
//! - `fixtures`: wire-shaped record builders and sample orders
//!
//! The mock runs on its own thread with its own runtime, so it works under
//! both `#[tokio::test]` functions and blocking `assert_cmd` tests.

pub mod fixtures;
pub mod mock_api;

pub use mock_api::{CapturedRequest, MockApi};
