pub mod error;
pub mod order;
pub mod wire;

pub use error::{Error, Result};
pub use order::{Amount, Order, OrderDate, OrderDraft, OrderId, OrderStatus};
pub use wire::{OrderBatch, OrderBody};
