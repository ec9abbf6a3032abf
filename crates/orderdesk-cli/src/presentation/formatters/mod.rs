pub mod money;
pub mod text;

pub use money::brl;
pub use text::{or_dash, truncate};
