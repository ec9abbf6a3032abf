// Views own layout and styling. Console views implement fmt::Display over
// a ViewModel; the tui module draws the board ViewModel into a Frame.

pub mod order_list;
pub mod tui;

pub use order_list::OrderListView;
