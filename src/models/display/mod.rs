//! Display model implementations for pretty, table, and JSON output

mod item;
mod result;

pub use item::{ItemDetail, ItemDisplay};
pub use result::SearchResultDisplay;
