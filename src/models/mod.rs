//! Display models for CLI output
//!
//! Converts API and view types into CLI-friendly display formats.

pub mod display;

pub use display::{ItemDetail, ItemDisplay, SearchResultDisplay};
