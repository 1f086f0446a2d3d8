//! Shared pieces for command handlers

mod confirm;
mod outcome;
mod progress;

pub use confirm::confirmer;
pub use outcome::check;
pub use progress::spinner;
