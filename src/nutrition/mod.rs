//! Normalization of external product records
//!
//! Turns catalogue records from the search endpoint into display-ready
//! [`SearchResult`]s: nutrient values with units, English tag lists, and
//! a few fallbacks for names and brands.

pub mod nutrients;
pub mod result;
pub mod tags;

pub use nutrients::nutrient_value;
pub use result::SearchResult;
pub use tags::english_tags;
