//! NutriView API data models
//!
//! Wire types exchanged with the NutriView API, organized by resource.

mod auth;
mod item;
mod product;

pub use auth::{AuthResponse, Credentials};
pub use item::{GroceryItem, NewGroceryItem, QuantityUpdate};
pub use product::{ExternalProduct, SearchResponse};
