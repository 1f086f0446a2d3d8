//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login and signup
//! - [`ListApi`] - Grocery list CRUD
//! - [`SearchApi`] - External product search

mod auth;
mod list;
mod search;

pub use auth::AuthApi;
pub use list::ListApi;
pub use search::SearchApi;
