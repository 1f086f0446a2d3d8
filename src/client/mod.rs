//! NutriView API client

pub mod api;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod nutriview;

pub use api::{AuthApi, ListApi, SearchApi};
#[cfg(test)]
pub use mock::MockGroceryClient;
pub use nutriview::NutriViewClient;
