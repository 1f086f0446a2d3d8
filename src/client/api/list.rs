//! Grocery list API trait

use async_trait::async_trait;

use crate::client::models::{GroceryItem, NewGroceryItem};
use crate::error::Result;
use crate::session::Session;

/// Grocery list operations. Every call is authenticated with the session's
/// bearer token.
#[async_trait]
pub trait ListApi: Send + Sync {
    /// Fetch every item on the user's list, in server order
    async fn list_items(&self, session: &Session) -> Result<Vec<GroceryItem>>;

    /// Add an item. Adding a product name that already exists increments
    /// that item's quantity on the server.
    async fn add_item(&self, session: &Session, item: &NewGroceryItem) -> Result<GroceryItem>;

    /// Replace an item's quantity
    async fn update_quantity(&self, session: &Session, item_id: i64, quantity: i64)
    -> Result<()>;

    /// Remove an item from the list
    async fn delete_item(&self, session: &Session, item_id: i64) -> Result<()>;
}
