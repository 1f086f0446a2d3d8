//! Mock NutriView API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! view-models without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, ListApi, SearchApi};
use super::models::{AuthResponse, Credentials, ExternalProduct, GroceryItem, NewGroceryItem};
use crate::error::{ApiError, Result};
use crate::session::Session;

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockGroceryClient::new().with_items(vec![item(1, "Oats")]);
/// let items = mock.list_items(&session).await?;
/// assert_eq!(items.len(), 1);
/// ```
#[derive(Default)]
pub struct MockGroceryClient {
    /// Items served by list_items and mutated by add/update/delete
    items: Arc<Mutex<Vec<GroceryItem>>>,
    /// Products returned from search_products
    products: Arc<Mutex<Vec<ExternalProduct>>>,
    /// Response returned from login/signup
    auth: Arc<Mutex<Option<AuthResponse>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Queries passed to search_products, in order
    search_queries: Arc<Mutex<Vec<String>>>,
    /// Payloads passed to add_item, in order
    added: Arc<Mutex<Vec<NewGroceryItem>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub signup: usize,
    pub list_items: usize,
    pub add_item: usize,
    pub update_quantity: usize,
    pub delete_item: usize,
    pub search_products: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login
            + self.signup
            + self.list_items
            + self.add_item
            + self.update_quantity
            + self.delete_item
            + self.search_products
    }
}

#[allow(dead_code)]
impl MockGroceryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the server-side list
    pub fn with_items(self, items: Vec<GroceryItem>) -> Self {
        *self.items.try_lock().expect("mock not shared yet") = items;
        self
    }

    /// Set the products returned by search
    pub fn with_products(self, products: Vec<ExternalProduct>) -> Self {
        *self.products.try_lock().expect("mock not shared yet") = products;
        self
    }

    /// Set the login/signup response
    pub fn with_auth(self, token: &str, user_id: i64) -> Self {
        *self.auth.try_lock().expect("mock not shared yet") = Some(AuthResponse {
            access_token: token.to_string(),
            user_id,
            msg: None,
        });
        self
    }

    /// Fail the next call with `error`
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    /// Fail the next call with `error` after construction
    pub async fn fail_next(&self, error: ApiError) {
        *self.error.lock().await = Some(error);
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn search_queries(&self) -> Vec<String> {
        self.search_queries.lock().await.clone()
    }

    pub async fn added(&self) -> Vec<NewGroceryItem> {
        self.added.lock().await.clone()
    }

    pub async fn server_items(&self) -> Vec<GroceryItem> {
        self.items.lock().await.clone()
    }

    async fn take_error(&self) -> Result<()> {
        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AuthApi for MockGroceryClient {
    async fn login(&self, _credentials: &Credentials) -> Result<AuthResponse> {
        self.call_count.lock().await.login += 1;
        self.take_error().await?;
        self.auth
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::InvalidResponse("no auth configured".to_string()).into())
    }

    async fn signup(&self, _credentials: &Credentials) -> Result<AuthResponse> {
        self.call_count.lock().await.signup += 1;
        self.take_error().await?;
        self.auth
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::InvalidResponse("no auth configured".to_string()).into())
    }
}

#[async_trait]
impl ListApi for MockGroceryClient {
    async fn list_items(&self, _session: &Session) -> Result<Vec<GroceryItem>> {
        self.call_count.lock().await.list_items += 1;
        self.take_error().await?;
        Ok(self.items.lock().await.clone())
    }

    async fn add_item(&self, _session: &Session, item: &NewGroceryItem) -> Result<GroceryItem> {
        self.call_count.lock().await.add_item += 1;
        self.take_error().await?;
        self.added.lock().await.push(item.clone());

        let mut items = self.items.lock().await;
        let id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let created = GroceryItem {
            id,
            product_name: item.product_name.clone(),
            quantity: item.quantity,
            brands: item.brands.clone(),
            thumb_url: item.thumb_url.clone(),
            ingredients: item.ingredients.clone(),
            allergens: item.allergens.clone(),
            labels: item.labels.clone(),
            serving_size: item.serving_size.clone(),
            categories: item.categories.clone(),
            calories: item.calories.clone(),
            fat: item.fat.clone(),
            saturated_fat: item.saturated_fat.clone(),
            carbohydrates: item.carbohydrates.clone(),
            sugars: item.sugars.clone(),
            protein: item.protein.clone(),
            salt: item.salt.clone(),
        };
        items.push(created.clone());
        Ok(created)
    }

    async fn update_quantity(
        &self,
        _session: &Session,
        item_id: i64,
        quantity: i64,
    ) -> Result<()> {
        self.call_count.lock().await.update_quantity += 1;
        self.take_error().await?;
        let mut items = self.items.lock().await;
        match items.iter_mut().find(|i| i.id == item_id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(())
            }
            None => Err(ApiError::Rejected {
                status: 404,
                message: Some("Item not found or access denied".to_string()),
            }
            .into()),
        }
    }

    async fn delete_item(&self, _session: &Session, item_id: i64) -> Result<()> {
        self.call_count.lock().await.delete_item += 1;
        self.take_error().await?;
        self.items.lock().await.retain(|i| i.id != item_id);
        Ok(())
    }
}

#[async_trait]
impl SearchApi for MockGroceryClient {
    async fn search_products(
        &self,
        _session: &Session,
        query: &str,
    ) -> Result<Vec<ExternalProduct>> {
        self.call_count.lock().await.search_products += 1;
        self.search_queries.lock().await.push(query.to_string());
        self.take_error().await?;
        Ok(self.products.lock().await.clone())
    }
}
