//! Product search API trait

use async_trait::async_trait;

use crate::client::models::ExternalProduct;
use crate::error::Result;
use crate::session::Session;

/// Product search, proxied by the NutriView API to an external catalogue
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Search products by free text
    async fn search_products(&self, session: &Session, query: &str)
    -> Result<Vec<ExternalProduct>>;
}
