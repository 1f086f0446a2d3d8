//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{AuthResponse, Credentials};
use crate::error::Result;

/// Authentication operations for the NutriView API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse>;

    /// Create an account and log straight in
    async fn signup(&self, credentials: &Credentials) -> Result<AuthResponse>;
}
