//! Authentication models

use serde::{Deserialize, Serialize};

/// Login/signup request body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields carry something other than whitespace
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

/// Successful login/signup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent requests
    pub access_token: String,

    /// Id of the authenticated user
    pub user_id: i64,

    /// Informational message from the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}
