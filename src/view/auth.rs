//! Login and signup forms

use std::sync::Arc;

use log::{debug, warn};

use super::Store;
use crate::client::AuthApi;
use crate::client::models::Credentials;
use crate::error::{Error, ValidationError};
use crate::session::SessionContext;

/// Which auth endpoint the form submits to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn fallback_message(self) -> &'static str {
        match self {
            AuthMode::Login => "Login failed due to a network or server error.",
            AuthMode::Signup => "Signup failed due to a network or server error.",
        }
    }
}

/// Auth form snapshot
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    /// Set once a submit succeeded
    pub user_id: Option<i64>,
}

pub struct AuthView<C> {
    client: Arc<C>,
    mode: AuthMode,
    store: Store<AuthState>,
}

impl<C: AuthApi> AuthView<C> {
    pub fn new(client: Arc<C>, mode: AuthMode) -> Self {
        Self {
            client,
            mode,
            store: Store::new(AuthState::default()),
        }
    }

    pub fn set_email(&self, email: &str) -> Arc<AuthState> {
        self.store.update(|s| AuthState {
            email: email.to_string(),
            error: None,
            ..s.clone()
        })
    }

    pub fn set_password(&self, password: &str) -> Arc<AuthState> {
        self.store.update(|s| AuthState {
            password: password.to_string(),
            error: None,
            ..s.clone()
        })
    }

    /// Submit the form. On success the session is started in `ctx`.
    pub async fn submit(&self, ctx: &mut SessionContext) -> Arc<AuthState> {
        let form = self.store.update(|s| AuthState {
            error: None,
            ..s.clone()
        });

        let credentials = Credentials::new(form.email.trim(), form.password.as_str());
        if !credentials.is_complete() {
            return self.fail(ValidationError::MissingCredentials.into());
        }

        let response = match self.mode {
            AuthMode::Login => self.client.login(&credentials).await,
            AuthMode::Signup => self.client.signup(&credentials).await,
        };

        let auth = match response {
            Ok(auth) => auth,
            Err(err) => return self.fail(err),
        };

        match ctx.begin(&auth) {
            Ok(session) => {
                debug!("{:?} succeeded for user {}", self.mode, session.user_id());
                self.store.update(|s| AuthState {
                    password: String::new(),
                    error: None,
                    user_id: Some(session.user_id()),
                    ..s.clone()
                })
            }
            Err(err) => {
                warn!("Could not persist session: {}", err);
                let message = err.to_string();
                self.store.update(|s| AuthState {
                    error: Some(message),
                    ..s.clone()
                })
            }
        }
    }

    fn fail(&self, err: Error) -> Arc<AuthState> {
        let message = err.user_message(self.mode.fallback_message());
        warn!("{:?} failed: {}", self.mode, err);
        self.store.update(|s| AuthState {
            error: Some(message),
            ..s.clone()
        })
    }
}

/// End the session held by `ctx`. Returns whether one existed.
pub fn logout(ctx: &mut SessionContext) -> crate::error::Result<bool> {
    ctx.end()
}
