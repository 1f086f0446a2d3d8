//! Session context
//!
//! Owns the bearer credential for the lifetime of a login. Every networked
//! operation receives a [`Session`] taken from the context; the context
//! itself is the only writer of the persisted token.

use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use log::debug;
use serde::Deserialize;

use crate::client::models::AuthResponse;
use crate::config::{Config, StoredSession};
use crate::error::{ConfigError, Result};

/// Credential attached to authenticated requests
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    access_token: String,
    user_id: i64,
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    #[cfg(test)]
    pub fn new(access_token: impl Into<String>, user_id: i64) -> Self {
        Self {
            access_token: access_token.into(),
            user_id,
            expires_at: None,
        }
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}

impl From<&StoredSession> for Session {
    fn from(stored: &StoredSession) -> Self {
        Self {
            access_token: stored.access_token.clone(),
            user_id: stored.user_id,
            expires_at: stored.expires_at,
        }
    }
}

/// Session lifecycle bound to the persistent token store.
pub struct SessionContext {
    config: Config,
    /// Where the config is persisted; `None` keeps everything in memory
    store: Option<PathBuf>,
}

impl SessionContext {
    /// Load the context from the config file, starting empty if it is missing
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let path = Config::resolve_path(config_path)?;
        let config = if path.exists() {
            Config::load_from(&path)?
        } else {
            Config::default()
        };

        Ok(Self {
            config,
            store: Some(path),
        })
    }

    /// Context that never touches disk
    #[cfg(test)]
    pub fn in_memory(session: Option<Session>) -> Self {
        let config = Config {
            session: session.map(|s| StoredSession {
                access_token: s.access_token,
                user_id: s.user_id,
                expires_at: s.expires_at,
            }),
            ..Config::default()
        };
        Self {
            config,
            store: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the backing store, if persisted
    pub fn store_path(&self) -> Option<&PathBuf> {
        self.store.as_ref()
    }

    /// The live session, if one exists and has not expired
    pub fn current(&self) -> Option<Session> {
        self.require().ok()
    }

    /// The live session, or a missing-credential error
    pub fn require(&self) -> Result<Session> {
        let stored = self
            .config
            .session
            .as_ref()
            .ok_or(ConfigError::MissingCredential)?;

        if stored.is_expired() {
            return Err(ConfigError::SessionExpired.into());
        }

        Ok(Session::from(stored))
    }

    /// Start a session from a successful login or signup and persist it
    pub fn begin(&mut self, auth: &AuthResponse) -> Result<Session> {
        let stored = StoredSession {
            access_token: auth.access_token.clone(),
            user_id: auth.user_id,
            expires_at: token_expiry(&auth.access_token),
        };
        debug!(
            "Beginning session for user {} (expires: {:?})",
            stored.user_id, stored.expires_at
        );

        let session = Session::from(&stored);
        self.config.session = Some(stored);
        self.persist()?;

        Ok(session)
    }

    /// Tear the session down. Returns whether a session existed.
    pub fn end(&mut self) -> Result<bool> {
        let existed = self.config.session.take().is_some();
        if existed {
            debug!("Ending session");
            self.persist()?;
        }
        Ok(existed)
    }

    fn persist(&self) -> Result<()> {
        match &self.store {
            Some(path) => self.config.save_to(path),
            None => Ok(()),
        }
    }
}

/// Expiry from a JWT's `exp` claim. Opaque tokens yield `None`.
pub fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    #[derive(Deserialize)]
    struct Claims {
        exp: i64,
    }

    let mut parts = token.split('.');
    let (_header, payload, _signature) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    DateTime::from_timestamp(claims.exp, 0)
}
