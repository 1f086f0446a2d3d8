//! View-models
//!
//! Each view keeps its state in a [`Store`]. Operations compute a new
//! immutable snapshot from the previous one and publish it; renderers read
//! the latest snapshot or subscribe to changes.

pub mod auth;
pub mod list;
pub mod search;

use std::sync::Arc;

use tokio::sync::watch;

use crate::error::Result;

pub use auth::{AuthMode, AuthState, AuthView};
pub use list::{ListMode, ListState, ListView};
pub use search::{SearchState, SearchView};

/// Message shown when an operation needs a session and there is none
pub(crate) fn login_required(action: &str) -> String {
    format!("You must be logged in to {}.", action)
}

/// Publisher of immutable view snapshots
pub struct Store<S> {
    tx: Arc<watch::Sender<Arc<S>>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<S: Send + Sync + 'static> Store<S> {
    pub fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(initial));
        Self { tx: Arc::new(tx) }
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> Arc<S> {
        Arc::clone(&self.tx.borrow())
    }

    /// Receiver notified on every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<Arc<S>> {
        self.tx.subscribe()
    }

    /// Replace the snapshot with `f(previous)` and return the new one
    pub fn update(&self, f: impl FnOnce(&S) -> S) -> Arc<S> {
        self.tx
            .send_modify(|current| *current = Arc::new(f(&**current)));
        self.snapshot()
    }
}

/// Interactive yes/no confirmation
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Confirmation that always answers yes
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}
