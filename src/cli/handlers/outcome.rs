//! Turning view snapshots into command results

use crate::error::{Error, Result};

/// Fail the command with the view's error message, if it set one
pub fn check(error: &Option<String>) -> Result<()> {
    match error {
        Some(message) => Err(Error::View(message.clone())),
        None => Ok(()),
    }
}
