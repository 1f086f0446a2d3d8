//! Interactive confirmation backed by dialoguer

use dialoguer::theme::ColorfulTheme;

use crate::error::Result;
use crate::view::{AssumeYes, Confirm};

/// Asks on the terminal, defaulting to no
struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Ok(dialoguer::Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}

/// Confirmation for destructive commands; `--yes` skips the prompt
pub fn confirmer(assume_yes: bool) -> Box<dyn Confirm> {
    if assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalConfirm)
    }
}
