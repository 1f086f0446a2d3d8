//! Command execution context
//!
//! Bundles the session context, the API client, and the resolved output
//! format so command handlers skip the config-loading boilerplate.

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::NutriViewClient;
use crate::error::Result;
use crate::session::SessionContext;

/// Context for command execution.
pub struct CommandContext {
    /// Session lifecycle and the loaded configuration
    pub session: SessionContext,
    /// API client (Arc-wrapped so view-models can share it)
    pub client: Arc<NutriViewClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Context for commands that act on the signed-in user's list.
    ///
    /// Fails before any request is made when no live session is stored.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let ctx = Self::anonymous(opts)?;
        let session = ctx.session.require()?;
        debug!("Acting as user {}", session.user_id());
        Ok(ctx)
    }

    /// Context that does not need a session (login, signup)
    pub fn anonymous(opts: &GlobalOptions) -> Result<Self> {
        let session = SessionContext::load(opts.config_ref())?;
        let config = session.config();

        let base_url = config.api_url(opts.api_url_ref());
        debug!("Using API at {}", base_url);
        let client = Arc::new(NutriViewClient::new(base_url)?);
        let format = opts.resolve_format(config);

        Ok(Self {
            session,
            client,
            format,
        })
    }

    /// Debounce delay for search
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.session.config().preferences.search_delay_ms)
    }

    /// Number of search results kept
    pub fn search_limit(&self) -> usize {
        self.session.config().preferences.search_limit
    }
}
