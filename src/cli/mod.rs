//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod auth;
pub mod context;
pub mod handlers;
pub mod item;
pub mod list;
pub mod search;
pub mod status;

pub use args::OutputFormat;
pub use context::CommandContext;

/// NutriView CLI - grocery list with nutrition facts
#[derive(Parser, Debug)]
#[command(name = "nutriview")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "NUTRIVIEW_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "NUTRIVIEW_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "NUTRIVIEW_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "NUTRIVIEW_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        /// Account email (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password (prompted if omitted)
        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// Create an account and sign in
    Signup {
        /// Account email (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password (prompted if omitted)
        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// Sign out and remove the stored session
    Logout,

    /// Show session and configuration status
    Status,

    /// Display version information
    Version,

    /// Show your grocery list
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            nutriview list                    # Three most recent items\n  \
            nutriview list --all              # Everything, newest first\n  \
            nutriview list --filter oat       # Match name or brand\n  \
            nutriview list --all --format json"
    )]
    List {
        /// Show every item instead of the recent few
        #[arg(long, short = 'a')]
        all: bool,

        /// Case-insensitive filter on name or brand (implies --all)
        #[arg(long, short = 'f')]
        filter: Option<String>,
    },

    /// Show the nutrition card of one item
    Show {
        /// Item ID
        id: i64,
    },

    /// Search the product catalogue
    #[command(after_help = "EXAMPLES:\n  \
            nutriview search \"rolled oats\"          # List matches\n  \
            nutriview search \"rolled oats\" --add 2  # Add the second match\n  \
            nutriview search yogurt --pick          # Choose interactively")]
    Search {
        /// Search terms (more than 2 characters)
        query: String,

        /// Add result number N to your list
        #[arg(long, value_name = "N", conflicts_with = "pick")]
        add: Option<usize>,

        /// Pick a result to add interactively
        #[arg(long)]
        pick: bool,
    },

    /// Add an item by name only
    Add {
        /// Product name
        name: String,
    },

    /// Change the quantity of an item
    Edit {
        /// Item ID
        id: i64,

        /// New quantity (1 or more)
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// Delete an item from your list
    #[command(visible_alias = "rm")]
    Delete {
        /// Item ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
