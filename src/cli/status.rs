//! Status command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::output::formatters::format_remaining;
use crate::output::json::format_json;

/// Session and configuration summary
#[derive(Debug, Serialize)]
struct StatusReport {
    config_path: String,
    config_exists: bool,
    api_url: String,
    logged_in: bool,
    user_id: Option<i64>,
    expires_at: Option<String>,
    expired: bool,
}

/// Run the status command to display configuration and session state
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    let config_exists = path.exists();
    let config = Config::load_or_default(opts.config_ref())?;
    let session = config.session.as_ref();

    let report = StatusReport {
        config_path: path.display().to_string(),
        config_exists,
        api_url: config.api_url(opts.api_url_ref()),
        logged_in: session.is_some_and(|s| !s.is_expired()),
        user_id: session.map(|s| s.user_id),
        expires_at: session.and_then(|s| s.expires_at).map(|t| t.to_rfc3339()),
        expired: session.is_some_and(|s| s.is_expired()),
    };

    if opts.resolve_format(&config) == OutputFormat::Json {
        println!("{}", format_json(&report)?);
        return Ok(());
    }

    println!("{}\n", "NutriView Status".bold());

    if config_exists {
        println!("Config file: {}", report.config_path.cyan());
    } else {
        println!(
            "Config file: {} {}",
            report.config_path.cyan(),
            "(not created yet)".dimmed()
        );
    }
    println!("API URL:     {}", report.api_url.cyan());
    println!();

    match session {
        Some(stored) if stored.is_expired() => {
            println!(
                "{} Session for user {} expired",
                "⚠".yellow(),
                stored.user_id
            );
            println!("  → Run 'nutriview login' to sign in again");
        }
        Some(stored) => {
            println!("{} Logged in as user {}", "✓".green(), stored.user_id);
            match stored.expires_at {
                Some(expires_at) => println!(
                    "{} Token valid (expires in {})",
                    "✓".green(),
                    format_remaining(expires_at, chrono::Utc::now())
                ),
                None => println!("{} Token has no expiry", "○".dimmed()),
            }
        }
        None => {
            println!("{} Not logged in", "✗".red());
            println!("  → Run 'nutriview login' to sign in");
        }
    }
    println!();

    Ok(())
}
