//! Login, signup, and logout commands

use std::sync::Arc;

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use serde_json::json;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::output::json::format_json;
use crate::session::SessionContext;
use crate::view::{AuthMode, AuthView, auth};

/// Run the login command
pub async fn login(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    submit(opts, AuthMode::Login, email, password).await
}

/// Run the signup command
pub async fn signup(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    submit(opts, AuthMode::Signup, email, password).await
}

async fn submit(
    opts: &GlobalOptions,
    mode: AuthMode,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let mut ctx = CommandContext::anonymous(opts)?;
    let theme = ColorfulTheme::default();

    let email = match email {
        Some(email) => email,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Email")
            .interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None if mode == AuthMode::Signup => Password::with_theme(&theme)
            .with_prompt("Choose a password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
        None => Password::with_theme(&theme)
            .with_prompt("Password")
            .interact()?,
    };

    let view = AuthView::new(Arc::clone(&ctx.client), mode);
    view.set_email(&email);
    view.set_password(&password);
    let state = view.submit(&mut ctx.session).await;
    handlers::check(&state.error)?;

    let user_id = state.user_id.unwrap_or_default();
    match ctx.format {
        OutputFormat::Json => {
            let expires_at = ctx
                .session
                .current()
                .and_then(|s| s.expires_at())
                .map(|t| t.to_rfc3339());
            println!(
                "{}",
                format_json(&json!({ "user_id": user_id, "expires_at": expires_at }))?
            );
        }
        _ => {
            let verb = match mode {
                AuthMode::Login => "Logged in",
                AuthMode::Signup => "Account created, logged in",
            };
            println!("{} {} as user {}", "✓".green(), verb, user_id.to_string().bold());
            if let Some(path) = ctx.session.store_path() {
                println!("  Session saved to: {}", path.display().to_string().dimmed());
            }
        }
    }

    Ok(())
}

/// Run the logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let mut session = SessionContext::load(opts.config_ref())?;

    if auth::logout(&mut session)? {
        println!("{} Logged out", "✓".green());
    } else {
        println!("{} Not logged in", "○".dimmed());
    }

    Ok(())
}
