//! List command: dashboard and full history

use std::sync::Arc;

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::GroceryItem;
use crate::error::Result;
use crate::models::ItemDisplay;
use crate::output::Formattable;
use crate::output::json::format_json_filtered;
use crate::view::list::RECENT_LIMIT;
use crate::view::{ListMode, ListState, ListView};

/// Run the list command
pub async fn run(opts: &GlobalOptions, all: bool, filter: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mode = if all || filter.is_some() {
        ListMode::FullHistory
    } else {
        ListMode::Recent
    };
    debug!("Listing items ({:?})", mode);

    let view = ListView::new(Arc::clone(&ctx.client), mode);
    let state = view.fetch(&ctx.session).await;
    handlers::check(&state.error)?;

    match mode {
        ListMode::Recent => render_recent(&state, ctx.format),
        ListMode::FullHistory => {
            let state = match filter {
                Some(filter) => view.set_filter(&filter),
                None => state,
            };
            render_full(&state, ctx.format)
        }
    }
}

fn displays(items: &[&GroceryItem]) -> Vec<ItemDisplay> {
    items.iter().map(|item| ItemDisplay::from(*item)).collect()
}

/// Dashboard: most recent items plus a hint when more exist
pub fn render_recent(state: &ListState, format: OutputFormat) -> Result<()> {
    let recent = displays(&state.recent());
    if format == OutputFormat::Json {
        println!("{}", format_json_filtered(&recent, state.items.len())?);
        return Ok(());
    }

    println!("{}", "Recent Items".bold());
    if recent.is_empty() {
        println!("Your grocery list is empty. Start adding items!");
        return Ok(());
    }
    recent.print(format)?;

    let total = state.items.len();
    if total > RECENT_LIMIT {
        println!(
            "\n{} {}",
            format!("View all {} items...", total).cyan(),
            "(nutriview list --all)".dimmed()
        );
    }
    Ok(())
}

/// Full history: filtered items newest first with a shown/total header
pub fn render_full(state: &ListState, format: OutputFormat) -> Result<()> {
    let shown = displays(&state.filtered());
    if format == OutputFormat::Json {
        println!("{}", format_json_filtered(&shown, state.items.len())?);
        return Ok(());
    }

    println!(
        "{}",
        format!("All Items ({} of {})", shown.len(), state.items.len()).bold()
    );
    match state.empty_message() {
        Some(message) => println!("{}", message),
        None => shown.print(format)?,
    }
    Ok(())
}
