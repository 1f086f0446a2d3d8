//! Search and add commands

use std::sync::Arc;

use colored::Colorize;
use dialoguer::{Select, theme::ColorfulTheme};
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers;
use crate::cli::{CommandContext, OutputFormat, list};
use crate::client::NutriViewClient;
use crate::client::models::GroceryItem;
use crate::error::{Error, Result};
use crate::models::SearchResultDisplay;
use crate::nutrition::SearchResult;
use crate::output::Formattable;
use crate::output::json::format_json;
use crate::view::search::MIN_QUERY_CHARS;
use crate::view::{ListMode, ListView, SearchView};

/// Run the search command
pub async fn run(
    opts: &GlobalOptions,
    query: &str,
    add: Option<usize>,
    pick: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if query.trim().chars().count() <= MIN_QUERY_CHARS {
        return Err(Error::View(format!(
            "Search terms must be longer than {} characters.",
            MIN_QUERY_CHARS
        )));
    }

    let view = SearchView::new(Arc::clone(&ctx.client), ctx.search_delay(), ctx.search_limit());

    let pb = handlers::spinner(format!("Searching for \"{}\"...", query.trim()), ctx.format);
    view.input_changed(query, &ctx.session);
    let state = view.settled().await;
    pb.finish_and_clear();
    handlers::check(&state.error)?;

    debug!("Search settled with {} results", state.results.len());
    let rows = SearchResultDisplay::numbered(&state.results);

    let chosen = match add {
        Some(number) => Some(number),
        None if pick && !rows.is_empty() => {
            let names: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();
            Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Add which product?")
                .items(&names)
                .default(0)
                .interact_opt()?
                .map(|idx| idx + 1)
        }
        None => None,
    };

    let Some(number) = chosen else {
        return rows.print(ctx.format);
    };

    let result = number
        .checked_sub(1)
        .and_then(|idx| state.results.get(idx))
        .ok_or_else(|| {
            Error::View(format!(
                "No result number {}; the search returned {}.",
                number,
                state.results.len()
            ))
        })?;

    add_and_refresh(&ctx, &view, result).await
}

/// Run the add command (name only)
pub async fn add(opts: &GlobalOptions, name: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let view = SearchView::new(Arc::clone(&ctx.client), ctx.search_delay(), ctx.search_limit());

    view.set_term(name);
    let state = view.manual_add(&ctx.session).await;
    handlers::check(&state.error)?;

    report_added(&ctx, state.last_added.as_ref())?;
    refresh(&ctx).await
}

async fn add_and_refresh(
    ctx: &CommandContext,
    view: &SearchView<NutriViewClient>,
    result: &SearchResult,
) -> Result<()> {
    let state = view.add_result(result, &ctx.session).await;
    handlers::check(&state.error)?;

    report_added(ctx, state.last_added.as_ref())?;
    refresh(ctx).await
}

fn report_added(ctx: &CommandContext, item: Option<&GroceryItem>) -> Result<()> {
    let Some(item) = item else {
        return Ok(());
    };
    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(item)?),
        _ => println!(
            "{} Added {} to your list {}",
            "✓".green(),
            item.product_name.bold(),
            format!("(#{})", item.id).dimmed()
        ),
    }
    Ok(())
}

/// Show the dashboard after a successful add
async fn refresh(ctx: &CommandContext) -> Result<()> {
    if ctx.format == OutputFormat::Json {
        return Ok(());
    }

    let view = ListView::new(Arc::clone(&ctx.client), ListMode::Recent);
    let state = view.fetch(&ctx.session).await;
    handlers::check(&state.error)?;

    println!();
    list::render_recent(&state, ctx.format)
}
