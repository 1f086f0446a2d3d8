//! Single-item commands: show, edit, delete

use std::sync::Arc;

use colored::Colorize;
use serde_json::json;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::NutriViewClient;
use crate::error::{Error, Result};
use crate::models::ItemDetail;
use crate::output::Formattable;
use crate::output::json::format_json;
use crate::view::{ListMode, ListState, ListView};

/// Fetch the full list and make sure `item_id` is on it
async fn load(
    ctx: &CommandContext,
    item_id: i64,
) -> Result<(ListView<NutriViewClient>, Arc<ListState>)> {
    let view = ListView::new(Arc::clone(&ctx.client), ListMode::FullHistory);
    let state = view.fetch(&ctx.session).await;
    handlers::check(&state.error)?;

    if state.find(item_id).is_none() {
        return Err(Error::View(format!("Item {} is not on your list.", item_id)));
    }
    Ok((view, state))
}

/// Run the show command
pub async fn show(opts: &GlobalOptions, item_id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let (_, state) = load(&ctx, item_id).await?;

    if let Some(item) = state.find(item_id) {
        ItemDetail::from(item).print(ctx.format)?;
    }
    Ok(())
}

/// Run the edit command
pub async fn edit(opts: &GlobalOptions, item_id: i64, quantity: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let (view, _) = load(&ctx, item_id).await?;

    handlers::check(&view.start_edit(item_id).error)?;
    view.set_edit_quantity(quantity);
    let state = view.save_edit(&ctx.session).await;
    handlers::check(&state.error)?;

    let Some(item) = state.find(item_id) else {
        return Ok(());
    };
    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            format_json(&json!({ "id": item.id, "quantity": item.quantity }))?
        ),
        _ => println!(
            "{} {} quantity set to {}",
            "✓".green(),
            item.product_name.bold(),
            item.quantity
        ),
    }
    Ok(())
}

/// Run the delete command
pub async fn delete(opts: &GlobalOptions, item_id: i64, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let (view, before) = load(&ctx, item_id).await?;
    let name = before
        .find(item_id)
        .map(|item| item.product_name.clone())
        .unwrap_or_default();

    let confirm = handlers::confirmer(yes);
    let state = view.delete(&ctx.session, item_id, confirm.as_ref()).await;
    handlers::check(&state.error)?;

    if state.find(item_id).is_some() {
        println!("Cancelled.");
        return Ok(());
    }

    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            format_json(&json!({ "id": item_id, "deleted": true }))?
        ),
        _ => println!("{} Deleted {}", "✓".green(), name.bold()),
    }
    Ok(())
}
