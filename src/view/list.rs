//! Grocery list views: recent items on the dashboard and the full history

use std::sync::Arc;

use log::{debug, warn};

use super::{Confirm, Store, login_required};
use crate::client::ListApi;
use crate::client::models::GroceryItem;
use crate::error::{ApiError, Error, ValidationError};
use crate::session::SessionContext;

/// Number of items shown on the dashboard
pub const RECENT_LIMIT: usize = 3;

/// Prompt shown before deleting an item
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this item?";

/// Which list screen the view backs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// Dashboard: the few most recent items
    Recent,
    /// Deep dive: every item, newest first, filterable
    FullHistory,
}

impl ListMode {
    fn fetch_failure(self, server_message: Option<String>) -> String {
        match self {
            ListMode::Recent => "Failed to load grocery list. Please try again.".to_string(),
            ListMode::FullHistory => server_message.unwrap_or_else(|| {
                "Failed to load inventory list. Please sign in again.".to_string()
            }),
        }
    }
}

/// Quantity edit in progress
#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    pub item_id: i64,
    /// Raw input, validated on save
    pub quantity: String,
}

/// List snapshot
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Cached copy of the user's list
    pub items: Vec<GroceryItem>,
    pub loading: bool,
    pub error: Option<String>,
    pub editing: Option<EditState>,
    /// Filter text (full history only)
    pub filter: String,
}

impl ListState {
    /// Items newest first
    pub fn newest_first(&self) -> Vec<&GroceryItem> {
        let mut items: Vec<&GroceryItem> = self.items.iter().collect();
        items.sort_by(|a, b| b.id.cmp(&a.id));
        items
    }

    /// The dashboard's recent items
    pub fn recent(&self) -> Vec<&GroceryItem> {
        let mut items = self.newest_first();
        items.truncate(RECENT_LIMIT);
        items
    }

    /// Items passing the filter, in cached order
    pub fn filtered(&self) -> Vec<&GroceryItem> {
        let term = self.filter.to_lowercase();
        self.items.iter().filter(|i| i.matches(&term)).collect()
    }

    pub fn find(&self, item_id: i64) -> Option<&GroceryItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Text shown when the filtered list has nothing to display
    pub fn empty_message(&self) -> Option<String> {
        if !self.filtered().is_empty() {
            return None;
        }
        if !self.items.is_empty() && !self.filter.is_empty() {
            Some(format!("No items match \"{}\".", self.filter))
        } else {
            Some("Your grocery list is empty. Start adding items!".to_string())
        }
    }

    fn with_error(&self, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..self.clone()
        }
    }
}

pub struct ListView<C> {
    client: Arc<C>,
    mode: ListMode,
    store: Store<ListState>,
}

impl<C: ListApi> ListView<C> {
    pub fn new(client: Arc<C>, mode: ListMode) -> Self {
        Self {
            client,
            mode,
            store: Store::new(ListState::default()),
        }
    }

    /// Load the list from the API, replacing the cached copy
    pub async fn fetch(&self, ctx: &SessionContext) -> Arc<ListState> {
        self.store.update(|s| ListState {
            loading: true,
            error: None,
            ..s.clone()
        });

        let session = match ctx.require() {
            Ok(session) => session,
            Err(err) => {
                warn!("List fetch without session: {}", err);
                let message = self.mode.fetch_failure(None);
                return self.store.update(|s| ListState {
                    loading: false,
                    ..s.with_error(message)
                });
            }
        };

        match self.client.list_items(&session).await {
            Ok(mut items) => {
                debug!("Fetched {} items", items.len());
                if self.mode == ListMode::FullHistory {
                    items.sort_by(|a, b| b.id.cmp(&a.id));
                }
                self.store.update(|s| ListState {
                    items,
                    loading: false,
                    ..s.clone()
                })
            }
            Err(err) => {
                warn!("List fetch failed: {}", err);
                let server_message = match &err {
                    Error::Api(ApiError::Rejected { message, .. }) => message.clone(),
                    _ => None,
                };
                let message = self.mode.fetch_failure(server_message);
                self.store.update(|s| ListState {
                    loading: false,
                    ..s.with_error(message)
                })
            }
        }
    }

    pub fn set_filter(&self, filter: &str) -> Arc<ListState> {
        self.store.update(|s| ListState {
            filter: filter.to_string(),
            ..s.clone()
        })
    }

    /// Open the quantity editor for a cached item
    pub fn start_edit(&self, item_id: i64) -> Arc<ListState> {
        self.store.update(|s| match s.find(item_id) {
            Some(item) => ListState {
                editing: Some(EditState {
                    item_id,
                    quantity: item.quantity.to_string(),
                }),
                ..s.clone()
            },
            None => s.with_error(format!("Item {} is not on your list.", item_id)),
        })
    }

    pub fn set_edit_quantity(&self, quantity: &str) -> Arc<ListState> {
        self.store.update(|s| ListState {
            editing: s.editing.as_ref().map(|e| EditState {
                item_id: e.item_id,
                quantity: quantity.to_string(),
            }),
            ..s.clone()
        })
    }

    pub fn cancel_edit(&self) -> Arc<ListState> {
        self.store.update(|s| ListState {
            editing: None,
            ..s.clone()
        })
    }

    /// Validate and send the edited quantity, then patch the cached item
    pub async fn save_edit(&self, ctx: &SessionContext) -> Arc<ListState> {
        let state = self.store.update(|s| ListState {
            error: None,
            ..s.clone()
        });
        let Some(edit) = state.editing.clone() else {
            return state;
        };

        let quantity = match parse_quantity(&edit.quantity) {
            Ok(quantity) => quantity,
            Err(err) => return self.store.update(|s| s.with_error(err.to_string())),
        };

        let Ok(session) = ctx.require() else {
            return self
                .store
                .update(|s| s.with_error(login_required("update items")));
        };

        match self
            .client
            .update_quantity(&session, edit.item_id, quantity)
            .await
        {
            Ok(()) => {
                debug!("Item {} quantity set to {}", edit.item_id, quantity);
                self.store.update(|s| ListState {
                    items: s
                        .items
                        .iter()
                        .map(|item| {
                            if item.id == edit.item_id {
                                GroceryItem {
                                    quantity,
                                    ..item.clone()
                                }
                            } else {
                                item.clone()
                            }
                        })
                        .collect(),
                    editing: None,
                    ..s.clone()
                })
            }
            Err(err) => {
                warn!("Quantity update failed: {}", err);
                let message = err.user_message("Failed to update quantity.");
                self.store.update(|s| s.with_error(message))
            }
        }
    }

    /// Delete an item after confirmation and drop it from the cached list
    pub async fn delete(
        &self,
        ctx: &SessionContext,
        item_id: i64,
        confirm: &dyn Confirm,
    ) -> Arc<ListState> {
        match confirm.confirm(DELETE_PROMPT) {
            Ok(true) => {}
            Ok(false) => return self.store.snapshot(),
            Err(err) => return self.store.update(|s| s.with_error(err.to_string())),
        }

        self.store.update(|s| ListState {
            error: None,
            ..s.clone()
        });

        let Ok(session) = ctx.require() else {
            return self
                .store
                .update(|s| s.with_error(login_required("delete items")));
        };

        match self.client.delete_item(&session, item_id).await {
            Ok(()) => {
                debug!("Deleted item {}", item_id);
                self.store.update(|s| ListState {
                    items: s.items.iter().filter(|i| i.id != item_id).cloned().collect(),
                    editing: s.editing.clone().filter(|e| e.item_id != item_id),
                    ..s.clone()
                })
            }
            Err(err) => {
                warn!("Delete failed: {}", err);
                let message = err.user_message("Failed to delete item.");
                self.store.update(|s| s.with_error(message))
            }
        }
    }
}

/// Parse a quantity input; anything but an integer of at least 1 is rejected
pub fn parse_quantity(input: &str) -> Result<i64, ValidationError> {
    match input.trim().parse::<i64>() {
        Ok(quantity) if quantity >= 1 => Ok(quantity),
        _ => Err(ValidationError::Quantity),
    }
}
