//! Search-and-add form
//!
//! Typing schedules a debounced product search. Results are mapped for
//! display and can be added to the list one at a time. The form does not
//! refresh any list view itself; callers re-fetch after a successful add.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

use super::{Store, login_required};
use crate::client::{ListApi, SearchApi};
use crate::client::models::GroceryItem;
use crate::debounce::Debouncer;
use crate::error::{Error, ValidationError};
use crate::nutrition::SearchResult;
use crate::session::{Session, SessionContext};

/// Minimum trimmed length, exclusive, before a search is scheduled
pub const MIN_QUERY_CHARS: usize = 2;

/// Default number of results kept from a search
pub const DEFAULT_LIMIT: usize = 10;

/// Search form snapshot
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub term: String,
    pub results: Vec<SearchResult>,
    /// A search is scheduled or in flight
    pub searching: bool,
    pub error: Option<String>,
    /// Item created by the last successful add
    pub last_added: Option<GroceryItem>,
}

/// Arguments captured for one debounced dispatch
pub struct SearchRequest {
    query: String,
    session: Option<Session>,
}

type Dispatch =
    Box<dyn Fn(SearchRequest) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

pub struct SearchView<C> {
    client: Arc<C>,
    store: Store<SearchState>,
    debouncer: Debouncer<SearchRequest, Dispatch>,
}

impl<C> SearchView<C>
where
    C: SearchApi + ListApi + 'static,
{
    /// Create the form. Must be called inside a tokio runtime.
    pub fn new(client: Arc<C>, delay: Duration, limit: usize) -> Self {
        let store = Store::new(SearchState::default());

        let dispatch: Dispatch = {
            let client = Arc::clone(&client);
            let store = store.clone();
            Box::new(move |request: SearchRequest| {
                let client = Arc::clone(&client);
                let store = store.clone();
                Box::pin(async move { run_search(client.as_ref(), &store, request, limit).await })
                    as Pin<Box<dyn Future<Output = ()> + Send>>
            })
        };

        Self {
            client,
            store,
            debouncer: Debouncer::new(delay, dispatch),
        }
    }

    /// Record new input and schedule or cancel the search accordingly
    pub fn input_changed(&self, term: &str, ctx: &SessionContext) -> Arc<SearchState> {
        let query = term.trim();

        if query.chars().count() > MIN_QUERY_CHARS {
            // publish before scheduling so a zero-delay search cannot settle first
            let state = self.store.update(|s| SearchState {
                term: term.to_string(),
                searching: true,
                error: None,
                ..s.clone()
            });
            self.debouncer.call(SearchRequest {
                query: query.to_string(),
                session: ctx.current(),
            });
            state
        } else {
            self.debouncer.cancel();
            self.store.update(|s| SearchState {
                term: term.to_string(),
                results: Vec::new(),
                searching: false,
                error: None,
                ..s.clone()
            })
        }
    }

    /// Record the term without searching, dropping any pending search
    pub fn set_term(&self, term: &str) -> Arc<SearchState> {
        self.debouncer.cancel();
        self.store.update(|s| SearchState {
            term: term.to_string(),
            searching: false,
            error: None,
            ..s.clone()
        })
    }

    /// Wait until no search is scheduled or in flight
    pub async fn settled(&self) -> Arc<SearchState> {
        let mut rx = self.store.subscribe();
        match rx.wait_for(|s| !s.searching).await {
            Ok(state) => Arc::clone(&state),
            Err(_) => self.store.snapshot(),
        }
    }

    /// Add one unit of `result` to the list
    pub async fn add_result(&self, result: &SearchResult, ctx: &SessionContext) -> Arc<SearchState> {
        let Ok(session) = ctx.require() else {
            return self.store.update(|s| SearchState {
                error: Some(login_required("add items")),
                ..s.clone()
            });
        };

        let payload = result.to_new_item();
        if payload.product_name.is_empty() {
            return self.fail_add(ValidationError::MissingProductName.into());
        }

        match self.client.add_item(&session, &payload).await {
            Ok(created) => {
                debug!("Added item {} ({})", created.id, created.product_name);
                self.debouncer.cancel();
                self.store.update(|s| SearchState {
                    term: String::new(),
                    results: Vec::new(),
                    searching: false,
                    error: None,
                    last_added: Some(created),
                    ..s.clone()
                })
            }
            Err(err) => self.fail_add(err),
        }
    }

    /// Add the current term as a name-only item
    pub async fn manual_add(&self, ctx: &SessionContext) -> Arc<SearchState> {
        let term = self.store.snapshot().term.clone();
        self.add_result(&SearchResult::manual(&term), ctx).await
    }

    fn fail_add(&self, err: Error) -> Arc<SearchState> {
        warn!("Add failed: {}", err);
        let message = err.user_message("Failed to add item to list.");
        self.store.update(|s| SearchState {
            error: Some(message),
            ..s.clone()
        })
    }
}

async fn run_search<C: SearchApi>(
    client: &C,
    store: &Store<SearchState>,
    request: SearchRequest,
    limit: usize,
) {
    let Some(session) = request.session else {
        store.update(|s| SearchState {
            searching: false,
            error: Some(login_required("search")),
            ..s.clone()
        });
        return;
    };

    debug!("Searching for {:?}", request.query);
    match client.search_products(&session, &request.query).await {
        Ok(products) => {
            let results = SearchResult::from_products(&products, limit);
            debug!("Search returned {} products", products.len());
            store.update(|s| SearchState {
                results,
                searching: false,
                error: None,
                ..s.clone()
            });
        }
        Err(err) => {
            warn!("Search failed: {}", err);
            let message = err.user_message("Failed to perform search.");
            store.update(|s| SearchState {
                results: Vec::new(),
                searching: false,
                error: Some(message),
                ..s.clone()
            });
        }
    }
}
