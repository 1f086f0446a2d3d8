//! JSON envelope for machine-readable output
//!
//! Every JSON document is `{"data": ..., "meta": {...}}`. Collections also
//! report how many entries `data` holds and, when a filter hid some, how many
//! the list had in total.

use chrono::Utc;
use serde::Serialize;

/// Top-level JSON document
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
    pub meta: Meta,
}

#[derive(Debug, Serialize)]
pub struct Meta {
    /// RFC 3339 time the document was produced
    pub timestamp: String,
    pub version: String,
    /// Entries in `data`, for collections only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Entries before filtering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl Meta {
    fn now(count: Option<usize>, total: Option<usize>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            count,
            total,
        }
    }
}

impl<T> Envelope<T> {
    /// Wrap a single record
    pub fn record(data: T) -> Self {
        Self {
            data,
            meta: Meta::now(None, None),
        }
    }
}

impl<'a, T> Envelope<&'a [T]> {
    /// Wrap a list; `total` is the size before any filter was applied
    pub fn list(items: &'a [T], total: Option<usize>) -> Self {
        Self {
            data: items,
            meta: Meta::now(Some(items.len()), total.filter(|t| *t != items.len())),
        }
    }
}

/// Format one record as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Envelope::record(data))
}

/// Format a list with its entry count
pub fn format_json_list<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Envelope::list(items, None))
}

/// Format a filtered list with its entry count and the unfiltered total
pub fn format_json_filtered<T: Serialize>(
    items: &[T],
    total: usize,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Envelope::list(items, Some(total)))
}
