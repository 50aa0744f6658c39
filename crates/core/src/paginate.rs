//! Cursor-based pagination
//!
//! Drains a listing operation that returns a page of items plus an optional
//! continuation cursor into one flattened sequence. Used by the queue client
//! for ListQueues; written generically since other listings follow the same
//! protocol.

use std::future::Future;

use crate::error::Result;

/// One page of a cursor-based listing
#[derive(Debug, Clone, Default)]
pub struct Page<T> {
    /// Items in server-returned order
    pub items: Vec<T>,

    /// Cursor resuming the listing after the last item, if more remain
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// A final page carrying all remaining items
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_cursor: None,
        }
    }
}

/// Repeatedly invoke `fetch` — starting with no cursor — concatenating pages
/// in the order received, until a response omits a next cursor.
///
/// An empty first page without a cursor yields an empty vec. Once a response
/// carries no cursor, `fetch` is not called again.
pub async fn drain_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut all = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch(cursor.take()).await?;
        all.extend(page.items);
        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(all)
}
