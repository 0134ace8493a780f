//! Forward-only cursor pager
//!
//! Hides continuation-token bookkeeping from the caller. Pages are fetched
//! one at a time, strictly in server order.

use super::types::{ListOperation, PageRequest};
use crate::error::{Error, Result};
use futures::stream::{self, Stream};
use std::collections::{HashSet, VecDeque};
use std::marker::PhantomData;
use tracing::debug;

/// Iterates a paginated listing by following `next.href` cursors
///
/// Two states: active (`has_next() == true`) and exhausted. The only
/// transition is active -> exhausted, on a fetch that returns no cursor.
pub struct CursorPager<T, L> {
    list: L,
    request: PageRequest,
    cursor: Option<String>,
    seen: HashSet<String>,
    has_next: bool,
    pages_fetched: usize,
    _item: PhantomData<fn() -> T>,
}

impl<T, L> CursorPager<T, L>
where
    L: ListOperation<T>,
{
    /// Create a pager over `list`, applying `request` to every page
    ///
    /// Fails with [`Error::CursorPreset`] if `request` already carries a
    /// cursor. No request is sent here.
    pub fn new(list: L, mut request: PageRequest) -> Result<Self> {
        request.ensure_no_cursor()?;
        Ok(Self {
            list,
            request,
            cursor: None,
            seen: HashSet::new(),
            has_next: true,
            pages_fetched: 0,
            _item: PhantomData,
        })
    }

    /// Whether another page may be fetched
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Cursor that will be sent with the next fetch
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Parameters applied to every page
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    /// Fetch the next page of items
    ///
    /// Errors from the list operation are returned unchanged and leave the
    /// pager as it was, so the call may be repeated.
    pub async fn next_page(&mut self) -> Result<Vec<T>> {
        if !self.has_next {
            return Err(Error::PagerExhausted);
        }

        let mut request = self.request.clone();
        if let Some(cursor) = &self.cursor {
            request.set_cursor(cursor.clone());
        }

        let response = self.list.list(request).await?;
        let next_cursor = response.next_cursor()?;

        // A cursor already followed means the server is cycling
        if let Some(received) = &next_cursor {
            if self.seen.contains(received) {
                return Err(Error::RepeatedCursor {
                    cursor: received.clone(),
                });
            }
        }

        self.pages_fetched += 1;
        debug!(
            page = self.pages_fetched,
            items = response.items.len(),
            has_next = next_cursor.is_some(),
            "Fetched page"
        );

        self.has_next = next_cursor.is_some();
        if let Some(cursor) = &next_cursor {
            self.seen.insert(cursor.clone());
        }
        self.cursor = next_cursor;
        Ok(response.items)
    }

    /// Fetch every remaining page and concatenate the items in order
    pub async fn collect_all(&mut self) -> Result<Vec<T>> {
        let mut all = Vec::new();
        while self.has_next {
            let page = self.next_page().await?;
            all.extend(page);
        }
        Ok(all)
    }

    /// Turn the pager into a stream of individual items
    ///
    /// Pages are requested lazily as the stream is polled. An error ends the
    /// stream after it is yielded.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        stream::unfold(
            (self, VecDeque::new(), false),
            |(mut pager, mut buffer, failed)| async move {
                loop {
                    if let Some(item) = buffer.pop_front() {
                        return Some((Ok(item), (pager, buffer, failed)));
                    }
                    if failed || !pager.has_next() {
                        return None;
                    }
                    match pager.next_page().await {
                        Ok(items) => buffer.extend(items),
                        Err(e) => return Some((Err(e), (pager, buffer, true))),
                    }
                }
            },
        )
    }
}

impl<T, L> std::fmt::Debug for CursorPager<T, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorPager")
            .field("request", &self.request)
            .field("cursor", &self.cursor)
            .field("has_next", &self.has_next)
            .field("pages_fetched", &self.pages_fetched)
            .finish_non_exhaustive()
    }
}
