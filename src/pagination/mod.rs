//! Pagination module
//!
//! Cursor-based pagination over the control plane's list endpoints.
//!
//! # Overview
//!
//! A list endpoint answers with `{ "items": [...], "next": { "href": "..." } }`.
//! The `start` query parameter of `next.href` is the cursor for the following
//! call. [`CursorPager`] tracks that cursor so callers only ask for
//! "the next page" or "everything".

mod pager;
mod types;

pub use pager::CursorPager;
pub use types::{extract_cursor, ListOperation, NextLink, PageRequest, PageResponse, START_PARAM};
