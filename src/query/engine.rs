//! Query Engine Module
//!
//! Applies optional substring search and offset/limit pagination to a
//! record slice, preserving original file order.

use crate::error::{ApiError, Result};
use crate::store::Record;

// == Find Options ==
/// Validated query parameters for a `find` call.
///
/// `offset` defaults to 0 and a missing `limit` means unbounded; negative
/// raw inputs are rejected before this type is built (see
/// `models::ListParams::validate`).
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Case-insensitive substring to match against record names
    pub query: Option<String>,
    /// Number of matched records to skip
    pub offset: usize,
    /// Maximum page size, None for unbounded
    pub limit: Option<usize>,
}

// == Page ==
/// A contiguous slice of the filtered record sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Records in original file order
    pub items: Vec<Record>,
    /// Size of the full filtered set, not the page
    pub total: usize,
    /// Offset the page was requested at
    pub offset: usize,
    /// Limit the page was requested with
    pub limit: Option<usize>,
}

// == Find ==
/// Filters and paginates the record sequence.
///
/// Records whose name contains `query` (case-insensitive) are kept, in
/// original order. The returned slice is `[offset, offset+limit)` clamped
/// to the filtered bounds, so an offset past the end yields an empty page
/// with the correct `total`.
pub fn find(records: &[Record], opts: &FindOptions) -> Page {
    let matched: Vec<&Record> = match &opts.query {
        Some(query) => {
            let needle = query.to_lowercase();
            records
                .iter()
                .filter(|r| r.name.to_lowercase().contains(&needle))
                .collect()
        }
        None => records.iter().collect(),
    };

    let total = matched.len();
    let start = opts.offset.min(total);
    let end = match opts.limit {
        Some(limit) => start.saturating_add(limit).min(total),
        None => total,
    };

    Page {
        items: matched[start..end].iter().map(|r| (*r).clone()).collect(),
        total,
        offset: opts.offset,
        limit: opts.limit,
    }
}

// == Find By Id ==
/// Looks up a record by id.
///
/// Fails with `NotFound` when no record carries the id.
pub fn find_by_id(records: &[Record], id: u64) -> Result<&Record> {
    records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("no record with id {}", id)))
}
