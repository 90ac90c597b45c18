//! Count/offset listing endpoints expressed as cursor pages.
//!
//! The cursor is the decimal offset of the next page. A page shorter than
//! the requested count is the last one.

use super::page::DataPage;
use crate::error::PagingError;

/// Offset encoded in `cursor`; the first page starts at zero.
pub fn offset_from_cursor(cursor: Option<&str>) -> Result<usize, PagingError> {
    match cursor {
        None => Ok(0),
        Some(raw) => raw
            .parse()
            .map_err(|_| PagingError::InvalidCursor(raw.to_string())),
    }
}

impl<T> DataPage<T> {
    /// Page of a count/offset listing fetched with `offset` and `limit`.
    pub fn from_offset(items: Vec<T>, offset: usize, limit: usize) -> Self {
        let is_last = items.len() < limit;
        Self::new(items, (offset + limit).to_string(), is_last)
    }
}
