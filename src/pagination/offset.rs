//! Offset pagination
//!
//! Walks `limit`-sized pages by row offset, e.g. `?pageOffset=20&pageLimit=10`.
//! A page shorter than the limit is the last. The check counts raw rows, before
//! any identifier filtering, so a page whose rows are all filtered out still
//! advances the walk.

use super::types::{NextPage, PageRequest, PaginationState};
use crate::error::{Error, Result};

/// Offset-based paginator
#[derive(Debug, Clone, Copy)]
pub struct OffsetPaginator {
    /// Number of rows per page
    pub page_size: u32,
}

impl OffsetPaginator {
    /// Create a new offset paginator. A zero page size would never terminate.
    pub fn new(page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::config("page size must be greater than zero"));
        }
        Ok(Self { page_size })
    }

    /// Request for the page described by `state`
    pub fn request(&self, state: &PaginationState) -> PageRequest {
        PageRequest {
            offset: state.offset,
            limit: self.page_size,
        }
    }

    /// Record a page of `raw_count` rows and decide whether to continue
    pub fn process_page(&self, raw_count: usize, state: &mut PaginationState) -> NextPage {
        state.add_fetched(raw_count as u64);

        // Exactly `page_size` rows is ambiguous; the next request settles it.
        if raw_count < self.page_size as usize {
            state.mark_done();
            return NextPage::Done;
        }

        state.advance(self.page_size);
        NextPage::Continue {
            offset: state.offset,
        }
    }
}
