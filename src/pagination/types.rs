//! Pagination types

/// Result of the next page computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Another page should be requested at this offset
    Continue {
        /// Row offset of the next page
        offset: u32,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// One page to fetch from a listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Row offset of the first row
    pub offset: u32,
    /// Maximum rows in the page
    pub limit: u32,
}

/// Tracks pagination state during a page walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Zero-based index of the page to request next
    pub page: u32,
    /// Row offset of the page to request next
    pub offset: u32,
    /// Raw rows fetched so far (before filtering)
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Advance to the next page of `page_size` rows
    pub fn advance(&mut self, page_size: u32) {
        self.page += 1;
        self.offset = self.page.saturating_mul(page_size);
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: u64) {
        self.total_fetched += count;
    }
}
