//! Paginated retrieval of pinned items
//!
//! The aggregator walks the listing endpoint page by page, strictly in
//! sequence, and builds the full gallery from scratch on every call.
//!
//! ```text
//! idle ──fetch_all──▶ loading ──short page──▶ Complete ──▶ idle
//!                        │
//!                        └──request failed──▶ Partial ──▶ idle
//! ```
//!
//! A failed page ends the walk but keeps everything gathered before it.

use crate::error::{Error, Result};
use crate::filter::CidFilter;
use crate::gateway::Gateway;
use crate::pagination::{OffsetPaginator, PageRequest, PaginationState};
use crate::types::{PinRow, PinnedItem};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Default number of rows requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A paginated listing of pins
#[async_trait]
pub trait PinListing: Send + Sync {
    /// Fetch the raw rows of one page
    async fn list_page(&self, request: PageRequest) -> Result<Vec<PinRow>>;
}

#[async_trait]
impl<T: PinListing + ?Sized> PinListing for Arc<T> {
    async fn list_page(&self, request: PageRequest) -> Result<Vec<PinRow>> {
        (**self).list_page(request).await
    }
}

/// How a page walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    /// A short page was reached
    Complete,
    /// A request failed; items are what was gathered before it
    Partial,
}

/// Result of one page walk
#[derive(Debug)]
pub struct FetchOutcome {
    /// Items in page order
    pub items: Vec<PinnedItem>,
    /// Requests issued, including a failed one
    pub pages_requested: u32,
    /// Raw rows received before filtering
    pub rows_seen: u64,
    /// The failure that ended the walk early, if any
    pub error: Option<Error>,
}

impl FetchOutcome {
    pub fn status(&self) -> WalkStatus {
        if self.error.is_some() {
            WalkStatus::Partial
        } else {
            WalkStatus::Complete
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == WalkStatus::Complete
    }
}

/// Observer for an aggregator's loading state, shareable across tasks
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag {
    active: Arc<AtomicUsize>,
}

impl LoadingFlag {
    /// True while at least one page walk is running
    pub fn is_loading(&self) -> bool {
        self.active.load(Ordering::SeqCst) > 0
    }

    fn engage(&self) -> LoadingGuard<'_> {
        self.active.fetch_add(1, Ordering::SeqCst);
        LoadingGuard { active: &self.active }
    }
}

/// Walks a [`PinListing`] and aggregates the matching rows
pub struct PinAggregator<S> {
    source: S,
    paginator: OffsetPaginator,
    filter: CidFilter,
    gateway: Gateway,
    loading: LoadingFlag,
}

impl<S: PinListing> PinAggregator<S> {
    /// Create an aggregator with the default page size, filter and gateway
    pub fn new(source: S) -> Self {
        Self {
            source,
            paginator: OffsetPaginator {
                page_size: DEFAULT_PAGE_SIZE,
            },
            filter: CidFilter::default(),
            gateway: Gateway::default(),
            loading: LoadingFlag::default(),
        }
    }

    /// Set the page size (must be non-zero)
    pub fn with_page_size(mut self, page_size: u32) -> Result<Self> {
        self.paginator = OffsetPaginator::new(page_size)?;
        Ok(self)
    }

    /// Set the identifier filter
    #[must_use]
    pub fn with_filter(mut self, filter: CidFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the gateway used for display URLs
    #[must_use]
    pub fn with_gateway(mut self, gateway: Gateway) -> Self {
        self.gateway = gateway;
        self
    }

    pub fn page_size(&self) -> u32 {
        self.paginator.page_size
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// True only while a page walk is running
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Handle to the loading state, for observers on other tasks
    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    /// Fetch every pinned item, one page at a time
    pub async fn fetch_all(&self) -> FetchOutcome {
        let _loading = self.loading.engage();

        let mut state = PaginationState::new();
        let mut items = Vec::new();
        let mut pages_requested = 0u32;
        let mut failure = None;

        loop {
            let request = self.paginator.request(&state);
            pages_requested += 1;
            debug!(
                page = state.page,
                offset = request.offset,
                limit = request.limit,
                "Requesting pin page"
            );

            let rows = match self.source.list_page(request).await {
                Ok(rows) => rows,
                Err(e) => {
                    error!(offset = request.offset, error = %e, "Error fetching pinned files");
                    failure = Some(e);
                    break;
                }
            };

            let raw_count = rows.len();
            let before = items.len();
            items.extend(
                rows.iter()
                    .filter(|row| self.filter.matches(&row.ipfs_pin_hash))
                    .map(|row| PinnedItem::from_row(row, self.gateway.url_for(&row.ipfs_pin_hash))),
            );
            debug!(
                rows = raw_count,
                kept = items.len() - before,
                "Processed pin page"
            );

            if self.paginator.process_page(raw_count, &mut state).is_done() {
                break;
            }
        }

        info!(
            items = items.len(),
            pages = pages_requested,
            complete = failure.is_none(),
            "Pin listing finished"
        );

        FetchOutcome {
            items,
            pages_requested,
            rows_seen: state.total_fetched,
            error: failure,
        }
    }
}

impl<S> std::fmt::Debug for PinAggregator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinAggregator")
            .field("paginator", &self.paginator)
            .field("filter", &self.filter)
            .field("gateway", &self.gateway)
            .field("loading", &self.loading.is_loading())
            .finish_non_exhaustive()
    }
}

/// Counts one running walk for its lifetime, including on cancellation
struct LoadingGuard<'a> {
    active: &'a AtomicUsize,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests;
