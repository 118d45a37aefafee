//! Tests for the page walk

use super::*;
use pretty_assertions::assert_eq;
use std::sync::atomic::AtomicBool;
use std::sync::{Mutex, OnceLock};
use tokio::sync::Notify;

/// Serves slices of a fixed row list and records every request
#[derive(Default)]
struct PagedListing {
    rows: Vec<PinRow>,
    fail_at_offset: Option<u32>,
    requests: Mutex<Vec<PageRequest>>,
    observed_loading: Mutex<Vec<bool>>,
    loading: OnceLock<LoadingFlag>,
}

impl PagedListing {
    fn new(rows: Vec<PinRow>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    fn failing_at(mut self, offset: u32) -> Self {
        self.fail_at_offset = Some(offset);
        self
    }

    fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PinListing for PagedListing {
    async fn list_page(&self, request: PageRequest) -> Result<Vec<PinRow>> {
        self.requests.lock().unwrap().push(request);
        if let Some(flag) = self.loading.get() {
            self.observed_loading
                .lock()
                .unwrap()
                .push(flag.is_loading());
        }

        if self.fail_at_offset == Some(request.offset) {
            return Err(Error::http_status(500, "boom"));
        }

        let start = (request.offset as usize).min(self.rows.len());
        let end = (start + request.limit as usize).min(self.rows.len());
        Ok(self.rows[start..end].to_vec())
    }
}

/// Parks the first request until released; later requests pass straight through
#[derive(Default)]
struct ParkingListing {
    inner: PagedListing,
    parked: AtomicBool,
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl PinListing for ParkingListing {
    async fn list_page(&self, request: PageRequest) -> Result<Vec<PinRow>> {
        if !self.parked.swap(true, Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }
        self.inner.list_page(request).await
    }
}

fn parking(rows: Vec<PinRow>) -> ParkingListing {
    ParkingListing {
        inner: PagedListing::new(rows),
        ..Default::default()
    }
}

fn v0_rows(count: usize) -> Vec<PinRow> {
    (0..count).map(|i| PinRow::new(format!("Qm{i:04}"))).collect()
}

fn ids(outcome: &FetchOutcome) -> Vec<&str> {
    outcome
        .items
        .iter()
        .map(|item| item.content_id.as_str())
        .collect()
}

#[tokio::test]
async fn test_three_pages_ending_short() {
    let aggregator = PinAggregator::new(PagedListing::new(v0_rows(24)));

    let outcome = aggregator.fetch_all().await;

    assert_eq!(outcome.items.len(), 24);
    assert_eq!(outcome.pages_requested, 3);
    assert_eq!(outcome.status(), WalkStatus::Complete);
    assert!(!aggregator.is_loading());
    assert_eq!(
        aggregator.source().requests(),
        vec![
            PageRequest { offset: 0, limit: 10 },
            PageRequest { offset: 10, limit: 10 },
            PageRequest { offset: 20, limit: 10 },
        ]
    );
}

#[tokio::test]
async fn test_first_request_fails() {
    let aggregator = PinAggregator::new(PagedListing::new(v0_rows(30)).failing_at(0));

    let outcome = aggregator.fetch_all().await;

    assert!(outcome.items.is_empty());
    assert_eq!(outcome.pages_requested, 1);
    assert_eq!(outcome.status(), WalkStatus::Partial);
    assert!(matches!(
        outcome.error,
        Some(Error::HttpStatus { status: 500, .. })
    ));
    assert!(!aggregator.is_loading());
    assert_eq!(aggregator.source().requests().len(), 1);
}

#[tokio::test]
async fn test_failure_keeps_partial_results() {
    let aggregator = PinAggregator::new(PagedListing::new(v0_rows(35)).failing_at(20));

    let outcome = aggregator.fetch_all().await;

    assert_eq!(outcome.items.len(), 20);
    assert_eq!(outcome.pages_requested, 3);
    assert!(!outcome.is_complete());
    assert_eq!(outcome.items[19].content_id, "Qm0019");
}

#[tokio::test]
async fn test_request_count_for_page_sizes_and_totals() {
    for page_size in 1..=6u32 {
        for total in 0..=25usize {
            let aggregator = PinAggregator::new(PagedListing::new(v0_rows(total)))
                .with_page_size(page_size)
                .unwrap();

            let outcome = aggregator.fetch_all().await;

            let n = page_size as usize;
            let expected = if total % n == 0 {
                total / n + 1
            } else {
                total.div_ceil(n)
            };
            assert_eq!(
                outcome.pages_requested as usize, expected,
                "page_size={page_size} total={total}"
            );
            assert_eq!(outcome.items.len(), total);
            assert_eq!(outcome.rows_seen, total as u64);
        }
    }
}

#[tokio::test]
async fn test_exact_multiple_issues_trailing_empty_request() {
    let aggregator = PinAggregator::new(PagedListing::new(v0_rows(20)));

    let outcome = aggregator.fetch_all().await;

    assert_eq!(outcome.items.len(), 20);
    assert_eq!(outcome.pages_requested, 3);
    assert_eq!(
        aggregator.source().requests().last(),
        Some(&PageRequest { offset: 20, limit: 10 })
    );
}

#[tokio::test]
async fn test_filter_drops_rows_without_affecting_offsets() {
    // Every other row is a CIDv1 and gets filtered out
    let rows: Vec<PinRow> = (0..25)
        .map(|i| {
            if i % 2 == 0 {
                PinRow::new(format!("Qm{i:04}"))
            } else {
                PinRow::new(format!("bafy{i:04}"))
            }
        })
        .collect();
    let aggregator = PinAggregator::new(PagedListing::new(rows));

    let outcome = aggregator.fetch_all().await;

    assert_eq!(outcome.pages_requested, 3);
    assert_eq!(outcome.items.len(), 13);
    assert_eq!(outcome.rows_seen, 25);
    let offsets: Vec<u32> = aggregator
        .source()
        .requests()
        .iter()
        .map(|r| r.offset)
        .collect();
    assert_eq!(offsets, vec![0, 10, 20]);
}

#[tokio::test]
async fn test_page_of_only_filtered_rows_still_continues() {
    let mut rows: Vec<PinRow> = (0..10).map(|i| PinRow::new(format!("bafy{i}"))).collect();
    rows.extend(v0_rows(3));
    let aggregator = PinAggregator::new(PagedListing::new(rows));

    let outcome = aggregator.fetch_all().await;

    assert_eq!(outcome.pages_requested, 2);
    assert_eq!(ids(&outcome), vec!["Qm0000", "Qm0001", "Qm0002"]);
}

#[tokio::test]
async fn test_order_is_page_order() {
    let rows = vec![
        PinRow::new("QmZeta"),
        PinRow::new("QmAlpha"),
        PinRow::new("QmMid"),
    ];
    let aggregator = PinAggregator::new(PagedListing::new(rows))
        .with_page_size(2)
        .unwrap();

    let outcome = aggregator.fetch_all().await;

    assert_eq!(ids(&outcome), vec!["QmZeta", "QmAlpha", "QmMid"]);
}

#[tokio::test]
async fn test_items_use_gateway_urls() {
    let gateway = Gateway::new("https://example.mypinata.cloud").unwrap();
    let aggregator = PinAggregator::new(PagedListing::new(v0_rows(1))).with_gateway(gateway);

    let outcome = aggregator.fetch_all().await;

    let item = &outcome.items[0];
    assert_eq!(item.original_name, "Qm0000");
    assert_eq!(
        item.display_url,
        "https://example.mypinata.cloud/ipfs/Qm0000"
    );
}

#[tokio::test]
async fn test_custom_filter() {
    let rows = vec![PinRow::new("bafyA"), PinRow::new("QmB")];
    let aggregator = PinAggregator::new(PagedListing::new(rows)).with_filter(CidFilter::v1());

    let outcome = aggregator.fetch_all().await;

    assert_eq!(ids(&outcome), vec!["bafyA"]);
}

#[tokio::test]
async fn test_loading_flag_true_during_walk() {
    let aggregator = PinAggregator::new(PagedListing::new(v0_rows(15)));
    aggregator
        .source()
        .loading
        .set(aggregator.loading_flag())
        .unwrap();

    assert!(!aggregator.is_loading());
    aggregator.fetch_all().await;

    assert_eq!(
        *aggregator.source().observed_loading.lock().unwrap(),
        vec![true, true]
    );
    assert!(!aggregator.is_loading());
}

#[tokio::test]
async fn test_overlapping_walks_keep_flag_until_last_finishes() {
    let aggregator = PinAggregator::new(parking(v0_rows(3)));

    let mut slow = Box::pin(aggregator.fetch_all());
    tokio::select! {
        _ = &mut slow => panic!("first walk should be parked"),
        () = aggregator.source().entered.notified() => {}
    }
    assert!(aggregator.is_loading());

    let fast = aggregator.fetch_all().await;
    assert_eq!(fast.items.len(), 3);
    assert!(aggregator.is_loading());

    aggregator.source().release.notify_one();
    let slow = slow.await;
    assert_eq!(slow.items.len(), 3);
    assert!(!aggregator.is_loading());
}

#[tokio::test]
async fn test_dropped_walk_resets_flag() {
    let aggregator = PinAggregator::new(parking(v0_rows(3)));
    let observer = aggregator.loading_flag();

    let mut walk = Box::pin(aggregator.fetch_all());
    tokio::select! {
        _ = &mut walk => panic!("walk should be parked"),
        () = aggregator.source().entered.notified() => {}
    }
    assert!(observer.is_loading());

    drop(walk);
    assert!(!observer.is_loading());
    assert!(!aggregator.is_loading());
}

#[tokio::test]
async fn test_refetch_repeats_full_walk() {
    let aggregator = PinAggregator::new(PagedListing::new(v0_rows(12)));

    let first = aggregator.fetch_all().await;
    let second = aggregator.fetch_all().await;

    assert_eq!(first.items, second.items);
    assert_eq!(aggregator.source().requests().len(), 4);
}

#[test]
fn test_zero_page_size_rejected() {
    let result = PinAggregator::new(PagedListing::default()).with_page_size(0);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_shared_source_through_arc() {
    let source = Arc::new(PagedListing::new(v0_rows(3)));
    let aggregator = PinAggregator::new(Arc::clone(&source));

    let outcome = aggregator.fetch_all().await;

    assert_eq!(outcome.items.len(), 3);
    assert_eq!(source.requests().len(), 1);
}
