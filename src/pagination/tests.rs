//! Tests for pagination module

use super::*;

fn paginator(limit: u32) -> OffsetPaginator {
    OffsetPaginator::new(limit).unwrap()
}

// ============================================================================
// NextPage Tests
// ============================================================================

#[test]
fn test_next_page_predicates() {
    let next = NextPage::Continue { offset: 10 };
    assert!(next.is_continue());
    assert!(!next.is_done());

    let done = NextPage::Done;
    assert!(done.is_done());
    assert!(!done.is_continue());
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_default() {
    let state = PaginationState::new();
    assert_eq!(state.page, 0);
    assert_eq!(state.offset, 0);
    assert_eq!(state.total_fetched, 0);
    assert!(!state.done);
}

#[test]
fn test_pagination_state_advance() {
    let mut state = PaginationState::new();
    state.advance(10);
    state.advance(10);
    assert_eq!(state.page, 2);
    assert_eq!(state.offset, 20);
}

// ============================================================================
// OffsetPaginator Tests
// ============================================================================

#[test]
fn test_offset_rejects_zero_limit() {
    let err = OffsetPaginator::new(0).unwrap_err();
    assert!(err.to_string().contains("page size"));
}

#[test]
fn test_offset_initial_request() {
    let p = paginator(10);
    let req = p.request(&PaginationState::new());
    assert_eq!(req, PageRequest { offset: 0, limit: 10 });
}

#[test]
fn test_offset_full_page_continues() {
    let p = paginator(10);
    let mut state = PaginationState::new();

    let next = p.process_page(10, &mut state);
    assert_eq!(next, NextPage::Continue { offset: 10 });
    assert_eq!(state.total_fetched, 10);
    assert!(!state.done);

    assert_eq!(p.request(&state), PageRequest { offset: 10, limit: 10 });
}

#[test]
fn test_offset_short_page_stops() {
    let p = paginator(10);
    let mut state = PaginationState::new();

    p.process_page(10, &mut state);
    let next = p.process_page(4, &mut state);

    assert!(next.is_done());
    assert!(state.done);
    assert_eq!(state.total_fetched, 14);
    // Offset stays on the last requested page
    assert_eq!(state.offset, 10);
}

#[test]
fn test_offset_empty_page_stops() {
    let p = paginator(10);
    let mut state = PaginationState::new();
    assert!(p.process_page(0, &mut state).is_done());
}

#[test]
fn test_offset_exact_multiple_needs_extra_page() {
    let p = paginator(5);
    let mut state = PaginationState::new();

    assert!(p.process_page(5, &mut state).is_continue());
    assert!(p.process_page(5, &mut state).is_continue());
    // Only the trailing empty page ends the walk
    assert!(p.process_page(0, &mut state).is_done());
    assert_eq!(state.page, 2);
}
