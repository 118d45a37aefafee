//! Pagination module
//!
//! Offset/limit pagination for the pin listing endpoint.
//!
//! # Overview
//!
//! The paginator produces the query parameters for each page and decides,
//! from the raw row count of a response, whether another page follows.
//! Pagination arithmetic only ever sees raw row counts; filtering happens
//! after the decision is made.

mod offset;
mod types;

pub use offset::OffsetPaginator;
pub use types::{NextPage, PageRequest, PaginationState};

#[cfg(test)]
mod tests;
