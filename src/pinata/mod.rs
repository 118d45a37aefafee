//! Pinning service client
//!
//! HTTP adapter for the listing, upload and gateway endpoints. Implements
//! [`PinListing`](crate::aggregator::PinListing) for the page walk and
//! [`PinUpload`](crate::upload::PinUpload) for the upload fan-out.

mod client;

pub use client::{GatewayClient, PinataClient, PIN_FILE_PATH, PIN_LIST_PATH};

#[cfg(test)]
mod tests;
