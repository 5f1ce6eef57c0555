//! Remote commerce catalog: wire types, the HTTP client, and the
//! fetch-key cache the filter synchronizer refetches through.

mod client;
mod error;
mod query;
mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use query::{ListingQuery, RetryPolicy};
pub use types::{Category, FilterType, ImageSet, ListingFilters, ListingPayload, ListingResponse, Product};
