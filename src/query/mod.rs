//! Query-string state for the listing page.
//!
//! [`QueryParams`] is the wire-level mapping carried by a navigation
//! location. [`merge_filters`] is the single merge-or-delete rule every
//! filter control goes through, and [`FilterState`] is a typed, read-only
//! projection with defaults applied.

mod filter;
mod params;

pub use filter::{
    keys, merge_filters, FilterState, FilterUpdate, FilterValue, PriceRange, SortKey,
    DEFAULT_PRICE_MAX, DEFAULT_STORE_PAGE,
};
pub use params::QueryParams;
