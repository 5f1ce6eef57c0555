//! Storefront product-listing engine.
//!
//! The crate keeps the listing page's query-string filter state in sync with
//! a navigation layer, re-fetches catalog data through a debounced path, and
//! renders the page as a typed view tree that any host can draw. The bundled
//! host is a terminal UI (see [`ui`]).

pub mod catalog;
pub mod config;
pub mod listing;
pub mod logging;
pub mod mvi;
pub mod navigation;
pub mod query;
pub mod sync;
pub mod ui;
