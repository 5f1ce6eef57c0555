//! Listing page: data model, view state, and the pure renderer.
//!
//! [`render_listing`] turns a [`ListingData`] plus a [`RenderContext`] into a
//! [`ListingView`] tree. Interactive elements carry the [`ViewAction`] they
//! emit, so a host draws the tree and feeds chosen actions back to the
//! filter synchronizer.

mod data;
pub mod options;
pub mod page;
mod render;
mod sidebar;
mod state;
mod view;

pub use data::{BreadcrumbSegment, ListingData, DEFAULT_HEADING};
pub use render::{render_listing, RenderContext};
pub use state::{ListingViewIntent, ListingViewReducer, ListingViewState};
pub use view::{
    BannerView, CategoryFilters, CategoryLink, DescriptionView, GridView, ListingView,
    PriceRangeView, ProductCard, SelectView, SidebarView, StorePagerView, ToggleView, ViewAction,
};
