//! Filter state synchronizer.
//!
//! Keeps the listing page's filter parameters, the navigation location and
//! the data-fetching layer converging: every user edit becomes a
//! [`NavigationEffect`](crate::navigation::NavigationEffect), every trigger
//! goes through one debounced refetch, and the loading flag follows the
//! state machine in [`loading`].

mod debounce;
pub mod loading;
mod synchronizer;

pub use debounce::Debouncer;
pub use loading::{LoadingIntent, LoadingReducer, LoadingState};
pub use synchronizer::FilterSynchronizer;

use async_trait::async_trait;

use crate::catalog::CatalogError;

/// The data-fetching collaborator.
///
/// The synchronizer calls it with no arguments and only looks at whether the
/// returned future settled with `Ok` or `Err`.
#[async_trait]
pub trait Refetch: Send + Sync {
    async fn refetch(&self) -> Result<(), CatalogError>;
}
