//! Navigation layer: immutable location snapshots and the effects that
//! replace them.
//!
//! Nothing here mutates a shared location in place. Callers compute a new
//! [`Location`], wrap it in a [`NavigationEffect`] and hand it to a
//! [`Navigator`], which records it and announces
//! [`NavigationEvent::RouteChangeComplete`] to its subscribers.

mod location;
mod memory;

pub use location::{
    HistoryMode, Location, NavigationEffect, NavigationError, NavigationEvent, PageRoute,
    PageType,
};
pub use memory::MemoryNavigator;

use tokio::sync::broadcast;

/// The navigation collaborator the filter synchronizer talks to.
pub trait Navigator: Send + Sync {
    /// Snapshot of the current location.
    fn location(&self) -> Location;

    /// Apply an effect: record the location, then announce completion.
    fn push(&self, effect: NavigationEffect);

    /// Step back one history entry. Returns false at the start of history.
    fn back(&self) -> bool;

    fn subscribe(&self) -> broadcast::Receiver<NavigationEvent>;
}
