//! Model-View-Intent primitives shared by the listing page.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ ListingView
//!    ↑                                 │
//!    └────────── ViewAction ───────────┘
//! ```
//!
//! Both the loading machine of the filter synchronizer and the local view
//! state of the listing page are driven through these traits, so every state
//! transition is a plain `(State, Intent) -> State` function that can be
//! tested without a runtime.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use state::UiState;
