//! Reducer trait and in-place dispatch.

use super::intent::Intent;
use super::state::UiState;

/// The only place a state transition happens.
///
/// `reduce` must stay pure: effects (pushing a location, scheduling a fetch)
/// belong to the caller around the dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `R` over the state stored in `slot`, replacing it with the result.
pub fn dispatch<R: Reducer>(slot: &mut R::State, intent: R::Intent) {
    *slot = R::reduce(std::mem::take(slot), intent);
}
