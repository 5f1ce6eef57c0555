//! Loading flag state machine.
//!
//! ```text
//!        Trigger{g}                 Settled{g} (g == current)
//! Idle ─────────────→ Loading{g} ─────────────────────────→ Idle
//!                      │    ↑
//!                      └────┘ Trigger{g'}: Loading{g'}
//!                             Settled{old}: unchanged
//! ```
//!
//! Each trigger carries a fresh generation. Only the settle of the fetch
//! dispatched for the newest generation returns the machine to `Idle`, so
//! overlapping triggers never make the flag flicker.

use crate::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading {
        generation: u64,
    },
}

impl UiState for LoadingState {}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingIntent {
    /// A sort change, category click or completed navigation.
    Trigger { generation: u64 },
    /// The fetch dispatched for `generation` settled (success or failure).
    Settled { generation: u64 },
}

impl Intent for LoadingIntent {}

pub struct LoadingReducer;

impl Reducer for LoadingReducer {
    type State = LoadingState;
    type Intent = LoadingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoadingIntent::Trigger { generation } => LoadingState::Loading { generation },
            LoadingIntent::Settled { generation } => match state {
                LoadingState::Loading { generation: current } if current == generation => {
                    LoadingState::Idle
                }
                other => other,
            },
        }
    }
}
