use crate::mvi::{Intent, Reducer, UiState};
use crate::query::PriceRange;

/// Local state of the listing view that never reaches the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingViewState {
    /// One-way: once set the full description stays visible.
    pub show_more: bool,
    /// Price range the slider shows before it is applied. `None` follows
    /// the location.
    pub price_draft: Option<PriceRange>,
}

impl UiState for ListingViewState {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingViewIntent {
    ShowMore,
    SetPriceDraft(PriceRange),
    /// The draft was committed to the location.
    ClearPriceDraft,
    /// The route changed; start over.
    Reset,
}

impl Intent for ListingViewIntent {}

pub struct ListingViewReducer;

impl Reducer for ListingViewReducer {
    type State = ListingViewState;
    type Intent = ListingViewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListingViewIntent::ShowMore => ListingViewState {
                show_more: true,
                ..state
            },
            ListingViewIntent::SetPriceDraft(range) => ListingViewState {
                price_draft: Some(range),
                ..state
            },
            ListingViewIntent::ClearPriceDraft => ListingViewState {
                price_draft: None,
                ..state
            },
            ListingViewIntent::Reset => ListingViewState::default(),
        }
    }
}
