use std::sync::Arc;

use crate::catalog::ListingQuery;
use crate::config::ListingSettings;
use crate::listing::page::{listing_data, page_name};
use crate::listing::{
    render_listing, ListingView, ListingViewIntent, ListingViewReducer, ListingViewState,
    RenderContext, ViewAction,
};
use crate::mvi::dispatch;
use crate::navigation::{Location, NavigationEvent, PageRoute};
use crate::query::keys;
use crate::sync::FilterSynchronizer;

/// Which part of the page arrow keys act on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Sort,
    View,
    Sidebar,
    Grid,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Sort, Focus::View, Focus::Sidebar, Focus::Grid];

    fn step(self, offset: isize) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0) as isize;
        let len = Self::ORDER.len() as isize;
        Self::ORDER[(index + offset).rem_euclid(len) as usize]
    }
}

/// Terminal host state around one [`FilterSynchronizer`].
pub struct App {
    should_quit: bool,
    focus: Focus,
    sync: FilterSynchronizer,
    query: Arc<ListingQuery>,
    settings: ListingSettings,
    /// Listing view state (MVI pattern).
    view_state: ListingViewState,
    /// Route the view state belongs to; a different route resets it.
    route: PageRoute,
    sidebar_selection: usize,
    grid_offset: usize,
}

impl App {
    pub fn new(sync: FilterSynchronizer, query: Arc<ListingQuery>, settings: ListingSettings) -> Self {
        let route = sync.location().route.clone();
        Self {
            should_quit: false,
            focus: Focus::Sort,
            sync,
            query,
            settings,
            view_state: ListingViewState::default(),
            route,
            sidebar_selection: 0,
            grid_offset: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn cycle_focus(&mut self, offset: isize) {
        self.focus = self.focus.step(offset);
    }

    pub fn location(&self) -> &Location {
        self.sync.location()
    }

    pub fn is_loading(&self) -> bool {
        self.sync.is_loading()
    }

    pub fn view_state(&self) -> &ListingViewState {
        &self.view_state
    }

    pub fn sidebar_selection(&self) -> usize {
        self.sidebar_selection
    }

    pub fn grid_offset(&self) -> usize {
        self.grid_offset
    }

    pub fn move_sidebar_selection(&mut self, delta: isize, len: usize) {
        self.sidebar_selection = step_clamped(self.sidebar_selection, delta, len);
    }

    pub fn scroll_grid(&mut self, delta: isize, len: usize) {
        self.grid_offset = step_clamped(self.grid_offset, delta, len);
    }

    pub fn sync(&self) -> &FilterSynchronizer {
        &self.sync
    }

    pub fn query(&self) -> &Arc<ListingQuery> {
        &self.query
    }

    /// Render the current page from the latest payload.
    pub fn view(&self) -> ListingView {
        let location = self.sync.location();
        let response = self.query.data();
        let data = listing_data(location, response.as_deref());
        let name = page_name(&location.route);
        render_listing(
            &data,
            &RenderContext {
                page_type: location.route.page_type(),
                page_name: &name,
                loading: self.sync.is_loading(),
                view_state: &self.view_state,
                location,
                settings: &self.settings,
            },
        )
    }

    pub fn on_action(&mut self, action: ViewAction) {
        tracing::debug!(?action, "view action");
        match action {
            ViewAction::ShowMore => self.dispatch_view(ListingViewIntent::ShowMore),
            ViewAction::SetPriceDraft { range } => {
                self.dispatch_view(ListingViewIntent::SetPriceDraft(range))
            }
            ViewAction::SortChange { key, value } => {
                self.sync.on_sort_change(key, &value);
            }
            ViewAction::CategoryItemClick { slug } => {
                self.sync.on_category_item_click(&slug);
            }
            ViewAction::SetFilters { updates } => {
                let touches_price = updates
                    .iter()
                    .any(|(key, _)| key == keys::PRICE_MIN || key == keys::PRICE_MAX);
                if touches_price {
                    self.dispatch_view(ListingViewIntent::ClearPriceDraft);
                }
                self.sync.set_filters(&updates);
            }
        }
    }

    pub fn on_navigation(&mut self, event: NavigationEvent) {
        match event {
            NavigationEvent::RouteChangeComplete(location) => {
                self.sync.on_navigation_complete(location);
                let route = &self.sync.location().route;
                if *route != self.route {
                    self.route = route.clone();
                    self.dispatch_view(ListingViewIntent::Reset);
                    self.sidebar_selection = 0;
                    self.grid_offset = 0;
                }
            }
        }
    }

    pub fn back(&mut self) -> bool {
        self.sync.back()
    }

    fn dispatch_view(&mut self, intent: ListingViewIntent) {
        dispatch::<ListingViewReducer>(&mut self.view_state, intent);
    }
}

fn step_clamped(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}
