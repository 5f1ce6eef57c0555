use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use uuid::Uuid;

use crate::mvi::dispatch;
use crate::navigation::{Location, NavigationEffect, NavigationEvent, Navigator, PageRoute};
use crate::query::{keys, merge_filters, FilterState, FilterUpdate, FilterValue, SortKey};
use crate::sync::debounce::Debouncer;
use crate::sync::loading::{LoadingIntent, LoadingReducer, LoadingState};
use crate::sync::Refetch;

/// Owns the filter state of one listing page.
///
/// The synchronizer holds the current [`Location`] snapshot, the pending
/// fetch key, the loading flag and the debounce timer. It is driven from a
/// single task through `&mut self`; observers read the loading flag and the
/// pending key through `watch` channels.
///
/// Methods that trigger a refetch spawn tokio tasks and must run inside a
/// runtime.
pub struct FilterSynchronizer {
    navigator: Arc<dyn Navigator>,
    refetch: Arc<dyn Refetch>,
    location: Location,
    pending_query: watch::Sender<String>,
    loading: Arc<watch::Sender<LoadingState>>,
    generation: u64,
    debouncer: Debouncer,
}

impl FilterSynchronizer {
    /// `pending_query` is the sending half of the channel the data-fetching
    /// layer reads its key from; it is primed with the navigator's current
    /// location.
    pub fn new(
        navigator: Arc<dyn Navigator>,
        refetch: Arc<dyn Refetch>,
        pending_query: watch::Sender<String>,
        debounce: Duration,
    ) -> Self {
        let location = navigator.location();
        pending_query.send_replace(location.fetch_filters().to_query_string());
        let (loading, _) = watch::channel(LoadingState::Idle);
        Self {
            navigator,
            refetch,
            location,
            pending_query,
            loading: Arc::new(loading),
            generation: 0,
            debouncer: Debouncer::new(debounce),
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn filter_state(&self) -> FilterState {
        FilterState::from_params(&self.location.query)
    }

    /// The key the next refetch will use.
    pub fn pending_query(&self) -> String {
        self.pending_query.borrow().clone()
    }

    pub fn subscribe_pending_query(&self) -> watch::Receiver<String> {
        self.pending_query.subscribe()
    }

    pub fn loading(&self) -> LoadingState {
        *self.loading.borrow()
    }

    pub fn is_loading(&self) -> bool {
        self.loading().is_loading()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<LoadingState> {
        self.loading.subscribe()
    }

    pub fn navigation_events(&self) -> broadcast::Receiver<NavigationEvent> {
        self.navigator.subscribe()
    }

    /// Set or clear one query key and push the resulting location.
    ///
    /// Does not touch the pending key or the loading flag; the navigator's
    /// completion event drives the refetch.
    pub fn set_filter(&mut self, key: &str, value: Option<FilterValue>) -> NavigationEffect {
        self.set_filters(&[(key.to_string(), value)])
    }

    /// [`set_filter`](Self::set_filter) for several keys in one location change.
    pub fn set_filters(&mut self, updates: &[FilterUpdate]) -> NavigationEffect {
        let query = merge_filters(&self.location.query, updates);
        self.navigate(NavigationEffect::push(self.location.with_query(query)))
    }

    /// A sort or view dropdown changed.
    pub fn on_sort_change(&mut self, key: SortKey, value: &str) -> NavigationEffect {
        let update = (key.query_key().to_string(), Some(FilterValue::from(value)));
        let query = merge_filters(&self.location.query, &[update]);
        let effect = self.navigate(NavigationEffect::replace(self.location.with_query(query)));
        self.refresh_pending_query();
        self.trigger("sort_change");
        effect
    }

    /// A category in the brand sidebar was clicked.
    pub fn on_category_item_click(&mut self, slug: &str) -> NavigationEffect {
        let route = match &self.location.route {
            PageRoute::Brand { brand, .. } => PageRoute::Brand {
                brand: brand.clone(),
                category: Some(slug.to_string()),
            },
            other => other.clone(),
        };
        let update = (keys::CATEGORY_SLUG.to_string(), Some(FilterValue::from(slug)));
        let query = merge_filters(&self.location.query, &[update]);
        let effect = self.navigate(NavigationEffect::push(Location::new(route, query)));
        self.refresh_pending_query();
        self.trigger("category_click");
        effect
    }

    /// The navigator finished moving to `location`.
    ///
    /// Completions can be delivered after later edits were pushed, so the
    /// synchronizer adopts the navigator's current entry rather than the
    /// event's snapshot. The refetch is triggered either way.
    pub fn on_navigation_complete(&mut self, location: Location) {
        let current = self.navigator.location();
        if current != location {
            tracing::debug!(event = %location, current = %current, "stale navigation completion");
        }
        self.location = current;
        self.refresh_pending_query();
        self.trigger("navigation_complete");
    }

    /// Step back in history. The completion event arrives through the
    /// navigator like any other location change.
    pub fn back(&mut self) -> bool {
        self.navigator.back()
    }

    fn navigate(&mut self, effect: NavigationEffect) -> NavigationEffect {
        tracing::debug!(href = %effect.location, mode = ?effect.mode, "navigate");
        self.location = effect.location.clone();
        self.navigator.push(effect.clone());
        effect
    }

    fn refresh_pending_query(&self) {
        let next = self.location.fetch_filters().to_query_string();
        self.pending_query.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }

    fn trigger(&mut self, reason: &'static str) {
        self.generation += 1;
        let generation = self.generation;
        self.loading.send_modify(|state| {
            dispatch::<LoadingReducer>(state, LoadingIntent::Trigger { generation })
        });
        tracing::debug!(generation, reason, "refetch triggered");

        let refetch = Arc::clone(&self.refetch);
        let loading = Arc::clone(&self.loading);
        self.debouncer.schedule(move || async move {
            let request_id = Uuid::new_v4();
            // Settles the flag however the job ends, including a panic in refetch.
            let _settle = scopeguard::guard(loading, move |loading| {
                loading.send_modify(|state| {
                    dispatch::<LoadingReducer>(state, LoadingIntent::Settled { generation })
                });
            });

            tracing::info!(%request_id, generation, "refetch dispatched");
            match refetch.refetch().await {
                Ok(()) => tracing::debug!(%request_id, generation, "refetch settled"),
                Err(err) => tracing::warn!(
                    %request_id,
                    generation,
                    kind = err.kind(),
                    "refetch failed: {}",
                    err
                ),
            }
        });
    }
}
