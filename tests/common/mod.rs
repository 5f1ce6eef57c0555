//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use async_trait::async_trait;
use parking_lot::Mutex;
use shelfview::catalog::{CatalogError, Category, Product};
use shelfview::navigation::{Location, MemoryNavigator, NavigationEvent, Navigator};
use shelfview::sync::{FilterSynchronizer, Refetch};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, watch, Notify};

pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Refetch double that records the fetch key of every call.
pub struct RecordingRefetch {
    key: watch::Receiver<String>,
    keys: Mutex<Vec<String>>,
    calls: AtomicUsize,
    fail: AtomicBool,
    gate: Option<Arc<Notify>>,
}

impl RecordingRefetch {
    pub fn new(key: watch::Receiver<String>) -> Self {
        Self {
            key,
            keys: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
            gate: None,
        }
    }

    /// Every call waits for one `notify_one` on `gate` before settling.
    pub fn gated(key: watch::Receiver<String>, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(key)
        }
    }

    pub fn fail_with_timeout(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().clone()
    }
}

#[async_trait]
impl Refetch for RecordingRefetch {
    async fn refetch(&self) -> Result<(), CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.keys.lock().push(self.key.borrow().clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(CatalogError::Timeout { duration: 15 });
        }
        Ok(())
    }
}

/// A synchronizer wired to an in-memory navigator and a recording refetch.
pub struct Harness {
    pub navigator: Arc<MemoryNavigator>,
    pub refetch: Arc<RecordingRefetch>,
    pub sync: FilterSynchronizer,
    events: broadcast::Receiver<NavigationEvent>,
}

impl Harness {
    pub fn new(href: &str) -> Self {
        Self::build(href, None)
    }

    pub fn gated(href: &str, gate: Arc<Notify>) -> Self {
        Self::build(href, Some(gate))
    }

    fn build(href: &str, gate: Option<Arc<Notify>>) -> Self {
        let location = Location::parse(href).expect("valid test location");
        let navigator = Arc::new(MemoryNavigator::new(location));
        let (key_tx, key_rx) = watch::channel(String::new());
        let refetch = Arc::new(match gate {
            Some(gate) => RecordingRefetch::gated(key_rx, gate),
            None => RecordingRefetch::new(key_rx),
        });
        let sync = FilterSynchronizer::new(
            Arc::clone(&navigator) as Arc<dyn Navigator>,
            Arc::clone(&refetch) as Arc<dyn Refetch>,
            key_tx,
            DEBOUNCE,
        );
        let events = navigator.subscribe();
        Self {
            navigator,
            refetch,
            sync,
            events,
        }
    }

    /// Hand the synchronizer to a host that pumps navigation itself.
    pub fn into_parts(self) -> (Arc<MemoryNavigator>, FilterSynchronizer) {
        (self.navigator, self.sync)
    }

    /// Deliver the oldest queued navigation completion, if any.
    pub fn pump_one(&mut self) -> bool {
        match self.events.try_recv() {
            Ok(NavigationEvent::RouteChangeComplete(location)) => {
                self.sync.on_navigation_complete(location);
                true
            }
            Err(_) => false,
        }
    }

    /// Deliver queued navigation completions the way the UI loop does.
    pub fn pump_navigation(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(NavigationEvent::RouteChangeComplete(location)) = self.events.try_recv() {
            self.sync.on_navigation_complete(location);
            delivered += 1;
        }
        delivered
    }
}

pub fn product(title: &str) -> Product {
    serde_json::from_value(serde_json::json!({ "title": title, "slug": title.to_lowercase() }))
        .expect("valid product")
}

pub fn products(count: usize) -> Vec<Product> {
    (0..count).map(|i| product(&format!("Item {i}"))).collect()
}

pub fn category(name: &str, slug: &str, count: u64) -> Category {
    Category {
        name: name.to_string(),
        slug: slug.to_string(),
        count,
        ..Category::default()
    }
}
