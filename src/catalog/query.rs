//! Fetch-key cache over the catalog client.
//!
//! The synchronizer publishes its pending query through a `watch` channel;
//! [`ListingQuery`] reads the latest key whenever it is asked to refetch and
//! publishes the payload through a `watch` channel of its own.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::catalog::client::CatalogClient;
use crate::catalog::error::CatalogError;
use crate::catalog::types::ListingResponse;
use crate::config::ApiConfig;
use crate::sync::Refetch;

/// Retry schedule for retryable catalog failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_base: Duration,
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff_base: Duration::ZERO,
        }
    }

    /// Delay before retry number `attempt` (0-based): base * 2^attempt.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.backoff_base
            .saturating_mul(2u32.saturating_pow(attempt.min(16)))
    }
}

impl From<&ApiConfig> for RetryPolicy {
    fn from(api: &ApiConfig) -> Self {
        Self {
            max_retries: api.max_retries,
            backoff_base: Duration::from_millis(api.retry_backoff_base_ms),
        }
    }
}

pub struct ListingQuery {
    client: CatalogClient,
    key: watch::Receiver<String>,
    data: watch::Sender<Option<Arc<ListingResponse>>>,
    retry: RetryPolicy,
    issued: AtomicU64,
    /// Sequence number of the response currently published.
    applied: Mutex<u64>,
}

impl ListingQuery {
    pub fn new(client: CatalogClient, key: watch::Receiver<String>, retry: RetryPolicy) -> Self {
        let (data, _) = watch::channel(None);
        Self {
            client,
            key,
            data,
            retry,
            issued: AtomicU64::new(0),
            applied: Mutex::new(0),
        }
    }

    /// The most recently applied payload.
    pub fn data(&self) -> Option<Arc<ListingResponse>> {
        self.data.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<ListingResponse>>> {
        self.data.subscribe()
    }

    async fn fetch_with_retry(&self, filters: &str) -> Result<ListingResponse, CatalogError> {
        let mut attempt = 0;
        loop {
            match self.client.fetch_listing(filters).await {
                Ok(response) => return Ok(response),
                Err(err) if err.is_retryable() && attempt < self.retry.max_retries => {
                    let delay = self.retry.backoff(attempt);
                    tracing::warn!(
                        attempt = attempt + 1,
                        max_retries = self.retry.max_retries,
                        kind = err.kind(),
                        delay_ms = delay.as_millis() as u64,
                        "catalog fetch failed, retrying: {}",
                        err
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Publish `response` unless a newer one is already out.
    fn apply(&self, sequence: u64, response: ListingResponse) {
        let mut applied = self.applied.lock();
        if sequence < *applied {
            tracing::debug!(sequence, applied = *applied, "dropping stale listing response");
            return;
        }
        *applied = sequence;
        self.data.send_replace(Some(Arc::new(response)));
    }
}

#[async_trait]
impl Refetch for ListingQuery {
    /// Fetch the current key and publish the result.
    async fn refetch(&self) -> Result<(), CatalogError> {
        let filters = self.key.borrow().clone();
        let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let response = self.fetch_with_retry(&filters).await?;
        self.apply(sequence, response);
        Ok(())
    }
}
