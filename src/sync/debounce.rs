use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Single-owner debounce timer.
///
/// [`schedule`](Self::schedule) aborts a timer that has not fired yet and
/// starts a new one. When a timer fires, its job is spawned as its own task,
/// so rescheduling afterwards never cancels work already in flight.
///
/// Must be used from within a tokio runtime.
pub struct Debouncer {
    delay: Duration,
    timer: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, timer: None }
    }

    pub fn schedule<F, Fut>(&mut self, job: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(job());
        }));
    }

    /// Discard a timer that has not fired. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.timer.take() {
            Some(timer) if !timer.is_finished() => {
                timer.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
