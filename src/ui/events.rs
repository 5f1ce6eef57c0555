use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::{broadcast, mpsc, watch};

use crate::navigation::NavigationEvent;

pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    Navigation(NavigationEvent),
    /// A new listing payload was published.
    DataChanged,
    /// The loading flag flipped.
    LoadingChanged,
}

/// Funnels terminal input and app-side notifications into one queue.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    /// Starts the terminal reader thread. Must be called inside a runtime.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));

        let event_tx = tx.clone();
        let thread_stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            while !thread_stop.load(Ordering::Relaxed) {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));
                match event::poll(timeout) {
                    Ok(true) => {
                        let sent = match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                            Ok(Event::Resize(..)) => event_tx.send(AppEvent::Resize),
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!("terminal read failed: {}", err);
                                break;
                            }
                        };
                        if sent.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!("terminal poll failed: {}", err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx, stop }
    }

    /// Forward navigation completions until the navigator goes away.
    pub fn forward_navigation(&self, mut events: broadcast::Receiver<NavigationEvent>) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => {
                        if tx.send(AppEvent::Navigation(event)).is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "navigation events lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });
    }

    /// Emit `make()` each time `changes` sees a new value.
    pub fn forward_changes<T>(&self, mut changes: watch::Receiver<T>, make: fn() -> AppEvent)
    where
        T: Send + Sync + 'static,
    {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            while changes.changed().await.is_ok() {
                if tx.send(make()).is_err() {
                    break;
                }
            }
        });
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
