use parking_lot::Mutex;
use tokio::sync::broadcast;

use super::location::{HistoryMode, Location, NavigationEffect, NavigationEvent};
use super::Navigator;

const EVENT_CAPACITY: usize = 64;

struct History {
    entries: Vec<Location>,
    index: usize,
}

/// In-process navigator with a linear history stack.
///
/// Every applied effect is announced as `RouteChangeComplete` right after it
/// is recorded. Events sent while nobody is subscribed are dropped.
pub struct MemoryNavigator {
    history: Mutex<History>,
    events: broadcast::Sender<NavigationEvent>,
}

impl MemoryNavigator {
    pub fn new(initial: Location) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            history: Mutex::new(History {
                entries: vec![initial],
                index: 0,
            }),
            events,
        }
    }

    /// Every entry up to and including the current one.
    pub fn history(&self) -> Vec<Location> {
        let history = self.history.lock();
        history.entries[..=history.index].to_vec()
    }

    fn announce(&self, location: Location) {
        tracing::debug!(href = %location, "route change complete");
        let _ = self.events.send(NavigationEvent::RouteChangeComplete(location));
    }
}

impl Navigator for MemoryNavigator {
    fn location(&self) -> Location {
        let history = self.history.lock();
        history.entries[history.index].clone()
    }

    fn push(&self, effect: NavigationEffect) {
        {
            let mut history = self.history.lock();
            match effect.mode {
                HistoryMode::Push => {
                    let keep = history.index + 1;
                    history.entries.truncate(keep);
                    history.entries.push(effect.location.clone());
                    history.index = keep;
                }
                HistoryMode::Replace => {
                    let index = history.index;
                    history.entries[index] = effect.location.clone();
                }
            }
        }
        self.announce(effect.location);
    }

    fn back(&self) -> bool {
        let location = {
            let mut history = self.history.lock();
            if history.index == 0 {
                return false;
            }
            history.index -= 1;
            history.entries[history.index].clone()
        };
        self.announce(location);
        true
    }

    fn subscribe(&self) -> broadcast::Receiver<NavigationEvent> {
        self.events.subscribe()
    }
}
