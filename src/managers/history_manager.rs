//! History Manager for topicdeck.
//!
//! Implements `HistoryManagerTrait`: a most-recent-first list of viewed topics,
//! capped in length and holding at most one entry per topic id.

use crate::managers::observable::{Observable, SubscriptionId};
use crate::types::settings::DEFAULT_HISTORY_CAPACITY;
use crate::types::topic::{now_millis, Clock, HistoryEntry, Topic};

/// Trait defining history operations.
pub trait HistoryManagerTrait {
    fn add(&mut self, topic: Topic);
    fn clear(&mut self);
    fn init(&mut self, entries: Vec<HistoryEntry>);
    fn entries(&self) -> &[HistoryEntry];
}

/// Observable recent-history list.
pub struct HistoryManager {
    entries: Observable<Vec<HistoryEntry>>,
    capacity: usize,
    clock: Clock,
}

impl HistoryManager {
    /// Creates an empty history holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Observable::new(Vec::new()),
            capacity: capacity.max(1),
            clock: now_millis,
        }
    }

    /// Replaces the timestamp source used by `add`.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.get().is_empty()
    }

    /// Registers `callback` for every new value of the list.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Vec<HistoryEntry>) + 'static,
    {
        self.entries.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.entries.unsubscribe(id)
    }

    /// Deduplicates by topic id (first occurrence wins) and applies the cap.
    pub fn normalize(entries: Vec<HistoryEntry>, capacity: usize) -> Vec<HistoryEntry> {
        let mut out: Vec<HistoryEntry> = Vec::with_capacity(entries.len().min(capacity));
        for entry in entries {
            if out.len() == capacity {
                break;
            }
            if !out.iter().any(|e| e.topic.id == entry.topic.id) {
                out.push(entry);
            }
        }
        out
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryManagerTrait for HistoryManager {
    /// Records `topic` as the most recent entry, dropping any older entry for
    /// the same id and anything beyond the capacity.
    fn add(&mut self, topic: Topic) {
        let entry = HistoryEntry {
            topic,
            timestamp: (self.clock)(),
        };
        let capacity = self.capacity;

        self.entries.update(move |history| {
            let mut next = Vec::with_capacity(capacity);
            let id = entry.topic.id.clone();
            next.push(entry);
            next.extend(
                history
                    .iter()
                    .filter(|h| h.topic.id != id)
                    .take(capacity - 1)
                    .cloned(),
            );
            next
        });
    }

    fn clear(&mut self) {
        self.entries.set(Vec::new());
    }

    /// Installs `entries` as-is. Cap and dedup are not applied.
    fn init(&mut self, entries: Vec<HistoryEntry>) {
        self.entries.set(entries);
    }

    fn entries(&self) -> &[HistoryEntry] {
        self.entries.get()
    }
}
