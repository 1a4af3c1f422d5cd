//! Favorites Manager for topicdeck.
//!
//! Implements `FavoritesManagerTrait`: pinned topics, one per id, kept in
//! ascending title order.

use feruca::Collator;

use crate::managers::observable::{Observable, SubscriptionId};
use crate::types::topic::{now_millis, Clock, FavoriteTopic, Topic};

/// Trait defining favorites operations.
pub trait FavoritesManagerTrait {
    fn add(&mut self, topic: Topic);
    fn remove(&mut self, topic_id: &str);
    fn toggle(&mut self, topic: Topic);
    fn clear(&mut self);
    fn init(&mut self, entries: Vec<FavoriteTopic>);
    fn entries(&self) -> &[FavoriteTopic];
}

/// Observable favorites list.
pub struct FavoritesManager {
    entries: Observable<Vec<FavoriteTopic>>,
    clock: Clock,
}

impl FavoritesManager {
    pub fn new() -> Self {
        Self {
            entries: Observable::new(Vec::new()),
            clock: now_millis,
        }
    }

    /// Replaces the timestamp source used by `add` and `toggle`.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn contains(&self, topic_id: &str) -> bool {
        self.entries.get().iter().any(|f| f.id() == topic_id)
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
        F: FnMut(&Vec<FavoriteTopic>) + 'static,
    {
        self.entries.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.entries.unsubscribe(id)
    }

    /// Sorts `entries` by title in place. The sort is stable.
    pub fn sort_by_title(entries: &mut [FavoriteTopic]) {
        let mut collator = Collator::default();
        entries.sort_by(|a, b| collator.collate(a.title(), b.title()));
    }

    /// Deduplicates by id (first occurrence wins) and sorts by title.
    pub fn normalize(entries: Vec<FavoriteTopic>) -> Vec<FavoriteTopic> {
        let mut out: Vec<FavoriteTopic> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !out.iter().any(|f| f.id() == entry.id()) {
                out.push(entry);
            }
        }
        Self::sort_by_title(&mut out);
        out
    }

    fn with_favorite(favorites: &[FavoriteTopic], favorite: FavoriteTopic) -> Vec<FavoriteTopic> {
        let mut next = Vec::with_capacity(favorites.len() + 1);
        next.extend_from_slice(favorites);
        next.push(favorite);
        Self::sort_by_title(&mut next);
        next
    }

    fn without(favorites: &[FavoriteTopic], topic_id: &str) -> Vec<FavoriteTopic> {
        favorites
            .iter()
            .filter(|f| f.id() != topic_id)
            .cloned()
            .collect()
    }
}

impl Default for FavoritesManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoritesManagerTrait for FavoritesManager {
    /// Pins `topic` unless it is already pinned. An existing favorite keeps
    /// its original `added_at`.
    fn add(&mut self, topic: Topic) {
        let added_at = (self.clock)();
        self.entries.update(move |favorites| {
            if favorites.iter().any(|f| f.id() == topic.id) {
                return favorites.clone();
            }
            Self::with_favorite(favorites, FavoriteTopic { topic, added_at })
        });
    }

    fn remove(&mut self, topic_id: &str) {
        self.entries
            .update(|favorites| Self::without(favorites, topic_id));
    }

    fn toggle(&mut self, topic: Topic) {
        let added_at = (self.clock)();
        self.entries.update(move |favorites| {
            if favorites.iter().any(|f| f.id() == topic.id) {
                Self::without(favorites, &topic.id)
            } else {
                Self::with_favorite(favorites, FavoriteTopic { topic, added_at })
            }
        });
    }

    fn clear(&mut self) {
        self.entries.set(Vec::new());
    }

    /// Installs `entries` as-is. Dedup and ordering are not applied.
    fn init(&mut self, entries: Vec<FavoriteTopic>) {
        self.entries.set(entries);
    }

    fn entries(&self) -> &[FavoriteTopic] {
        self.entries.get()
    }
}
