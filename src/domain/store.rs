//! In-memory event store.
//!
//! [`EventStore`] is the single source of truth for events during a plugin
//! session. It keeps events in insertion order and assigns each one a stable
//! [`EventId`]. Nothing is persisted.

use super::event::{Event, EventDraft, EventId};

/// Ordered, in-memory sequence of events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: u64,
}

impl EventStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validated event to the end of the store.
    ///
    /// Returns the id assigned to the new event.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use zevents::domain::{EventDraft, EventStore};
    ///
    /// let mut store = EventStore::new();
    /// let id = store.add(EventDraft {
    ///     name: "Team Sync".to_string(),
    ///     datetime: NaiveDate::from_ymd_opt(2024, 5, 1)
    ///         .and_then(|d| d.and_hms_opt(9, 0, 0))
    ///         .unwrap(),
    ///     category: "Work".to_string(),
    ///     guests: vec!["a@b.com".to_string()],
    /// });
    /// assert_eq!(store.len(), 1);
    /// assert_eq!(store.get(id).map(|e| e.name.as_str()), Some("Team Sync"));
    /// ```
    pub fn add(&mut self, draft: EventDraft) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;
        self.events.push(Event::from_draft(id, draft));
        tracing::debug!(event_id = %id, total = self.events.len(), "event added");
        id
    }

    /// Removes the event at `index` in the full store.
    ///
    /// Later events shift down by one position. Out-of-range indices are a
    /// no-op and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<Event> {
        if index >= self.events.len() {
            tracing::debug!(index, total = self.events.len(), "delete index out of range");
            return None;
        }
        let removed = self.events.remove(index);
        tracing::debug!(event_id = %removed.id, index, "event removed");
        Some(removed)
    }

    /// Removes the event with the given id, wherever it currently sits.
    pub fn remove(&mut self, id: EventId) -> Option<Event> {
        let index = self.position(id)?;
        self.remove_at(index)
    }

    /// Returns the current index of the event with the given id.
    #[must_use]
    pub fn position(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }

    #[must_use]
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft(name: &str) -> EventDraft {
        EventDraft {
            name: name.to_string(),
            datetime: NaiveDate::from_ymd_opt(2024, 5, 1)
                .and_then(|d| d.and_hms_opt(9, 0, 0))
                .unwrap(),
            category: "Work".to_string(),
            guests: vec![String::new()],
        }
    }

    fn names(store: &EventStore) -> Vec<&str> {
        store.events().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = EventStore::new();
        store.add(draft("a"));
        store.add(draft("b"));
        store.add(draft("c"));
        assert_eq!(names(&store), ["a", "b", "c"]);
    }

    #[test]
    fn remove_at_shifts_later_events_down() {
        let mut store = EventStore::new();
        for name in ["a", "b", "c", "d"] {
            store.add(draft(name));
        }

        let removed = store.remove_at(1).map(|e| e.name);

        assert_eq!(removed.as_deref(), Some("b"));
        assert_eq!(store.len(), 3);
        assert_eq!(names(&store), ["a", "c", "d"]);
    }

    #[test]
    fn remove_at_out_of_range_is_noop() {
        let mut store = EventStore::new();
        store.add(draft("a"));
        assert!(store.remove_at(1).is_none());
        assert!(store.remove_at(usize::MAX).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_are_stable_across_deletions() {
        let mut store = EventStore::new();
        let a = store.add(draft("a"));
        let b = store.add(draft("b"));
        let c = store.add(draft("c"));

        store.remove(a);

        assert_eq!(store.position(b), Some(0));
        assert_eq!(store.position(c), Some(1));
        assert_eq!(store.get(c).map(|e| e.name.as_str()), Some("c"));
    }

    #[test]
    fn ids_are_not_reused() {
        let mut store = EventStore::new();
        let a = store.add(draft("a"));
        store.remove(a);
        let b = store.add(draft("b"));
        assert_ne!(a, b);
        assert!(store.remove(a).is_none());
    }
}
