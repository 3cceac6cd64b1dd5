//! Search filter over the event store.
//!
//! The filtered view is a pure function of the store and the query text. It
//! is recomputed whenever it is needed and never cached on [`AppState`], so it
//! can't go stale after an add or delete.
//!
//! [`AppState`]: crate::app::AppState

use crate::domain::Event;

/// Whether `name` contains `query` as a case-insensitive substring.
///
/// An empty query matches every name.
///
/// # Examples
///
/// ```
/// use zevents::app::search::matches;
///
/// assert!(matches("Team Sync", "team"));
/// assert!(matches("Team Sync", ""));
/// assert!(!matches("Team Sync", "lunch"));
/// ```
#[must_use]
pub fn matches(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Returns the events whose name matches `query`, in store order.
#[must_use]
pub fn filter<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    let _span = tracing::trace_span!(
        "search_filter",
        total_events = events.len(),
        query_len = query.len()
    )
    .entered();

    events.iter().filter(|e| matches(&e.name, query)).collect()
}

/// Character range `(start, end)` of the first case-insensitive occurrence of
/// `query` in `text`, end exclusive.
///
/// Comparison is per character, so the range always lines up with `text`'s
/// own characters. Returns `None` for an empty query or no match.
#[must_use]
pub fn highlight_range(text: &str, query: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return None;
    }

    let haystack: Vec<char> = text.chars().collect();
    if needle.len() > haystack.len() {
        return None;
    }

    (0..=haystack.len() - needle.len())
        .find(|&start| {
            haystack[start..start + needle.len()]
                .iter()
                .zip(&needle)
                .all(|(h, n)| h.to_lowercase().eq(n.to_lowercase()))
        })
        .map(|start| (start, start + needle.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventId;
    use chrono::NaiveDate;

    fn events(names: &[&str]) -> Vec<Event> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Event {
                id: EventId(i as u64),
                name: (*name).to_string(),
                datetime: NaiveDate::from_ymd_opt(2024, 5, 1)
                    .and_then(|d| d.and_hms_opt(9, 0, 0))
                    .unwrap(),
                category: "Work".to_string(),
                guests: vec![String::new()],
            })
            .collect()
    }

    fn names<'a>(filtered: &[&'a Event]) -> Vec<&'a str> {
        filtered.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let all = events(&["b", "a", "c"]);
        assert_eq!(names(&filter(&all, "")), ["b", "a", "c"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let all = events(&["Team Sync", "Lunch", "TEAMWORK retro"]);
        assert_eq!(names(&filter(&all, "team")), ["Team Sync", "TEAMWORK retro"]);
        assert_eq!(names(&filter(&all, "LUNCH")), ["Lunch"]);
    }

    #[test]
    fn matches_substrings_anywhere() {
        let all = events(&["Quarterly planning"]);
        assert_eq!(filter(&all, "plan").len(), 1);
        assert_eq!(filter(&all, "y p").len(), 1);
        assert!(filter(&all, "planning!").is_empty());
    }

    #[test]
    fn filter_does_not_reorder() {
        let all = events(&["sync 2", "other", "sync 1"]);
        assert_eq!(names(&filter(&all, "sync")), ["sync 2", "sync 1"]);
    }

    #[test]
    fn highlight_finds_first_occurrence() {
        assert_eq!(highlight_range("Team Sync", "SYNC"), Some((5, 9)));
        assert_eq!(highlight_range("abab", "ab"), Some((0, 2)));
    }

    #[test]
    fn highlight_uses_character_indices() {
        assert_eq!(highlight_range("Café Été", "été"), Some((5, 8)));
    }

    #[test]
    fn highlight_handles_misses() {
        assert_eq!(highlight_range("Team", ""), None);
        assert_eq!(highlight_range("Team", "teams"), None);
        assert_eq!(highlight_range("Team", "x"), None);
    }
}
