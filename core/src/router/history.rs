//! Session history with back/forward traversal

use super::route::ResolvedRoute;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One visited location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub route: ResolvedRoute,
    pub visited_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(route: ResolvedRoute) -> Self {
        Self {
            route,
            visited_at: Utc::now(),
        }
    }
}

/// Navigation history (oldest first) with a cursor on the current entry
#[derive(Debug, Clone)]
pub struct NavigationHistory {
    entries: Vec<HistoryEntry>,
    /// Index of the current entry; meaningless while `entries` is empty
    cursor: usize,
    /// Maximum number of history entries to keep
    max_entries: usize,
}

impl NavigationHistory {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// Append an entry after the current one.
    ///
    /// Forward entries are discarded, then the oldest entries are evicted
    /// until the history fits `max_entries`.
    pub fn push(&mut self, entry: HistoryEntry) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(entry);

        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }

        self.cursor = self.entries.len() - 1;
    }

    /// Overwrite the current entry, or push when the history is empty
    pub fn replace(&mut self, entry: HistoryEntry) {
        match self.entries.get_mut(self.cursor) {
            Some(current) => *current = entry,
            None => self.push(entry),
        }
    }

    /// The entry `delta` steps from the current one, without moving.
    ///
    /// `None` when `delta` is zero or the move would leave the history.
    pub fn peek(&self, delta: isize) -> Option<&HistoryEntry> {
        self.offset(delta).and_then(|index| self.entries.get(index))
    }

    /// Move the cursor by `delta` entries.
    ///
    /// Returns the new current entry, or `None` (cursor unchanged) when
    /// `delta` is zero or the move would leave the history.
    pub fn go(&mut self, delta: isize) -> Option<&HistoryEntry> {
        let target = self.offset(delta)?;
        self.cursor = target;
        self.entries.get(target)
    }

    fn offset(&self, delta: isize) -> Option<usize> {
        if delta == 0 {
            return None;
        }
        let target = self.cursor.checked_add_signed(delta)?;
        (target < self.entries.len()).then_some(target)
    }

    pub fn back(&mut self) -> Option<&HistoryEntry> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        self.go(1)
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    /// Position of the current entry
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::params::RouteParams;

    fn entry(path: &str) -> HistoryEntry {
        HistoryEntry::new(ResolvedRoute {
            name: "page".into(),
            view: "Page".into(),
            params: RouteParams::new(),
            props: false,
            path: path.to_string(),
            query: None,
            hash: None,
        })
    }

    fn paths(history: &NavigationHistory) -> Vec<&str> {
        history
            .entries()
            .iter()
            .map(|e| e.route.path.as_str())
            .collect()
    }

    #[test]
    fn test_back_and_forward() {
        let mut history = NavigationHistory::new(10);
        assert!(history.back().is_none());

        history.push(entry("/a"));
        history.push(entry("/b"));
        history.push(entry("/c"));
        assert!(history.can_go_back());
        assert!(!history.can_go_forward());

        assert_eq!(history.back().unwrap().route.path, "/b");
        assert_eq!(history.back().unwrap().route.path, "/a");
        assert!(history.back().is_none());
        assert_eq!(history.position(), 0);

        assert_eq!(history.forward().unwrap().route.path, "/b");
        assert_eq!(history.go(1).unwrap().route.path, "/c");
        assert!(history.forward().is_none());
        assert!(history.go(0).is_none());
        assert!(history.go(-5).is_none());
        assert_eq!(history.current().unwrap().route.path, "/c");
    }

    #[test]
    fn test_peek_does_not_move() {
        let mut history = NavigationHistory::new(10);
        assert!(history.peek(-1).is_none());

        history.push(entry("/a"));
        history.push(entry("/b"));
        assert_eq!(history.peek(-1).unwrap().route.path, "/a");
        assert!(history.peek(1).is_none());
        assert!(history.peek(0).is_none());
        assert_eq!(history.position(), 1);
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut history = NavigationHistory::new(10);
        history.push(entry("/a"));
        history.push(entry("/b"));
        history.push(entry("/c"));
        history.go(-2);

        history.push(entry("/d"));
        assert_eq!(paths(&history), ["/a", "/d"]);
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_replace_overwrites_current() {
        let mut history = NavigationHistory::new(10);
        history.replace(entry("/a"));
        assert_eq!(paths(&history), ["/a"]);

        history.push(entry("/b"));
        history.replace(entry("/c"));
        assert_eq!(paths(&history), ["/a", "/c"]);
        assert_eq!(history.position(), 1);
    }

    #[test]
    fn test_max_entries_evicts_oldest() {
        let mut history = NavigationHistory::new(2);
        history.push(entry("/a"));
        history.push(entry("/b"));
        history.push(entry("/c"));

        assert_eq!(paths(&history), ["/b", "/c"]);
        assert_eq!(history.position(), 1);
        assert_eq!(history.back().unwrap().route.path, "/b");
        assert!(history.back().is_none());
    }
}
