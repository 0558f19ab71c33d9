//! Bounded navigation history.
//!
//! Recent-views stack used to support an in-app "back" action independent of
//! browser history.

use serde::{Deserialize, Serialize};

/// Maximum number of entries retained; pushing beyond this drops the oldest.
pub const HISTORY_CAPACITY: usize = 10;

/// Ordered stack of recently visited view identifiers.
///
/// Two invariants hold at all times: the stack never exceeds
/// [`HISTORY_CAPACITY`] entries, and no two adjacent entries are equal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationHistory {
    entries: Vec<String>,
}

impl NavigationHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a visited view.
    ///
    /// Pushing the view already on top is a no-op. Once the stack is full,
    /// the oldest entry is dropped to make room.
    pub fn push(&mut self, view: impl Into<String>) {
        let view = view.into();
        if self.entries.last() == Some(&view) {
            return;
        }
        self.entries.push(view);
        if self.entries.len() > HISTORY_CAPACITY {
            let excess = self.entries.len() - HISTORY_CAPACITY;
            self.entries.drain(..excess);
        }
    }

    /// Steps back one view.
    ///
    /// Removes the top entry and returns the new top. With fewer than two
    /// entries there is nowhere to go back to: returns `None` and leaves the
    /// history unchanged.
    pub fn go_back(&mut self) -> Option<String> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries.pop();
        self.entries.last().cloned()
    }

    /// The view currently on top, if any.
    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_records_views_in_order() {
        let mut history = NavigationHistory::new();
        history.push("dashboard");
        history.push("inbox");
        assert_eq!(history.entries(), ["dashboard", "inbox"]);
        assert_eq!(history.current(), Some("inbox"));
    }

    #[test]
    fn test_pushing_current_top_is_noop() {
        let mut history = NavigationHistory::new();
        history.push("dashboard");
        history.push("dashboard");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_nonadjacent_duplicates_are_kept() {
        let mut history = NavigationHistory::new();
        history.push("dashboard");
        history.push("inbox");
        history.push("dashboard");
        assert_eq!(history.entries(), ["dashboard", "inbox", "dashboard"]);
    }

    #[test]
    fn test_capacity_drops_oldest_entries() {
        let mut history = NavigationHistory::new();
        for i in 0..15 {
            history.push(format!("view-{}", i));
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.entries()[0], "view-5");
        assert_eq!(history.current(), Some("view-14"));
    }

    #[test]
    fn test_go_back_returns_new_top() {
        let mut history = NavigationHistory::new();
        history.push("dashboard");
        history.push("inbox");
        history.push("settings");
        assert_eq!(history.go_back(), Some("inbox".to_string()));
        assert_eq!(history.entries(), ["dashboard", "inbox"]);
    }

    #[test]
    fn test_go_back_on_empty_history_is_noop() {
        let mut history = NavigationHistory::new();
        assert_eq!(history.go_back(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn test_go_back_on_single_entry_is_noop() {
        let mut history = NavigationHistory::new();
        history.push("dashboard");
        assert_eq!(history.go_back(), None);
        assert_eq!(history.entries(), ["dashboard"]);
    }

    #[test]
    fn test_invariants_hold_under_mixed_sequences() {
        let views = ["a", "b", "b", "c", "a", "a", "d", "e", "f", "g", "h", "i", "j", "k", "k"];
        let mut history = NavigationHistory::new();
        for view in views {
            history.push(view);
            assert!(history.len() <= HISTORY_CAPACITY);
            for pair in history.entries().windows(2) {
                assert_ne!(pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_clear_empties_history() {
        let mut history = NavigationHistory::new();
        history.push("dashboard");
        history.push("inbox");
        history.clear();
        assert!(history.is_empty());
    }
}
