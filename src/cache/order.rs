//! Insertion Order Module
//!
//! Tracks the order in which keys entered the store, used for FIFO eviction
//! and as the deterministic scan order for LRU and LFU.

use std::collections::VecDeque;

// == Insertion Order ==
/// Keys in insertion order.
///
/// - Front = earliest inserted
/// - Back = latest inserted
///
/// Re-inserting a key that is already tracked keeps its original slot.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    order: VecDeque<String>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Push ==
    /// Appends a newly inserted key at the back.
    ///
    /// Callers only push keys that are not already tracked.
    pub fn push(&mut self, key: String) {
        self.order.push_back(key);
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
    }

    // == Iter ==
    /// Iterates keys from earliest to latest inserted.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(order: &InsertionOrder) -> Vec<&str> {
        order.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_order_new() {
        let order = InsertionOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut order = InsertionOrder::new();

        order.push("a".to_string());
        order.push("b".to_string());
        order.push("c".to_string());

        assert_eq!(keys(&order), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_middle_key() {
        let mut order = InsertionOrder::new();
        order.push("a".to_string());
        order.push("b".to_string());
        order.push("c".to_string());

        order.remove("b");

        assert_eq!(order.len(), 2);
        assert!(!order.contains("b"));
        assert_eq!(keys(&order), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_nonexistent_key() {
        let mut order = InsertionOrder::new();
        order.push("a".to_string());

        order.remove("nonexistent");

        assert_eq!(keys(&order), vec!["a"]);
    }

    #[test]
    fn test_clear() {
        let mut order = InsertionOrder::new();
        order.push("a".to_string());
        order.push("b".to_string());

        order.clear();

        assert!(order.is_empty());
    }
}
