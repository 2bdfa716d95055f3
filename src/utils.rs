//! Utility functions and traits for the strategy tables.

use std::hash::{BuildHasher, Hash};

use crate::{error::Result, strategy::Strategy, table::HashTable};

/// Extension trait providing additional utility methods over a table.
pub trait TableExtensions<K, V> {
    /// Returns the stored keys, in slot order.
    fn keys(&self) -> Vec<K>;

    /// Returns the stored values, in slot order.
    fn values(&self) -> Vec<V>;

    /// `true` if the table holds the given key.
    ///
    /// Runs as a search, so it resets and re-accrues the per-call counters.
    fn contains_key(&mut self, key: &K) -> bool;
}

impl<K, V, S> TableExtensions<K, V> for HashTable<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    fn contains_key(&mut self, key: &K) -> bool {
        self.search(key).is_some()
    }
}

/// Builds a table of the given strategy from an iterator of key-value pairs.
///
/// # Errors
///
/// Returns [`crate::TableError::InvalidSize`] when `size` is zero, or
/// [`crate::TableError::TableFull`] when an open-addressing strategy runs
/// out of slots while the pairs are inserted.
pub fn from_pairs<K, V, I>(strategy: Strategy, size: usize, pairs: I) -> Result<HashTable<K, V>>
where
    K: Hash + Eq + Clone,
    V: Clone,
    I: IntoIterator<Item = (K, V)>,
{
    let mut table = HashTable::new(strategy, size)?;
    for (key, value) in pairs {
        table.insert(key, value)?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_builds_a_populated_table() {
        let data = vec![
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 3),
        ];

        let mut table = from_pairs(Strategy::Chaining, 8, data).unwrap();

        assert_eq!(table.search("a"), Some(&1));
        assert_eq!(table.search("b"), Some(&2));
        assert_eq!(table.search("c"), Some(&3));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn from_pairs_surfaces_table_full() {
        let pairs = (0..5).map(|n| (n.to_string(), n));
        let err = from_pairs(Strategy::LinearProbing, 4, pairs);
        assert!(err.is_err());
    }

    #[test]
    fn keys_and_values() {
        let mut table = HashTable::new(Strategy::LinearProbing, 8).unwrap();
        table.insert("a".to_string(), 1).unwrap();
        table.insert("b".to_string(), 2).unwrap();
        table.insert("c".to_string(), 3).unwrap();

        let mut keys = table.keys();
        keys.sort();
        let mut values = table.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn contains_key() {
        let mut table = HashTable::new(Strategy::DoubleHashing, 8).unwrap();
        table.insert("a".to_string(), 1).unwrap();

        assert!(table.contains_key(&"a".to_string()));
        assert!(!table.contains_key(&"b".to_string()));
    }
}
