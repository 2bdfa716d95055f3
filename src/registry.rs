//! Caller-owned registry holding one live table per strategy.
//!
//! Integration layers keep a single table per strategy for the lifetime of
//! the process. Rather than a module-global singleton, the registry is an
//! explicit value: construct it once at startup and pass it by reference
//! into whatever handles requests.

use std::hash::{BuildHasher, Hash};

use crate::{
    error::Result,
    hash::FixedState,
    state::TableState,
    strategy::Strategy,
    table::HashTable,
};

/// Slot count used by the reference deployment.
pub const DEFAULT_TABLE_SIZE: usize = 10;

/// One live table per strategy, all of the same size.
#[derive(Debug, Clone)]
pub struct TableRegistry<K, V, S = FixedState> {
    /// Common slot count of every table.
    size: usize,
    /// The chaining table.
    chaining: HashTable<K, V, S>,
    /// The linear-probing table.
    linear: HashTable<K, V, S>,
    /// The quadratic-probing table.
    quadratic: HashTable<K, V, S>,
    /// The double-hashing table.
    double: HashTable<K, V, S>,
}

impl<K, V> TableRegistry<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Builds a registry of four empty tables, each with `size` slots.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TableError::InvalidSize`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size,
            chaining: HashTable::new(Strategy::Chaining, size)?,
            linear: HashTable::new(Strategy::LinearProbing, size)?,
            quadratic: HashTable::new(Strategy::QuadraticProbing, size)?,
            double: HashTable::new(Strategy::DoubleHashing, size)?,
        })
    }

    /// Builds a registry with the reference deployment size.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the default size is positive.
    pub fn with_default_size() -> Result<Self> {
        Self::new(DEFAULT_TABLE_SIZE)
    }
}

impl<K, V, S> TableRegistry<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    /// Builds a registry of four empty tables hashing through `hasher`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TableError::InvalidSize`] when `size` is zero.
    pub fn with_hasher(size: usize, hasher: S) -> Result<Self> {
        Ok(Self {
            size,
            chaining: HashTable::with_hasher(Strategy::Chaining, size, hasher.clone())?,
            linear: HashTable::with_hasher(Strategy::LinearProbing, size, hasher.clone())?,
            quadratic: HashTable::with_hasher(Strategy::QuadraticProbing, size, hasher.clone())?,
            double: HashTable::with_hasher(Strategy::DoubleHashing, size, hasher)?,
        })
    }
}

impl<K, V, S> TableRegistry<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    /// The table registered for `strategy`.
    #[must_use]
    pub fn table(&self, strategy: Strategy) -> &HashTable<K, V, S> {
        match strategy {
            Strategy::Chaining => &self.chaining,
            Strategy::LinearProbing => &self.linear,
            Strategy::QuadraticProbing => &self.quadratic,
            Strategy::DoubleHashing => &self.double,
        }
    }

    /// Mutable access to the table registered for `strategy`.
    pub fn table_mut(&mut self, strategy: Strategy) -> &mut HashTable<K, V, S> {
        match strategy {
            Strategy::Chaining => &mut self.chaining,
            Strategy::LinearProbing => &mut self.linear,
            Strategy::QuadraticProbing => &mut self.quadratic,
            Strategy::DoubleHashing => &mut self.double,
        }
    }

    /// Snapshot of the table registered for `strategy`.
    #[must_use]
    pub fn state(&self, strategy: Strategy) -> TableState<K, V> {
        self.table(strategy).state()
    }

    /// Wipes one table back to all-empty slots.
    pub fn reset(&mut self, strategy: Strategy) {
        self.table_mut(strategy).clear();
    }

    /// Wipes every table back to all-empty slots.
    pub fn reset_all(&mut self) {
        for strategy in Strategy::ALL {
            self.reset(strategy);
        }
    }

    /// Common slot count of the registered tables.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_one_table_per_strategy() {
        let registry = TableRegistry::<String, String>::with_default_size().unwrap();
        assert_eq!(registry.size(), DEFAULT_TABLE_SIZE);
        for strategy in Strategy::ALL {
            let table = registry.table(strategy);
            assert_eq!(table.strategy(), strategy);
            assert_eq!(table.size(), DEFAULT_TABLE_SIZE);
        }
    }

    #[test]
    fn reset_wipes_only_the_requested_table() {
        let mut registry = TableRegistry::<String, String>::new(8).unwrap();
        for strategy in Strategy::ALL {
            registry
                .table_mut(strategy)
                .insert("apple".to_string(), "red".to_string())
                .unwrap();
        }

        registry.reset(Strategy::Chaining);

        assert!(registry.table(Strategy::Chaining).is_empty());
        for strategy in [Strategy::LinearProbing, Strategy::QuadraticProbing, Strategy::DoubleHashing] {
            assert_eq!(registry.table(strategy).len(), 1);
        }
    }

    #[test]
    fn reset_all_wipes_every_table() {
        let mut registry = TableRegistry::<String, String>::new(8).unwrap();
        for strategy in Strategy::ALL {
            registry
                .table_mut(strategy)
                .insert("apple".to_string(), "red".to_string())
                .unwrap();
        }

        registry.reset_all();

        for strategy in Strategy::ALL {
            assert!(registry.table(strategy).is_empty());
            assert_eq!(registry.state(strategy).table.entries(), 0);
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = TableRegistry::<String, String>::new(0);
        assert!(err.is_err());
    }
}
