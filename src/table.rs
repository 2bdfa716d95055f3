//! Strategy-dispatched table construction.
//!
//! The strategy set is closed and known at construction time, so dispatch
//! happens on a [`Strategy`] tag rather than through trait objects: a
//! [`HashTable`] is either a chaining table or a probing table carrying its
//! offset rule.

use std::{
    borrow::Borrow,
    hash::{BuildHasher, Hash},
};

use crate::{
    chaining::{ChainingIter, ChainingTable},
    error::Result,
    hash::FixedState,
    open_addressing::{ProbingIter, ProbingTable},
    state::TableState,
    stats::ProbeStats,
    strategy::Strategy,
};

/// A fixed-capacity hash table of any collision-resolution strategy.
///
/// Construct with [`HashTable::new`], then issue insert/search calls; each
/// call resets and re-accrues the per-call [`ProbeStats`], and
/// [`HashTable::state`] snapshots the slots together with that cost.
#[derive(Debug, Clone)]
pub enum HashTable<K, V, S = FixedState> {
    /// Separate chaining.
    Chaining(ChainingTable<K, V, S>),
    /// Open addressing (linear, quadratic, or double hashing).
    Probing(ProbingTable<K, V, S>),
}

impl<K, V> HashTable<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Constructs a table of the given strategy with `size` empty slots and
    /// the default fixed-seed hasher.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TableError::InvalidSize`] when `size` is zero.
    pub fn new(strategy: Strategy, size: usize) -> Result<Self> {
        Self::with_hasher(strategy, size, FixedState)
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    /// Constructs a table of the given strategy hashing through `hasher`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TableError::InvalidSize`] when `size` is zero.
    pub fn with_hasher(strategy: Strategy, size: usize, hasher: S) -> Result<Self> {
        Ok(match strategy {
            Strategy::Chaining => Self::Chaining(ChainingTable::with_hasher(size, hasher)?),
            Strategy::LinearProbing => {
                Self::Probing(ProbingTable::linear_with_hasher(size, hasher)?)
            }
            Strategy::QuadraticProbing => {
                Self::Probing(ProbingTable::quadratic_with_hasher(size, hasher)?)
            }
            Strategy::DoubleHashing => {
                Self::Probing(ProbingTable::double_hashing_with_hasher(size, hasher)?)
            }
        })
    }

    /// Inserts `value` under `key`. Returns the previous value on an
    /// in-place update.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TableError::TableFull`] when an open-addressing
    /// probe sequence finds no empty slot or matching key; chaining never
    /// fails.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        match self {
            Self::Chaining(table) => Ok(table.insert(key, value)),
            Self::Probing(table) => table.insert(key, value),
        }
    }

    /// Looks up `key`; `None` means the key is absent.
    pub fn search<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self {
            Self::Chaining(table) => table.search(key),
            Self::Probing(table) => table.search(key),
        }
    }

    /// Immutable snapshot of slots, per-call counters, and strategy name.
    #[must_use]
    pub fn state(&self) -> TableState<K, V> {
        match self {
            Self::Chaining(table) => table.state(),
            Self::Probing(table) => table.state(),
        }
    }

    /// Zeroes the per-call collision and probe counters.
    pub fn reset_stats(&mut self) {
        match self {
            Self::Chaining(table) => table.reset_stats(),
            Self::Probing(table) => table.reset_stats(),
        }
    }

    /// Empties every slot, equivalent to reconstructing the table with the
    /// same size and strategy.
    pub fn clear(&mut self) {
        match self {
            Self::Chaining(table) => table.clear(),
            Self::Probing(table) => table.clear(),
        }
    }

    /// The strategy this table was constructed with.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Chaining(_) => Strategy::Chaining,
            Self::Probing(table) => table.strategy(),
        }
    }

    /// Slot count, fixed at construction.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Chaining(table) => table.size(),
            Self::Probing(table) => table.size(),
        }
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Chaining(table) => table.len(),
            Self::Probing(table) => table.len(),
        }
    }

    /// `true` when no entry is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cost counters of the most recent insert/search.
    #[must_use]
    pub fn stats(&self) -> ProbeStats {
        match self {
            Self::Chaining(table) => table.stats(),
            Self::Probing(table) => table.stats(),
        }
    }

    /// Iterates stored entries in slot order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        match self {
            Self::Chaining(table) => Iter::Chaining(table.iter()),
            Self::Probing(table) => Iter::Probing(table.iter()),
        }
    }
}

/// Iterator over the entries of a [`HashTable`].
#[derive(Debug, Clone)]
pub enum Iter<'a, K, V> {
    /// Entries of a chaining table.
    Chaining(ChainingIter<'a, K, V>),
    /// Entries of a probing table.
    Probing(ProbingIter<'a, K, V>),
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Chaining(iter) => iter.next(),
            Self::Probing(iter) => iter.next(),
        }
    }
}
