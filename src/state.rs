//! Serializable table state.
//!
//! [`TableState`] is the wire contract external layers serialize verbatim:
//! `size`, per-slot contents under `table`, the per-call counters, and the
//! strategy name under `algorithm`. For chaining tables `table` is a sequence
//! of entry lists; for probing tables it is a sequence of `null`-or-entry.

use serde::{Deserialize, Serialize};

use crate::strategy::Strategy;

/// A stored key-value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<K, V> {
    /// The key identifying the entry within its table.
    pub key: K,
    /// The payload, stored and returned unmodified.
    pub value: V,
}

/// Per-slot contents of a snapshot.
///
/// Untagged, so the serialized form is exactly the slot sequence the wire
/// contract prescribes for each table family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableSnapshot<K, V> {
    /// One ordered entry list per slot (chaining).
    Chained(Vec<Vec<Entry<K, V>>>),
    /// At most one entry per slot (open addressing).
    Open(Vec<Option<Entry<K, V>>>),
}

impl<K, V> TableSnapshot<K, V> {
    /// Number of slots in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Chained(slots) => slots.len(),
            Self::Open(slots) => slots.len(),
        }
    }

    /// `true` when the snapshot has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries stored across all slots.
    #[must_use]
    pub fn entries(&self) -> usize {
        match self {
            Self::Chained(slots) => slots.iter().map(Vec::len).sum(),
            Self::Open(slots) => slots.iter().filter(|slot| slot.is_some()).count(),
        }
    }
}

/// Immutable snapshot of a table: slots plus the last operation's cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState<K, V> {
    /// Number of slots, fixed at construction.
    pub size: usize,
    /// Contents of every slot, in index order.
    pub table: TableSnapshot<K, V>,
    /// Collisions recorded by the most recent insert/search.
    pub collisions_count: usize,
    /// Probes recorded by the most recent insert/search.
    pub probes_count: usize,
    /// The strategy the table was constructed with.
    pub algorithm: Strategy,
}
