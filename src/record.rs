//! Operation records for external persistence.
//!
//! Callers are expected to pair every insert/search with an append-only log
//! record: strategy, operation kind, key, optional value, result, the state
//! snapshot, the per-call counters, and a timestamp. The tables themselves
//! are stateless with respect to this log; [`OperationRecord::capture`]
//! assembles the fields and [`OperationLog`] offers an in-memory append-only
//! holder with a bounded recent view. Durable storage is the caller's
//! business.

use std::hash::{BuildHasher, Hash};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{state::TableState, strategy::Strategy, table::HashTable};

/// The operations a record can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// An insert (or in-place update).
    Insert,
    /// A lookup.
    Search,
}

/// Outcome of a logged operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationResult<V> {
    /// A fresh entry was placed.
    Inserted,
    /// An existing entry's value was overwritten.
    Updated,
    /// The searched key was present, with this value.
    Found(V),
    /// The searched key was absent.
    NotFound,
    /// The operation failed; the message is the error's display form.
    Failed(String),
}

/// One append-only log record pairing an operation with the table state it
/// left behind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationRecord<K, V> {
    /// Strategy of the table the operation ran against.
    pub algorithm: Strategy,
    /// What the operation was.
    pub operation: Operation,
    /// The key the operation processed.
    pub key: K,
    /// The inserted value, when the operation carried one.
    pub value: Option<V>,
    /// How the operation ended.
    pub result: OperationResult<V>,
    /// Snapshot of the table after the operation.
    pub table_state: TableState<K, V>,
    /// Collisions recorded by the operation.
    pub collisions: usize,
    /// Probes recorded by the operation.
    pub probes: usize,
    /// When the record was captured.
    pub timestamp: DateTime<Utc>,
}

impl<K, V> OperationRecord<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Captures a record from `table` after an operation completed.
    ///
    /// The snapshot and counters are read from the table, so this must be
    /// called before the next insert/search resets them.
    pub fn capture<S>(
        table: &HashTable<K, V, S>,
        operation: Operation,
        key: K,
        value: Option<V>,
        result: OperationResult<V>,
    ) -> Self
    where
        S: BuildHasher,
    {
        let table_state = table.state();
        Self {
            algorithm: table.strategy(),
            operation,
            key,
            value,
            result,
            collisions: table_state.collisions_count,
            probes: table_state.probes_count,
            table_state,
            timestamp: Utc::now(),
        }
    }
}

/// In-memory append-only sequence of operation records.
#[derive(Debug, Clone)]
pub struct OperationLog<K, V> {
    /// Records in append order.
    records: Vec<OperationRecord<K, V>>,
}

impl<K, V> OperationLog<K, V> {
    /// An empty log.
    #[must_use]
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Appends one record.
    pub fn append(&mut self, record: OperationRecord<K, V>) {
        self.records.push(record);
    }

    /// The most recent `limit` records, oldest first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> &[OperationRecord<K, V>] {
        let start = self.records.len().saturating_sub(limit);
        &self.records[start..]
    }

    /// Number of records appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, OperationRecord<K, V>> {
        self.records.iter()
    }

    /// Drops all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<K, V> Default for OperationLog<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(tag: &str) -> OperationRecord<String, String> {
        let mut table = HashTable::new(Strategy::LinearProbing, 10).unwrap();
        table.insert(tag.to_string(), "v".to_string()).unwrap();
        OperationRecord::capture(
            &table,
            Operation::Insert,
            tag.to_string(),
            Some("v".to_string()),
            OperationResult::Inserted,
        )
    }

    #[test]
    fn capture_copies_the_per_call_counters() {
        let mut table = HashTable::new(Strategy::Chaining, 10).unwrap();
        table.insert("apple".to_string(), "red".to_string()).unwrap();

        let record = OperationRecord::capture(
            &table,
            Operation::Insert,
            "apple".to_string(),
            Some("red".to_string()),
            OperationResult::Inserted,
        );

        assert_eq!(record.algorithm, Strategy::Chaining);
        assert_eq!(record.probes, table.stats().probes);
        assert_eq!(record.collisions, table.stats().collisions);
        assert_eq!(record.table_state, table.state());
    }

    #[test]
    fn record_serializes_with_wire_field_names() {
        let record = sample_record("apple");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["algorithm"], "linear_probing");
        assert_eq!(json["operation"], "insert");
        assert_eq!(json["key"], "apple");
        assert_eq!(json["result"], "inserted");
        assert_eq!(json["probes"], 1);
        assert_eq!(json["collisions"], 0);
        assert!(json["table_state"]["table"].is_array());
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn search_results_carry_the_value() {
        let found: OperationResult<String> = OperationResult::Found("red".to_string());
        let json = serde_json::to_value(&found).unwrap();
        assert_eq!(json, serde_json::json!({"found": "red"}));

        let missing: OperationResult<String> = OperationResult::NotFound;
        assert_eq!(serde_json::to_value(&missing).unwrap(), serde_json::json!("not_found"));
    }

    #[test]
    fn recent_returns_the_tail_in_order() {
        let mut log = OperationLog::new();
        for tag in ["a", "b", "c", "d"] {
            log.append(sample_record(tag));
        }

        assert_eq!(log.len(), 4);
        let tail = log.recent(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].key, "c");
        assert_eq!(tail[1].key, "d");

        // A limit beyond the length returns everything.
        assert_eq!(log.recent(100).len(), 4);
    }
}
