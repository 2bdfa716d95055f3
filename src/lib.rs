//! # Hashlab
//!
//! Fixed-capacity hash tables with four collision-resolution strategies:
//! separate chaining, linear probing, quadratic probing, and double hashing.
//!
//! Every table reports the cost of its most recent insert/search as a
//! (collisions, probes) pair, and snapshots its slots into a serializable
//! [`TableState`] that external layers can persist or ship verbatim. Table
//! capacity is fixed at construction; there is no resizing and no delete
//! operation.
//!
//! ## Basic Usage
//!
//! ```rust
//! use hashlab::{HashTable, Strategy, TableError};
//!
//! # fn main() -> Result<(), TableError> {
//! // Construct a table with a strategy tag and a fixed slot count
//! let mut table = HashTable::new(Strategy::LinearProbing, 10)?;
//!
//! // Insert values
//! table.insert("apple".to_string(), "red".to_string())?;
//! table.insert("banana".to_string(), "yellow".to_string())?;
//!
//! // Retrieve values
//! assert_eq!(table.search("apple"), Some(&"red".to_string()));
//! assert_eq!(table.search("plum"), None);
//!
//! // Update values in place
//! table.insert("apple".to_string(), "green".to_string())?;
//! assert_eq!(table.search("apple"), Some(&"green".to_string()));
//!
//! // Inspect the cost of the last operation and the slot contents
//! let state = table.state();
//! assert_eq!(state.size, 10);
//! assert_eq!(state.algorithm, Strategy::LinearProbing);
//! # Ok(())
//! # }
//! ```
//!
//! ## Registry and Operation Records
//!
//! Integration layers typically keep one live table per strategy and pair
//! every operation with an append-only log record:
//!
//! ```rust
//! use hashlab::{
//!     Operation, OperationLog, OperationRecord, OperationResult, Strategy,
//!     TableError, TableRegistry,
//! };
//!
//! # fn main() -> Result<(), TableError> {
//! let mut registry = TableRegistry::with_default_size()?;
//! let mut log = OperationLog::new();
//!
//! let table = registry.table_mut(Strategy::Chaining);
//! table.insert("apple".to_string(), "red".to_string())?;
//! log.append(OperationRecord::capture(
//!     table,
//!     Operation::Insert,
//!     "apple".to_string(),
//!     Some("red".to_string()),
//!     OperationResult::Inserted,
//! ));
//!
//! assert_eq!(log.recent(100).len(), 1);
//!
//! // Wipe one table, or all of them, back to empty slots
//! registry.reset(Strategy::Chaining);
//! assert!(registry.table(Strategy::Chaining).is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Hashing
//!
//! Keys hash through fixed-seed XXH64 by default, so a key maps to the same
//! home index on every run and persisted snapshots stay comparable across
//! restarts. All tables accept a custom [`std::hash::BuildHasher`] through
//! their `with_hasher` constructors.

/// Module implementing the separate-chaining table
mod chaining;
/// Error types shared by every table
mod error;
/// Deterministic key hashing
mod hash;
/// Module implementing the open-addressing tables
mod open_addressing;
/// Operation records and the in-memory operation log
mod record;
/// Caller-owned registry of one table per strategy
mod registry;
/// Serializable table snapshots
mod state;
/// Per-operation probe and collision counters
mod stats;
/// Collision-resolution strategy tags
mod strategy;
/// Strategy-dispatched table construction
mod table;
/// Utility functions and traits for the tables
mod utils;

pub use chaining::{ChainingIter, ChainingTable};
pub use error::{Result, TableError};
pub use hash::FixedState;
pub use open_addressing::{ProbingIter, ProbingTable};
pub use record::{Operation, OperationLog, OperationRecord, OperationResult};
pub use registry::{DEFAULT_TABLE_SIZE, TableRegistry};
pub use state::{Entry, TableSnapshot, TableState};
pub use stats::ProbeStats;
pub use strategy::Strategy;
pub use table::{HashTable, Iter};
pub use utils::{TableExtensions, from_pairs};
