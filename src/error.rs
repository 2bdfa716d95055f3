//! Error types for table construction and mutation.

use thiserror::Error;

/// Errors surfaced by table construction and insertion.
///
/// A failed search is not an error: `search` returns `None` for an absent
/// key. Insertion either fully places/updates an entry or fails without
/// touching any slot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Requested a table with zero slots.
    #[error("table size must be a positive integer, got {0}")]
    InvalidSize(usize),

    /// Open addressing exhausted all `size` candidate slots without finding
    /// an empty slot or a matching key. Chaining never reports this.
    #[error("table is full: no empty slot or matching key within {size} probes")]
    TableFull {
        /// Capacity of the table the insert was attempted on.
        size: usize,
    },

    /// The construction dispatcher was asked for a strategy name it does not
    /// recognize.
    #[error("unknown hashing strategy: {0:?}")]
    UnknownStrategy(String),
}

/// Result alias for the table APIs.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            TableError::InvalidSize(0).to_string(),
            "table size must be a positive integer, got 0"
        );
        assert_eq!(
            TableError::TableFull { size: 10 }.to_string(),
            "table is full: no empty slot or matching key within 10 probes"
        );
        assert_eq!(
            TableError::UnknownStrategy("cuckoo".to_string()).to_string(),
            "unknown hashing strategy: \"cuckoo\""
        );
    }
}
