//! Collision-resolution strategy tags.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// The collision-resolution strategies a table can be constructed with.
///
/// The set is closed: dispatch happens on this tag at construction time, not
/// through runtime subtyping. The serialized form matches the names external
/// callers use: `chaining`, `linear_probing`, `quadratic_probing`,
/// `double_hashing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// One ordered bucket of entries per slot.
    Chaining,
    /// Open addressing, probing `home + i`.
    LinearProbing,
    /// Open addressing, probing `home + i²`.
    QuadraticProbing,
    /// Open addressing, probing `home + i·h2(key)`.
    DoubleHashing,
}

impl Strategy {
    /// All strategies, in wire order.
    pub const ALL: [Self; 4] =
        [Self::Chaining, Self::LinearProbing, Self::QuadraticProbing, Self::DoubleHashing];

    /// The wire name of this strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chaining => "chaining",
            Self::LinearProbing => "linear_probing",
            Self::QuadraticProbing => "quadratic_probing",
            Self::DoubleHashing => "double_hashing",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chaining" => Ok(Self::Chaining),
            "linear_probing" => Ok(Self::LinearProbing),
            "quadratic_probing" => Ok(Self::QuadraticProbing),
            "double_hashing" => Ok(Self::DoubleHashing),
            other => Err(TableError::UnknownStrategy(other.to_string())),
        }
    }
}
