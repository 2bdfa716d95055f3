//! Per-operation probe and collision accounting.

use serde::{Deserialize, Serialize};

/// Cost counters for a single insert or search call.
///
/// Both counters are reset at the start of every operation and reflect only
/// that call's cost; cumulative accounting across calls is the caller's job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeStats {
    /// Probes that found a slot occupied by an entry with a different key.
    pub collisions: usize,
    /// Candidate-slot inspections performed by the operation.
    pub probes: usize,
}

impl ProbeStats {
    /// Zeroes both counters.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Records one slot inspection.
    pub(crate) fn probe(&mut self) {
        self.probes = self.probes.saturating_add(1);
    }

    /// Records one occupied-by-other-key hit.
    pub(crate) fn collision(&mut self) {
        self.collisions = self.collisions.saturating_add(1);
    }
}
