//! Deterministic key hashing.
//!
//! The tables default to XXH64 with a fixed seed so that a given key maps to
//! the same home index on every run, keeping persisted snapshots and
//! operation logs comparable across restarts. Callers that want different
//! trade-offs can supply their own [`BuildHasher`] through the `with_hasher`
//! constructors.

use std::hash::{BuildHasher, Hash, Hasher};

use xxhash_rust::xxh64::Xxh64;

/// Seed for the default hasher. Fixed so hashing is reproducible.
const XXH64_SEED: u64 = 0x6861_7368_6c61_6221;

/// A [`BuildHasher`] producing fixed-seed XXH64 hashers.
///
/// The deterministic counterpart of `std`'s `RandomState`: no per-process
/// randomness, so the same key always lands on the same home index.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedState;

impl BuildHasher for FixedState {
    type Hasher = Xxh64;

    fn build_hasher(&self) -> Self::Hasher {
        Xxh64::new(XXH64_SEED)
    }
}

/// Full-width hash of `key` under `state`.
pub(crate) fn raw_hash<Q, S>(state: &S, key: &Q) -> u64
where
    Q: Hash + ?Sized,
    S: BuildHasher,
{
    let mut hasher = state.build_hasher();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Home index of `key` in a table of `size` slots: `hash(key) mod size`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn home_index<Q, S>(state: &S, key: &Q, size: usize) -> usize
where
    Q: Hash + ?Sized,
    S: BuildHasher,
{
    (raw_hash(state, key) % size as u64) as usize
}

/// Secondary probe step for double hashing: `(hash(key) mod (size−1)) + 1`.
///
/// Guaranteed in `[1, size−1]`, never zero, so the probe sequence cannot
/// degenerate into a zero-step cycle. For a one-slot table the step is 1.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn probe_step<Q, S>(state: &S, key: &Q, size: usize) -> usize
where
    Q: Hash + ?Sized,
    S: BuildHasher,
{
    if size < 2 {
        return 1;
    }
    (raw_hash(state, key) % (size as u64 - 1)) as usize + 1
}

/// Hasher that forwards the raw integer value of a key.
///
/// Only for tests: with `u64` keys the home index becomes `key % size`, which
/// makes probe sequences and counter values exactly predictable.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RawState;

#[cfg(test)]
#[derive(Debug)]
pub(crate) struct RawHasher(u64);

#[cfg(test)]
impl BuildHasher for RawState {
    type Hasher = RawHasher;

    fn build_hasher(&self) -> Self::Hasher {
        RawHasher(0)
    }
}

#[cfg(test)]
impl Hasher for RawHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(*byte);
        }
    }

    fn write_u64(&mut self, n: u64) {
        self.0 = n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_state_is_deterministic() {
        let a = raw_hash(&FixedState, "apple");
        let b = raw_hash(&FixedState, "apple");
        assert_eq!(a, b);
    }

    #[test]
    fn home_index_stays_in_range() {
        for size in [1, 2, 7, 10, 1024] {
            for key in ["a", "b", "banana", ""] {
                assert!(home_index(&FixedState, key, size) < size);
            }
        }
    }

    #[test]
    fn probe_step_is_never_zero() {
        for size in [1, 2, 4, 10] {
            for key in 0_u64..32 {
                let step = probe_step(&RawState, &key, size);
                assert!(step >= 1);
                assert!(size < 2 || step <= size - 1);
            }
        }
    }

    #[test]
    fn raw_state_exposes_u64_keys() {
        assert_eq!(raw_hash(&RawState, &42_u64), 42);
        assert_eq!(home_index(&RawState, &42_u64, 10), 2);
        // step = (42 mod 9) + 1
        assert_eq!(probe_step(&RawState, &42_u64, 10), 7);
    }
}
