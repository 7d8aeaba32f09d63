// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Keyed value stores.
//!
//! A [`Store`] maps an argument key to the exact value of one sequence at that
//! key. Values are write-once: the store never replaces a key it already holds,
//! and entries are only ever removed wholesale by [`Store::clear_and_reseed`].
//!
//! # Key Shapes
//!
//! - Univariate sequences use `Store<i64>`. Their populated keys always form a
//!   contiguous run (in steps of the sequence's stride) from the sequence floor
//!   up to the high-water mark returned by [`Store::max_key`].
//! - Bivariate sequences use `Store<(i64, i64)>`. No contiguity is promised;
//!   entries appear as (n, k) pairs are requested directly or as subproblems.
//!
//! # Seeding
//!
//! A store starts out unseeded and empty. The first access through
//! [`Store::ensure_seeded`] runs the registered initializer exactly once, which
//! writes the sequence's base cases. Clearing empties the store and runs the
//! initializer again immediately, so a cleared store is never left empty.

use crate::sequence::Sequence;
use num_bigint::BigInt;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Index;
use tracing::debug;

/// Procedure that writes a sequence's base cases into an empty store.
pub type Seeder<K> = fn(&mut Store<K>);

/// Bound shared by every store key.
pub trait StoreKey: Copy + Eq + Hash + Ord + Debug {}

impl StoreKey for i64 {}
impl StoreKey for (i64, i64) {}

/// The value cache of a single sequence.
#[derive(Debug)]
pub struct Store<K: StoreKey> {
    /// Owner of this store.
    sequence: Sequence,
    /// Cached values by argument key.
    entries: HashMap<K, BigInt>,
    /// Largest key saved since the last clear.
    high_water: Option<K>,
    /// Whether the initializer has run since creation or the last clear.
    seeded: bool,
    /// Writes the base cases.
    seeder: Seeder<K>,
}

impl<K: StoreKey> Store<K> {
    /// Create an unseeded, empty store owned by `sequence`.
    pub fn new(sequence: Sequence, seeder: Seeder<K>) -> Self {
        Self {
            sequence,
            entries: HashMap::new(),
            high_water: None,
            seeded: false,
            seeder,
        }
    }

    /// The sequence that owns this store.
    pub fn sequence(&self) -> Sequence {
        self.sequence
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a value is cached for `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// The cached value for `key`, if any.
    pub fn get(&self, key: &K) -> Option<&BigInt> {
        self.entries.get(key)
    }

    /// Cache `value` for `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is already present. Recomputation is deterministic, so a
    /// second save of the same key means a caller skipped its cache check.
    pub fn save(&mut self, key: K, value: BigInt) {
        if self.entries.contains_key(&key) {
            panic!(
                "{}: attempted to overwrite cached key {:?}",
                self.sequence, key
            );
        }
        if self.high_water.map_or(true, |high| key > high) {
            self.high_water = Some(key);
        }
        self.entries.insert(key, value);
    }

    /// Whether the initializer has run since creation or the last clear.
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Run the initializer if this store has never been seeded.
    ///
    /// Idempotent: once seeded, further calls do nothing. Only
    /// [`Store::clear_and_reseed`] can discard cached values.
    pub fn ensure_seeded(&mut self) {
        if self.seeded {
            return;
        }
        self.seeded = true;
        let seeder = self.seeder;
        seeder(self);
        debug!(sequence = %self.sequence, entries = self.entries.len(), "seeded store");
    }

    /// Empty the store and immediately write the base cases again.
    pub fn clear_and_reseed(&mut self) {
        self.entries.clear();
        self.high_water = None;
        self.seeded = false;
        self.ensure_seeded();
    }

    /// Replace the initializer.
    ///
    /// See [`CacheRegistry::register_initializer`](crate::CacheRegistry::register_initializer)
    /// for what a univariate initializer must write.
    ///
    /// The new initializer runs on the next first-use seeding or clear; values
    /// already cached are left alone.
    pub fn register_initializer(&mut self, seeder: Seeder<K>) {
        self.seeder = seeder;
    }
}

impl Store<i64> {
    /// The high-water mark: the largest cached argument, or `None` when empty.
    pub fn max_key(&self) -> Option<i64> {
        self.high_water
    }
}

impl<K: StoreKey> Index<K> for Store<K> {
    type Output = BigInt;

    /// # Panics
    ///
    /// Panics if `key` is absent.
    fn index(&self, key: K) -> &BigInt {
        match self.entries.get(&key) {
            Some(value) => value,
            None => panic!("{}: no cached value for key {:?}", self.sequence, key),
        }
    }
}

/// Type-erased view of a store, used by reporting and clearing.
pub trait CacheStore {
    fn sequence(&self) -> Sequence;

    /// Number of cached entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_seeded(&self) -> bool;

    fn ensure_seeded(&mut self);

    fn clear_and_reseed(&mut self);
}

impl<K: StoreKey> CacheStore for Store<K> {
    fn sequence(&self) -> Sequence {
        Store::sequence(self)
    }

    fn len(&self) -> usize {
        Store::len(self)
    }

    fn is_seeded(&self) -> bool {
        Store::is_seeded(self)
    }

    fn ensure_seeded(&mut self) {
        Store::ensure_seeded(self)
    }

    fn clear_and_reseed(&mut self) {
        Store::clear_and_reseed(self)
    }
}
