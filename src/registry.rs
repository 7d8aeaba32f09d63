// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The cache registry.
//!
//! [`CacheRegistry`] owns one strongly-typed [`Store`] per [`Sequence`] and is
//! the receiver of every cached sequence function. There is no ambient global
//! cache: each registry is an explicit value, so independent registries (for
//! example one per test) never observe each other's entries.
//!
//! # Memory Model
//!
//! ```text
//! CacheRegistry {
//!     config: CacheConfig,
//!     fibonacci: Store<i64>,          // univariate: contiguous from floor
//!     ...
//!     stirling2: Store<(i64, i64)>,   // bivariate: sparse
//!     ...
//! }
//! ```
//!
//! # Concurrency
//!
//! The registry has no internal locking and every sequence function takes
//! `&mut self`. Sharing one registry across threads requires an external
//! lock around the whole registry.

use crate::catalog;
use crate::config::CacheConfig;
use crate::sequence::{Arity, Sequence};
use crate::store::{CacheStore, Seeder, Store};

/// A base-case procedure for one sequence, tagged by key shape.
#[derive(Debug, Clone, Copy)]
pub enum Initializer {
    Univariate(Seeder<i64>),
    Bivariate(Seeder<(i64, i64)>),
}

impl Initializer {
    pub fn arity(&self) -> Arity {
        match self {
            Initializer::Univariate(_) => Arity::Univariate,
            Initializer::Bivariate(_) => Arity::Bivariate,
        }
    }
}

/// Per-sequence value caches plus configuration.
#[derive(Debug)]
pub struct CacheRegistry {
    pub(crate) config: CacheConfig,

    pub(crate) fibonacci: Store<i64>,
    pub(crate) factorial: Store<i64>,
    pub(crate) double_factorial: Store<i64>,
    pub(crate) hyper_factorial: Store<i64>,
    pub(crate) derangements: Store<i64>,
    pub(crate) bell: Store<i64>,
    pub(crate) stirling1: Store<(i64, i64)>,
    pub(crate) stirling2: Store<(i64, i64)>,
    pub(crate) int_partitions: Store<i64>,
    pub(crate) int_partitions_into: Store<(i64, i64)>,
    pub(crate) euler: Store<i64>,
    pub(crate) eulerian: Store<(i64, i64)>,
    pub(crate) power_sum: Store<(i64, i64)>,
    pub(crate) menage: Store<i64>,
}

impl CacheRegistry {
    /// Create a registry with default configuration. All stores start unseeded.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create a registry with the given configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            config,
            fibonacci: Store::new(Sequence::Fibonacci, catalog::fibonacci::seed),
            factorial: Store::new(Sequence::Factorial, catalog::factorial::seed_factorial),
            double_factorial: Store::new(
                Sequence::DoubleFactorial,
                catalog::factorial::seed_double_factorial,
            ),
            hyper_factorial: Store::new(
                Sequence::HyperFactorial,
                catalog::factorial::seed_hyper_factorial,
            ),
            derangements: Store::new(
                Sequence::Derangements,
                catalog::derangements::seed_derangements,
            ),
            bell: Store::new(Sequence::Bell, catalog::bell::seed),
            stirling1: Store::new(Sequence::Stirling1, catalog::no_base_cases),
            stirling2: Store::new(Sequence::Stirling2, catalog::no_base_cases),
            int_partitions: Store::new(Sequence::IntPartitions, catalog::partitions::seed),
            int_partitions_into: Store::new(Sequence::IntPartitionsInto, catalog::no_base_cases),
            euler: Store::new(Sequence::Euler, catalog::euler::seed),
            eulerian: Store::new(Sequence::Eulerian, catalog::no_base_cases),
            power_sum: Store::new(Sequence::PowerSum, catalog::no_base_cases),
            menage: Store::new(Sequence::Menage, catalog::derangements::seed_menage),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Read-only view of a sequence's store. Does not seed it.
    pub fn store(&self, sequence: Sequence) -> &dyn CacheStore {
        match sequence {
            Sequence::Fibonacci => &self.fibonacci,
            Sequence::Factorial => &self.factorial,
            Sequence::DoubleFactorial => &self.double_factorial,
            Sequence::HyperFactorial => &self.hyper_factorial,
            Sequence::Derangements => &self.derangements,
            Sequence::Bell => &self.bell,
            Sequence::Stirling1 => &self.stirling1,
            Sequence::Stirling2 => &self.stirling2,
            Sequence::IntPartitions => &self.int_partitions,
            Sequence::IntPartitionsInto => &self.int_partitions_into,
            Sequence::Euler => &self.euler,
            Sequence::Eulerian => &self.eulerian,
            Sequence::PowerSum => &self.power_sum,
            Sequence::Menage => &self.menage,
        }
    }

    fn store_mut(&mut self, sequence: Sequence) -> &mut dyn CacheStore {
        match sequence {
            Sequence::Fibonacci => &mut self.fibonacci,
            Sequence::Factorial => &mut self.factorial,
            Sequence::DoubleFactorial => &mut self.double_factorial,
            Sequence::HyperFactorial => &mut self.hyper_factorial,
            Sequence::Derangements => &mut self.derangements,
            Sequence::Bell => &mut self.bell,
            Sequence::Stirling1 => &mut self.stirling1,
            Sequence::Stirling2 => &mut self.stirling2,
            Sequence::IntPartitions => &mut self.int_partitions,
            Sequence::IntPartitionsInto => &mut self.int_partitions_into,
            Sequence::Euler => &mut self.euler,
            Sequence::Eulerian => &mut self.eulerian,
            Sequence::PowerSum => &mut self.power_sum,
            Sequence::Menage => &mut self.menage,
        }
    }

    fn univariate_mut(&mut self, sequence: Sequence) -> Option<&mut Store<i64>> {
        match sequence {
            Sequence::Fibonacci => Some(&mut self.fibonacci),
            Sequence::Factorial => Some(&mut self.factorial),
            Sequence::DoubleFactorial => Some(&mut self.double_factorial),
            Sequence::HyperFactorial => Some(&mut self.hyper_factorial),
            Sequence::Derangements => Some(&mut self.derangements),
            Sequence::Bell => Some(&mut self.bell),
            Sequence::IntPartitions => Some(&mut self.int_partitions),
            Sequence::Euler => Some(&mut self.euler),
            Sequence::Menage => Some(&mut self.menage),
            _ => None,
        }
    }

    fn bivariate_mut(&mut self, sequence: Sequence) -> Option<&mut Store<(i64, i64)>> {
        match sequence {
            Sequence::Stirling1 => Some(&mut self.stirling1),
            Sequence::Stirling2 => Some(&mut self.stirling2),
            Sequence::IntPartitionsInto => Some(&mut self.int_partitions_into),
            Sequence::Eulerian => Some(&mut self.eulerian),
            Sequence::PowerSum => Some(&mut self.power_sum),
            _ => None,
        }
    }

    /// The store for `sequence`, seeded on first use.
    pub fn store_for(&mut self, sequence: Sequence) -> &mut dyn CacheStore {
        let store = self.store_mut(sequence);
        store.ensure_seeded();
        store
    }

    /// All stores in registration order.
    pub fn stores(&self) -> impl Iterator<Item = &dyn CacheStore> + '_ {
        Sequence::all().map(move |sequence| self.store(sequence))
    }

    /// Replace the base-case procedure of `sequence`.
    ///
    /// Takes effect on the store's next seeding (first use or clear).
    ///
    /// A univariate initializer must write a contiguous run of keys from the
    /// sequence floor, covering every base case the recurrence reads (for
    /// example 0 and 1 for fibonacci, 0 through 3 for menage). Writing fewer
    /// is a programming error: the next extension panics on the missing key.
    ///
    /// # Panics
    ///
    /// Panics if the initializer's key shape does not match the sequence.
    pub fn register_initializer(&mut self, sequence: Sequence, initializer: Initializer) {
        assert_eq!(
            sequence.arity(),
            initializer.arity(),
            "initializer shape does not match {}",
            sequence
        );
        match initializer {
            Initializer::Univariate(seeder) => {
                if let Some(store) = self.univariate_mut(sequence) {
                    store.register_initializer(seeder);
                }
            }
            Initializer::Bivariate(seeder) => {
                if let Some(store) = self.bivariate_mut(sequence) {
                    store.register_initializer(seeder);
                }
            }
        }
    }

    /// High-water mark of a univariate store; `None` for bivariate or empty stores.
    pub fn high_water(&self, sequence: Sequence) -> Option<i64> {
        match sequence {
            Sequence::Fibonacci => self.fibonacci.max_key(),
            Sequence::Factorial => self.factorial.max_key(),
            Sequence::DoubleFactorial => self.double_factorial.max_key(),
            Sequence::HyperFactorial => self.hyper_factorial.max_key(),
            Sequence::Derangements => self.derangements.max_key(),
            Sequence::Bell => self.bell.max_key(),
            Sequence::IntPartitions => self.int_partitions.max_key(),
            Sequence::Euler => self.euler.max_key(),
            Sequence::Menage => self.menage.max_key(),
            _ => None,
        }
    }
}

impl Default for CacheRegistry {
    fn default() -> Self {
        Self::new()
    }
}
