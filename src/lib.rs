// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cached combinatorial integer sequences over arbitrary-precision integers.
//!
//! Fibonacci, the factorial family, Bell, Stirling, integer partitions, Euler,
//! Eulerian, power sums, derangements and ménage numbers, each backed by its
//! own value cache so that repeated and incremental queries are amortized.
//!
//! # Architecture
//!
//! The implementation uses a two-tier model:
//!
//! ## Tier 1: Stores
//!
//! One [`Store`] per [`Sequence`], owned by a [`CacheRegistry`]:
//! - Univariate stores (`Store<i64>`) hold a contiguous run of arguments from
//!   the sequence floor up to a high-water mark.
//! - Bivariate stores (`Store<(i64, i64)>`) hold whichever (n, k) pairs have
//!   been requested or reached as subproblems.
//! - Values are write-once. Clearing drops everything and rewrites the base
//!   cases in one step.
//!
//! ## Tier 2: Evaluation
//!
//! - **Tabulation** (univariate): extend the store forward from its
//!   high-water mark to the requested argument, one step at a time. No
//!   recursion, so arbitrarily large n cannot exhaust the call stack.
//! - **Memoization** (bivariate): answer closed-form cells directly, otherwise
//!   evaluate the recurrence top-down caching every interior cell. The walk is
//!   either direct recursion or an explicit work stack, chosen by
//!   [`MemoStrategy`].
//!
//! # Usage
//!
//! ```
//! use num_bigint::BigInt;
//! use seqcache::{CacheRegistry, Sequence};
//!
//! let mut registry = CacheRegistry::new();
//! assert_eq!(registry.bell(10).unwrap(), BigInt::from(115975));
//! assert_eq!(registry.stirling2(10, 3).unwrap(), BigInt::from(9330));
//! assert!(registry.factorial(-1).is_err());
//!
//! println!("{}", registry.cache_report());
//! registry.cache_clear(Some(Sequence::Bell));
//! ```
//!
//! # Errors
//!
//! Every entry point validates its arguments before touching a store and
//! returns [`SequenceError`] on a domain violation. Invalid input never
//! leaves anything behind in a cache.
//!
//! # Logging
//!
//! Store seeding, extension and clearing are reported through `tracing`.
//! The crate installs no subscriber.

pub mod admin;
pub mod catalog;
pub mod config;
pub mod error;
mod memoize;
pub mod registry;
pub mod sequence;
pub mod store;
mod tabulate;

// Re-export commonly used types
pub use admin::{CacheReport, ReportRow};
pub use catalog::binomial::{binomial, catalan, multichoose, multinomial};
pub use config::{CacheConfig, MemoStrategy};
pub use error::{Constraint, Result, SequenceError};
pub use registry::{CacheRegistry, Initializer};
pub use sequence::{Arity, Sequence};
pub use store::{CacheStore, Seeder, Store};
