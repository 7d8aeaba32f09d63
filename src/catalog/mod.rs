// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The sequence catalog.
//!
//! Each submodule pairs a sequence's recurrence with its base cases and its
//! public entry point. Cached sequences are methods on
//! [`CacheRegistry`](crate::CacheRegistry); the derived primitives in
//! [`binomial`] are free functions computed directly, without a store.
//!
//! | Sequence | Store | Evaluation |
//! |---|---|---|
//! | fibonacci, factorial, double_factorial, hyper_factorial | univariate | tabulated |
//! | derangements, menage, bell, euler, int_partitions | univariate | tabulated |
//! | stirling1, stirling2, int_partitions_into, eulerian, power_sum | bivariate | memoized |
//! | binomial, catalan, multichoose, multinomial | none | direct |
//!
//! Every entry point validates its arguments before touching any store.

pub mod bell;
pub mod binomial;
pub mod derangements;
pub mod euler;
pub mod factorial;
pub mod fibonacci;
pub mod partitions;
pub mod power_sum;
pub mod stirling;

use crate::store::Store;
use num_bigint::BigInt;

/// Initializer for bivariate stores: their base cases are all closed forms,
/// so nothing is written.
pub(crate) fn no_base_cases(_store: &mut Store<(i64, i64)>) {}

/// `base^exp` for a validated, non-negative exponent.
pub(crate) fn power(base: i64, exp: i64) -> BigInt {
    debug_assert!(exp >= 0);
    num_traits::pow(BigInt::from(base), exp as usize)
}

/// 1 if the condition holds, else 0.
pub(crate) fn indicator(condition: bool) -> BigInt {
    BigInt::from(condition as u8)
}
