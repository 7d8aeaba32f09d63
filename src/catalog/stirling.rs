// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Stirling numbers of the first kind (signed) and second kind.
//!
//! Both triangles share their border: s(0, 0) = 1, s(n, n) = 1, and zero at
//! k = 0 < n or k > n. Only interior cells are cached.

use super::indicator;
use crate::error::Result;
use crate::memoize::{memoize, Pair, Recurrence};
use crate::registry::CacheRegistry;
use num_bigint::BigInt;
use num_traits::Zero;

fn border(n: i64, k: i64) -> Option<BigInt> {
    if n == 0 {
        Some(indicator(k == 0))
    } else if k > n || k == 0 {
        Some(BigInt::zero())
    } else if k == n {
        Some(indicator(true))
    } else {
        None
    }
}

/// s(n, k) = s(n-1, k-1) - (n-1) s(n-1, k)
struct FirstKind;

impl Recurrence for FirstKind {
    fn closed_form(&self, n: i64, k: i64) -> Option<BigInt> {
        border(n, k)
    }

    fn subproblems(&self, n: i64, k: i64) -> Vec<Pair> {
        vec![(n - 1, k - 1), (n - 1, k)]
    }

    fn combine(&self, n: i64, _k: i64, values: &[BigInt]) -> BigInt {
        &values[0] - BigInt::from(n - 1) * &values[1]
    }
}

/// S(n, k) = S(n-1, k-1) + k S(n-1, k)
struct SecondKind;

impl Recurrence for SecondKind {
    fn closed_form(&self, n: i64, k: i64) -> Option<BigInt> {
        border(n, k)
    }

    fn subproblems(&self, n: i64, k: i64) -> Vec<Pair> {
        vec![(n - 1, k - 1), (n - 1, k)]
    }

    fn combine(&self, _n: i64, k: i64, values: &[BigInt]) -> BigInt {
        &values[0] + BigInt::from(k) * &values[1]
    }
}

impl CacheRegistry {
    /// Signed Stirling number of the first kind.
    pub fn stirling1(&mut self, n: i64, k: i64) -> Result<BigInt> {
        memoize(&mut self.stirling1, &FirstKind, self.config.memo_strategy, n, k)
    }

    /// Stirling number of the second kind: partitions of n items into k
    /// non-empty blocks.
    ///
    /// # Examples
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// let mut registry = seqcache::CacheRegistry::new();
    /// assert_eq!(registry.stirling2(5, 2).unwrap(), BigInt::from(15));
    /// ```
    pub fn stirling2(&mut self, n: i64, k: i64) -> Result<BigInt> {
        memoize(&mut self.stirling2, &SecondKind, self.config.memo_strategy, n, k)
    }
}
