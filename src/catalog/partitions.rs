// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer partitions.
//!
//! - `int_partitions_into(n, k)`: partitions of n into exactly k parts,
//!   memoized in its own bivariate store.
//! - `int_partitions(n)`: all partitions of n, tabulated as the row sum of
//!   the bivariate table.
//! - `int_partitions_distinct_into(n, k)`, `int_partitions_distinct(n)`:
//!   partitions into distinct parts, by the shift that turns k distinct parts
//!   into k arbitrary parts of a number smaller by k(k-1)/2. They read the
//!   bivariate store and have none of their own.

use super::indicator;
use crate::config::MemoStrategy;
use crate::error::{require_non_negative, Result};
use crate::memoize::{memoize, Pair, Recurrence};
use crate::registry::CacheRegistry;
use crate::store::Store;
use crate::tabulate::tabulate;
use num_bigint::BigInt;
use num_traits::{One, Zero};

pub(crate) fn seed(store: &mut Store<i64>) {
    store.save(0, BigInt::one());
}

/// Removing one from each of the k parts leaves a partition of n - k into at
/// most k parts.
struct ExactlyK;

impl Recurrence for ExactlyK {
    fn closed_form(&self, n: i64, k: i64) -> Option<BigInt> {
        if k > n {
            Some(BigInt::zero())
        } else if n == 0 {
            Some(indicator(k == 0))
        } else if k == 0 {
            Some(BigInt::zero())
        } else if k == n || k == 1 {
            Some(BigInt::one())
        } else {
            None
        }
    }

    fn subproblems(&self, n: i64, k: i64) -> Vec<Pair> {
        let rest = n - k;
        (0..=k.min(rest)).map(|i| (rest, i)).collect()
    }

    fn combine(&self, _n: i64, _k: i64, values: &[BigInt]) -> BigInt {
        values.iter().sum()
    }
}

fn exactly(store: &mut Store<Pair>, strategy: MemoStrategy, n: i64, k: i64) -> Result<BigInt> {
    memoize(store, &ExactlyK, strategy, n, k)
}

impl CacheRegistry {
    /// Partitions of n into exactly k positive parts.
    pub fn int_partitions_into(&mut self, n: i64, k: i64) -> Result<BigInt> {
        exactly(&mut self.int_partitions_into, self.config.memo_strategy, n, k)
    }

    /// Partitions of n.
    ///
    /// # Examples
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// let mut registry = seqcache::CacheRegistry::new();
    /// assert_eq!(registry.int_partitions(10).unwrap(), BigInt::from(42));
    /// ```
    pub fn int_partitions(&mut self, n: i64) -> Result<BigInt> {
        let strategy = self.config.memo_strategy;
        let into = &mut self.int_partitions_into;
        tabulate(&mut self.int_partitions, n, |_, m| {
            let mut total = BigInt::zero();
            for k in 0..=m {
                total += exactly(into, strategy, m, k)?;
            }
            Ok(total)
        })
    }

    /// Partitions of n into exactly k distinct positive parts.
    pub fn int_partitions_distinct_into(&mut self, n: i64, k: i64) -> Result<BigInt> {
        require_non_negative("int_partitions_distinct_into", &[n, k])?;
        let k_wide = i128::from(k);
        let offset = k_wide * (k_wide - 1) / 2;
        if i128::from(n) < offset {
            return Ok(BigInt::zero());
        }
        // offset <= n, so it fits
        self.int_partitions_into(n - offset as i64, k)
    }

    /// Partitions of n into distinct positive parts.
    pub fn int_partitions_distinct(&mut self, n: i64) -> Result<BigInt> {
        require_non_negative("int_partitions_distinct", &[n])?;
        if n == 0 {
            return Ok(BigInt::one());
        }
        let mut total = BigInt::zero();
        for k in 1.. {
            let term = self.int_partitions_distinct_into(n, k)?;
            if term.is_zero() {
                break;
            }
            total += term;
        }
        Ok(total)
    }
}
