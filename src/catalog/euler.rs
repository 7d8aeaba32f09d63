// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Euler (secant) numbers and Eulerian numbers.
//!
//! The Euler numbers vanish at every odd index, so their store only holds
//! even keys: the tabulator walks it in steps of two and odd arguments are
//! answered without consulting it.
//!
//! Eulerian numbers A(n, k) count permutations of n items with exactly k - 1
//! ascents (k runs from 1 to n).

use super::binomial::binomial_row;
use crate::error::Result;
use crate::memoize::{memoize, Pair, Recurrence};
use crate::registry::CacheRegistry;
use crate::store::Store;
use crate::tabulate::tabulate;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

pub(crate) fn seed(store: &mut Store<i64>) {
    store.save(0, BigInt::one());
}

/// E(m) = -sum over j < m/2 of C(m, 2j) E(2j), for even m.
fn step(store: &Store<i64>, m: i64) -> Result<BigInt> {
    let row = binomial_row(m);
    let sum: BigInt = (0..m / 2)
        .map(|j| &row[(2 * j) as usize] * &store[2 * j])
        .sum();
    Ok(-sum)
}

struct Eulerian;

impl Recurrence for Eulerian {
    fn closed_form(&self, n: i64, k: i64) -> Option<BigInt> {
        if n == 0 || k > n || k == 0 {
            Some(BigInt::zero())
        } else if k == n || n < 2 || k == 1 {
            Some(BigInt::one())
        } else {
            None
        }
    }

    fn subproblems(&self, n: i64, k: i64) -> Vec<Pair> {
        vec![(n - 1, k - 1), (n - 1, k)]
    }

    fn combine(&self, n: i64, k: i64, values: &[BigInt]) -> BigInt {
        BigInt::from(n - k + 1) * &values[0] + BigInt::from(k) * &values[1]
    }
}

impl CacheRegistry {
    /// The n-th Euler number; zero for odd n.
    ///
    /// # Examples
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// let mut registry = seqcache::CacheRegistry::new();
    /// assert_eq!(registry.euler(6).unwrap(), BigInt::from(-61));
    /// assert_eq!(registry.euler(7).unwrap(), BigInt::from(0));
    /// ```
    pub fn euler(&mut self, n: i64) -> Result<BigInt> {
        if n > 0 && n.is_odd() {
            return Ok(BigInt::zero());
        }
        tabulate(&mut self.euler, n, step)
    }

    /// Eulerian number A(n, k); zero outside 1 <= k <= n.
    pub fn eulerian(&mut self, n: i64, k: i64) -> Result<BigInt> {
        memoize(&mut self.eulerian, &Eulerian, self.config.memo_strategy, n, k)
    }
}
