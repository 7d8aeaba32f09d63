// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutations with forbidden positions.
//!
//! Derangements D(n) count permutations of n items with no fixed point.
//! Ménage numbers M(n) count the seatings of n couples at a round table,
//! alternating by sex, with nobody beside their partner.
//!
//! The ménage store holds M(n) directly. Its step works through the reduced
//! numbers U(n) = M(n) / (2 n!), which satisfy
//!
//! ```text
//! (n - 2) U(n) = n (n - 2) U(n-1) + n U(n-2) + 4 (-1)^(n+1)      n >= 4
//! ```
//!
//! so each step reads the factorial store as well as its own.

use super::factorial::factorial_step;
use crate::error::Result;
use crate::registry::CacheRegistry;
use crate::store::Store;
use crate::tabulate::tabulate;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

pub(crate) fn seed_derangements(store: &mut Store<i64>) {
    store.save(0, BigInt::one());
    store.save(1, BigInt::zero());
}

pub(crate) fn seed_menage(store: &mut Store<i64>) {
    store.save(0, BigInt::one());
    store.save(1, BigInt::zero());
    store.save(2, BigInt::zero());
    store.save(3, BigInt::from(12));
}

fn derangements_step(store: &Store<i64>, m: i64) -> Result<BigInt> {
    Ok((&store[m - 1] + &store[m - 2]) * BigInt::from(m - 1))
}

impl CacheRegistry {
    /// Number of fixed-point-free permutations of n items.
    pub fn derangements(&mut self, n: i64) -> Result<BigInt> {
        tabulate(&mut self.derangements, n, derangements_step)
    }

    /// Number of ménage seatings for n couples.
    ///
    /// # Examples
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// let mut registry = seqcache::CacheRegistry::new();
    /// assert_eq!(registry.menage(5).unwrap(), BigInt::from(3120));
    /// ```
    pub fn menage(&mut self, n: i64) -> Result<BigInt> {
        let factorials = &mut self.factorial;
        tabulate(&mut self.menage, n, |store, m| {
            let f0 = tabulate(factorials, m, factorial_step)?;
            let f1 = tabulate(factorials, m - 1, factorial_step)?;
            let f2 = tabulate(factorials, m - 2, factorial_step)?;

            let two = BigInt::from(2);
            let u1 = &store[m - 1] / (&two * f1);
            let u2 = &store[m - 2] / (&two * f2);
            let alternating = if m.is_even() { -4 } else { 4 };

            let n_big = BigInt::from(m);
            let scaled = &n_big * BigInt::from(m - 2) * u1 + &n_big * u2 + BigInt::from(alternating);
            let u0 = scaled / BigInt::from(m - 2);
            Ok(two * f0 * u0)
        })
    }
}
