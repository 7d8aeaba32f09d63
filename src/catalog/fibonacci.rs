// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fibonacci numbers: F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2).

use crate::error::Result;
use crate::registry::CacheRegistry;
use crate::store::Store;
use crate::tabulate::tabulate;
use num_bigint::BigInt;

pub(crate) fn seed(store: &mut Store<i64>) {
    store.save(0, BigInt::from(0));
    store.save(1, BigInt::from(1));
}

fn step(store: &Store<i64>, m: i64) -> Result<BigInt> {
    Ok(&store[m - 1] + &store[m - 2])
}

impl CacheRegistry {
    /// The n-th Fibonacci number.
    ///
    /// # Examples
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// let mut registry = seqcache::CacheRegistry::new();
    /// assert_eq!(registry.fibonacci(10).unwrap(), BigInt::from(55));
    /// ```
    pub fn fibonacci(&mut self, n: i64) -> Result<BigInt> {
        tabulate(&mut self.fibonacci, n, step)
    }
}
