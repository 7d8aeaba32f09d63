// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bell numbers: the number of set partitions of an n-element set.

use super::binomial::binomial_row;
use crate::error::Result;
use crate::registry::CacheRegistry;
use crate::store::Store;
use crate::tabulate::tabulate;
use num_bigint::BigInt;
use num_traits::One;

pub(crate) fn seed(store: &mut Store<i64>) {
    store.save(0, BigInt::one());
    store.save(1, BigInt::one());
}

/// B(m) = sum over k < m of C(m-1, k) B(k)
fn step(store: &Store<i64>, m: i64) -> Result<BigInt> {
    Ok(binomial_row(m - 1)
        .iter()
        .zip(0..m)
        .map(|(c, k)| c * &store[k])
        .sum())
}

impl CacheRegistry {
    /// The n-th Bell number.
    pub fn bell(&mut self, n: i64) -> Result<BigInt> {
        tabulate(&mut self.bell, n, step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell() {
        let mut registry = CacheRegistry::new();
        let expected = [1, 1, 2, 5, 15, 52, 203, 877, 4140, 21147, 115975];
        for (n, &b) in expected.iter().enumerate() {
            assert_eq!(registry.bell(n as i64).unwrap(), BigInt::from(b));
        }
    }

    #[test]
    fn test_bell_large() {
        let mut registry = CacheRegistry::new();
        assert_eq!(
            registry.bell(30).unwrap().to_string(),
            "846749014511809332450147"
        );
    }
}
