// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Power sums 1^k + 2^k + ... + n^k.

use super::power;
use crate::error::Result;
use crate::memoize::{memoize, Pair, Recurrence};
use crate::registry::CacheRegistry;
use num_bigint::BigInt;
use num_traits::Zero;

struct PowerSum;

impl Recurrence for PowerSum {
    fn closed_form(&self, n: i64, k: i64) -> Option<BigInt> {
        if n == 0 {
            Some(BigInt::zero())
        } else if k == 0 {
            Some(BigInt::from(n))
        } else if k == 1 {
            let n = BigInt::from(n);
            Some(&n * (&n + 1u8) / 2u8)
        } else {
            None
        }
    }

    fn subproblems(&self, n: i64, k: i64) -> Vec<Pair> {
        vec![(n - 1, k)]
    }

    fn combine(&self, n: i64, k: i64, values: &[BigInt]) -> BigInt {
        power(n, k) + &values[0]
    }
}

impl CacheRegistry {
    /// Sum of the k-th powers of 1..=n.
    pub fn power_sum(&mut self, n: i64, k: i64) -> Result<BigInt> {
        memoize(&mut self.power_sum, &PowerSum, self.config.memo_strategy, n, k)
    }
}
