// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The factorial family.
//!
//! - `factorial(n)`: n!, tabulated.
//! - `factorial_ratio(n, k)`: n! / k! for 0 <= k <= n. This is the only meaning
//!   of the two-argument factorial; the falling factorial n! / (n - k)! has
//!   its own name.
//! - `falling_factorial(n, k)`, `rising_factorial(n, k)`: derived from the above.
//! - `double_factorial(n)`: n!! for n >= -1, tabulated.
//! - `hyper_factorial(n)`: 1^1 2^2 ... n^n, tabulated.

use super::power;
use crate::error::{require_non_negative, Constraint, Result, SequenceError};
use crate::registry::CacheRegistry;
use crate::store::Store;
use crate::tabulate::tabulate;
use num_bigint::BigInt;
use num_traits::{One, Zero};

pub(crate) fn seed_factorial(store: &mut Store<i64>) {
    store.save(0, BigInt::one());
    store.save(1, BigInt::one());
}

pub(crate) fn seed_double_factorial(store: &mut Store<i64>) {
    store.save(-1, BigInt::one());
    store.save(0, BigInt::one());
    store.save(1, BigInt::one());
}

pub(crate) fn seed_hyper_factorial(store: &mut Store<i64>) {
    store.save(0, BigInt::one());
    store.save(1, BigInt::one());
}

/// m! = m (m-1)!
pub(crate) fn factorial_step(store: &Store<i64>, m: i64) -> Result<BigInt> {
    Ok(&store[m - 1] * BigInt::from(m))
}

fn double_factorial_step(store: &Store<i64>, m: i64) -> Result<BigInt> {
    Ok(&store[m - 2] * BigInt::from(m))
}

fn hyper_factorial_step(store: &Store<i64>, m: i64) -> Result<BigInt> {
    Ok(&store[m - 1] * power(m, m))
}

impl CacheRegistry {
    /// n! for n >= 0.
    pub fn factorial(&mut self, n: i64) -> Result<BigInt> {
        tabulate(&mut self.factorial, n, factorial_step)
    }

    /// n! / k! for 0 <= k <= n.
    ///
    /// # Errors
    ///
    /// Domain error if either argument is negative or if k > n.
    pub fn factorial_ratio(&mut self, n: i64, k: i64) -> Result<BigInt> {
        require_non_negative("factorial_ratio", &[n, k])?;
        if k > n {
            return Err(SequenceError::domain(
                "factorial_ratio",
                &[n, k],
                Constraint::KExceedsN,
            ));
        }
        let numerator = self.factorial(n)?;
        let denominator = self.factorial(k)?;
        Ok(numerator / denominator)
    }

    /// n (n-1) ... (n-k+1); zero when k > n.
    pub fn falling_factorial(&mut self, n: i64, k: i64) -> Result<BigInt> {
        require_non_negative("falling_factorial", &[n, k])?;
        if k > n {
            return Ok(BigInt::zero());
        }
        self.factorial_ratio(n, n - k)
    }

    /// n (n+1) ... (n+k-1); one when k = 0, zero when n = 0 < k.
    pub fn rising_factorial(&mut self, n: i64, k: i64) -> Result<BigInt> {
        require_non_negative("rising_factorial", &[n, k])?;
        if k == 0 {
            return Ok(BigInt::one());
        }
        if n == 0 {
            return Ok(BigInt::zero());
        }
        let top = (n - 1).checked_add(k).ok_or_else(|| {
            SequenceError::domain("rising_factorial", &[n, k], Constraint::ArgumentOverflow)
        })?;
        self.falling_factorial(top, k)
    }

    /// n!! for n >= -1, with (-1)!! = 0!! = 1!! = 1.
    pub fn double_factorial(&mut self, n: i64) -> Result<BigInt> {
        tabulate(&mut self.double_factorial, n, double_factorial_step)
    }

    /// n^n (n-1)^(n-1) ... 1^1 for n >= 0.
    pub fn hyper_factorial(&mut self, n: i64) -> Result<BigInt> {
        tabulate(&mut self.hyper_factorial, n, hyper_factorial_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Sequence;

    #[test]
    fn test_factorial() {
        let mut registry = CacheRegistry::new();
        assert_eq!(registry.factorial(0).unwrap(), BigInt::from(1));
        assert_eq!(registry.factorial(1).unwrap(), BigInt::from(1));
        assert_eq!(registry.factorial(10).unwrap(), BigInt::from(3628800));
        assert_eq!(
            registry.factorial(25).unwrap().to_string(),
            "15511210043330985984000000"
        );
    }

    #[test]
    fn test_factorial_ratio() {
        let mut registry = CacheRegistry::new();
        assert_eq!(registry.factorial_ratio(10, 7).unwrap(), BigInt::from(720));
        assert_eq!(registry.factorial_ratio(6, 6).unwrap(), BigInt::from(1));
        assert_eq!(registry.factorial_ratio(6, 0).unwrap(), BigInt::from(720));
    }

    #[test]
    fn test_factorial_ratio_rejects_k_above_n() {
        let mut registry = CacheRegistry::new();
        let err = registry.factorial_ratio(3, 5).unwrap_err();
        assert_eq!(err.constraint(), Constraint::KExceedsN);
        assert!(registry.store(Sequence::Factorial).is_empty());
    }

    #[test]
    fn test_falling_factorial() {
        let mut registry = CacheRegistry::new();
        let ten = registry.factorial(10).unwrap();
        assert_eq!(registry.falling_factorial(10, 10).unwrap(), ten);
        assert_eq!(registry.falling_factorial(10, 12).unwrap(), BigInt::from(0));
        assert_eq!(registry.falling_factorial(10, 3).unwrap(), BigInt::from(720));
        assert_eq!(registry.falling_factorial(10, 0).unwrap(), BigInt::from(1));
    }

    #[test]
    fn test_rising_factorial() {
        let mut registry = CacheRegistry::new();
        assert_eq!(registry.rising_factorial(3, 4).unwrap(), BigInt::from(360));
        assert_eq!(registry.rising_factorial(5, 0).unwrap(), BigInt::from(1));
        assert_eq!(registry.rising_factorial(0, 0).unwrap(), BigInt::from(1));
        assert_eq!(registry.rising_factorial(0, 3).unwrap(), BigInt::from(0));
        assert_eq!(registry.rising_factorial(1, 5).unwrap(), BigInt::from(120));
    }

    #[test]
    fn test_rising_factorial_overflow() {
        let mut registry = CacheRegistry::new();
        let err = registry.rising_factorial(i64::MAX, 2).unwrap_err();
        assert_eq!(err.constraint(), Constraint::ArgumentOverflow);
        assert_eq!(err.arguments(), &[i64::MAX, 2]);
        assert!(registry.store(Sequence::Factorial).is_empty());
    }

    #[test]
    fn test_double_factorial() {
        let mut registry = CacheRegistry::new();
        let expected = [(-1, 1), (0, 1), (1, 1), (2, 2), (3, 3), (4, 8), (5, 15), (8, 384), (9, 945)];
        for &(n, value) in &expected {
            assert_eq!(registry.double_factorial(n).unwrap(), BigInt::from(value));
        }
        assert_eq!(registry.high_water(Sequence::DoubleFactorial), Some(9));
    }

    #[test]
    fn test_double_factorial_floor() {
        let mut registry = CacheRegistry::new();
        let err = registry.double_factorial(-2).unwrap_err();
        assert_eq!(err.constraint(), Constraint::AtLeast(-1));
        assert!(!registry.store(Sequence::DoubleFactorial).is_seeded());
    }

    #[test]
    fn test_hyper_factorial() {
        let mut registry = CacheRegistry::new();
        let expected = [1, 1, 4, 108, 27648, 86400000];
        for (n, &value) in expected.iter().enumerate() {
            assert_eq!(registry.hyper_factorial(n as i64).unwrap(), BigInt::from(value));
        }
    }
}
