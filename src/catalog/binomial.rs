// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Derived primitives built directly on big-integer arithmetic.
//!
//! None of these functions has a store: binomial coefficients are cheap
//! enough to compute on demand, and caching a two-dimensional table for them
//! would cost more memory than it saves time.

use crate::error::{require_non_negative, Constraint, Result, SequenceError};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::borrow::Borrow;

/// C(n, k) by the multiplicative formula.
///
/// Each intermediate `acc` equals C(n, i), so every division is exact.
fn choose(n: i64, k: i64) -> BigInt {
    if k > n {
        return BigInt::zero();
    }
    let k = k.min(n - k);
    let mut acc = BigInt::one();
    for i in 0..k {
        acc = acc * BigInt::from(n - i) / BigInt::from(i + 1);
    }
    acc
}

/// The row C(n, 0), C(n, 1), ..., C(n, n).
pub(crate) fn binomial_row(n: i64) -> Vec<BigInt> {
    let mut row = Vec::with_capacity(n as usize + 1);
    let mut c = BigInt::one();
    for k in 0..=n {
        row.push(c.clone());
        c = c * BigInt::from(n - k) / BigInt::from(k + 1);
    }
    row
}

/// Binomial coefficient C(n, k); zero when k > n.
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// assert_eq!(seqcache::binomial(10, 3).unwrap(), BigInt::from(120));
/// assert_eq!(seqcache::binomial(3, 10).unwrap(), BigInt::from(0));
/// ```
pub fn binomial(n: i64, k: i64) -> Result<BigInt> {
    require_non_negative("binomial", &[n, k])?;
    Ok(choose(n, k))
}

/// Catalan number C(2n, n) / (n + 1).
pub fn catalan(n: i64) -> Result<BigInt> {
    require_non_negative("catalan", &[n])?;
    let two_n = n
        .checked_mul(2)
        .ok_or_else(|| SequenceError::domain("catalan", &[n], Constraint::ArgumentOverflow))?;
    Ok(choose(two_n, n) / BigInt::from(n + 1))
}

/// Multisets of size k drawn from n kinds: C(n + k - 1, k).
pub fn multichoose(n: i64, k: i64) -> Result<BigInt> {
    require_non_negative("multichoose", &[n, k])?;
    if n == 0 {
        return Ok(super::indicator(k == 0));
    }
    let top = (n - 1)
        .checked_add(k)
        .ok_or_else(|| SequenceError::domain("multichoose", &[n, k], Constraint::ArgumentOverflow))?;
    Ok(choose(top, k))
}

/// Multinomial coefficient (v1 + ... + vm)! / (v1! ... vm!).
///
/// Accepts any iterable of integers, so arrays, slices and vectors all give
/// the same answer. The empty product is 1.
///
/// Evaluated as the product of C(v1 + ... + vi, vi) over the running sums.
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// use seqcache::multinomial;
///
/// assert_eq!(multinomial([2i64, 1, 1]).unwrap(), BigInt::from(12));
/// assert_eq!(multinomial(&[6i64, 6]).unwrap(), multinomial(vec![6i64, 6]).unwrap());
/// assert_eq!(multinomial(Vec::<i64>::new()).unwrap(), BigInt::from(1));
/// ```
pub fn multinomial<I>(parts: I) -> Result<BigInt>
where
    I: IntoIterator,
    I::Item: Borrow<i64>,
{
    let parts: Vec<i64> = parts.into_iter().map(|v| *v.borrow()).collect();
    require_non_negative("multinomial", &parts)?;

    let mut total: i64 = 0;
    let mut product = BigInt::one();
    for &part in &parts {
        total = total.checked_add(part).ok_or_else(|| {
            SequenceError::domain("multinomial", &parts, Constraint::ArgumentOverflow)
        })?;
        product *= choose(total, part);
    }
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_small() {
        assert_eq!(binomial(0, 0).unwrap(), BigInt::from(1));
        assert_eq!(binomial(5, 2).unwrap(), BigInt::from(10));
        assert_eq!(binomial(5, 5).unwrap(), BigInt::from(1));
        assert_eq!(binomial(5, 6).unwrap(), BigInt::from(0));
    }

    #[test]
    fn test_binomial_row_sum() {
        let total: BigInt = (0..=10).map(|k| binomial(10, k).unwrap()).sum();
        assert_eq!(total, BigInt::from(1024));
    }

    #[test]
    fn test_binomial_large() {
        assert_eq!(
            binomial(100, 50).unwrap().to_string(),
            "100891344545564193334812497256"
        );
    }

    #[test]
    fn test_binomial_row_matches() {
        let row = binomial_row(12);
        assert_eq!(row.len(), 13);
        for (k, value) in row.iter().enumerate() {
            assert_eq!(value, &binomial(12, k as i64).unwrap());
        }
        assert_eq!(binomial_row(0), vec![BigInt::from(1)]);
    }

    #[test]
    fn test_binomial_negative() {
        let err = binomial(-1, 0).unwrap_err();
        assert_eq!(err.constraint(), Constraint::NonNegative);
        assert!(binomial(4, -2).is_err());
    }

    #[test]
    fn test_catalan() {
        let expected = [1, 1, 2, 5, 14, 42, 132, 429];
        for (n, &c) in expected.iter().enumerate() {
            assert_eq!(catalan(n as i64).unwrap(), BigInt::from(c));
        }
        assert_eq!(catalan(12).unwrap(), BigInt::from(208012));
    }

    #[test]
    fn test_multichoose() {
        assert_eq!(multichoose(3, 2).unwrap(), BigInt::from(6));
        assert_eq!(multichoose(0, 0).unwrap(), BigInt::from(1));
        assert_eq!(multichoose(0, 3).unwrap(), BigInt::from(0));
        assert_eq!(multichoose(5, 0).unwrap(), BigInt::from(1));
    }

    #[test]
    fn test_multinomial_forms_agree() {
        let from_array = multinomial([6i64, 6, 6, 6]).unwrap();
        let from_slice = multinomial(&[6i64, 6, 6, 6][..]).unwrap();
        let from_vec = multinomial(vec![6i64, 6, 6, 6]).unwrap();
        assert_eq!(from_array, from_slice);
        assert_eq!(from_array, from_vec);
        assert_eq!(from_array.to_string(), "2308743493056");
    }

    #[test]
    fn test_derived_argument_overflow() {
        let overflow = Constraint::ArgumentOverflow;
        assert_eq!(catalan(i64::MAX).unwrap_err().constraint(), overflow);
        assert_eq!(multichoose(i64::MAX, 2).unwrap_err().constraint(), overflow);
        let err = multinomial([i64::MAX, 1]).unwrap_err();
        assert_eq!(err.constraint(), overflow);
        assert_eq!(err.arguments(), &[i64::MAX, 1]);
    }

    #[test]
    fn test_top_of_range_without_overflow() {
        assert_eq!(binomial(i64::MAX, 0).unwrap(), BigInt::from(1));
        assert_eq!(binomial(i64::MAX, 1).unwrap(), BigInt::from(i64::MAX));
        assert_eq!(binomial(i64::MAX, i64::MAX).unwrap(), BigInt::from(1));
        assert_eq!(multichoose(1, i64::MAX).unwrap(), BigInt::from(1));
        assert_eq!(multinomial([i64::MAX]).unwrap(), BigInt::from(1));
    }

    #[test]
    fn test_multinomial_zero_parts() {
        assert_eq!(multinomial([0i64, 3, 0]).unwrap(), BigInt::from(1));
        assert!(multinomial([1i64, -1]).is_err());
    }
}
