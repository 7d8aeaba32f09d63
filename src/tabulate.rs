// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Univariate tabulation.
//!
//! A univariate store always holds a contiguous run of arguments starting at
//! the sequence floor. To answer f(n) on a miss, the tabulator walks forward
//! from the high-water mark to n, evaluating the recurrence at each step from
//! values already in the store and saving the result before moving on.
//!
//! The recurrence callback never re-enters the tabulator for the same store, so
//! the call stack stays flat no matter how large n is, and across the lifetime
//! of a store each argument is computed at most once.

use crate::error::{Constraint, Result, SequenceError};
use crate::store::Store;
use num_bigint::BigInt;
use tracing::debug;

/// Return f(n), extending `store` up to `n` if needed.
///
/// `step(store, m)` computes f(m) given that every stored argument below `m`
/// (in steps of the sequence stride) is already present.
///
/// # Errors
///
/// Fails with a domain error if `n` is below the sequence floor. The store is
/// not touched (not even seeded) in that case.
pub(crate) fn tabulate<F>(store: &mut Store<i64>, n: i64, mut step: F) -> Result<BigInt>
where
    F: FnMut(&Store<i64>, i64) -> Result<BigInt>,
{
    let sequence = store.sequence();
    let floor = sequence.floor();
    if n < floor {
        return Err(SequenceError::domain(
            sequence.name(),
            &[n],
            if floor == 0 {
                Constraint::NonNegative
            } else {
                Constraint::AtLeast(floor)
            },
        ));
    }

    store.ensure_seeded();
    if let Some(value) = store.get(&n) {
        return Ok(value.clone());
    }

    let stride = sequence.stride();
    debug_assert_eq!(
        (i128::from(n) - i128::from(floor)) % i128::from(stride),
        0,
        "{} is not a stored index",
        n
    );

    let start = store.max_key().map_or(floor, |high| high + stride);
    debug!(sequence = %sequence, from = start, to = n, "extending store");

    let mut m = start;
    while m <= n {
        let value = step(store, m)?;
        store.save(m, value);
        m = match m.checked_add(stride) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(store[n].clone())
}
