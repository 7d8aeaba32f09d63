// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bivariate memoization.
//!
//! Two-argument sequences cannot be tabulated contiguously without filling
//! cells nobody asked for, so they are evaluated top-down and only the (n, k)
//! pairs actually reached are cached.
//!
//! A sequence describes itself through [`Recurrence`]:
//!
//! 1. `closed_form` answers the trivial cells (k > n, n == 0, k == n, ...)
//!    without consulting or populating the cache.
//! 2. `subproblems` lists the strictly smaller (n', k') pairs the value
//!    depends on.
//! 3. `combine` builds the value from the subproblem values, in the order
//!    `subproblems` listed them.
//!
//! The same description drives both [`MemoStrategy`] variants, so the two
//! produce identical values and identical store contents.

use crate::config::MemoStrategy;
use crate::error::{require_non_negative, Result};
use crate::store::Store;
use num_bigint::BigInt;
use tracing::trace;

/// Argument pair of a bivariate sequence.
pub(crate) type Pair = (i64, i64);

/// Recurrence of a bivariate sequence.
pub(crate) trait Recurrence {
    /// The value at (n, k) if it is a special case; such values are never cached.
    fn closed_form(&self, n: i64, k: i64) -> Option<BigInt>;

    /// The pairs (n, k) depends on. Only called when `closed_form` is `None`.
    fn subproblems(&self, n: i64, k: i64) -> Vec<Pair>;

    /// The value at (n, k) from the subproblem values.
    fn combine(&self, n: i64, k: i64, values: &[BigInt]) -> BigInt;
}

/// Return f(n, k), caching every non-trivial cell computed along the way.
///
/// # Errors
///
/// Fails with a domain error if either argument is negative; the store is not
/// touched in that case.
pub(crate) fn memoize<R: Recurrence>(
    store: &mut Store<Pair>,
    recurrence: &R,
    strategy: MemoStrategy,
    n: i64,
    k: i64,
) -> Result<BigInt> {
    require_non_negative(store.sequence().name(), &[n, k])?;

    if let Some(value) = recurrence.closed_form(n, k) {
        return Ok(value);
    }

    store.ensure_seeded();
    let value = match strategy {
        MemoStrategy::Recursive => recurse(store, recurrence, (n, k)),
        MemoStrategy::WorkStack => drain(store, recurrence, (n, k)),
    };
    Ok(value)
}

/// Value of a cell that is either trivial or already cached.
fn resolved<R: Recurrence>(store: &Store<Pair>, recurrence: &R, (n, k): Pair) -> Option<BigInt> {
    recurrence
        .closed_form(n, k)
        .or_else(|| store.get(&(n, k)).cloned())
}

fn save<R: Recurrence>(store: &mut Store<Pair>, recurrence: &R, (n, k): Pair, values: &[BigInt]) -> BigInt {
    let value = recurrence.combine(n, k, values);
    trace!(sequence = %store.sequence(), n, k, "memoized");
    store.save((n, k), value.clone());
    value
}

fn recurse<R: Recurrence>(store: &mut Store<Pair>, recurrence: &R, key: Pair) -> BigInt {
    if let Some(value) = resolved(store, recurrence, key) {
        return value;
    }

    let values: Vec<BigInt> = recurrence
        .subproblems(key.0, key.1)
        .into_iter()
        .map(|sub| recurse(store, recurrence, sub))
        .collect();
    save(store, recurrence, key, &values)
}

/// Post-order evaluation with an explicit stack.
///
/// A cell is pushed once to expand its subproblems and once more, beneath
/// them, to combine their values. A cell may be pushed by several parents;
/// whichever copy is reached after the first save is skipped.
fn drain<R: Recurrence>(store: &mut Store<Pair>, recurrence: &R, key: Pair) -> BigInt {
    let mut stack: Vec<(Pair, bool)> = vec![(key, false)];

    while let Some((cell, expanded)) = stack.pop() {
        if resolved(store, recurrence, cell).is_some() {
            continue;
        }

        let subproblems = recurrence.subproblems(cell.0, cell.1);
        if !expanded {
            stack.push((cell, true));
            for sub in subproblems {
                if resolved(store, recurrence, sub).is_none() {
                    stack.push((sub, false));
                }
            }
            continue;
        }

        let values: Vec<BigInt> = subproblems
            .into_iter()
            .map(|sub| match resolved(store, recurrence, sub) {
                Some(value) => value,
                None => panic!(
                    "{}: subproblem {:?} of {:?} was not evaluated",
                    store.sequence(),
                    sub,
                    cell
                ),
            })
            .collect();
        save(store, recurrence, cell, &values);
    }

    store[key].clone()
}
