// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use num_bigint::BigInt;
use seqcache::{CacheConfig, CacheRegistry, MemoStrategy, Sequence};

/// A fresh registry using `strategy` for bivariate sequences.
pub fn registry_with(strategy: MemoStrategy) -> CacheRegistry {
    CacheRegistry::with_config(CacheConfig::new().with_memo_strategy(strategy))
}

/// Both strategies, for tests that must hold under either.
pub const STRATEGIES: [MemoStrategy; 2] = [MemoStrategy::Recursive, MemoStrategy::WorkStack];

pub fn big(value: i64) -> BigInt {
    BigInt::from(value)
}

/// Entry count of every store, in registration order.
pub fn sizes(registry: &CacheRegistry) -> Vec<(Sequence, usize)> {
    registry
        .stores()
        .map(|store| (store.sequence(), store.len()))
        .collect()
}

/// Call the sequence function behind `sequence` with a representative
/// argument built from `n` (and `k` for bivariate sequences).
pub fn evaluate(
    registry: &mut CacheRegistry,
    sequence: Sequence,
    n: i64,
    k: i64,
) -> seqcache::Result<BigInt> {
    match sequence {
        Sequence::Fibonacci => registry.fibonacci(n),
        Sequence::Factorial => registry.factorial(n),
        Sequence::DoubleFactorial => registry.double_factorial(n),
        Sequence::HyperFactorial => registry.hyper_factorial(n),
        Sequence::Derangements => registry.derangements(n),
        Sequence::Bell => registry.bell(n),
        Sequence::Stirling1 => registry.stirling1(n, k),
        Sequence::Stirling2 => registry.stirling2(n, k),
        Sequence::IntPartitions => registry.int_partitions(n),
        Sequence::IntPartitionsInto => registry.int_partitions_into(n, k),
        Sequence::Euler => registry.euler(n),
        Sequence::Eulerian => registry.eulerian(n, k),
        Sequence::PowerSum => registry.power_sum(n, k),
        Sequence::Menage => registry.menage(n),
    }
}
