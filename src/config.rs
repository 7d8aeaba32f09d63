// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Registry configuration.

/// How bivariate sequences walk their recurrence on a cache miss.
///
/// Both strategies visit the same subproblems and cache the same entries, so
/// results and reported store sizes are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemoStrategy {
    /// Direct memoized recursion. Call-stack depth grows with n.
    #[default]
    Recursive,

    /// Post-order traversal driven by an explicit stack on the heap.
    /// Call-stack depth stays constant regardless of n.
    WorkStack,
}

/// Configuration for a [`CacheRegistry`](crate::CacheRegistry).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheConfig {
    /// Traversal used by bivariate memoization.
    pub memo_strategy: MemoStrategy,
}

impl CacheConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bivariate memoization strategy.
    pub fn with_memo_strategy(mut self, strategy: MemoStrategy) -> Self {
        self.memo_strategy = strategy;
        self
    }
}
