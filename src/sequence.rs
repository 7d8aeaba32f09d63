// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sequence identity.
//!
//! Every cached sequence has exactly one [`Sequence`] variant, and the registry
//! holds exactly one store per variant. The declaration order of the variants is
//! the registration order used by reports and global clears.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString, IntoStaticStr};

/// Shape of a sequence's argument key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Keyed by a single integer; the store is filled contiguously by tabulation.
    Univariate,
    /// Keyed by an (n, k) pair; the store is filled sparsely by memoized recursion.
    Bivariate,
}

/// Identity of a cached combinatorial sequence.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumCountMacro,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Sequence {
    Fibonacci,
    Factorial,
    DoubleFactorial,
    HyperFactorial,
    Derangements,
    Bell,
    Stirling1,
    Stirling2,
    /// Unrestricted partitions of n.
    IntPartitions,
    /// Partitions of n into exactly k parts.
    IntPartitionsInto,
    Euler,
    Eulerian,
    PowerSum,
    Menage,
}

impl Sequence {
    /// Stable snake_case name, as shown in reports and error messages.
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn arity(self) -> Arity {
        match self {
            Sequence::Stirling1
            | Sequence::Stirling2
            | Sequence::IntPartitionsInto
            | Sequence::Eulerian
            | Sequence::PowerSum => Arity::Bivariate,
            _ => Arity::Univariate,
        }
    }

    /// Smallest valid argument of a univariate sequence.
    pub fn floor(self) -> i64 {
        match self {
            Sequence::DoubleFactorial => -1,
            _ => 0,
        }
    }

    /// Distance between consecutive stored arguments.
    ///
    /// Euler numbers vanish at odd indices, so only even indices are stored.
    pub fn stride(self) -> i64 {
        match self {
            Sequence::Euler => 2,
            _ => 1,
        }
    }

    /// All sequences in registration order.
    pub fn all() -> impl Iterator<Item = Sequence> {
        Sequence::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::EnumCount;

    #[test]
    fn test_names_are_snake_case() {
        assert_eq!(Sequence::DoubleFactorial.name(), "double_factorial");
        assert_eq!(Sequence::IntPartitionsInto.to_string(), "int_partitions_into");
        assert_eq!(Sequence::Stirling2.name(), "stirling2");
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(Sequence::from_str("power_sum"), Ok(Sequence::PowerSum));
        assert!(Sequence::from_str("lucas").is_err());
    }

    #[test]
    fn test_registration_order() {
        let all: Vec<_> = Sequence::all().collect();
        assert_eq!(all.len(), Sequence::COUNT);
        assert_eq!(all.first(), Some(&Sequence::Fibonacci));
        assert_eq!(all.last(), Some(&Sequence::Menage));
    }

    #[test]
    fn test_shape_metadata() {
        assert_eq!(Sequence::DoubleFactorial.floor(), -1);
        assert_eq!(Sequence::Bell.floor(), 0);
        assert_eq!(Sequence::Euler.stride(), 2);
        assert_eq!(Sequence::Menage.stride(), 1);
        assert_eq!(Sequence::Eulerian.arity(), Arity::Bivariate);
        assert_eq!(Sequence::IntPartitions.arity(), Arity::Univariate);
    }
}
