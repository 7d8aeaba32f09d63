// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for sequence evaluation.
//!
//! There is a single recoverable error kind: a domain error, raised eagerly at
//! the public entry point of a sequence function before any cache lookup.
//! Misuse of the cache internals (overwriting a stored key, indexing an absent
//! key) is a programming error and panics instead.

use std::fmt;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SequenceError>;

/// The constraint an argument tuple failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Every argument must be >= 0.
    NonNegative,

    /// The argument must be at least the sequence's floor (e.g. -1 for double factorial).
    AtLeast(i64),

    /// The second argument may not exceed the first.
    KExceedsN,

    /// An intermediate argument (such as the sum of multinomial parts) left the i64 range.
    ArgumentOverflow,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::NonNegative => write!(f, "argument must be non-negative"),
            Constraint::AtLeast(floor) => write!(f, "argument must be at least {}", floor),
            Constraint::KExceedsN => write!(f, "k cannot exceed n"),
            Constraint::ArgumentOverflow => {
                write!(f, "argument exceeds the representable range")
            }
        }
    }
}

/// The argument tuple of a failed call, displayed as `(a, b, ...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments(pub Vec<i64>);

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

/// Errors raised by sequence functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The arguments lie outside the function's domain.
    #[error("{function}{arguments}: {constraint}")]
    Domain {
        function: &'static str,
        arguments: Arguments,
        constraint: Constraint,
    },
}

impl SequenceError {
    pub(crate) fn domain(function: &'static str, arguments: &[i64], constraint: Constraint) -> Self {
        SequenceError::Domain {
            function,
            arguments: Arguments(arguments.to_vec()),
            constraint,
        }
    }

    /// The constraint that was violated.
    pub fn constraint(&self) -> Constraint {
        match self {
            SequenceError::Domain { constraint, .. } => *constraint,
        }
    }

    /// The offending argument tuple.
    pub fn arguments(&self) -> &[i64] {
        match self {
            SequenceError::Domain { arguments, .. } => &arguments.0,
        }
    }
}

/// Fail with [`Constraint::NonNegative`] unless every argument is >= 0.
pub(crate) fn require_non_negative(function: &'static str, arguments: &[i64]) -> Result<()> {
    if arguments.iter().any(|&a| a < 0) {
        return Err(SequenceError::domain(function, arguments, Constraint::NonNegative));
    }
    Ok(())
}
