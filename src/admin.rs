// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cache introspection and administration.
//!
//! Reports and clears iterate [`Sequence::all`], so every registered sequence
//! appears exactly once and always in registration order. Clearing never
//! leaves a store empty: it drops every entry and immediately writes the base
//! cases back.

use crate::registry::CacheRegistry;
use crate::sequence::Sequence;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Entry count of one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRow {
    pub sequence: Sequence,
    pub entries: usize,
}

impl ReportRow {
    pub fn name(&self) -> &'static str {
        self.sequence.name()
    }
}

/// Snapshot of every store's size, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheReport {
    pub rows: Vec<ReportRow>,
    pub total: usize,
}

impl CacheReport {
    /// Entry count for `sequence`.
    pub fn entries(&self, sequence: Sequence) -> usize {
        self.rows
            .iter()
            .find(|row| row.sequence == sequence)
            .map_or(0, |row| row.entries)
    }
}

impl fmt::Display for CacheReport {
    /// Two aligned columns, one line per sequence, then the total.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|row| row.name().len())
            .max()
            .unwrap_or(0)
            .max("total".len());
        for row in &self.rows {
            writeln!(f, "{:<width$}  {:>8}", row.name(), row.entries, width = width)?;
        }
        write!(f, "{:<width$}  {:>8}", "total", self.total, width = width)
    }
}

impl CacheRegistry {
    /// Current entry count of every store. Read-only: unseeded stores report 0.
    pub fn cache_report(&self) -> CacheReport {
        let rows: Vec<ReportRow> = self
            .stores()
            .map(|store| ReportRow {
                sequence: store.sequence(),
                entries: store.len(),
            })
            .collect();
        let total = rows.iter().map(|row| row.entries).sum();
        CacheReport { rows, total }
    }

    /// Reset one store (`Some`) or every store (`None`) to its base cases.
    pub fn cache_clear(&mut self, sequence: Option<Sequence>) {
        match sequence {
            Some(sequence) => self.clear(sequence),
            None => self.clear_all(),
        }
    }

    /// Reset the store of `sequence` to its base cases.
    pub fn clear(&mut self, sequence: Sequence) {
        let store = self.store_for(sequence);
        let dropped = store.len();
        store.clear_and_reseed();
        info!(sequence = %sequence, dropped, "cleared store");
    }

    /// Reset every store to its base cases.
    pub fn clear_all(&mut self) {
        let mut dropped = 0;
        for sequence in Sequence::all() {
            let store = self.store_for(sequence);
            dropped += store.len();
            store.clear_and_reseed();
        }
        info!(dropped, "cleared all stores");
    }

    /// [`clear`](Self::clear) by sequence name, as shown in reports.
    ///
    /// # Errors
    ///
    /// Fails if `name` is not a registered sequence; no store is touched.
    pub fn cache_clear_named(&mut self, name: &str) -> Result<(), strum::ParseError> {
        let sequence = Sequence::from_str(name)?;
        self.clear(sequence);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_fresh_report_is_zero() {
        let registry = CacheRegistry::new();
        let report = registry.cache_report();
        assert_eq!(report.rows.len(), Sequence::all().count());
        assert_eq!(report.total, 0);
    }

    #[test]
    fn test_report_order_and_counts() {
        let mut registry = CacheRegistry::new();
        registry.fibonacci(20).unwrap();
        registry.stirling2(6, 3).unwrap();
        let report = registry.cache_report();

        let order: Vec<Sequence> = report.rows.iter().map(|row| row.sequence).collect();
        assert_eq!(order, Sequence::all().collect::<Vec<_>>());
        assert_eq!(report.entries(Sequence::Fibonacci), 21);
        assert!(report.entries(Sequence::Stirling2) > 0);
        assert_eq!(report.total, report.rows.iter().map(|r| r.entries).sum::<usize>());
    }

    #[test]
    fn test_clear_one() {
        let mut registry = CacheRegistry::new();
        registry.factorial(30).unwrap();
        registry.bell(12).unwrap();
        registry.cache_clear(Some(Sequence::Factorial));

        let report = registry.cache_report();
        assert_eq!(report.entries(Sequence::Factorial), 2);
        assert_eq!(report.entries(Sequence::Bell), 13);
        assert_eq!(registry.high_water(Sequence::Factorial), Some(1));
    }

    #[test]
    fn test_clear_all_reseeds() {
        let mut registry = CacheRegistry::new();
        registry.fibonacci(40).unwrap();
        registry.menage(8).unwrap();
        registry.eulerian(9, 4).unwrap();
        registry.cache_clear(None);

        // fibonacci 2, factorial 2, double 3, hyper 2, derangements 2, bell 2,
        // int_partitions 1, euler 1, menage 4; bivariate stores seed nothing
        let report = registry.cache_report();
        assert_eq!(report.total, 19);
        assert_eq!(report.entries(Sequence::Eulerian), 0);
        assert!(registry.stores().all(|store| store.is_seeded()));
    }

    #[test]
    fn test_values_survive_clear() {
        let mut registry = CacheRegistry::new();
        let before = registry.derangements(15).unwrap();
        registry.clear_all();
        assert_eq!(registry.derangements(15).unwrap(), before);
        assert_eq!(registry.derangements(1).unwrap(), BigInt::from(0));
    }

    #[test]
    fn test_clear_named() {
        let mut registry = CacheRegistry::new();
        registry.euler(10).unwrap();
        registry.cache_clear_named("euler").unwrap();
        assert_eq!(registry.cache_report().entries(Sequence::Euler), 1);
        assert!(registry.cache_clear_named("not_a_sequence").is_err());
    }

    #[test]
    fn test_display() {
        let mut registry = CacheRegistry::new();
        registry.fibonacci(5).unwrap();
        let text = registry.cache_report().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), Sequence::all().count() + 1);
        assert!(lines[0].starts_with("fibonacci"));
        assert!(lines[0].ends_with('6'));
        assert!(lines.last().unwrap().starts_with("total"));
        assert!(lines.iter().all(|line| line.len() == lines[0].len()));
    }
}
