//! Dashboard aggregates.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use scout_model::{Scout, Shift};

/// Summary figures of a roster.
///
/// Breakdowns keep the order in which each key first appears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterStats {
    pub total: usize,
    pub by_language: IndexMap<String, usize>,
    /// Records without a shift are not counted.
    pub by_shift: IndexMap<Shift, usize>,
    pub distinct_clans: usize,
    pub distinct_locations: usize,
}

impl RosterStats {
    pub fn from_records<'a, I>(scouts: I) -> Self
    where
        I: IntoIterator<Item = &'a Scout>,
    {
        let mut stats = Self::default();
        let mut clans: HashSet<&str> = HashSet::new();
        let mut locations: HashSet<&str> = HashSet::new();
        for scout in scouts {
            stats.total += 1;
            *stats
                .by_language
                .entry(scout.language.clone())
                .or_insert(0) += 1;
            if let Some(shift) = scout.shift {
                *stats.by_shift.entry(shift).or_insert(0) += 1;
            }
            clans.insert(&scout.clan);
            locations.insert(&scout.location);
        }
        stats.distinct_clans = clans.len();
        stats.distinct_locations = locations.len();
        stats
    }

    /// Number of distinct language codes.
    pub fn language_count(&self) -> usize {
        self.by_language.len()
    }

    /// Fraction of the total, `0.0` for an empty roster.
    pub fn share(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64
        }
    }
}
