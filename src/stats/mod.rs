//! Reduction of per-machine outcomes into Busy Beaver statistics
//!
//! `SearchStats` is a commutative monoid under [`SearchStats::merge`]: counts
//! add, maxima take the larger value, and champion ties go to the lowest
//! index. Disjoint slices of a search space can therefore be reduced
//! independently and merged in any grouping or order.

use crate::simulate::RunOutcome;

/// Running maximum together with the lowest index attaining it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Best {
    /// Largest value seen (0 if none)
    pub value: u64,
    /// Lowest machine index with that value
    pub index: Option<u64>,
}

impl Best {
    fn offer(&mut self, value: u64, index: u64) {
        *self = self.max(Best {
            value,
            index: Some(index),
        });
    }

    fn max(self, other: Best) -> Best {
        match (self.index, other.index) {
            (None, _) => other,
            (_, None) => self,
            (Some(a), Some(b)) => {
                if other.value > self.value || (other.value == self.value && b < a) {
                    other
                } else {
                    self
                }
            }
        }
    }
}

/// Aggregated statistics over some set of machines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Machines examined, halting or not
    pub examined: u64,

    /// Machines that halted within the step bound
    pub halted: u64,

    /// Step count maximum among halted machines
    pub steps: Best,

    /// Ones count maximum among halted machines
    pub ones: Best,
}

impl SearchStats {
    /// Empty reduction (identity for `merge`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one outcome in
    ///
    /// Non-halting outcomes only count as examined.
    pub fn record(&mut self, index: u64, outcome: &RunOutcome) {
        self.examined += 1;
        if !outcome.halted {
            return;
        }
        self.halted += 1;
        self.steps.offer(outcome.steps, index);
        self.ones.offer(outcome.ones, index);
    }

    /// Combine two reductions of disjoint machine sets
    pub fn merge(self, other: SearchStats) -> SearchStats {
        SearchStats {
            examined: self.examined + other.examined,
            halted: self.halted + other.halted,
            steps: self.steps.max(other.steps),
            ones: self.ones.max(other.ones),
        }
    }

    /// BB value over the examined set
    pub fn max_steps(&self) -> u64 {
        self.steps.value
    }

    /// Sigma value over the examined set
    pub fn max_ones(&self) -> u64 {
        self.ones.value
    }
}

impl Extend<(u64, RunOutcome)> for SearchStats {
    fn extend<I: IntoIterator<Item = (u64, RunOutcome)>>(&mut self, iter: I) {
        for (index, outcome) in iter {
            self.record(index, &outcome);
        }
    }
}

impl FromIterator<(u64, RunOutcome)> for SearchStats {
    fn from_iter<I: IntoIterator<Item = (u64, RunOutcome)>>(iter: I) -> Self {
        let mut stats = SearchStats::new();
        stats.extend(iter);
        stats
    }
}
