//! # Exhaustive Busy Beaver search
//!
//! Computes BB(n), the most steps, and Sigma(n), the most ones, over all
//! n-state, 2-symbol Turing machines that halt from a blank tape.
//!
//! ## Pipeline
//!
//! 1. **Enumeration**: SearchSpace(n) holds (4(n+1))^(2n) machines, each
//!    addressed by a linear index decoded in mixed radix
//! 2. **Simulation**: every machine runs on its own tape up to a step bound;
//!    reaching the bound classifies it as presumed non-halting
//! 3. **Aggregation**: outcomes reduce to halted count and the two maxima,
//!    a reduction that merges in any order
//! 4. **Sharding**: contiguous index ranges are reduced on rayon workers and
//!    merged
//!
//! The step bound is a heuristic. It is never a proof of non-halting.
//!
//! ## Usage Example
//!
//! ```
//! use busy_beaver::{busy_beaver, SearchConfig, StepBound};
//!
//! let config = SearchConfig {
//!     step_bound: StepBound::Fixed(100),
//!     ..SearchConfig::reference()
//! };
//! let report = busy_beaver(2, &config)?;
//! assert_eq!((report.bb, report.sigma), (6, 4));
//! # Ok::<(), busy_beaver::SearchError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod driver;    // Search orchestration
pub mod enumerate; // Index-addressed search space
pub mod machine;   // Machine representation
pub mod simulate;  // Bounded simulation
pub mod stats;     // Result reduction

// Re-exports for convenience
pub use driver::{busy_beaver, busy_beaver_with_progress, BusyBeaverReport, Comparison};
pub use enumerate::{IndexRange, SearchSpace};
pub use machine::{Configuration, MachineDescriptor, Move, NextState, State, Symbol, Transition};
pub use simulate::{run, RunOutcome};
pub use stats::SearchStats;

use thiserror::Error;

/// Step bound used to classify machines as presumed non-halting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepBound {
    /// 10^(n+3), saturating at `u64::MAX`
    Heuristic,

    /// Same bound for every n
    Fixed(u64),
}

impl StepBound {
    /// Concrete bound for an n-state search
    pub fn resolve(&self, states: usize) -> u64 {
        match self {
            StepBound::Heuristic => u32::try_from(states + 3)
                .ok()
                .and_then(|exp| 10u64.checked_pow(exp))
                .unwrap_or(u64::MAX),
            StepBound::Fixed(bound) => *bound,
        }
    }
}

/// Configuration parameters for a search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Per-machine step bound
    pub step_bound: StepBound,

    /// Worker threads (`None` = rayon's global pool)
    pub threads: Option<usize>,

    /// Shards handed out per worker thread
    pub shards_per_thread: usize,

    /// Report progress every this many machines (0 = never)
    pub progress_interval: u64,
}

impl SearchConfig {
    /// Reference settings: 10^(n+3) steps, progress every 100,000 machines
    pub fn reference() -> Self {
        Self {
            step_bound: StepBound::Heuristic,
            threads: None,
            shards_per_thread: 8,
            progress_interval: 100_000,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::reference()
    }
}

/// Errors that can occur while setting up a search
///
/// A machine failing to halt within the bound is an outcome, not an error.
#[derive(Error, Debug)]
pub enum SearchError {
    /// State count must be at least 1
    #[error("Invalid state count {0}: need at least one state")]
    InvalidStateCount(usize),

    /// Search space size overflows the index type
    #[error("Search space for {states} states does not fit in a 64-bit index")]
    SearchSpaceTooLarge {
        /// Requested state count
        states: usize,
    },

    /// Linear index past the end of the search space
    #[error("Machine index {index} out of range for search space of size {size}")]
    IndexOutOfRange {
        /// Requested index
        index: u64,
        /// Size of the search space
        size: u64,
    },

    /// Invalid machine description
    #[error("Invalid machine: {0}")]
    InvalidMachine(String),

    /// Worker pool could not be created
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
