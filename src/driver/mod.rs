//! Search orchestration: enumerate → simulate → aggregate
//!
//! The index space of SearchSpace(n) is cut into contiguous shards, each
//! shard is reduced to a `SearchStats` on a rayon worker, and the partial
//! reductions are merged. No state is shared between simulations.

mod known;
mod progress;

pub use known::{known_values, Comparison, KnownValues, KNOWN_VALUES};
pub use progress::{NoProgress, ProgressSink};

use crate::enumerate::{IndexRange, SearchSpace};
use crate::machine::MachineDescriptor;
use crate::simulate;
use crate::stats::SearchStats;
use crate::{SearchConfig, SearchError};
use progress::ProgressCounter;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info, info_span};

/// Machines simulated between progress counter updates
const PROGRESS_BATCH: u64 = 4_096;

/// Answer for one state count
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusyBeaverReport {
    /// Number of states n
    pub states: usize,

    /// BB(n): most steps taken by a halting machine
    pub bb: u64,

    /// Sigma(n): most ones left by a halting machine
    pub sigma: u64,

    /// Machines that halted within the step bound
    pub halted_count: u64,

    /// |SearchSpace(n)|
    pub total_machines: u64,

    /// Step bound each machine was simulated under
    pub step_bound: u64,

    /// Full reduction, including champion indices
    pub stats: SearchStats,
}

impl BusyBeaverReport {
    fn from_stats(space: &SearchSpace, step_bound: u64, stats: SearchStats) -> Self {
        Self {
            states: space.num_states(),
            bb: stats.max_steps(),
            sigma: stats.max_ones(),
            halted_count: stats.halted,
            total_machines: space.size(),
            step_bound,
            stats,
        }
    }

    /// Compare against the table of known values, if n is listed
    pub fn comparison(&self) -> Option<Comparison> {
        Comparison::check(self.states, self.bb, self.sigma)
    }

    /// The lowest-index machine attaining BB(n)
    pub fn step_champion(&self) -> Option<MachineDescriptor> {
        self.champion(self.stats.steps.index)
    }

    /// The lowest-index machine attaining Sigma(n)
    pub fn ones_champion(&self) -> Option<MachineDescriptor> {
        self.champion(self.stats.ones.index)
    }

    fn champion(&self, index: Option<u64>) -> Option<MachineDescriptor> {
        let space = SearchSpace::new(self.states).ok()?;
        space.descriptor(index?).ok()
    }
}

/// Compute BB(n) and Sigma(n) by exhaustive search
pub fn busy_beaver(states: usize, config: &SearchConfig) -> Result<BusyBeaverReport, SearchError> {
    busy_beaver_with_progress(states, config, &NoProgress)
}

/// [`busy_beaver`], reporting progress milestones to `sink`
pub fn busy_beaver_with_progress(
    states: usize,
    config: &SearchConfig,
    sink: &dyn ProgressSink,
) -> Result<BusyBeaverReport, SearchError> {
    let space = SearchSpace::new(states)?;
    let step_bound = config.step_bound.resolve(states);
    let span = info_span!("busy_beaver", states, step_bound);
    let _guard = span.enter();

    let started = Instant::now();
    let progress = ProgressCounter::new(space.size(), config.progress_interval, sink);

    let stats = match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| scan_parallel(&space, step_bound, config, &progress))
        }
        None => scan_parallel(&space, step_bound, config, &progress),
    };

    info!(
        examined = progress.examined(),
        halted = stats.halted,
        bb = stats.max_steps(),
        sigma = stats.max_ones(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "search complete"
    );

    Ok(BusyBeaverReport::from_stats(&space, step_bound, stats))
}

/// Reduce one contiguous slice of the space, sequentially
pub fn scan_range(space: &SearchSpace, range: IndexRange, step_bound: u64) -> SearchStats {
    space
        .iter_range(range)
        .map(|(index, machine)| (index, simulate::run(&machine, step_bound)))
        .collect()
}

fn scan_parallel(
    space: &SearchSpace,
    step_bound: u64,
    config: &SearchConfig,
    progress: &ProgressCounter<'_>,
) -> SearchStats {
    let workers = rayon::current_num_threads();
    let shards = space.shards(workers.saturating_mul(config.shards_per_thread.max(1)));
    debug!(workers, shards = shards.len(), "sharded search space");

    shards
        .par_iter()
        .map(|&shard| scan_shard(space, shard, step_bound, progress))
        .reduce(SearchStats::new, SearchStats::merge)
}

fn scan_shard(
    space: &SearchSpace,
    shard: IndexRange,
    step_bound: u64,
    progress: &ProgressCounter<'_>,
) -> SearchStats {
    let mut stats = SearchStats::new();
    let mut start = shard.start;
    while start < shard.end {
        let batch = IndexRange::new(start, shard.end.min(start.saturating_add(PROGRESS_BATCH)));
        stats = stats.merge(scan_range(space, batch, step_bound));
        progress.advance(batch.len());
        start = batch.end;
    }
    stats
}
