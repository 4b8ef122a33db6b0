//! Progress reporting for long searches
//!
//! Purely observational: a search produces the same statistics whether or
//! not anything listens.

use std::sync::atomic::{AtomicU64, Ordering};

/// Receiver of progress milestones
pub trait ProgressSink: Sync {
    /// `examined` machines out of `total` have been simulated
    fn report(&self, examined: u64, total: u64);
}

impl<F> ProgressSink for F
where
    F: Fn(u64, u64) + Sync,
{
    fn report(&self, examined: u64, total: u64) {
        self(examined, total)
    }
}

/// Sink that discards every milestone
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _examined: u64, _total: u64) {}
}

/// Shared examined-machine counter
///
/// Workers add in batches; each multiple of `interval` crossed is reported
/// once. Milestones from different workers may arrive out of order.
pub(crate) struct ProgressCounter<'a> {
    examined: AtomicU64,
    total: u64,
    interval: u64,
    sink: &'a dyn ProgressSink,
}

impl<'a> ProgressCounter<'a> {
    pub(crate) fn new(total: u64, interval: u64, sink: &'a dyn ProgressSink) -> Self {
        Self {
            examined: AtomicU64::new(0),
            total,
            interval,
            sink,
        }
    }

    pub(crate) fn advance(&self, count: u64) {
        if count == 0 {
            return;
        }
        let before = self.examined.fetch_add(count, Ordering::Relaxed);
        if self.interval == 0 {
            return;
        }
        let after = before + count;
        for milestone in (before / self.interval + 1)..=(after / self.interval) {
            self.sink.report(milestone * self.interval, self.total);
        }
    }

    pub(crate) fn examined(&self) -> u64 {
        self.examined.load(Ordering::Relaxed)
    }
}
