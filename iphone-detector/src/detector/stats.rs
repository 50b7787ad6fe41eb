//! Pipeline counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters updated by the publishing pipeline.
///
/// Lock-free so the pipeline task and observers never contend.
#[derive(Debug, Default)]
pub struct PipelineStats {
    notifications: AtomicU64,
    recomputations: AtomicU64,
    publications: AtomicU64,
    suppressed: AtomicU64,
}

/// Point-in-time copy of [`PipelineStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Raw resize notifications received.
    pub notifications: u64,
    /// Screen state recomputations (one per elapsed quiet window).
    pub recomputations: u64,
    /// States published to subscribers.
    pub publications: u64,
    /// Recomputed states dropped because they equalled the last publication.
    pub suppressed: u64,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_notification(&self) {
        self.notifications.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_recomputation(&self) {
        self.recomputations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_publication(&self) {
        self.publications.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_suppressed(&self) {
        self.suppressed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            notifications: self.notifications.load(Ordering::Relaxed),
            recomputations: self.recomputations.load(Ordering::Relaxed),
            publications: self.publications.load(Ordering::Relaxed),
            suppressed: self.suppressed.load(Ordering::Relaxed),
        }
    }
}
