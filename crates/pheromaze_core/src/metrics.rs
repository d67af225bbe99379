//! Run metrics for the colony.
//!
//! Counters are atomics so rayon workers can record walk outcomes without
//! locking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Counters accumulated over one optimization run.
pub struct Metrics {
    generations: AtomicU64,
    ants_spawned: AtomicU64,
    ants_failed: AtomicU64,
    steps: AtomicU64,
    backtracks: AtomicU64,
    best_size: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generations: AtomicU64::new(0),
            ants_spawned: AtomicU64::new(0),
            ants_failed: AtomicU64::new(0),
            steps: AtomicU64::new(0),
            backtracks: AtomicU64::new(0),
            best_size: AtomicU64::new(u64::MAX),
            start_time: Instant::now(),
        }
    }

    /// Records a walk that reached the end.
    pub fn record_walk(&self, steps: usize, backtracks: usize) {
        self.ants_spawned.fetch_add(1, Ordering::Relaxed);
        self.steps.fetch_add(steps as u64, Ordering::Relaxed);
        self.backtracks.fetch_add(backtracks as u64, Ordering::Relaxed);
    }

    /// Records a walk that ended in failure.
    pub fn record_failure(&self) {
        self.ants_spawned.fetch_add(1, Ordering::Relaxed);
        self.ants_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a finished generation and the best route size so far.
    pub fn record_generation(&self, best_size: Option<usize>, duration: Duration) {
        let generation = self.generations.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(size) = best_size {
            self.best_size.fetch_min(size as u64, Ordering::Relaxed);
        }

        if generation.is_multiple_of(100) {
            tracing::info!(
                generation = generation,
                best_size = ?self.best_size(),
                ants_failed = self.ants_failed(),
                duration_ms = duration.as_millis() as u64,
                "Colony progress"
            );
        }
    }

    /// Forgets the best size, e.g. when the colony is pointed at new endpoints.
    pub fn reset_best(&self) {
        self.best_size.store(u64::MAX, Ordering::Relaxed);
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn ants_spawned(&self) -> u64 {
        self.ants_spawned.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn ants_failed(&self) -> u64 {
        self.ants_failed.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn backtracks(&self) -> u64 {
        self.backtracks.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn best_size(&self) -> Option<u64> {
        match self.best_size.load(Ordering::Relaxed) {
            u64::MAX => None,
            size => Some(size),
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. Calling this twice is
/// harmless; the second subscriber is dropped.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish(),
    )
    .ok();
}
