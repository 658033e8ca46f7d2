// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/miner_stats.rs
// Version: 2.1.0
//
// This file implements miner-wide statistics tracking, located in the stats
// subdirectory of the miner module. The per-worker slots together form the
// hash rate vector reported to the pool on every work poll.
//
// Tree Location:
// - src/miner/stats/miner_stats.rs (miner-wide statistics logic)
// - Depends on: std, worker_stats

use super::worker_stats::WorkerStats;
use log::{debug, info};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

const LOG_TARGET: &str = "aropool::miner::stats";

pub struct MinerStats {
    pub shares_found: AtomicU64,
    pub shares_submitted: AtomicU64,
    pub shares_abandoned: AtomicU64,
    pub submit_attempts: AtomicU64,
    pub work_updates: AtomicU64,
    pub work_failures: AtomicU64,
    start_time: Instant,
    pub worker_stats: Vec<Arc<WorkerStats>>,
}

impl MinerStats {
    pub fn new(num_workers: usize) -> Self {
        let worker_stats = (0..num_workers)
            .map(|i| Arc::new(WorkerStats::new(i)))
            .collect();

        Self {
            shares_found: AtomicU64::new(0),
            shares_submitted: AtomicU64::new(0),
            shares_abandoned: AtomicU64::new(0),
            submit_attempts: AtomicU64::new(0),
            work_updates: AtomicU64::new(0),
            work_failures: AtomicU64::new(0),
            start_time: Instant::now(),
            worker_stats,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_stats.len()
    }

    /// One rate per worker, indexed by worker index.
    pub fn hash_rates(&self) -> Vec<f64> {
        self.worker_stats.iter().map(|w| w.get_hashrate()).collect()
    }

    /// Sum of the hash rate vector.
    pub fn get_total_hashrate(&self) -> f64 {
        self.worker_stats.iter().map(|w| w.get_hashrate()).sum()
    }

    pub fn get_active_worker_count(&self) -> usize {
        self.worker_stats
            .iter()
            .filter(|w| w.get_hashrate() > 0.0)
            .count()
    }

    pub fn total_hashes(&self) -> u64 {
        self.worker_stats
            .iter()
            .map(|w| w.hashes_computed.load(Ordering::Relaxed))
            .sum()
    }

    pub fn record_share_found(&self, worker_index: usize) {
        self.shares_found.fetch_add(1, Ordering::Relaxed);
        if let Some(worker) = self.worker_stats.get(worker_index) {
            worker.record_share();
        }
    }

    pub fn format_hashrate(hashrate: f64) -> String {
        if hashrate >= 1_000_000.0 {
            format!("{:.2} MH/s", hashrate / 1_000_000.0)
        } else if hashrate >= 1_000.0 {
            format!("{:.2} KH/s", hashrate / 1_000.0)
        } else {
            format!("{:.2} H/s", hashrate)
        }
    }

    pub fn format_duration(duration: Duration) -> String {
        let secs = duration.as_secs();
        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m", secs / 60)
        } else {
            format!("{:.1}h", secs as f64 / 3600.0)
        }
    }

    /// Display a text-based dashboard with miner statistics
    pub fn display_dashboard(&self) {
        let found = self.shares_found.load(Ordering::Relaxed);
        let submitted = self.shares_submitted.load(Ordering::Relaxed);
        let abandoned = self.shares_abandoned.load(Ordering::Relaxed);
        let attempts = self.submit_attempts.load(Ordering::Relaxed);
        let delivered_rate = if found > 0 {
            (submitted as f64 / found as f64) * 100.0
        } else {
            0.0
        };
        let peak = self
            .worker_stats
            .iter()
            .map(|w| w.get_peak_hashrate())
            .fold(0.0, f64::max);

        info!(target: LOG_TARGET, "📊 MINER DASHBOARD");
        info!(target: LOG_TARGET, "├─ Hashrate: {}", Self::format_hashrate(self.get_total_hashrate()));
        info!(target: LOG_TARGET, "├─ Best Worker Peak: {}", Self::format_hashrate(peak));
        info!(target: LOG_TARGET, "├─ Total Hashes: {}", self.total_hashes());
        info!(target: LOG_TARGET, "├─ Shares: {} found, {} submitted ({:.1}%), {} abandoned", found, submitted, delivered_rate, abandoned);
        info!(target: LOG_TARGET, "├─ Submit Attempts: {}", attempts);
        info!(target: LOG_TARGET, "├─ Work Updates: {} ({} failed polls)", self.work_updates.load(Ordering::Relaxed), self.work_failures.load(Ordering::Relaxed));
        info!(target: LOG_TARGET, "├─ Session Time: {}", Self::format_duration(self.start_time.elapsed()));
        info!(target: LOG_TARGET, "└─ Active Workers: {}/{}", self.get_active_worker_count(), self.worker_count());
        for worker in &self.worker_stats {
            debug!(target: LOG_TARGET,
                "   worker {:>3}: {} (peak {}), {} hashes, {} shares, {} failed",
                worker.worker_index(),
                Self::format_hashrate(worker.get_hashrate()),
                Self::format_hashrate(worker.get_peak_hashrate()),
                worker.hashes_computed.load(Ordering::Relaxed),
                worker.shares_found.load(Ordering::Relaxed),
                worker.failed_attempts.load(Ordering::Relaxed)
            );
        }
    }
}


// Changelog:
// - v2.1.0: Per-worker breakdown logged at debug level under the dashboard.
// - v2.0.0: Reworked for HTTP pool mining.
//   - Total hashrate is now the sum of the per-worker slots.
//   - Share counters track found/submitted/abandoned instead of accept/reject.
//   - Dropped the share history and activity feed used by the web dashboard.
