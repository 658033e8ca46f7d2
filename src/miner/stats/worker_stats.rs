// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/worker_stats.rs
// Version: 2.0.0
//
// This file implements per-worker statistics tracking, located in the stats
// subdirectory of the miner module. Each worker owns the writes to its own
// hash rate slot; everybody else only reads.
//
// Tree Location:
// - src/miner/stats/worker_stats.rs (per-worker statistics logic)
// - Depends on: std

use std::sync::atomic::{AtomicU64, Ordering};

pub struct WorkerStats {
    worker_index: usize,
    /// f64 bits of the current window rate
    hashrate_bits: AtomicU64,
    peak_bits: AtomicU64,
    pub hashes_computed: AtomicU64,
    pub shares_found: AtomicU64,
    pub failed_attempts: AtomicU64,
}

impl WorkerStats {
    /// Create a new WorkerStats instance for a specific worker
    pub fn new(worker_index: usize) -> Self {
        Self {
            worker_index,
            hashrate_bits: AtomicU64::new(0f64.to_bits()),
            peak_bits: AtomicU64::new(0f64.to_bits()),
            hashes_computed: AtomicU64::new(0),
            shares_found: AtomicU64::new(0),
            failed_attempts: AtomicU64::new(0),
        }
    }

    pub fn worker_index(&self) -> usize {
        self.worker_index
    }

    /// Store the rate of the current measurement window.
    /// Negative or non-finite rates are stored as zero.
    pub fn record_hashrate(&self, rate: f64) {
        let rate = if rate.is_finite() && rate > 0.0 { rate } else { 0.0 };
        self.hashrate_bits.store(rate.to_bits(), Ordering::Relaxed);
        if rate > self.get_peak_hashrate() {
            self.peak_bits.store(rate.to_bits(), Ordering::Relaxed);
        }
    }

    pub fn record_hash(&self) {
        self.hashes_computed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_share(&self) {
        self.shares_found.fetch_add(1, Ordering::Relaxed);
    }

    /// An attempt that errored or panicked
    pub fn record_failure(&self) {
        self.failed_attempts.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current hashrate
    pub fn get_hashrate(&self) -> f64 {
        f64::from_bits(self.hashrate_bits.load(Ordering::Relaxed))
    }

    /// Get the peak hashrate achieved
    pub fn get_peak_hashrate(&self) -> f64 {
        f64::from_bits(self.peak_bits.load(Ordering::Relaxed))
    }
}

// Changelog:
// - v2.0.0: Reworked into the per-worker hash rate slot.
//   - The rate is stored as f64 bits in an AtomicU64, so no mutex is needed.
//   - Dropped difficulty tracking and share dots.
