// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/mod.rs
// Version: 2.0.0
//
// This file is the module declaration for the statistics tracking functionality
// of the miner, located in the stats subdirectory of the miner module.
//
// Tree Location:
// - src/miner/stats/mod.rs (stats module entry point)
// - Submodules: miner_stats, worker_stats

pub mod miner_stats;
pub mod worker_stats;

pub use miner_stats::MinerStats;
pub use worker_stats::WorkerStats;

// Changelog:
// - v2.0.0: thread_stats renamed to worker_stats; gpu_info removed.
