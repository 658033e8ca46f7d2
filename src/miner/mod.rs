// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/mod.rs
// Version: 2.0.0
//
// This file is the module declaration for the mining engine, located in the
// miner subdirectory. It declares submodules and re-exports key types.
//
// Tree Location:
// - src/miner/mod.rs (miner module entry point)
// - Submodules: coordinator, cpu, stats, submitter, work

pub mod coordinator;
pub mod cpu;
pub mod stats;
pub mod submitter;
pub mod work;

// Re-export key types for convenience
pub use coordinator::WorkCoordinator;
pub use cpu::CpuMiner;
pub use stats::{MinerStats, WorkerStats};
pub use submitter::{ShareSubmitter, SubmitOutcome, share_queue};
pub use work::WorkState;

// Changelog:
// - v2.0.0: Dropped the gpu module; added coordinator, submitter and work.
