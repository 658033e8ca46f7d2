// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 2.0.0
//
// This file serves as the main library entry point for the Aropool miner,
// located at the root of the source tree. It exports all public modules
// and types that the binary and the integration tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, miner, pool, utils

pub mod core;
pub mod miner;
pub mod pool;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::core::{HashPipeline, MinerConfig, Share, WorkItem, difficulty};
pub use crate::miner::{CpuMiner, MinerStats, WorkState};
pub use crate::pool::{PoolApi, PoolClient};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Changelog:
// - v2.0.0: Library reorganised around the argon2 pool protocol.
//   - Dropped the benchmark, help and tui modules.
//   - Re-exported the work state and hash pipeline for integration tests.
// - v1.0.0: Initial modular breakout from monolithic main.rs.
