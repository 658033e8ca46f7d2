// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 2.0.0
//
// This file is the module declaration for the core functionality of the
// miner, located in the core subdirectory. It declares submodules and
// re-exports key types for use throughout the project.

pub mod argon;
pub mod difficulty;
pub mod nonce;
pub mod pipeline;
pub mod types;

// Re-export the most commonly used items
pub use argon::{Argon2Policy, ArgonError, BlockBuffer, HashProfile};
pub use difficulty::U256;
pub use nonce::generate_nonce;
pub use pipeline::{HashInput, HashOutcome, HashPipeline, PipelineError};
pub use types::{Args, MinerConfig, RetryPolicy, Share, WorkItem};

// Changelog:
// - v2.0.0: Replaced the sha3x/sha256 kernels with the argon2 + sha512 pipeline.
