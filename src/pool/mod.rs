// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/mod.rs
// Version: 2.0.0
//
// This file is the module declaration for the pool communication functionality
// of the miner, located in the pool subdirectory. It declares submodules and
// the PoolApi seam the coordinator and submitter are written against.
//
// Tree Location:
// - src/pool/mod.rs (pool module entry point)
// - Submodules: client, messages

pub mod client;
pub mod messages;

use crate::core::types::{Share, WorkItem};
use std::future::Future;

// Re-export key types for convenience
pub use client::{PoolClient, PoolError};
pub use messages::{SubmitAck, WorkError};

/// Operations the miner needs from a pool.
pub trait PoolApi: Send + Sync + 'static {
    /// Fetch and validate the current work item.
    fn fetch_work(
        &self,
        worker: &str,
        address: &str,
        hashrate: f64,
    ) -> impl Future<Output = Result<WorkItem, PoolError>> + Send;

    /// Deliver one share. Any error counts as a failed attempt.
    fn submit_share(
        &self,
        share: &Share,
        address: &str,
    ) -> impl Future<Output = Result<SubmitAck, PoolError>> + Send;
}

// Changelog:
// - v2.0.0: Dropped the protocol submodule and added the PoolApi trait.
