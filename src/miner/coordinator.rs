// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/coordinator.rs
// Version: 1.0.1
//
// This file implements the work coordinator, located in the miner
// subdirectory. It polls the pool on a fixed interval, publishes each
// validated work item into the shared WorkState and reports the aggregate
// hash rate back to the pool with every poll. It never gives up.
//
// Tree Location:
// - src/miner/coordinator.rs (work polling loop)
// - Depends on: tokio, log

use crate::core::types::WorkItem;
use crate::miner::stats::MinerStats;
use crate::miner::work::WorkState;
use crate::pool::{PoolApi, PoolError};
use log::{debug, info, warn};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

const LOG_TARGET: &str = "aropool::miner::coordinator";

/// Full work items are logged on every Nth successful update.
const LOG_EVERY_UPDATES: u64 = 10;

pub struct WorkCoordinator<P: PoolApi> {
    pool: Arc<P>,
    work: Arc<WorkState>,
    stats: Arc<MinerStats>,
    worker_name: String,
    wallet_address: String,
    poll_interval: Duration,
    retry_interval: Duration,
}

impl<P: PoolApi> WorkCoordinator<P> {
    pub fn new(
        pool: Arc<P>,
        work: Arc<WorkState>,
        stats: Arc<MinerStats>,
        worker_name: String,
        wallet_address: String,
    ) -> Self {
        Self {
            pool,
            work,
            stats,
            worker_name,
            wallet_address,
            poll_interval: Duration::from_secs(5),
            retry_interval: Duration::from_secs(30),
        }
    }

    pub fn with_intervals(mut self, poll_interval: Duration, retry_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self.retry_interval = retry_interval;
        self
    }

    /// One poll: fetch, validate, publish.
    pub async fn poll_once(&self) -> Result<Arc<WorkItem>, PoolError> {
        let hashrate = self.stats.get_total_hashrate();
        let item = self
            .pool
            .fetch_work(&self.worker_name, &self.wallet_address, hashrate)
            .await?;
        let published = self.work.publish(item);
        self.stats.work_updates.fetch_add(1, Ordering::Relaxed);
        Ok(published)
    }

    /// Poll forever.
    pub async fn run(self) {
        let mut update_count: u64 = 0;
        loop {
            match self.poll_once().await {
                Ok(item) => {
                    if update_count % LOG_EVERY_UPDATES == 0 {
                        info!(target: LOG_TARGET,
                            "📋 Work update: height={}, difficulty={}, limit={}, block={}, public_key={}",
                            item.height, item.difficulty, item.limit, item.block, item.pool_public_key
                        );
                    } else {
                        debug!(target: LOG_TARGET, "📋 Work update: height={}", item.height);
                    }
                    update_count = update_count.wrapping_add(1);
                    tokio::time::sleep(self.poll_interval).await;
                }
                Err(e) => {
                    self.stats.work_failures.fetch_add(1, Ordering::Relaxed);
                    warn!(target: LOG_TARGET,
                        "📡 Work update failed, retry in {:?}: {}",
                        self.retry_interval, e
                    );
                    tokio::time::sleep(self.retry_interval).await;
                }
            }
        }
    }
}

// Changelog:
// - v1.0.1: Count failed polls in MinerStats.
// - v1.0.0: Extracted the polling loop out of CpuMiner.
