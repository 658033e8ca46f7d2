// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/cpu/miner.rs
// Version: 3.1.0

use super::thread::{WorkerContext, start_worker_thread};
use crate::Result;
use crate::core::pipeline::HashPipeline;
use crate::core::types::MinerConfig;
use crate::miner::coordinator::WorkCoordinator;
use crate::miner::stats::MinerStats;
use crate::miner::submitter::{ShareSubmitter, share_queue};
use crate::miner::work::WorkState;
use crate::pool::{PoolApi, PoolClient};
use log::{debug, error, info};
use std::sync::Arc;

const LOG_TARGET: &str = "aropool::miner::cpu";

pub struct CpuMiner<P: PoolApi = PoolClient> {
    config: MinerConfig,
    pool: Arc<P>,
    work: Arc<WorkState>,
    stats: Arc<MinerStats>,
    pipeline: Arc<HashPipeline>,
}

impl CpuMiner<PoolClient> {
    /// Miner talking to the pool configured in `config`.
    pub fn new(config: MinerConfig) -> Result<Self> {
        let pool = PoolClient::new(&config.pool_url, config.request_timeout)?;
        Ok(Self::with_pool(config, Arc::new(pool)))
    }
}

impl<P: PoolApi> CpuMiner<P> {
    pub fn with_pool(config: MinerConfig, pool: Arc<P>) -> Self {
        let stats = MinerStats::new(config.worker_count);
        let pipeline = HashPipeline::new(config.policy);
        Self {
            config,
            pool,
            work: WorkState::new().into_arc(),
            stats: Arc::new(stats),
            pipeline: Arc::new(pipeline),
        }
    }

    /// Get access to miner statistics
    pub fn get_stats(&self) -> Arc<MinerStats> {
        Arc::clone(&self.stats)
    }

    pub fn work_state(&self) -> Arc<WorkState> {
        Arc::clone(&self.work)
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    fn start_stats_printer(&self) {
        let stats = Arc::clone(&self.stats);
        let period = self.config.dashboard_interval;

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                stats.display_dashboard();
            }
        });
    }

    /// Start the coordinator, the workers and the dashboard, then submit
    /// shares on the current task until every worker has stopped.
    pub async fn run(self) -> Result<()> {
        let coordinator = WorkCoordinator::new(
            Arc::clone(&self.pool),
            Arc::clone(&self.work),
            Arc::clone(&self.stats),
            self.config.worker_name.clone(),
            self.config.wallet_address.clone(),
        )
        .with_intervals(self.config.poll_interval, self.config.retry_interval);
        tokio::spawn(coordinator.run());
        info!(target: LOG_TARGET, "📡 Polling {} for work", self.config.pool_url);

        let policy = self.pipeline.policy();
        info!(target: LOG_TARGET,
            "🔐 Argon2 {:?} up to height {}, {:?} above",
            policy.legacy, policy.height_threshold, policy.high_memory
        );

        let (share_tx, share_rx) = share_queue();

        debug!(target: LOG_TARGET, "Starting {} workers", self.config.worker_count);
        for index in 0..self.config.worker_count {
            let ctx = WorkerContext {
                index,
                work: Arc::clone(&self.work),
                pipeline: Arc::clone(&self.pipeline),
                shares: share_tx.clone(),
                stats: Arc::clone(&self.stats),
                worker_stats: Arc::clone(&self.stats.worker_stats[index]),
                report_every: self.config.report_every,
            };
            start_worker_thread(ctx)?;
            info!(target: LOG_TARGET, "🧵 Started worker: {}", index);
        }
        // Workers hold the only senders from here on.
        drop(share_tx);

        self.start_stats_printer();

        let submitter = ShareSubmitter::new(
            Arc::clone(&self.pool),
            self.config.wallet_address.clone(),
            self.config.retry,
            Arc::clone(&self.stats),
        );
        submitter.run(share_rx).await;

        error!(target: LOG_TARGET, "All workers stopped");
        Err("all workers stopped".into())
    }
}

// Changelog:
// - v3.1.0: Log the active Argon2 policy at startup.
// - v3.0.0: Rebuilt around HTTP polling.
//   - The coordinator, workers and submitter are separate components wired
//     together here through WorkState, MinerStats and the share queue.
//   - Workers are spawned immediately and block until the first work item.
