// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/submitter.rs
// Version: 1.2.0
//
// This file implements the share queue and its single consumer, located in
// the miner subdirectory. Workers push shares into an unbounded channel; the
// submitter drains it in FIFO order and posts each share with a bounded
// number of attempts. A share that exhausts its attempts is dropped.
//
// Tree Location:
// - src/miner/submitter.rs (share queue and submission retry)
// - Depends on: tokio, log

use crate::core::types::{RetryPolicy, Share};
use crate::miner::stats::MinerStats;
use crate::pool::PoolApi;
use log::{error, info, warn};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use tokio::sync::mpsc;

const LOG_TARGET: &str = "aropool::miner::submitter";

pub type ShareSender = mpsc::UnboundedSender<Share>;
pub type ShareReceiver = mpsc::UnboundedReceiver<Share>;

/// Unbounded multi-producer, single-consumer share queue.
pub fn share_queue() -> (ShareSender, ShareReceiver) {
    mpsc::unbounded_channel()
}

/// What happened to one share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted { attempts: u32 },
    Abandoned { attempts: u32 },
}

impl SubmitOutcome {
    pub fn attempts(&self) -> u32 {
        match self {
            SubmitOutcome::Submitted { attempts } | SubmitOutcome::Abandoned { attempts } => *attempts,
        }
    }
}

pub struct ShareSubmitter<P: PoolApi> {
    pool: Arc<P>,
    wallet_address: String,
    retry: RetryPolicy,
    stats: Arc<MinerStats>,
}

impl<P: PoolApi> ShareSubmitter<P> {
    pub fn new(pool: Arc<P>, wallet_address: String, retry: RetryPolicy, stats: Arc<MinerStats>) -> Self {
        Self {
            pool,
            wallet_address,
            retry,
            stats,
        }
    }

    /// Post one share, retrying up to `max_attempts` times.
    pub async fn submit(&self, share: &Share) -> SubmitOutcome {
        let max_attempts = self.retry.max_attempts.max(1);
        info!(target: LOG_TARGET,
            "📤 Submitting share from worker {}: nonce={}, argon={}",
            share.worker_index, share.nonce, share.argon
        );

        for attempt in 1..=max_attempts {
            self.stats.submit_attempts.fetch_add(1, Ordering::Relaxed);
            match self.pool.submit_share(share, &self.wallet_address).await {
                Ok(ack) => {
                    self.stats.shares_submitted.fetch_add(1, Ordering::Relaxed);
                    if ack.is_ok() {
                        info!(target: LOG_TARGET,
                            "✅ Share submitted (attempt {}, {:.1?} after discovery): {:?}",
                            attempt, share.age(), ack
                        );
                    } else {
                        warn!(target: LOG_TARGET, "⚠️ Share delivered but pool answered {:?}", ack);
                    }
                    return SubmitOutcome::Submitted { attempts: attempt };
                }
                Err(e) => {
                    warn!(target: LOG_TARGET,
                        "❌ Share submission failed (attempt {}/{}): {}",
                        attempt, max_attempts, e
                    );
                    if attempt < max_attempts {
                        tokio::time::sleep(self.retry.delay).await;
                    }
                }
            }
        }

        self.stats.shares_abandoned.fetch_add(1, Ordering::Relaxed);
        error!(target: LOG_TARGET,
            "🚫 Share submission failed after {} attempts, dropping nonce {}",
            max_attempts, share.nonce
        );
        SubmitOutcome::Abandoned {
            attempts: max_attempts,
        }
    }

    /// Drain the queue until every sender is gone.
    pub async fn run(self, mut shares: ShareReceiver) {
        while let Some(share) = shares.recv().await {
            self.submit(&share).await;
        }
        info!(target: LOG_TARGET, "📭 Share queue closed, submitter exiting");
    }
}

// Changelog:
// - v1.2.0: Log how long each share waited before it was delivered.
// - v1.1.0: Retry delay only applies between attempts.
// - v1.0.0: Moved share submission out of the miner into its own consumer task.
