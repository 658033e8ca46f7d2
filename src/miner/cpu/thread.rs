// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/cpu/thread.rs
// Version: 2.1.0
//
// This file contains the implementation of individual mining workers, located
// in the cpu subdirectory of the miner module. Each worker is an OS thread
// running random-nonce attempts against the latest work snapshot, measuring
// its own hash rate and pushing valid shares onto the share queue.

use crate::core::argon::BlockBuffer;
use crate::core::nonce::generate_nonce;
use crate::core::pipeline::{HashInput, HashPipeline, PipelineError};
use crate::core::types::{Share, WorkItem};
use crate::miner::stats::{MinerStats, WorkerStats};
use crate::miner::submitter::ShareSender;
use crate::miner::work::WorkState;
use argon2::password_hash::SaltString;
use log::{debug, error, info, warn};
use rand::{CryptoRng, RngCore};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

const LOG_TARGET: &str = "aropool::miner::cpu::thread";

/// Everything a worker needs, handed over at spawn time.
pub struct WorkerContext {
    pub index: usize,
    pub work: Arc<WorkState>,
    pub pipeline: Arc<HashPipeline>,
    pub shares: ShareSender,
    pub stats: Arc<MinerStats>,
    pub worker_stats: Arc<WorkerStats>,
    /// Iterations per measurement window
    pub report_every: u64,
}

/// Iteration counter for one hash rate measurement window.
#[derive(Debug)]
pub struct HashWindow {
    count: u64,
    started: Instant,
    length: u64,
}

impl HashWindow {
    pub fn new(length: u64, now: Instant) -> Self {
        Self {
            count: 0,
            started: now,
            length: length.max(1),
        }
    }

    /// Count one iteration and return the window rate so far.
    pub fn tick(&mut self, now: Instant) -> f64 {
        self.count += 1;
        let elapsed = now.duration_since(self.started).as_secs_f64();
        if elapsed > 0.0 {
            self.count as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Reset when the window is full. Returns true on reset.
    pub fn roll(&mut self, now: Instant) -> bool {
        if self.count >= self.length {
            self.count = 0;
            self.started = now;
            true
        } else {
            false
        }
    }
}

/// One attempt against `work`. Returns a share when the result is valid.
pub fn mine_once<R: RngCore + CryptoRng>(
    pipeline: &HashPipeline,
    work: &WorkItem,
    worker_index: usize,
    rng: &mut R,
    memory: &mut BlockBuffer,
) -> Result<Option<Share>, PipelineError> {
    let nonce = generate_nonce(rng);
    let salt = SaltString::generate(&mut *rng);
    let input = HashInput {
        pool_public_key: &work.pool_public_key,
        nonce: &nonce,
        block: &work.block,
        difficulty: &work.difficulty,
        height: work.height,
    };

    let outcome = pipeline.compute(&input, &salt, memory)?;
    if !outcome.is_valid(work.limit) {
        return Ok(None);
    }

    info!(target: LOG_TARGET,
        "💎 Worker #{} found valid nonce: {}, {}, {} @ {}:{}:{}",
        worker_index, nonce, outcome.encoded, work.pool_public_key,
        outcome.duration, work.difficulty, outcome.result
    );
    let argon = outcome.trimmed_hash()?.to_string();
    Ok(Some(Share::new(
        nonce,
        argon,
        work.pool_public_key.clone(),
        worker_index,
    )))
}

pub fn start_worker_thread(ctx: WorkerContext) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(format!("worker-{}", ctx.index))
        .spawn(move || worker_loop(ctx))
}

fn worker_loop(ctx: WorkerContext) {
    let mut rng = rand::thread_rng();
    let mut memory = BlockBuffer::new();

    if !ctx.work.has_work() {
        debug!(target: LOG_TARGET, "Worker {}: waiting for first work item", ctx.index);
    }
    ctx.work.wait_for_work();
    info!(target: LOG_TARGET, "⛏️ Worker {} started", ctx.index);

    let mut window = HashWindow::new(ctx.report_every, Instant::now());

    loop {
        let work = ctx.work.wait_for_work();

        let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
            mine_once(&ctx.pipeline, &work, ctx.index, &mut rng, &mut memory)
        }));
        match attempt {
            Ok(Ok(Some(share))) => {
                ctx.stats.record_share_found(ctx.index);
                if ctx.shares.send(share).is_err() {
                    warn!(target: LOG_TARGET, "Worker {}: share queue closed, stopping", ctx.index);
                    return;
                }
            }
            Ok(Ok(None)) => {}
            Ok(Err(e)) => {
                ctx.worker_stats.record_failure();
                error!(target: LOG_TARGET, "Worker {}: hash attempt failed: {}", ctx.index, e);
            }
            Err(_) => {
                ctx.worker_stats.record_failure();
                error!(target: LOG_TARGET, "Worker {}: hash attempt panicked, continuing", ctx.index);
            }
        }

        let now = Instant::now();
        ctx.worker_stats.record_hash();
        ctx.worker_stats.record_hashrate(window.tick(now));
        if window.roll(now) && ctx.index == 0 {
            info!(target: LOG_TARGET,
                "⚡ {:.6} H/s - {} workers",
                ctx.stats.get_total_hashrate(),
                ctx.stats.worker_count()
            );
        }
    }
}


// Changelog:
// - v2.1.0: Each worker owns one BlockBuffer reused across attempts.
// - v2.0.0: Rewritten for the argon2 + sha512 pipeline.
//   - Workers read the shared WorkState instead of a broadcast job channel.
//   - A panicking or failing attempt is logged and the worker keeps going.
//   - Worker 0 reports the summed hash rate every window.
