// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 2.0.0
//
// This file defines core data structures for the miner, located in the core
// subdirectory. It includes the command-line arguments, the resolved miner
// configuration, the pool work item and found shares.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, sha2, sysinfo, num_cpus

use crate::core::argon::{Argon2Policy, DEFAULT_HEIGHT_THRESHOLD};
use crate::core::difficulty::U256;
use clap::Parser;
use sha2::{Digest, Sha224};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use sysinfo::System;

pub const DEFAULT_POOL_URL: &str = "http://aropool.com";
const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Command-line arguments for the miner
#[derive(Parser, Debug)]
#[command(
    name = "aropool-miner",
    version,
    about = "Argon2i + SHA-512 CPU miner for Arionum style HTTP pools",
    long_about = "Aropool Miner polls an HTTP mining pool for the current block, searches random\n\
                  nonces with the Argon2i + SHA-512 pipeline on every worker thread, and submits\n\
                  qualifying shares back to the pool.\n\n\
                  Examples:\n\
                    aropool-miner --wallet YOUR_WALLET\n\
                    aropool-miner --wallet YOUR_WALLET --pool http://aropool.com --worker-count 8\n\
                    aropool-miner --wallet YOUR_WALLET --worker-name rig-01 --height-threshold 10800"
)]
pub struct Args {
    /// Mining pool base URL (the miner appends /mine.php)
    #[arg(
        short = 'o',
        long = "pool",
        value_name = "URL",
        default_value = DEFAULT_POOL_URL,
        help = "Mining pool URL"
    )]
    pub pool: String,

    /// Wallet address credited for shares (Base58)
    #[arg(
        short = 'u',
        long = "wallet",
        value_name = "ADDRESS",
        help = "Wallet address for deposits"
    )]
    pub wallet: Option<String>,

    /// Worker name reported to the pool.
    /// Defaults to a hash of the host name so every rig is distinct.
    #[arg(long = "worker-name", value_name = "NAME", help = "Worker name")]
    pub worker_name: Option<String>,

    /// Number of hashing workers (default: ceil((logical CPUs + 1) / 2))
    #[arg(
        short = 't',
        long = "worker-count",
        value_name = "COUNT",
        help = "Number of workers to use"
    )]
    pub worker_count: Option<usize>,

    /// Heights strictly above this use the high-memory Argon2 profile
    #[arg(
        long = "height-threshold",
        value_name = "HEIGHT",
        default_value_t = DEFAULT_HEIGHT_THRESHOLD,
        help = "Block height above which the high-memory argon2 profile applies"
    )]
    pub height_threshold: u64,

    /// log4rs configuration file, created from the bundled sample if missing
    #[arg(
        long = "log-config",
        value_name = "FILE",
        default_value = "logs/aropool/log4rs_config.yml"
    )]
    pub log_config: PathBuf,

    /// Directory log files are written to
    #[arg(long = "log-dir", value_name = "DIR", default_value = "logs/aropool")]
    pub log_dir: PathBuf,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        let wallet = match self.wallet.as_deref() {
            Some(wallet) if !wallet.trim().is_empty() => wallet,
            _ => {
                return Err(
                    "Wallet address is required for mining. Use --wallet YOUR_ADDRESS".to_string(),
                );
            }
        };
        if !wallet.chars().all(|c| BASE58_ALPHABET.contains(c)) {
            return Err("Wallet address contains invalid characters (must be Base58)".to_string());
        }

        if !(self.pool.starts_with("http://") || self.pool.starts_with("https://")) {
            return Err("Pool URL must start with http:// or https://".to_string());
        }

        if let Some(name) = &self.worker_name {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err("Worker name must be non-empty and contain no whitespace".to_string());
            }
        }

        match self.worker_count {
            Some(0) => Err("Worker count must be at least 1".to_string()),
            Some(count) if count > 1024 => Err("Worker count cannot exceed 1024".to_string()),
            _ => Ok(()),
        }
    }
}

/// Retry discipline of the share submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(5),
        }
    }
}

/// Resolved, read-only configuration handed to every miner component.
#[derive(Debug, Clone)]
pub struct MinerConfig {
    pub pool_url: String,
    pub wallet_address: String,
    pub worker_name: String,
    pub worker_count: usize,
    pub policy: Argon2Policy,
    pub request_timeout: Duration,
    /// Delay between successful work polls
    pub poll_interval: Duration,
    /// Delay after a failed work poll
    pub retry_interval: Duration,
    pub retry: RetryPolicy,
    /// Iterations per hash rate measurement window
    pub report_every: u64,
    pub dashboard_interval: Duration,
}

impl MinerConfig {
    pub fn new(pool_url: String, wallet_address: String, worker_name: String, worker_count: usize) -> Self {
        Self {
            pool_url: pool_url.trim_end_matches('/').to_string(),
            wallet_address,
            worker_name,
            worker_count,
            policy: Argon2Policy::default(),
            request_timeout: Duration::from_secs(1),
            poll_interval: Duration::from_secs(5),
            retry_interval: Duration::from_secs(30),
            retry: RetryPolicy::default(),
            report_every: 100,
            dashboard_interval: Duration::from_secs(60),
        }
    }

    pub fn from_args(args: &Args) -> Result<Self, String> {
        args.validate()?;
        let wallet = args
            .wallet
            .clone()
            .ok_or_else(|| "Wallet address is required for mining".to_string())?;
        let worker_name = args.worker_name.clone().unwrap_or_else(default_worker_name);
        let worker_count = args.worker_count.unwrap_or_else(default_worker_count);

        let mut config = Self::new(args.pool.clone(), wallet, worker_name, worker_count);
        config.policy = Argon2Policy::with_threshold(args.height_threshold);
        Ok(config)
    }
}

/// First 32 hex characters of SHA-224 over the host name.
pub fn default_worker_name() -> String {
    let host = System::host_name().unwrap_or_else(|| "localhost".to_string());
    worker_name_for_host(&host)
}

pub fn worker_name_for_host(host: &str) -> String {
    let digest = hex::encode(Sha224::digest(host.as_bytes()));
    digest[..32].to_string()
}

/// `ceil((cpus + 1) / 2)`; each worker is memory bound.
pub fn default_worker_count() -> usize {
    (num_cpus::get() + 1).div_ceil(2)
}

/// Current mining parameters broadcast by the pool.
///
/// Never mutated after construction; the coordinator replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub block: String,
    pub difficulty: U256,
    pub limit: u64,
    pub pool_public_key: String,
    pub height: u64,
}

impl WorkItem {
    pub fn new(
        block: String,
        difficulty: U256,
        limit: u64,
        pool_public_key: String,
        height: u64,
    ) -> Self {
        Self {
            block,
            difficulty,
            limit,
            pool_public_key,
            height,
        }
    }
}

/// Represents a found share ready for submission
#[derive(Debug, Clone)]
pub struct Share {
    pub nonce: String,

    /// Encoded argon2 hash with its parameter prefix removed
    pub argon: String,

    /// Pool key of the work item the share was found against
    pub pool_public_key: String,

    /// Worker that found this share
    pub worker_index: usize,

    pub found_at: Instant,
}

impl Share {
    /// Create a new share
    pub fn new(nonce: String, argon: String, pool_public_key: String, worker_index: usize) -> Self {
        Self {
            nonce,
            argon,
            pool_public_key,
            worker_index,
            found_at: Instant::now(),
        }
    }

    /// Get the age of this share
    pub fn age(&self) -> Duration {
        self.found_at.elapsed()
    }
}

// Changelog:
// - v2.0.0: Reworked for HTTP pool mining.
//   - Args now carries pool URL, wallet, worker name/count and argon2 threshold.
//   - Added MinerConfig and RetryPolicy so no component reads process globals.
//   - Replaced PoolJob/MiningJob with the immutable WorkItem.
//   - Share now carries the nonce, trimmed argon hash and pool public key.
