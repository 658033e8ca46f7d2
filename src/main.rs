// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 3.0.0

use aropool_miner::{
    Result,
    core::types::{Args, MinerConfig},
    miner::CpuMiner,
    utils::logging::{DEFAULT_LOG_CONFIG, initialize_logging},
};
use clap::Parser;
use log::info;

const LOG_TARGET: &str = "aropool::miner::main";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    if let Err(err) = initialize_logging(&args.log_config, &args.log_dir, DEFAULT_LOG_CONFIG) {
        eprintln!("❌ Error: could not start logging: {}", err);
        std::process::exit(1);
    }

    let config = match MinerConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ Error: {}", err);
            std::process::exit(1);
        }
    };

    info!(target: LOG_TARGET, "🚀 Starting aropool-miner v{}", env!("CARGO_PKG_VERSION"));
    info!(target: LOG_TARGET, "📡 Pool: {}", config.pool_url);
    info!(target: LOG_TARGET, "💰 Wallet: {}", config.wallet_address);
    info!(target: LOG_TARGET, "👷 Worker: {}", config.worker_name);
    info!(target: LOG_TARGET, "🧵 Threads: {}", config.worker_count);

    let miner = CpuMiner::new(config)?;
    miner.run().await
}

// Changelog:
// - v3.0.0: Single CPU mining mode against the HTTP pool.
//   - Logging is configured through log4rs from a bundled sample file.
//   - Removed feature-selected GPU, hybrid, benchmark and SV2 entry points.
