// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/config_test.rs
// Version: 1.0.0
//
// This file contains tests for command-line parsing, validation and the
// resolved miner configuration, located in the tests directory.
//
// Tree Location:
// - tests/config_test.rs (configuration tests)
// - Depends on: aropool-miner, clap

#[cfg(test)]
mod tests {
    use aropool_miner::core::argon::DEFAULT_HEIGHT_THRESHOLD;
    use aropool_miner::core::types::{
        Args, DEFAULT_POOL_URL, MinerConfig, RetryPolicy, default_worker_count, worker_name_for_host,
    };
    use clap::Parser;
    use std::time::Duration;

    const WALLET: &str = "3ZAkV4EY4B4Fxr4rWCRn8mTfjknp9VsW1RUQhqfW1pg3";

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["aropool-miner"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["--wallet", WALLET]);
        assert_eq!(args.pool, DEFAULT_POOL_URL);
        assert_eq!(args.height_threshold, DEFAULT_HEIGHT_THRESHOLD);
        assert!(args.worker_name.is_none());
        assert!(args.worker_count.is_none());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["-o", "https://pool.example/", "-u", WALLET, "-t", "3"]);
        assert_eq!(args.pool, "https://pool.example/");
        assert_eq!(args.wallet.as_deref(), Some(WALLET));
        assert_eq!(args.worker_count, Some(3));
    }

    #[test]
    fn test_validation_errors() {
        assert!(parse(&[]).validate().is_err());
        assert!(parse(&["--wallet", "  "]).validate().is_err());
        // '0', 'O', 'I' and 'l' are not Base58
        assert!(parse(&["--wallet", "0OIl"]).validate().is_err());
        assert!(parse(&["--wallet", WALLET, "--pool", "ftp://pool"]).validate().is_err());
        assert!(parse(&["--wallet", WALLET, "--worker-name", "my rig"]).validate().is_err());
        assert!(parse(&["--wallet", WALLET, "-t", "0"]).validate().is_err());
        assert!(parse(&["--wallet", WALLET, "-t", "1025"]).validate().is_err());
        assert!(parse(&["--wallet", WALLET, "-t", "1024"]).validate().is_ok());
    }

    #[test]
    fn test_non_numeric_worker_count_rejected_by_parser() {
        assert!(Args::try_parse_from(["aropool-miner", "--wallet", WALLET, "-t", "many"]).is_err());
    }

    #[test]
    fn test_from_args() {
        let args = parse(&[
            "--wallet",
            WALLET,
            "--pool",
            "http://pool.example/",
            "--worker-name",
            "rig01",
            "-t",
            "2",
            "--height-threshold",
            "20000",
        ]);
        let config = MinerConfig::from_args(&args).unwrap();
        assert_eq!(config.pool_url, "http://pool.example");
        assert_eq!(config.wallet_address, WALLET);
        assert_eq!(config.worker_name, "rig01");
        assert_eq!(config.worker_count, 2);
        assert_eq!(config.policy.height_threshold, 20_000);
        assert_eq!(config.request_timeout, Duration::from_secs(1));
        assert_eq!(config.report_every, 100);
        assert_eq!(
            config.retry,
            RetryPolicy {
                max_attempts: 5,
                delay: Duration::from_secs(5)
            }
        );
    }

    #[test]
    fn test_from_args_fills_defaults() {
        let config = MinerConfig::from_args(&parse(&["--wallet", WALLET])).unwrap();
        assert_eq!(config.worker_count, default_worker_count());
        assert_eq!(config.worker_name.len(), 32);
        assert!(MinerConfig::from_args(&parse(&[])).is_err());
    }

    #[test]
    fn test_worker_name_for_host() {
        let name = worker_name_for_host("miner-host");
        assert_eq!(name.len(), 32);
        assert!(name.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(name, worker_name_for_host("miner-host"));
        assert_ne!(name, worker_name_for_host("other-host"));
    }

    #[test]
    fn test_default_worker_count() {
        let cpus = num_cpus::get();
        assert_eq!(default_worker_count(), cpus / 2 + 1);
        assert!(default_worker_count() >= 1);
    }
}
