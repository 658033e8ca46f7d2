// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/logging.rs
// Version: 1.0.0
//
// log4rs bootstrap. On first run the bundled sample configuration is written
// next to the logs so operators can tune levels without rebuilding.

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Bundled log4rs configuration. `{{log_dir}}` is replaced on install.
pub const DEFAULT_LOG_CONFIG: &str = include_str!("../../log4rs_sample.yml");

const LOG_DIR_PLACEHOLDER: &str = "{{log_dir}}";
const CONSOLE_PATTERN: &str = "{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO operation failed on {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to initialise log4rs: {0}")]
    Init(String),
}

/// Write `template` to `config_path` unless the file already exists.
/// Returns true when a new file was written.
pub fn install_default_config(config_path: &Path, log_dir: &Path, template: &str) -> Result<bool, LoggingError> {
    if config_path.exists() {
        return Ok(false);
    }
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|source| LoggingError::Io {
            path: parent.display().to_string(),
            source,
        })?;
    }
    fs::create_dir_all(log_dir).map_err(|source| LoggingError::Io {
        path: log_dir.display().to_string(),
        source,
    })?;

    let log_dir = log_dir.to_string_lossy().replace('\\', "/");
    let contents = template.replace(LOG_DIR_PLACEHOLDER, &log_dir);
    fs::write(config_path, contents).map_err(|source| LoggingError::Io {
        path: config_path.display().to_string(),
        source,
    })?;
    Ok(true)
}

/// Install the sample configuration if needed and start log4rs from it.
/// Falls back to console-only logging if the file cannot be loaded.
pub fn initialize_logging(config_path: &Path, log_dir: &Path, template: &str) -> Result<(), LoggingError> {
    let from_file = install_default_config(config_path, log_dir, template).and_then(|_| {
        log4rs::init_file(config_path, Default::default()).map_err(|e| LoggingError::Init(e.to_string()))
    });

    match from_file {
        Ok(()) => Ok(()),
        Err(e) => {
            init_console()?;
            log::warn!(target: "aropool::miner::logging", "Using console logging: {}", e);
            Ok(())
        }
    }
}

fn init_console() -> Result<(), LoggingError> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .map_err(|e| LoggingError::Init(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| LoggingError::Init(e.to_string()))?;
    Ok(())
}

// Changelog:
// - v1.0.0: log4rs bootstrap from the bundled sample configuration with a
//   console fallback.
