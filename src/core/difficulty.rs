// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/difficulty.rs
// Version: 2.0.0
//
// This file contains the arbitrary precision arithmetic used to turn a
// decimal "duration" string into a share value, located in the core
// subdirectory of the miner source tree. Pool values (difficulty, limit) are
// decimal strings of unbounded width, so everything here is U256 based.

use log::warn;
use uint::construct_uint;

const LOG_TARGET: &str = "aropool::miner::difficulty";

construct_uint! {
    pub struct U256(4);
}

/// Parse a decimal string sent by the pool into a U256.
///
/// Leading and trailing whitespace is ignored. Anything else that is not a
/// plain base-10 digit string is rejected.
pub fn parse_decimal(value: &str) -> Option<U256> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        warn!(target: LOG_TARGET, "Rejecting non-decimal value: {:?}", value);
        return None;
    }
    U256::from_dec_str(trimmed).ok()
}

/// Integer (floor) division of the duration by the difficulty.
///
/// Returns `None` when the difficulty is zero or the duration is not a
/// decimal string; both are caller contract violations.
pub fn share_value(duration: &str, difficulty: &U256) -> Option<U256> {
    if difficulty.is_zero() {
        warn!(target: LOG_TARGET, "Share value requested with zero difficulty");
        return None;
    }
    let duration = parse_decimal(duration)?;
    Some(duration / *difficulty)
}

/// `0 < result < limit`
pub fn is_valid_share(result: &U256, limit: u64) -> bool {
    !result.is_zero() && *result < U256::from(limit)
}

// Changelog:
// - v2.0.0: Replaced hex target parsing with decimal duration arithmetic.
//   - Kept the U256 type, now used for duration / difficulty division.
//   - Added is_valid_share for the `0 < result < limit` check.
