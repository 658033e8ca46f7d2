// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/pipeline.rs
// Version: 1.3.0
//
// This file implements the two-stage share hash, located in the core
// subdirectory of the miner source tree. Argon2i over the hyphen-joined base
// string, then a SHA-512 chain over base + encoded hash, from which eight
// byte values are picked and decimal-concatenated into the "duration".
//
// Tree Location:
// - src/core/pipeline.rs (share hash pipeline)
// - Depends on: sha2, hex, argon2 (via core::argon), uint (via core::difficulty)

use crate::core::argon::{Argon2Policy, ArgonError, BlockBuffer, HashProfile};
use crate::core::difficulty::{U256, is_valid_share, share_value};
use argon2::password_hash::SaltString;
use sha2::{Digest, Sha512};
use thiserror::Error;

/// Byte-pair indices (into the hex digest split into 2-char pairs) that make
/// up the duration. Any change here silently stops shares from validating.
pub const DURATION_PAIR_OFFSETS: [usize; 8] = [10, 15, 20, 23, 31, 40, 45, 55];

/// Raw-digest SHA-512 rounds between the first and the final hex round.
const CHAINED_ROUNDS: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Argon(#[from] ArgonError),

    #[error("digest too short for duration offsets: {len} hex characters")]
    ShortDigest { len: usize },

    #[error("digest pair {pair:?} is not hexadecimal")]
    InvalidDigest { pair: String },

    #[error("difficulty must be non-zero")]
    ZeroDifficulty,
}

/// Inputs to one hash attempt.
#[derive(Debug, Clone, Copy)]
pub struct HashInput<'a> {
    pub pool_public_key: &'a str,
    pub nonce: &'a str,
    pub block: &'a str,
    pub difficulty: &'a U256,
    pub height: u64,
}

/// Result of one hash attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashOutcome {
    /// duration / difficulty
    pub result: U256,
    pub duration: String,
    /// Full PHC encoding of the argon2 output
    pub encoded: String,
    /// Profile that produced `encoded`
    pub profile: HashProfile,
}

impl HashOutcome {
    pub fn is_valid(&self, limit: u64) -> bool {
        is_valid_share(&self.result, limit)
    }

    /// The encoded hash without the parameter prefix of the profile that
    /// produced it. This is what the pool expects in the `argon` field.
    pub fn trimmed_hash(&self) -> Result<&str, ArgonError> {
        self.profile.strip_encoded_prefix(&self.encoded)
    }
}

/// `<pool key>-<nonce>-<block>-<difficulty>`
pub fn hash_base(input: &HashInput<'_>) -> String {
    format!(
        "{}-{}-{}-{}",
        input.pool_public_key, input.nonce, input.block, input.difficulty
    )
}

/// SHA-512 chain over `extended`, returned as lowercase hex.
pub fn digest_chain(extended: &str) -> String {
    let mut digest = Sha512::digest(extended.as_bytes());
    for _ in 0..CHAINED_ROUNDS {
        digest = Sha512::digest(digest);
    }
    hex::encode(Sha512::digest(digest))
}

/// Decimal concatenation of the bytes at [`DURATION_PAIR_OFFSETS`].
pub fn duration_digits(digest_hex: &str) -> Result<String, PipelineError> {
    let mut duration = String::with_capacity(DURATION_PAIR_OFFSETS.len() * 3);
    for pair in DURATION_PAIR_OFFSETS {
        let start = pair * 2;
        let chunk = digest_hex
            .get(start..start + 2)
            .ok_or(PipelineError::ShortDigest {
                len: digest_hex.len(),
            })?;
        let value = u8::from_str_radix(chunk, 16).map_err(|_| PipelineError::InvalidDigest {
            pair: chunk.to_string(),
        })?;
        duration.push_str(&value.to_string());
    }
    Ok(duration)
}

/// Everything after the argon2 stage: digest chain, duration, division.
/// Returns `(duration, result)`.
pub fn evaluate(base: &str, encoded: &str, difficulty: &U256) -> Result<(String, U256), PipelineError> {
    let extended = format!("{}{}", base, encoded);
    let digest = digest_chain(&extended);
    let duration = duration_digits(&digest)?;
    let result = share_value(&duration, difficulty).ok_or(PipelineError::ZeroDifficulty)?;
    Ok((duration, result))
}

/// The full pipeline with a fixed parameter policy. Holds no mutable state,
/// so one instance is shared by every worker.
#[derive(Debug, Clone, Default)]
pub struct HashPipeline {
    policy: Argon2Policy,
}

impl HashPipeline {
    pub fn new(policy: Argon2Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &Argon2Policy {
        &self.policy
    }

    pub fn profile_for(&self, height: u64) -> HashProfile {
        self.policy.profile_for(height)
    }

    /// Run one attempt. Deterministic for a given input and salt.
    pub fn compute(
        &self,
        input: &HashInput<'_>,
        salt: &SaltString,
        memory: &mut BlockBuffer,
    ) -> Result<HashOutcome, PipelineError> {
        if input.difficulty.is_zero() {
            return Err(PipelineError::ZeroDifficulty);
        }
        let profile = self.profile_for(input.height);
        let base = hash_base(input);
        let encoded = profile.hash_encoded(base.as_bytes(), salt, memory)?;
        let (duration, result) = evaluate(&base, &encoded, input.difficulty)?;

        Ok(HashOutcome {
            result,
            duration,
            encoded,
            profile,
        })
    }
}

// Changelog:
// - v1.3.0: compute takes the worker's BlockBuffer.
// - v1.2.0: Duration arithmetic moved to U256 so wide difficulties divide exactly.
// - v1.1.0: Salt became an explicit input to make attempts reproducible.
// - v1.0.0: Initial Argon2i + SHA-512 pipeline.
