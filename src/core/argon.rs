// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/argon.rs
// Version: 1.2.0
//
// This file implements the memory-hard stage of the hash pipeline, located in
// the core subdirectory. It owns the height dependent parameter policy, the
// PHC string encoding of the Argon2i output, and the parameter prefix strip
// applied before a share is sent to the pool.
//
// Tree Location:
// - src/core/argon.rs (Argon2i profiles and encoding)
// - Depends on: argon2, thiserror

use argon2::password_hash::{Output, PasswordHash, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Block, Params, Version};
use thiserror::Error;

/// Output length of the raw Argon2 tag, in bytes.
pub const OUTPUT_LEN: usize = 16;

const ALGORITHM_IDENT: &str = "argon2i";
const ENCODED_VERSION: u32 = 0x13;

/// Height at which the network switched to the high-memory profile.
pub const DEFAULT_HEIGHT_THRESHOLD: u64 = 10_800;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgonError {
    #[error("invalid argon2 parameters {profile:?}: {message}")]
    InvalidParams { profile: HashProfile, message: String },

    #[error("argon2 hashing failed: {0}")]
    Hash(String),

    #[error("salt is not valid B64: {0}")]
    Salt(String),

    #[error("encoded hash {found:?} does not start with {expected:?}")]
    UnexpectedEncoding { expected: String, found: String },
}

/// One Argon2i parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashProfile {
    pub time_cost: u32,
    /// Memory cost in KiB
    pub memory_kib: u32,
    pub parallelism: u32,
}

impl HashProfile {
    /// Profile used above the height threshold (t=1, 512 MiB, p=1).
    pub const HIGH_MEMORY: HashProfile = HashProfile {
        time_cost: 1,
        memory_kib: 524_288,
        parallelism: 1,
    };

    /// Profile used at or below the height threshold (t=4, 16 MiB, p=4).
    pub const LEGACY: HashProfile = HashProfile {
        time_cost: 4,
        memory_kib: 16_384,
        parallelism: 4,
    };

    /// The `$argon2i$v=19$m=..,t=..,p=..` prefix every hash from this
    /// profile starts with.
    pub fn encoded_prefix(&self) -> String {
        format!(
            "${}$v={}$m={},t={},p={}",
            ALGORITHM_IDENT,
            ENCODED_VERSION,
            self.memory_kib,
            self.time_cost,
            self.parallelism
        )
    }

    /// Number of leading characters removed from an encoded hash before it is
    /// submitted. Differs between profiles (30 vs 29 for the defaults).
    pub fn strip_len(&self) -> usize {
        self.encoded_prefix().len()
    }

    fn hasher(&self) -> Result<Argon2<'static>, ArgonError> {
        let params = Params::new(
            self.memory_kib,
            self.time_cost,
            self.parallelism,
            Some(OUTPUT_LEN),
        )
        .map_err(|e| ArgonError::InvalidParams {
            profile: *self,
            message: e.to_string(),
        })?;
        Ok(Argon2::new(Algorithm::Argon2i, Version::V0x13, params))
    }

    /// Hash `password` with `salt` and return the PHC string encoding.
    /// Block memory comes from `memory` and is kept there for the next call.
    pub fn hash_encoded(
        &self,
        password: &[u8],
        salt: &SaltString,
        memory: &mut BlockBuffer,
    ) -> Result<String, ArgonError> {
        let hasher = self.hasher()?;
        let mut salt_buf = [0u8; 64];
        let salt_bytes = salt
            .as_salt()
            .decode_b64(&mut salt_buf)
            .map_err(|e| ArgonError::Salt(e.to_string()))?;

        let mut tag = [0u8; OUTPUT_LEN];
        hasher
            .hash_password_into_with_memory(
                password,
                salt_bytes,
                &mut tag,
                memory.blocks(hasher.params().block_count()),
            )
            .map_err(|e| ArgonError::Hash(e.to_string()))?;
        let tag = Output::new(&tag).map_err(|e| ArgonError::Hash(e.to_string()))?;

        Ok(format!("{}${}${}", self.encoded_prefix(), salt.as_str(), tag))
    }

    /// Remove this profile's parameter prefix, leaving `$<salt>$<hash>`.
    pub fn strip_encoded_prefix<'a>(&self, encoded: &'a str) -> Result<&'a str, ArgonError> {
        let expected = self.encoded_prefix();
        encoded
            .strip_prefix(expected.as_str())
            .ok_or_else(|| ArgonError::UnexpectedEncoding {
                expected,
                found: encoded.to_string(),
            })
    }

    /// Rebuild the full encoding from a stripped share hash, the way the pool
    /// does before verifying.
    pub fn restore_encoded(&self, stripped: &str) -> String {
        format!("{}{}", self.encoded_prefix(), stripped)
    }
}

/// Argon2 block memory owned by one worker and reused across attempts.
#[derive(Debug, Default)]
pub struct BlockBuffer {
    blocks: Vec<Block>,
}

impl BlockBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks currently held.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The first `count` blocks, growing the buffer if needed. Never shrinks,
    /// so switching back to a smaller profile does not reallocate.
    fn blocks(&mut self, count: usize) -> &mut [Block] {
        if self.blocks.len() < count {
            self.blocks.resize(count, Block::default());
        }
        &mut self.blocks[..count]
    }
}

/// Check an encoded hash against its password. Parameters are taken from the
/// encoding itself.
pub fn verify_encoded(password: &[u8], encoded: &str) -> bool {
    match PasswordHash::new(encoded) {
        Ok(hash) => Argon2::default().verify_password(password, &hash).is_ok(),
        Err(_) => false,
    }
}

/// Height dependent profile selection.
///
/// The pool network has changed parameters at a ledger height before, so the
/// threshold and both profiles are plain configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Policy {
    pub height_threshold: u64,
    pub high_memory: HashProfile,
    pub legacy: HashProfile,
}

impl Default for Argon2Policy {
    fn default() -> Self {
        Self {
            height_threshold: DEFAULT_HEIGHT_THRESHOLD,
            high_memory: HashProfile::HIGH_MEMORY,
            legacy: HashProfile::LEGACY,
        }
    }
}

impl Argon2Policy {
    pub fn with_threshold(height_threshold: u64) -> Self {
        Self {
            height_threshold,
            ..Self::default()
        }
    }

    /// Strictly above the threshold selects the high-memory profile.
    pub fn profile_for(&self, height: u64) -> HashProfile {
        if height > self.height_threshold {
            self.high_memory
        } else {
            self.legacy
        }
    }
}

// Changelog:
// - v1.2.0: Hash through a caller owned BlockBuffer.
//   - Each worker keeps its block memory between attempts instead of
//     allocating it per hash; the PHC string is assembled from the raw tag.
// - v1.1.0: Made the strip length a function of the profile.
//   - The high-memory and legacy encodings differ in prefix width, so a
//     single fixed strip produced shares the pool could not re-verify.
// - v1.0.0: Initial Argon2i stage with a configurable height policy.
