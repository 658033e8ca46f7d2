// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/nonce.rs
// Version: 1.0.0
//
// Random nonce tokens. 256 bits of randomness are base64 encoded and every
// non-alphanumeric character is dropped, so the length varies between draws.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;

/// Number of random bytes behind every nonce.
pub const NONCE_ENTROPY_BYTES: usize = 32;

/// Encode raw bytes into an alphanumeric nonce token.
pub fn nonce_from_bytes(bytes: &[u8]) -> String {
    STANDARD
        .encode(bytes)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Draw a fresh nonce from `rng`.
pub fn generate_nonce<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; NONCE_ENTROPY_BYTES];
    rng.fill_bytes(&mut bytes);
    nonce_from_bytes(&bytes)
}

// Changelog:
// - v1.0.0: Base64 nonce tokens drawn from an injectable RNG.
