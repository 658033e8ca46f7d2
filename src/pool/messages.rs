// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/messages.rs
// Version: 2.0.0
//
// This file defines the typed JSON schema of the pool's mine.php endpoint,
// located in the pool subdirectory. Raw responses are deserialized into
// all-optional structs and then validated into a WorkItem, so a null or
// missing field becomes an explicit WorkError instead of a panic.
//
// Tree Location:
// - src/pool/messages.rs (pool message schema and validation)
// - Depends on: serde, serde_json, thiserror

use crate::core::difficulty::{U256, parse_decimal};
use crate::core::types::{Share, WorkItem};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkError {
    #[error("pool response has no data")]
    MissingData,

    #[error("pool response field {0} is missing or null")]
    MissingField(&'static str),

    #[error("pool response field {field} is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("pool sent a zero difficulty")]
    ZeroDifficulty,
}

/// Pools send numeric fields either as JSON numbers or as strings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrString {
    pub fn as_decimal(&self) -> String {
        match self {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::Text(s) => s.trim().to_string(),
        }
    }
}

/// `GET mine.php?q=info` response body
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InfoResponse {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub data: Option<WorkData>,
}

/// The `data` object of an info response. Every field may be null.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WorkData {
    #[serde(default)]
    pub block: Option<String>,

    #[serde(default)]
    pub height: Option<NumberOrString>,

    #[serde(default)]
    pub difficulty: Option<NumberOrString>,

    #[serde(default)]
    pub limit: Option<NumberOrString>,

    #[serde(default)]
    pub public_key: Option<String>,
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, WorkError> {
    value.ok_or(WorkError::MissingField(field))
}

fn parse_u64(value: &NumberOrString, field: &'static str) -> Result<u64, WorkError> {
    let text = value.as_decimal();
    text.parse::<u64>()
        .map_err(|_| WorkError::InvalidNumber { field, value: text })
}

fn parse_u256(value: &NumberOrString, field: &'static str) -> Result<U256, WorkError> {
    let text = value.as_decimal();
    parse_decimal(&text).ok_or(WorkError::InvalidNumber { field, value: text })
}

impl WorkData {
    /// All-or-nothing conversion into a WorkItem.
    pub fn validate(self) -> Result<WorkItem, WorkError> {
        let block = require(self.block, "block")?;
        let height = parse_u64(&require(self.height, "height")?, "height")?;
        let difficulty = parse_u256(&require(self.difficulty, "difficulty")?, "difficulty")?;
        let limit = parse_u64(&require(self.limit, "limit")?, "limit")?;
        let pool_public_key = require(self.public_key, "public_key")?;

        if difficulty.is_zero() {
            return Err(WorkError::ZeroDifficulty);
        }
        if block.is_empty() {
            return Err(WorkError::MissingField("block"));
        }
        if pool_public_key.is_empty() {
            return Err(WorkError::MissingField("public_key"));
        }

        Ok(WorkItem::new(block, difficulty, limit, pool_public_key, height))
    }
}

impl InfoResponse {
    pub fn into_work_item(self) -> Result<WorkItem, WorkError> {
        self.data.ok_or(WorkError::MissingData)?.validate()
    }
}

/// Form body of `POST mine.php?q=submitNonce`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitForm<'a> {
    pub argon: &'a str,
    pub nonce: &'a str,
    pub private_key: &'a str,
    pub public_key: &'a str,
    pub address: &'a str,
}

impl<'a> SubmitForm<'a> {
    pub fn new(share: &'a Share, wallet_address: &'a str) -> Self {
        Self {
            argon: &share.argon,
            nonce: &share.nonce,
            private_key: wallet_address,
            public_key: &share.pool_public_key,
            address: wallet_address,
        }
    }
}

/// JSON acknowledgement of a share submission
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SubmitAck {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl SubmitAck {
    pub fn is_ok(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("ok"))
    }
}

// Changelog:
// - v2.0.0: Replaced Stratum message parsing with the mine.php JSON schema.
//   - Null/missing fields now surface as WorkError::MissingField.
