// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/client.rs
// Version: 2.0.0
//
// This file implements the HTTP client for communicating with the mining pool,
// located in the pool subdirectory. It polls mine.php for work and posts
// shares, with a short per-request timeout so a slow pool never stalls the
// coordinator or submitter cadence.
//
// Tree Location:
// - src/pool/client.rs (pool HTTP client logic)
// - Depends on: reqwest, serde_json, thiserror

use super::PoolApi;
use super::messages::{InfoResponse, SubmitAck, SubmitForm, WorkError};
use crate::core::types::{Share, WorkItem};
use crate::utils::user_agent::user_agent;
use log::debug;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

const LOG_TARGET: &str = "aropool::miner::pool::client";

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("pool returned HTTP {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("malformed pool response")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Work(#[from] WorkError),

    #[error("{0}")]
    Other(String),
}

/// Pool client for the mine.php HTTP endpoint
#[derive(Clone, Debug)]
pub struct PoolClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PoolClient {
    /// Create a new PoolClient for `pool_url` (without the mine.php suffix)
    pub fn new(pool_url: &str, timeout: Duration) -> Result<Self, PoolError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent())
            .build()
            .map_err(PoolError::Client)?;
        Ok(Self {
            http,
            endpoint: format!("{}/mine.php", pool_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<String, PoolError> {
        let status = response.status();
        if !status.is_success() {
            return Err(PoolError::Status {
                url: self.endpoint.clone(),
                status,
            });
        }
        response.text().await.map_err(|source| PoolError::Request {
            url: self.endpoint.clone(),
            source,
        })
    }
}

impl PoolApi for PoolClient {
    async fn fetch_work(&self, worker: &str, address: &str, hashrate: f64) -> Result<WorkItem, PoolError> {
        let hashrate = hashrate.to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", "info"),
                ("worker", worker),
                ("address", address),
                ("hashrate", hashrate.as_str()),
            ])
            .send()
            .await
            .map_err(|source| PoolError::Request {
                url: self.endpoint.clone(),
                source,
            })?;

        let body = self.read_body(response).await?;
        debug!(target: LOG_TARGET, "📨 Raw info response: {}", body);
        let info: InfoResponse = serde_json::from_str(&body)?;
        Ok(info.into_work_item()?)
    }

    async fn submit_share(&self, share: &Share, address: &str) -> Result<SubmitAck, PoolError> {
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("q", "submitNonce")])
            .form(&SubmitForm::new(share, address))
            .send()
            .await
            .map_err(|source| PoolError::Request {
                url: self.endpoint.clone(),
                source,
            })?;

        let body = self.read_body(response).await?;
        debug!(target: LOG_TARGET, "📨 Raw submit response: {}", body);
        Ok(serde_json::from_str(&body)?)
    }
}

// Changelog:
// - v2.0.0: Replaced the Stratum TCP connection with HTTP polling.
//   - fetch_work and submit_share map every transport, status and decode
//     failure into PoolError so callers can apply their retry policy.
