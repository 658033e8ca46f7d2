// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/common/mod.rs
// Version: 1.0.0
//
// This file contains the scripted in-memory pool shared by the integration
// tests, located in the tests/common directory.
//
// Tree Location:
// - tests/common/mod.rs (shared test helpers)
// - Depends on: aropool-miner

#![allow(dead_code)]

use aropool_miner::core::difficulty::U256;
use aropool_miner::core::types::{Share, WorkItem};
use aropool_miner::pool::{PoolApi, PoolError, SubmitAck};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Pool whose answers are queued up front. When a queue runs dry the
/// fallback answer is used: fetches fail and submits succeed.
#[derive(Default)]
pub struct ScriptedPool {
    fetches: Mutex<VecDeque<Result<WorkItem, String>>>,
    submits: Mutex<VecDeque<Result<(), String>>>,
    submit_fallback_fails: bool,
    pub fetch_calls: AtomicUsize,
    pub submit_calls: AtomicUsize,
    pub submitted: Mutex<Vec<Share>>,
    pub reported_hashrates: Mutex<Vec<f64>>,
}

impl ScriptedPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn always_failing_submits() -> Self {
        Self {
            submit_fallback_fails: true,
            ..Self::default()
        }
    }

    pub fn push_fetch(&self, answer: Result<WorkItem, &str>) {
        self.fetches
            .lock()
            .unwrap()
            .push_back(answer.map_err(str::to_string));
    }

    pub fn push_submit(&self, answer: Result<(), &str>) {
        self.submits
            .lock()
            .unwrap()
            .push_back(answer.map_err(str::to_string));
    }
}

impl PoolApi for ScriptedPool {
    async fn fetch_work(&self, _worker: &str, _address: &str, hashrate: f64) -> Result<WorkItem, PoolError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.reported_hashrates.lock().unwrap().push(hashrate);
        let next = self.fetches.lock().unwrap().pop_front();
        match next {
            Some(Ok(item)) => Ok(item),
            Some(Err(message)) => Err(PoolError::Other(message)),
            None => Err(PoolError::Other("no scripted work".to_string())),
        }
    }

    async fn submit_share(&self, share: &Share, _address: &str) -> Result<SubmitAck, PoolError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.submits.lock().unwrap().pop_front();
        let answer = match next {
            Some(answer) => answer,
            None if self.submit_fallback_fails => Err("pool unreachable".to_string()),
            None => Ok(()),
        };
        match answer {
            Ok(()) => {
                self.submitted.lock().unwrap().push(share.clone());
                Ok(SubmitAck {
                    status: Some("ok".to_string()),
                    data: None,
                })
            }
            Err(message) => Err(PoolError::Other(message)),
        }
    }
}

pub fn work_item(height: u64) -> WorkItem {
    WorkItem::new(
        "b1".to_string(),
        U256::from(100u64),
        1000,
        "pk1".to_string(),
        height,
    )
}

pub fn share(worker_index: usize, nonce: &str) -> Share {
    Share::new(
        nonce.to_string(),
        "$c2FsdA$aGFzaA".to_string(),
        "pk1".to_string(),
        worker_index,
    )
}
