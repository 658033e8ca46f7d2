// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/work.rs
// Version: 1.0.0
//
// Shared work state. The coordinator publishes whole WorkItem snapshots and
// workers clone the current Arc under the same mutex, so a reader sees the
// previous or the latest item, never a mix of both.

use crate::core::types::WorkItem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Current work, absent until the first successful poll.
#[derive(Debug, Default)]
pub struct WorkState {
    current: Mutex<Option<Arc<WorkItem>>>,
    ready: Condvar,
    updates: AtomicU64,
}

impl WorkState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    // The guarded value is a single pointer swap, so a poisoned lock still
    // holds a complete snapshot.
    fn lock(&self) -> MutexGuard<'_, Option<Arc<WorkItem>>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the current work item and wake any waiting workers.
    pub fn publish(&self, item: WorkItem) -> Arc<WorkItem> {
        let item = Arc::new(item);
        {
            let mut current = self.lock();
            *current = Some(Arc::clone(&item));
            self.updates.fetch_add(1, Ordering::Relaxed);
        }
        self.ready.notify_all();
        item
    }

    /// The current work item, if any has been published.
    pub fn snapshot(&self) -> Option<Arc<WorkItem>> {
        self.lock().clone()
    }

    pub fn has_work(&self) -> bool {
        self.lock().is_some()
    }

    /// Number of publishes so far.
    pub fn update_count(&self) -> u64 {
        self.updates.load(Ordering::Relaxed)
    }

    /// Block until a work item exists, then return it. Returns immediately
    /// once the first item has been published.
    pub fn wait_for_work(&self) -> Arc<WorkItem> {
        let mut current = self.lock();
        loop {
            if let Some(item) = current.as_ref() {
                return Arc::clone(item);
            }
            current = self
                .ready
                .wait(current)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Like [`wait_for_work`](Self::wait_for_work) but gives up after `timeout`.
    pub fn wait_for_work_timeout(&self, timeout: Duration) -> Option<Arc<WorkItem>> {
        let deadline = Instant::now() + timeout;
        let mut current = self.lock();
        loop {
            if let Some(item) = current.as_ref() {
                return Some(Arc::clone(item));
            }
            let remaining = deadline.checked_duration_since(Instant::now())?;
            let (guard, _) = self
                .ready
                .wait_timeout(current, remaining)
                .unwrap_or_else(PoisonError::into_inner);
            current = guard;
        }
    }
}

// Changelog:
// - v1.0.0: Shared work slot with a Condvar so workers block until the first
//   work item instead of polling.
