// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Bookkeeping for one submitted batch

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use super::progress::ItemResult;

/// One submission: its paths, the queue of unstarted indices and the
/// index-aligned result slots.
#[derive(Debug)]
pub struct BatchJob {
    id: uuid::Uuid,
    paths: Vec<PathBuf>,
    queue: VecDeque<usize>,
    results: Vec<Option<ItemResult>>,
    active: usize,
    peak_active: usize,
    settled: usize,
}

impl BatchJob {
    /// New job with every index queued in submission order
    pub fn new(id: uuid::Uuid, paths: Vec<PathBuf>) -> Self {
        let total = paths.len();
        Self {
            id,
            queue: (0..total).collect(),
            results: vec![None; total],
            paths,
            active: 0,
            peak_active: 0,
            settled: 0,
        }
    }

    pub fn id(&self) -> uuid::Uuid {
        self.id
    }

    pub fn total(&self) -> usize {
        self.paths.len()
    }

    pub fn path(&self, index: usize) -> &Path {
        &self.paths[index]
    }

    /// Pop the next unstarted index and count it as active
    pub fn claim_next(&mut self) -> Option<usize> {
        let index = self.queue.pop_front()?;
        self.active += 1;
        self.peak_active = self.peak_active.max(self.active);
        Some(index)
    }

    /// Record the outcome for `index` and release its worker.
    ///
    /// Returns `false` (and changes nothing) if the slot was already filled.
    pub fn settle(&mut self, index: usize, result: ItemResult) -> bool {
        match self.results.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(result);
                self.active = self.active.saturating_sub(1);
                self.settled += 1;
                true
            }
            _ => false,
        }
    }

    pub fn queue_is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Highest number of simultaneously active items seen
    pub fn peak_active(&self) -> usize {
        self.peak_active
    }

    /// Number of filled result slots
    pub fn settled(&self) -> usize {
        self.settled
    }

    pub fn is_finished(&self) -> bool {
        self.settled == self.total() && self.active == 0
    }

    /// Indices whose result slot is still empty
    pub fn unsettled(&self) -> Vec<usize> {
        self.results
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Drop any queued indices, returning them
    pub fn drain_queue(&mut self) -> Vec<usize> {
        self.queue.drain(..).collect()
    }

    /// Consume the job into its ordered results. Unfilled slots become
    /// failures so the output always has one entry per path.
    pub fn into_results(self) -> Vec<ItemResult> {
        self.results
            .into_iter()
            .zip(self.paths.iter())
            .map(|(result, path)| {
                result.unwrap_or_else(|| ItemResult::failure(path, "item was never processed"))
            })
            .collect()
    }
}
