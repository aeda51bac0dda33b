// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Progress events and their fan-out to subscribers

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Mutex;
use tokio::sync::mpsc;
use tracing::trace;

use crate::inference::CatalogRecord;

/// Per-file status carried by [`FileProgress`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Processing,
    Completed,
    Failed,
}

/// Outcome stored in a batch result slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CatalogRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl ItemResult {
    pub fn success(record: CatalogRecord) -> Self {
        Self {
            success: true,
            data: Some(record),
            error: None,
            file_path: None,
        }
    }

    pub fn failure(path: &Path, error: impl ToString) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
            file_path: Some(path.display().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileProgress {
    pub file_index: usize,
    pub total_files: usize,
    pub file_path: String,
    pub status: FileStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CatalogRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallProgress {
    pub completed: usize,
    pub total: usize,
}

/// Everything the scheduler reports. `BatchComplete` is always the last
/// event of a submission and names the batch it closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ProgressEvent {
    FileProgress(FileProgress),
    OverallProgress(OverallProgress),
    BatchComplete {
        #[serde(rename = "batchId")]
        batch_id: uuid::Uuid,
        results: Vec<ItemResult>,
    },
}

impl ProgressEvent {
    pub fn is_batch_complete(&self) -> bool {
        matches!(self, ProgressEvent::BatchComplete { .. })
    }
}

/// Fans events out to every live subscriber
#[derive(Debug, Default)]
pub struct ProgressReporter {
    subscribers: Mutex<Vec<mpsc::UnboundedSender<ProgressEvent>>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber. It sees events emitted from now on.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<ProgressEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock().push(tx);
        rx
    }

    /// Number of subscribers still listening
    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.lock();
        subscribers.retain(|tx| !tx.is_closed());
        subscribers.len()
    }

    /// Deliver an event; subscribers that hung up are dropped
    pub fn emit(&self, event: ProgressEvent) {
        trace!(?event, "progress");
        self.lock().retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn file_progress(
        &self,
        file_index: usize,
        total_files: usize,
        path: &Path,
        status: FileStatus,
        result: Option<&ItemResult>,
    ) {
        self.emit(ProgressEvent::FileProgress(FileProgress {
            file_index,
            total_files,
            file_path: path.display().to_string(),
            status,
            data: result.and_then(|r| r.data.clone()),
            error: result.and_then(|r| r.error.clone()),
        }));
    }

    pub fn overall_progress(&self, completed: usize, total: usize) {
        self.emit(ProgressEvent::OverallProgress(OverallProgress { completed, total }));
    }

    pub fn batch_complete(&self, batch_id: uuid::Uuid, results: Vec<ItemResult>) {
        self.emit(ProgressEvent::BatchComplete { batch_id, results });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<mpsc::UnboundedSender<ProgressEvent>>> {
        self.subscribers.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
