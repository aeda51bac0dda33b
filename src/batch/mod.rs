// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Batch scheduler with a bounded pool of worker slots.
//!
//! A submission spawns one coordinator task that exclusively owns the
//! [`BatchJob`] (queue, result slots, counters) and a fixed set of worker
//! slots. Each slot runs one inference at a time; when it reports back, the
//! coordinator records the result, emits progress and immediately hands the
//! same slot the next queued index. Slots are retired once the queue is
//! empty, and `BatchComplete` is emitted when every result slot is filled.

pub mod job;
pub mod progress;

use serde::Serialize;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::config::SchedulerConfig;
use crate::inference::{InferenceEngine, Inferencer};
use crate::logging::{self, LogLevel};
use crate::{AppConfig, CatalogError, Result};

pub use job::BatchJob;
pub use progress::{
    FileProgress, FileStatus, ItemResult, OverallProgress, ProgressEvent, ProgressReporter,
};

/// Lifecycle of the scheduler across one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerState {
    /// No job loaded
    Idle,
    /// Items are queued or in flight
    Running,
    /// Queue empty, last items still in flight
    Draining,
    /// Results assembled; flips back to `Idle` before `BatchComplete` is emitted
    Complete,
}

/// Synchronous answer to a submission. Results arrive as events.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAck {
    pub batch_id: uuid::Uuid,
    pub total_files: usize,
    pub message: String,
}

struct Assignment {
    index: usize,
    path: PathBuf,
}

struct Settlement {
    slot: usize,
    index: usize,
    result: ItemResult,
}

/// Accepts batches of file paths and processes them with bounded concurrency
pub struct BatchScheduler {
    inferencer: Arc<dyn Inferencer>,
    max_concurrency: usize,
    reporter: Arc<ProgressReporter>,
    state: Arc<Mutex<SchedulerState>>,
}

impl BatchScheduler {
    pub fn new(inferencer: Arc<dyn Inferencer>, config: &SchedulerConfig) -> Self {
        Self {
            inferencer,
            max_concurrency: config.effective_concurrency(),
            reporter: Arc::new(ProgressReporter::new()),
            state: Arc::new(Mutex::new(SchedulerState::Idle)),
        }
    }

    /// Scheduler backed by the standard [`InferenceEngine`]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(InferenceEngine::new(config)), &config.scheduler)
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    pub fn state(&self) -> SchedulerState {
        *lock_state(&self.state)
    }

    /// Receive every progress event emitted after this call
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<ProgressEvent> {
        self.reporter.subscribe()
    }

    /// Start processing `paths`.
    ///
    /// Returns as soon as the job is queued. Rejects with `BatchInProgress`
    /// while a previous batch has not emitted `BatchComplete`. An empty list
    /// emits an empty `BatchComplete` before returning and starts no workers.
    /// Must be called from within a tokio runtime.
    pub fn submit(&self, paths: Vec<PathBuf>) -> Result<BatchAck> {
        if let Some(index) = paths.iter().position(|p| p.as_os_str().is_empty()) {
            return Err(CatalogError::InvalidSubmission(format!(
                "path at index {} is empty",
                index
            )));
        }

        let mut state = lock_state(&self.state);
        if matches!(*state, SchedulerState::Running | SchedulerState::Draining) {
            warn!("Rejected submission: batch already in progress");
            return Err(CatalogError::BatchInProgress);
        }

        let batch_id = uuid::Uuid::new_v4();
        let total_files = paths.len();

        if paths.is_empty() {
            info!(batch = %batch_id, "Empty batch submitted");
            *state = SchedulerState::Idle;
            self.reporter.batch_complete(batch_id, Vec::new());
            return Ok(BatchAck {
                batch_id,
                total_files,
                message: "Nothing to process".to_string(),
            });
        }

        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| CatalogError::WorkerSpawn(format!("no async runtime available: {}", e)))?;

        *state = SchedulerState::Running;
        drop(state);

        let coordinator = Coordinator {
            job: BatchJob::new(batch_id, paths),
            inferencer: Arc::clone(&self.inferencer),
            max_concurrency: self.max_concurrency,
            reporter: Arc::clone(&self.reporter),
            state: Arc::clone(&self.state),
            slots: Vec::new(),
        };
        runtime.spawn(coordinator.run());

        Ok(BatchAck {
            batch_id,
            total_files,
            message: format!("Processing {} files", total_files),
        })
    }

    /// Submit `paths` and wait for the ordered results.
    ///
    /// Completions of other batches seen on the channel are skipped.
    pub async fn process(&self, paths: Vec<PathBuf>) -> Result<Vec<ItemResult>> {
        let mut events = self.subscribe();
        let ack = self.submit(paths)?;

        while let Some(event) = events.recv().await {
            match event {
                ProgressEvent::BatchComplete { batch_id, results } if batch_id == ack.batch_id => {
                    return Ok(results);
                }
                ProgressEvent::BatchComplete { batch_id, .. } => {
                    debug!(batch = %batch_id, "Skipping completion of another batch");
                }
                _ => {}
            }
        }

        Err(CatalogError::WorkerSpawn(
            "progress channel closed before the batch completed".to_string(),
        ))
    }
}

/// Owns one running batch until `BatchComplete`
struct Coordinator {
    job: BatchJob,
    inferencer: Arc<dyn Inferencer>,
    max_concurrency: usize,
    reporter: Arc<ProgressReporter>,
    state: Arc<Mutex<SchedulerState>>,
    slots: Vec<Option<mpsc::UnboundedSender<Assignment>>>,
}

impl Coordinator {
    async fn run(mut self) {
        let total = self.job.total();
        let pool_size = self.max_concurrency.min(total);
        info!(batch = %self.job.id(), total, workers = pool_size, "Batch started");

        let (settle_tx, settle_rx) = mpsc::unbounded_channel();
        for slot in 0..pool_size {
            let (tx, rx) = mpsc::unbounded_channel();
            tokio::spawn(run_slot(slot, Arc::clone(&self.inferencer), rx, settle_tx.clone()));
            self.slots.push(Some(tx));
        }
        // Only slots hold senders now, so `recv` ends if every slot is gone.
        drop(settle_tx);

        self.drive(settle_rx).await;
    }

    /// Feed every slot, then record settlements until the job is finished
    /// or no slot is left to report
    async fn drive(mut self, mut settle_rx: mpsc::UnboundedReceiver<Settlement>) {
        for slot in 0..self.slots.len() {
            self.feed(slot);
        }

        while !self.job.is_finished() {
            let Some(settlement) = settle_rx.recv().await else {
                break;
            };
            self.record(settlement.index, settlement.result);
            self.feed(settlement.slot);
        }

        self.finish();
    }

    /// Give `slot` the next queued index, or retire it if the queue is empty
    fn feed(&mut self, slot: usize) {
        let Some(index) = self.job.claim_next() else {
            self.slots[slot] = None;
            self.enter_draining();
            return;
        };
        debug_assert!(self.job.active() <= self.max_concurrency);

        let path = self.job.path(index).to_path_buf();
        debug!(slot, index, path = %path.display(), "Dispatching");
        self.reporter
            .file_progress(index, self.job.total(), &path, FileStatus::Processing, None);

        let sent = match &self.slots[slot] {
            Some(tx) => tx.send(Assignment { index, path: path.clone() }).is_ok(),
            None => false,
        };

        if !sent {
            warn!(slot, index, "Worker slot is gone, failing its item");
            self.slots[slot] = None;
            let err = CatalogError::WorkerSpawn(format!("worker slot {} is unavailable", slot));
            self.record(index, ItemResult::failure(&path, err));
            if self.job.queue_is_empty() {
                self.enter_draining();
            }
        }
    }

    /// Fill a result slot and report it
    fn record(&mut self, index: usize, result: ItemResult) {
        if !self.job.settle(index, result.clone()) {
            warn!(index, "Ignoring duplicate result");
            return;
        }

        let path = self.job.path(index).to_path_buf();
        let status = if result.success {
            FileStatus::Completed
        } else {
            warn!(
                index,
                path = %path.display(),
                "Item failed: {}",
                result.error.as_deref().unwrap_or("unknown error")
            );
            FileStatus::Failed
        };

        let total = self.job.total();
        self.reporter.file_progress(index, total, &path, status, Some(&result));
        self.reporter.overall_progress(self.job.settled(), total);
    }

    fn enter_draining(&self) {
        let mut state = lock_state(&self.state);
        if *state == SchedulerState::Running {
            *state = SchedulerState::Draining;
        }
    }

    fn finish(mut self) {
        let unsettled = self.job.unsettled();
        if !unsettled.is_empty() {
            logging::record(
                LogLevel::Fatal,
                "Worker pool exited before every item settled",
                Some(&serde_json::json!({
                    "batch": self.job.id().to_string(),
                    "unsettled": unsettled,
                })),
            );
            self.job.drain_queue();
            for index in unsettled {
                let path = self.job.path(index).to_path_buf();
                let err = CatalogError::WorkerSpawn("worker pool exited".to_string());
                self.record(index, ItemResult::failure(&path, err));
            }
        }
        self.slots.clear();

        let batch_id = self.job.id();
        let peak = self.job.peak_active();
        let results = self.job.into_results();
        let failed = results.iter().filter(|r| !r.success).count();

        *lock_state(&self.state) = SchedulerState::Complete;
        info!(
            batch = %batch_id,
            succeeded = results.len() - failed,
            failed,
            peak_workers = peak,
            "Batch complete"
        );
        *lock_state(&self.state) = SchedulerState::Idle;

        self.reporter.batch_complete(batch_id, results);
    }
}

/// One reusable worker slot: runs assignments until its sender is dropped
async fn run_slot(
    slot: usize,
    inferencer: Arc<dyn Inferencer>,
    mut assignments: mpsc::UnboundedReceiver<Assignment>,
    settlements: mpsc::UnboundedSender<Settlement>,
) {
    while let Some(Assignment { index, path }) = assignments.recv().await {
        let result = infer_isolated(Arc::clone(&inferencer), path).await;
        if settlements.send(Settlement { slot, index, result }).is_err() {
            break;
        }
    }
    debug!(slot, "Worker slot released");
}

/// Run one inference on its own task so a panic fails only this item
async fn infer_isolated(inferencer: Arc<dyn Inferencer>, path: PathBuf) -> ItemResult {
    let task_path = path.clone();
    let handle = tokio::spawn(async move { inferencer.infer(&task_path).await });

    match handle.await {
        Ok(Ok(record)) => ItemResult::success(record),
        Ok(Err(e)) => ItemResult::failure(&path, e),
        Err(join_err) => {
            let reason = if join_err.is_panic() {
                "inference worker panicked"
            } else {
                "inference worker was cancelled"
            };
            error!(path = %path.display(), "{}", reason);
            ItemResult::failure(&path, CatalogError::WorkerSpawn(reason.to_string()))
        }
    }
}

fn lock_state(state: &Mutex<SchedulerState>) -> std::sync::MutexGuard<'_, SchedulerState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{CatalogRecord, Category};
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Test inferencer: tracks concurrency, fails `missing*`, panics on `boom*`,
    /// and sleeps longer for `slow*`.
    #[derive(Default)]
    struct StubInferencer {
        current: AtomicUsize,
        peak: AtomicUsize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Inferencer for StubInferencer {
        async fn infer(&self, path: &Path) -> Result<CatalogRecord> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);

            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            let delay = if name.starts_with("slow") { 300 } else { 20 };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            self.current.fetch_sub(1, Ordering::SeqCst);

            if name.starts_with("boom") {
                panic!("stub panic");
            }
            if name.starts_with("missing") {
                return Err(CatalogError::file_access(path, "not found"));
            }
            Ok(CatalogRecord {
                id: uuid::Uuid::new_v4().to_string(),
                title: name,
                description: "stub".to_string(),
                category: Category::Uncategorized,
                image_url: String::new(),
                download_url: String::new(),
                warnings: Vec::new(),
            })
        }
    }

    fn scheduler(stub: Arc<StubInferencer>, max: usize) -> BatchScheduler {
        BatchScheduler::new(stub, &SchedulerConfig { max_concurrency: Some(max) })
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|n| PathBuf::from(format!("/stub/{}", n))).collect()
    }

    async fn collect(rx: &mut mpsc::UnboundedReceiver<ProgressEvent>) -> Vec<ProgressEvent> {
        let mut events = Vec::new();
        loop {
            let event = tokio::time::timeout(Duration::from_secs(10), rx.recv())
                .await
                .expect("batch did not complete in time")
                .expect("event channel closed");
            let done = event.is_batch_complete();
            events.push(event);
            if done {
                return events;
            }
        }
    }

    fn terminal_indices(events: &[ProgressEvent]) -> Vec<usize> {
        events
            .iter()
            .filter_map(|e| match e {
                ProgressEvent::FileProgress(p) if p.status != FileStatus::Processing => Some(p.file_index),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_empty_batch_completes_without_workers() {
        let stub = Arc::new(StubInferencer::default());
        let scheduler = scheduler(Arc::clone(&stub), 4);
        let mut rx = scheduler.subscribe();

        let ack = scheduler.submit(Vec::new()).unwrap();
        assert_eq!(ack.total_files, 0);

        let events = collect(&mut rx).await;
        assert_eq!(
            events,
            vec![ProgressEvent::BatchComplete { batch_id: ack.batch_id, results: Vec::new() }]
        );
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.state(), SchedulerState::Idle);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_every_item_reported_once_in_index_order() {
        let stub = Arc::new(StubInferencer::default());
        let scheduler = scheduler(Arc::clone(&stub), 3);
        let mut rx = scheduler.subscribe();

        let input = paths(&["a.fbx", "missing.zip", "c.png", "d.obj", "missing2.vrm", "f.pdf", "g.zip"]);
        scheduler.submit(input.clone()).unwrap();
        let events = collect(&mut rx).await;

        let mut terminal = terminal_indices(&events);
        terminal.sort_unstable();
        assert_eq!(terminal, (0..7).collect::<Vec<_>>());

        let completes = events.iter().filter(|e| e.is_batch_complete()).count();
        assert_eq!(completes, 1);

        let ProgressEvent::BatchComplete { results, .. } = events.last().unwrap() else {
            panic!("last event must be BatchComplete");
        };
        assert_eq!(results.len(), 7);
        for (i, result) in results.iter().enumerate() {
            let name = input[i].file_name().unwrap().to_string_lossy();
            if name.starts_with("missing") {
                assert!(!result.success);
                assert_eq!(result.file_path.as_deref(), Some(input[i].to_str().unwrap()));
            } else {
                assert!(result.success);
                assert_eq!(result.data.as_ref().unwrap().title, name.to_string());
            }
        }

        assert!(stub.peak.load(Ordering::SeqCst) <= 3);
        assert_eq!(scheduler.state(), SchedulerState::Idle);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_file_event_precedes_overall_count() {
        let stub = Arc::new(StubInferencer::default());
        let scheduler = scheduler(stub, 2);
        let mut rx = scheduler.subscribe();

        scheduler.submit(paths(&["a", "b", "missing", "d", "e"])).unwrap();
        let events = collect(&mut rx).await;

        let mut settled = 0;
        for event in &events {
            match event {
                ProgressEvent::FileProgress(p) if p.status != FileStatus::Processing => settled += 1,
                ProgressEvent::OverallProgress(o) => {
                    assert_eq!(o.completed, settled);
                    assert_eq!(o.total, 5);
                }
                _ => {}
            }
        }
        assert_eq!(settled, 5);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrency_never_exceeds_bound() {
        let stub = Arc::new(StubInferencer::default());
        let scheduler = scheduler(Arc::clone(&stub), 2);

        let names: Vec<String> = (0..12).map(|i| format!("f{}.fbx", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let results = scheduler.process(paths(&refs)).await.unwrap();

        assert_eq!(results.len(), 12);
        assert!(results.iter().all(|r| r.success));
        assert_eq!(stub.peak.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_free_slot_picks_up_work_immediately() {
        let stub = Arc::new(StubInferencer::default());
        let scheduler = scheduler(stub, 2);
        let mut rx = scheduler.subscribe();

        scheduler.submit(paths(&["slow.zip", "a", "b", "c", "d"])).unwrap();
        let events = collect(&mut rx).await;

        // The slow item holds one slot while the other slot drains the rest.
        assert_eq!(terminal_indices(&events).last(), Some(&0));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_double_submission_is_rejected() {
        let stub = Arc::new(StubInferencer::default());
        let scheduler = scheduler(stub, 1);
        let mut rx = scheduler.subscribe();

        scheduler.submit(paths(&["slow.fbx"])).unwrap();
        let err = scheduler.submit(paths(&["other.fbx"])).unwrap_err();
        assert!(matches!(err, CatalogError::BatchInProgress));

        let events = collect(&mut rx).await;
        let ProgressEvent::BatchComplete { results, .. } = events.last().unwrap() else {
            panic!("expected BatchComplete");
        };
        assert_eq!(results.len(), 1);

        let again = scheduler.process(paths(&["next.fbx"])).await.unwrap();
        assert_eq!(again.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_panicking_item_fails_alone() {
        let stub = Arc::new(StubInferencer::default());
        let scheduler = scheduler(stub, 2);

        let results = scheduler.process(paths(&["a", "boom", "c"])).await.unwrap();
        assert!(results[0].success);
        assert!(!results[1].success);
        assert!(results[1].error.as_deref().unwrap().contains("panicked"));
        assert!(results[2].success);
    }

    /// Coordinator over `input` whose slots either run a real worker
    /// (`true`) or whose worker has already exited (`false`)
    fn coordinator_with_slots(
        stub: Arc<StubInferencer>,
        input: Vec<PathBuf>,
        live: &[bool],
    ) -> (
        Coordinator,
        mpsc::UnboundedReceiver<Settlement>,
        mpsc::UnboundedReceiver<ProgressEvent>,
    ) {
        let reporter = Arc::new(ProgressReporter::new());
        let events = reporter.subscribe();
        let inferencer: Arc<dyn Inferencer> = stub;

        let (settle_tx, settle_rx) = mpsc::unbounded_channel();
        let mut slots = Vec::new();
        for (slot, &alive) in live.iter().enumerate() {
            let (tx, rx) = mpsc::unbounded_channel();
            if alive {
                tokio::spawn(run_slot(slot, Arc::clone(&inferencer), rx, settle_tx.clone()));
            } else {
                drop(rx);
            }
            slots.push(Some(tx));
        }

        let coordinator = Coordinator {
            job: BatchJob::new(uuid::Uuid::new_v4(), input),
            inferencer,
            max_concurrency: live.len(),
            reporter,
            state: Arc::new(Mutex::new(SchedulerState::Running)),
            slots,
        };
        (coordinator, settle_rx, events)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_dead_slot_fails_its_item_and_batch_drains() {
        let stub = Arc::new(StubInferencer::default());
        let (coordinator, settle_rx, mut rx) =
            coordinator_with_slots(Arc::clone(&stub), paths(&["a", "b", "c", "d", "e"]), &[true, false]);
        let state = Arc::clone(&coordinator.state);
        let batch_id = coordinator.job.id();
        tokio::spawn(coordinator.drive(settle_rx));

        let events = collect(&mut rx).await;
        assert_eq!(events.iter().filter(|e| e.is_batch_complete()).count(), 1);

        let mut terminal = terminal_indices(&events);
        terminal.sort_unstable();
        assert_eq!(terminal, (0..5).collect::<Vec<_>>());

        let ProgressEvent::BatchComplete { batch_id: done, results } = events.last().unwrap() else {
            panic!("last event must be BatchComplete");
        };
        assert_eq!(*done, batch_id);
        assert_eq!(results.len(), 5);

        // Slot 1 is handed index 1 on the first feed and found dead.
        assert!(!results[1].success);
        assert!(results[1].error.as_deref().unwrap().contains("worker slot 1 is unavailable"));
        for i in [0, 2, 3, 4] {
            assert!(results[i].success, "index {} should succeed", i);
        }
        assert_eq!(stub.calls.load(Ordering::SeqCst), 4);
        assert_eq!(*lock_state(&state), SchedulerState::Idle);
    }

    #[tokio::test]
    async fn test_pool_with_no_workers_still_completes() {
        let stub = Arc::new(StubInferencer::default());
        let (coordinator, settle_rx, mut rx) =
            coordinator_with_slots(Arc::clone(&stub), paths(&["a", "b", "c", "d"]), &[false, false]);
        let state = Arc::clone(&coordinator.state);
        coordinator.drive(settle_rx).await;

        let events = collect(&mut rx).await;
        assert_eq!(events.iter().filter(|e| e.is_batch_complete()).count(), 1);

        let mut terminal = terminal_indices(&events);
        terminal.sort_unstable();
        assert_eq!(terminal, (0..4).collect::<Vec<_>>());

        let ProgressEvent::BatchComplete { results, .. } = events.last().unwrap() else {
            panic!("last event must be BatchComplete");
        };
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| !r.success));
        assert!(results[0].error.as_deref().unwrap().contains("unavailable"));
        assert!(results[3].error.as_deref().unwrap().contains("worker pool exited"));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
        assert_eq!(*lock_state(&state), SchedulerState::Idle);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_process_ignores_completion_of_another_batch() {
        let stub = Arc::new(StubInferencer::default());
        let scheduler = scheduler(stub, 1);

        let stale = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            scheduler.reporter.batch_complete(uuid::Uuid::new_v4(), Vec::new());
        };
        let (results, ()) = tokio::join!(scheduler.process(paths(&["slow.fbx", "b.fbx"])), stale);

        let results = results.unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.success));
    }

    #[test]
    fn test_submit_without_runtime_is_rejected() {
        let scheduler = scheduler(Arc::new(StubInferencer::default()), 1);
        let err = scheduler.submit(paths(&["a"])).unwrap_err();
        assert!(matches!(err, CatalogError::WorkerSpawn(_)));
        assert_eq!(scheduler.state(), SchedulerState::Idle);
    }

    #[test]
    fn test_empty_path_is_invalid() {
        let scheduler = scheduler(Arc::new(StubInferencer::default()), 1);
        let err = scheduler.submit(vec![PathBuf::from("/a"), PathBuf::new()]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSubmission(_)));
    }
}
