// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::worker::Worker;
use crate::{
    CompletionReport, FailurePolicy, PoolConfig, PoolError, PushError, ResultQueue, ResultRecord,
    ShutdownSignal, WorkFunction, WorkQueue, WorkerId, WorkerRuntime,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// A spawned worker, as handed back by `WorkerPool::spawn`
pub struct WorkerHandle<H> {
    worker: WorkerId,
    handle: H,
}

impl<H> WorkerHandle<H> {
    pub fn worker(&self) -> WorkerId {
        self.worker
    }
}

/// Coordinates workers draining a shared work queue into a shared result queue
///
/// The coordinator submits items, spawns workers on the runtime `R`, waits
/// for them and finally drains the results:
///
/// ```ignore
/// let pool = WorkerPool::new(runtime, NeverShutdown, sum_pair);
/// pool.submit_all(pairs)?;
/// let handles = pool.spawn(5).await?;
/// let report = pool.await_completion(handles).await?;
/// let results = pool.drain_results();
/// ```
pub struct WorkerPool<I, F: WorkFunction<I>, R, S> {
    runtime: R,
    shutdown: S,
    work_fn: Arc<F>,
    policy: FailurePolicy,
    work_queue: Arc<WorkQueue<I>>,
    result_queue: Arc<ResultQueue<F::Output>>,
    spawned: AtomicUsize,
}

impl<I, F, R, S> WorkerPool<I, F, R, S>
where
    I: Send + 'static,
    F: WorkFunction<I>,
    R: WorkerRuntime,
    S: ShutdownSignal,
{
    pub fn new(runtime: R, shutdown: S, work_fn: F) -> Self {
        Self {
            runtime,
            shutdown,
            work_fn: Arc::new(work_fn),
            policy: FailurePolicy::default(),
            work_queue: Arc::new(WorkQueue::new()),
            result_queue: Arc::new(ResultQueue::new()),
            spawned: AtomicUsize::new(0),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the work queue with one holding at most `capacity` pending items
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.work_queue = Arc::new(WorkQueue::with_capacity(capacity));
        self
    }

    pub fn with_config(self, config: &PoolConfig) -> Self {
        let pool = self.with_failure_policy(config.failure_policy);
        match config.queue_capacity {
            Some(capacity) => pool.with_queue_capacity(capacity),
            None => pool,
        }
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Items not yet taken by any worker
    pub fn pending(&self) -> usize {
        self.work_queue.len()
    }

    /// Enqueues every item in order and returns how many were accepted
    pub fn submit_all(&self, items: impl IntoIterator<Item = I>) -> Result<usize, PoolError> {
        let mut accepted = 0;
        for item in items {
            match self.work_queue.push(item) {
                Ok(()) => accepted += 1,
                Err(PushError::Full(_)) => {
                    warn!(accepted, "work queue full");
                    return Err(PoolError::QueueFull { accepted });
                }
                Err(PushError::Closed(_)) => return Err(PoolError::QueueClosed),
            }
        }
        debug!(accepted, "items submitted");
        Ok(accepted)
    }

    /// Starts `count` workers and returns as soon as all of them are running
    ///
    /// If the runtime refuses one of them, the work queue is closed, the
    /// workers already started are joined and the spawn error is returned.
    pub async fn spawn(&self, count: usize) -> Result<Vec<WorkerHandle<R::Handle>>, PoolError> {
        if count == 0 {
            return Err(PoolError::InvalidWorkerCount(count));
        }

        let mut handles = Vec::with_capacity(count);
        for _ in 0..count {
            let id = WorkerId::new(self.spawned.fetch_add(1, Ordering::SeqCst) + 1);
            let worker = Worker::new(
                id,
                self.work_queue.clone(),
                self.result_queue.clone(),
                self.work_fn.clone(),
                self.policy,
                self.shutdown.clone(),
            );

            match self.runtime.spawn(id, move || worker.run()) {
                Ok(handle) => handles.push(WorkerHandle { worker: id, handle }),
                Err(e) => {
                    error!(worker = %id, error = %e, "spawn failed, aborting pool startup");
                    self.work_queue.close();
                    for started in handles {
                        if let Err(join_err) = self.runtime.join(started.handle).await {
                            error!(
                                worker = %started.worker,
                                error = %join_err,
                                "worker failed during abort"
                            );
                        }
                    }
                    return Err(PoolError::Spawn(e));
                }
            }
        }

        info!(workers = count, policy = ?self.policy, "workers spawned");
        Ok(handles)
    }

    /// Waits until every worker has terminated
    ///
    /// All handles are joined even when one of them fails, so no worker
    /// outlives this call.
    pub async fn await_completion(
        &self,
        handles: Vec<WorkerHandle<R::Handle>>,
    ) -> Result<CompletionReport, PoolError> {
        let mut reports = Vec::with_capacity(handles.len());
        let mut join_failure = None;

        for WorkerHandle { worker, handle } in handles {
            match self.runtime.join(handle).await {
                Ok(report) => reports.push(report),
                Err(e) => {
                    error!(%worker, error = %e, "worker did not terminate normally");
                    if join_failure.is_none() {
                        join_failure = Some(PoolError::Join {
                            worker,
                            message: e.to_string(),
                        });
                    }
                }
            }
        }

        if let Some(failure) = join_failure {
            return Err(failure);
        }

        let report = CompletionReport::new(reports, self.work_queue.len());
        if let Some(failure) = report.aborted() {
            return Err(PoolError::WorkerFailed {
                worker: failure.worker(),
                message: failure.message().to_string(),
                processed: report.processed(),
                abandoned: report.abandoned(),
            });
        }

        info!(
            processed = report.processed(),
            abandoned = report.abandoned(),
            results = self.result_queue.len(),
            "all workers terminated"
        );
        Ok(report)
    }

    /// Takes every record currently in the result queue
    /// Meant to be called after `await_completion`; a second call returns nothing new
    pub fn drain_results(&self) -> Vec<ResultRecord<F::Output>> {
        self.result_queue.drain()
    }

    /// Cooperative cancellation: workers observe the closed queue at their next take
    pub fn shutdown(&self) {
        info!(pending = self.work_queue.len(), "shutting down worker pool");
        self.work_queue.close();
    }

    /// Submits `items`, runs `count` workers to completion and drains the results
    pub async fn run(
        &self,
        items: impl IntoIterator<Item = I>,
        count: usize,
    ) -> Result<(CompletionReport, Vec<ResultRecord<F::Output>>), PoolError> {
        self.submit_all(items)?;
        let handles = self.spawn(count).await?;
        let report = self.await_completion(handles).await?;
        Ok((report, self.drain_results()))
    }
}
