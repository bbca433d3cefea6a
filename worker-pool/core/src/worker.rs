// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{
    FailurePolicy, ResultQueue, ResultRecord, ShutdownSignal, Take, WorkFunction, WorkQueue,
    WorkerId,
};
use std::sync::Arc;
use tracing::{debug, error, trace, warn};

/// An item the work function rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingFailure {
    worker: WorkerId,
    message: String,
}

impl ProcessingFailure {
    pub fn new(worker: WorkerId, message: impl Into<String>) -> Self {
        Self {
            worker,
            message: message.into(),
        }
    }

    pub fn worker(&self) -> WorkerId {
        self.worker
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// What a worker did between spawn and termination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    worker: WorkerId,
    processed: usize,
    skipped: Vec<ProcessingFailure>,
    aborted: Option<ProcessingFailure>,
}

impl WorkerReport {
    pub fn new(worker: WorkerId) -> Self {
        Self {
            worker,
            processed: 0,
            skipped: Vec::new(),
            aborted: None,
        }
    }

    pub fn worker(&self) -> WorkerId {
        self.worker
    }

    /// Items that produced a result record
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Failures passed over under `SkipAndContinue`
    pub fn skipped(&self) -> &[ProcessingFailure] {
        &self.skipped
    }

    /// The failure that stopped this worker under `FailFast`
    pub fn aborted(&self) -> Option<&ProcessingFailure> {
        self.aborted.as_ref()
    }
}

enum WorkerState<I> {
    Running,
    Processing(I),
    Terminated,
}

pub(crate) struct Worker<I, F: WorkFunction<I>, S> {
    id: WorkerId,
    work_queue: Arc<WorkQueue<I>>,
    result_queue: Arc<ResultQueue<F::Output>>,
    work_fn: Arc<F>,
    policy: FailurePolicy,
    shutdown: S,
}

impl<I, F, S> Worker<I, F, S>
where
    F: WorkFunction<I>,
    S: ShutdownSignal,
{
    pub(crate) fn new(
        id: WorkerId,
        work_queue: Arc<WorkQueue<I>>,
        result_queue: Arc<ResultQueue<F::Output>>,
        work_fn: Arc<F>,
        policy: FailurePolicy,
        shutdown: S,
    ) -> Self {
        Self {
            id,
            work_queue,
            result_queue,
            work_fn,
            policy,
            shutdown,
        }
    }

    /// Drives the worker from Running to Terminated
    pub(crate) fn run(self) -> WorkerReport {
        debug!(worker = %self.id, "worker started");
        let mut report = WorkerReport::new(self.id);
        let mut state = WorkerState::Running;

        loop {
            state = match state {
                WorkerState::Running => self.take_next(),
                WorkerState::Processing(item) => self.process(item, &mut report),
                WorkerState::Terminated => break,
            };
        }

        debug!(
            worker = %self.id,
            processed = report.processed,
            skipped = report.skipped.len(),
            "worker terminated"
        );
        report
    }

    fn take_next(&self) -> WorkerState<I> {
        if self.shutdown.is_cancelled() {
            self.work_queue.close();
        }

        match self.work_queue.try_take() {
            Take::Item(item) => WorkerState::Processing(item),
            Take::Empty => {
                trace!(worker = %self.id, "work queue empty");
                WorkerState::Terminated
            }
            Take::Closed => {
                trace!(worker = %self.id, "work queue closed");
                WorkerState::Terminated
            }
        }
    }

    fn process(&self, item: I, report: &mut WorkerReport) -> WorkerState<I> {
        match self.work_fn.process(&item, self.id) {
            Ok(output) => {
                self.result_queue.put(ResultRecord::new(self.id, output));
                report.processed += 1;
                WorkerState::Running
            }
            Err(e) => {
                let failure = ProcessingFailure::new(self.id, e.to_string());
                match self.policy {
                    FailurePolicy::SkipAndContinue => {
                        warn!(worker = %self.id, error = %e, "skipping failed item");
                        report.skipped.push(failure);
                        WorkerState::Running
                    }
                    FailurePolicy::FailFast => {
                        error!(worker = %self.id, error = %e, "item failed, stopping pool");
                        self.work_queue.close();
                        report.aborted = Some(failure);
                        WorkerState::Terminated
                    }
                }
            }
        }
    }
}
