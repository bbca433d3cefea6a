// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ProcessingFailure, WorkerReport};

/// Summary returned by `WorkerPool::await_completion`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReport {
    workers: Vec<WorkerReport>,
    abandoned: usize,
}

impl CompletionReport {
    pub fn new(workers: Vec<WorkerReport>, abandoned: usize) -> Self {
        Self { workers, abandoned }
    }

    pub fn workers(&self) -> &[WorkerReport] {
        &self.workers
    }

    /// Total items that produced a result record
    pub fn processed(&self) -> usize {
        self.workers.iter().map(WorkerReport::processed).sum()
    }

    /// Every item skipped under `SkipAndContinue`, grouped by worker
    pub fn failures(&self) -> impl Iterator<Item = &ProcessingFailure> {
        self.workers.iter().flat_map(|report| report.skipped().iter())
    }

    /// The fail-fast abort, taken from the first worker in handle order that
    /// stopped the pool
    pub fn aborted(&self) -> Option<&ProcessingFailure> {
        self.workers.iter().find_map(WorkerReport::aborted)
    }

    /// Items left in the work queue because the pool was shut down
    pub fn abandoned(&self) -> usize {
        self.abandoned
    }

    /// True when every submitted item produced a record
    pub fn is_clean(&self) -> bool {
        self.abandoned == 0 && self.failures().next().is_none()
    }
}
