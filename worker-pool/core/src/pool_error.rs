// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::WorkerId;
use thiserror::Error;

/// An execution unit could not be created
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to spawn {worker}: {reason}")]
pub struct SpawnError {
    pub worker: WorkerId,
    pub reason: String,
}

impl SpawnError {
    pub fn new(worker: WorkerId, reason: impl Into<String>) -> Self {
        Self {
            worker,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// `spawn` was asked for zero workers
    #[error("worker count must be positive, got {0}")]
    InvalidWorkerCount(usize),

    /// A bounded work queue ran out of room during `submit_all`
    #[error("work queue is full after accepting {accepted} items")]
    QueueFull { accepted: usize },

    /// Items were submitted after the pool was shut down
    #[error("work queue is closed")]
    QueueClosed,

    /// Pool startup was aborted
    #[error(transparent)]
    Spawn(#[from] SpawnError),

    /// Under the fail-fast policy a worker stopped the pool
    ///
    /// `worker` is the first aborted worker in handle order. `processed`
    /// counts the items every worker completed before the pool stopped.
    #[error("{worker} failed: {message} ({processed} items processed, {abandoned} abandoned)")]
    WorkerFailed {
        worker: WorkerId,
        message: String,
        processed: usize,
        abandoned: usize,
    },

    /// A worker did not terminate normally (panic or lost task)
    #[error("{worker} could not be joined: {message}")]
    Join { worker: WorkerId, message: String },
}
