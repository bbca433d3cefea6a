// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;
use worker_pool_core::{SpawnError, WorkerId, WorkerReport, WorkerRuntime};

/// Tokio task-based runtime
///
/// Worker loops never yield, so they run on the blocking pool of the
/// runtime current at spawn time rather than on the async workers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRuntime;

#[async_trait]
impl WorkerRuntime for TokioRuntime {
    type Handle = JoinHandle<WorkerReport>;
    type Error = tokio::task::JoinError;

    fn spawn<F>(&self, worker: WorkerId, f: F) -> Result<Self::Handle, SpawnError>
    where
        F: FnOnce() -> WorkerReport + Send + 'static,
    {
        let handle = Handle::try_current().map_err(|e| SpawnError::new(worker, e.to_string()))?;
        trace!(%worker, "spawning blocking task");
        Ok(handle.spawn_blocking(f))
    }

    async fn join(&self, handle: Self::Handle) -> Result<WorkerReport, Self::Error> {
        handle.await
    }
}
