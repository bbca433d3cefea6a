// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{SpawnError, WorkerId, WorkerReport};
use async_trait::async_trait;

/// Trait for abstracting the execution substrate of workers (threads, tasks, ...)
#[async_trait]
pub trait WorkerRuntime: Send + Sync + 'static {
    type Handle: Send;
    type Error: std::fmt::Display + Send;

    /// Start running `f` on a new execution unit without waiting for it
    fn spawn<F>(&self, worker: WorkerId, f: F) -> Result<Self::Handle, SpawnError>
    where
        F: FnOnce() -> WorkerReport + Send + 'static;

    /// Wait for the execution unit to terminate and hand back its report
    async fn join(&self, handle: Self::Handle) -> Result<WorkerReport, Self::Error>;
}
