// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use std::any::Any;
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::trace;
use worker_pool_core::{SpawnError, WorkerId, WorkerReport, WorkerRuntime};

#[derive(Debug, Error)]
pub enum ThreadJoinError {
    #[error("worker thread panicked: {0}")]
    Panicked(String),

    #[error("worker thread exited without a report")]
    Disconnected,
}

/// A running worker thread
///
/// The report arrives over a oneshot channel, so joining only needs an
/// executor able to poll a future, not a tokio reactor.
pub struct ThreadHandle {
    report: oneshot::Receiver<WorkerReport>,
    thread: JoinHandle<()>,
}

/// OS thread per worker, named after the worker
#[derive(Debug, Clone, Default)]
pub struct ThreadRuntime {
    stack_size: Option<usize>,
}

impl ThreadRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stack_size(stack_size: usize) -> Self {
        Self {
            stack_size: Some(stack_size),
        }
    }
}

#[async_trait]
impl WorkerRuntime for ThreadRuntime {
    type Handle = ThreadHandle;
    type Error = ThreadJoinError;

    fn spawn<F>(&self, worker: WorkerId, f: F) -> Result<Self::Handle, SpawnError>
    where
        F: FnOnce() -> WorkerReport + Send + 'static,
    {
        trace!(%worker, "spawning thread");
        let mut builder = thread::Builder::new().name(worker.to_string());
        if let Some(stack_size) = self.stack_size {
            builder = builder.stack_size(stack_size);
        }

        let (tx, rx) = oneshot::channel();
        let thread = builder
            .spawn(move || {
                // The coordinator may have given up on this worker already
                let _ = tx.send(f());
            })
            .map_err(|e| SpawnError::new(worker, e.to_string()))?;

        Ok(ThreadHandle { report: rx, thread })
    }

    async fn join(&self, handle: Self::Handle) -> Result<WorkerReport, Self::Error> {
        let ThreadHandle { report, thread } = handle;
        let received = report.await;

        // The sender is gone either way, so the thread is past its last step.
        let joined = thread.join();
        match (received, joined) {
            (_, Err(payload)) => Err(ThreadJoinError::Panicked(panic_message(payload))),
            (Ok(report), Ok(())) => Ok(report),
            (Err(_), Ok(())) => Err(ThreadJoinError::Disconnected),
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
