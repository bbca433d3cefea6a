// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Trait for shutdown signaling
/// A worker that observes cancellation closes the work queue before its next take
pub trait ShutdownSignal: Clone + Send + Sync + 'static {
    fn is_cancelled(&self) -> bool;
}

/// Signal for pools that are only stopped through `WorkerPool::shutdown`
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverShutdown;

impl ShutdownSignal for NeverShutdown {
    fn is_cancelled(&self) -> bool {
        false
    }
}
