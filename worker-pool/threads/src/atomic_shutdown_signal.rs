// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use worker_pool_core::ShutdownSignal;

/// Shutdown flag shared between the Ctrl+C handler and the worker threads
///
/// Once raised, the next worker to look at the work queue closes it, so
/// every worker terminates at its next take and the rest stay queued.
#[derive(Clone, Default)]
pub struct AtomicShutdownSignal {
    flag: Arc<AtomicBool>,
}

impl AtomicShutdownSignal {
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Raises the flag; items already being processed still complete
    pub fn shutdown(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

impl ShutdownSignal for AtomicShutdownSignal {
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
