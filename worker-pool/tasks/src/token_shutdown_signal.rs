// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tokio_util::sync::CancellationToken;
use worker_pool_core::ShutdownSignal;

/// Shutdown signal driven by a `CancellationToken`
///
/// Cancelling the token makes the next worker that checks it close the work
/// queue. Items still queued are reported as abandoned.
#[derive(Clone)]
pub struct TokenShutdownSignal {
    token: CancellationToken,
}

impl TokenShutdownSignal {
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }
}

impl ShutdownSignal for TokenShutdownSignal {
    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
