// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};

/// What a worker does when the work function fails on an item
/// The failed item never produces a record under either policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Record the failure in the worker report and take the next item
    #[default]
    SkipAndContinue,
    /// Close the work queue for the whole pool and terminate the worker
    FailFast,
}
