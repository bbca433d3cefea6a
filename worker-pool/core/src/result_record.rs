// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::WorkerId;
use serde::{Deserialize, Serialize};

/// Output of one work item, tagged with the worker that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord<O> {
    worker: WorkerId,
    output: O,
}

impl<O> ResultRecord<O> {
    pub fn new(worker: WorkerId, output: O) -> Self {
        Self { worker, output }
    }

    pub fn worker(&self) -> WorkerId {
        self.worker
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }
}
