// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ResultRecord;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Collection of records produced by the workers
/// Insertion order across workers follows scheduling and is not meaningful
pub struct ResultQueue<O> {
    records: Mutex<VecDeque<ResultRecord<O>>>,
}

impl<O> ResultQueue<O> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(VecDeque::new()),
        }
    }

    pub fn put(&self, record: ResultRecord<O>) {
        self.lock().push_back(record);
    }

    pub fn try_take(&self) -> Option<ResultRecord<O>> {
        self.lock().pop_front()
    }

    /// Takes records until the queue reports empty
    pub fn drain(&self) -> Vec<ResultRecord<O>> {
        let mut drained = Vec::new();
        while let Some(record) = self.try_take() {
            drained.push(record);
        }
        drained
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<ResultRecord<O>>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<O> Default for ResultQueue<O> {
    fn default() -> Self {
        Self::new()
    }
}
