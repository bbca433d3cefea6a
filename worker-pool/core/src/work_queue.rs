// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Outcome of a non-blocking take from a [`WorkQueue`]
#[derive(Debug, PartialEq, Eq)]
pub enum Take<T> {
    /// The next item in submission order
    Item(T),
    /// Nothing left to hand out
    Empty,
    /// The queue was closed; remaining items are no longer handed out
    Closed,
}

/// Rejected push, carrying the item back to the caller
#[derive(Debug, PartialEq, Eq)]
pub enum PushError<T> {
    Full(T),
    Closed(T),
}

impl<T> PushError<T> {
    pub fn into_inner(self) -> T {
        match self {
            PushError::Full(item) | PushError::Closed(item) => item,
        }
    }
}

struct State<T> {
    items: VecDeque<T>,
    closed: bool,
}

/// FIFO queue shared by the coordinator and every worker
///
/// Each push and take happens under a single lock acquisition, so an item is
/// handed to exactly one taker.
pub struct WorkQueue<T> {
    state: Mutex<State<T>>,
    capacity: Option<usize>,
}

impl<T> WorkQueue<T> {
    /// Unbounded queue
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                items: VecDeque::new(),
                closed: false,
            }),
            capacity: None,
        }
    }

    /// Queue that rejects pushes once `capacity` items are pending
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(State {
                items: VecDeque::with_capacity(capacity),
                closed: false,
            }),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn push(&self, item: T) -> Result<(), PushError<T>> {
        let mut state = self.lock();
        if state.closed {
            return Err(PushError::Closed(item));
        }
        if let Some(capacity) = self.capacity {
            if state.items.len() >= capacity {
                return Err(PushError::Full(item));
            }
        }
        state.items.push_back(item);
        Ok(())
    }

    /// Never blocks. A closed queue reports `Closed` even while items remain.
    pub fn try_take(&self) -> Take<T> {
        let mut state = self.lock();
        if state.closed {
            return Take::Closed;
        }
        match state.items.pop_front() {
            Some(item) => Take::Item(item),
            None => Take::Empty,
        }
    }

    /// Stops hand-out to every worker. Idempotent.
    pub fn close(&self) {
        self.lock().closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Items still pending, including those stranded by `close`
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, State<T>> {
        // A panic while holding the lock cannot leave the deque half-updated.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for WorkQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
