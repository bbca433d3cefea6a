// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::WorkerId;
use std::fmt::Display;

/// Function applied by a worker to every item it takes
/// Items are borrowed immutably; the function never owns or mutates them
pub trait WorkFunction<I>: Send + Sync + 'static {
    type Output: Send + 'static;
    type Error: Display;

    fn process(&self, item: &I, worker: WorkerId) -> Result<Self::Output, Self::Error>;
}

impl<I, F, O, E> WorkFunction<I> for F
where
    F: Fn(&I, WorkerId) -> Result<O, E> + Send + Sync + 'static,
    O: Send + 'static,
    E: Display,
{
    type Output = O;
    type Error = E;

    fn process(&self, item: &I, worker: WorkerId) -> Result<O, E> {
        (self)(item, worker)
    }
}
