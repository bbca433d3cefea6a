// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use worker_pool_core::{ResultRecord, WorkerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub left: i64,
    pub right: i64,
}

impl Pair {
    pub fn new(left: i64, right: i64) -> Self {
        Self { left, right }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairSumError {
    #[error("{left} + {right} overflows")]
    Overflow { left: i64, right: i64 },
}

/// Work function of the demo pool
pub fn sum_pair(pair: &Pair, _worker: WorkerId) -> Result<i64, PairSumError> {
    pair.left
        .checked_add(pair.right)
        .ok_or(PairSumError::Overflow {
            left: pair.left,
            right: pair.right,
        })
}

/// Pairs `(i, i + 2)` for `i` in `0..count`
pub fn generate_pairs(count: usize) -> Vec<Pair> {
    (0..count as i64).map(|i| Pair::new(i, i + 2)).collect()
}

/// Pairs with both members drawn from `-max_value..=max_value`
pub fn generate_random_pairs(rng: &mut impl Rng, count: usize, max_value: i64) -> Vec<Pair> {
    let max_value = max_value.saturating_abs();
    (0..count)
        .map(|_| {
            Pair::new(
                rng.random_range(-max_value..=max_value),
                rng.random_range(-max_value..=max_value),
            )
        })
        .collect()
}

pub fn describe(record: &ResultRecord<i64>) -> String {
    format!("{} is calculated by {}", record.output(), record.worker())
}
