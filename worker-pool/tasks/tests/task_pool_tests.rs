// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::HashSet;
use std::convert::Infallible;
use tokio_util::sync::CancellationToken;
use worker_pool_core::{NeverShutdown, PoolError, WorkerId, WorkerPool, WorkerReport, WorkerRuntime};
use worker_pool_pair_sum::{describe, generate_pairs, sum_pair};
use worker_pool_tasks::{TokenShutdownSignal, TokioRuntime};

#[tokio::test]
async fn test_liveness_five_pairs_two_workers() {
    let pool = WorkerPool::new(TokioRuntime, NeverShutdown, sum_pair);

    let (report, results) = pool.run(generate_pairs(5), 2).await.unwrap();

    assert!(report.is_clean());
    let mut sums: Vec<i64> = results.iter().map(|r| *r.output()).collect();
    sums.sort_unstable();
    assert_eq!(sums, vec![2, 4, 6, 8, 10]);
}

#[tokio::test]
async fn test_liveness_single_worker_identity() {
    let pool = WorkerPool::new(TokioRuntime, NeverShutdown, sum_pair);

    let (_, results) = pool.run(generate_pairs(25), 1).await.unwrap();

    assert_eq!(results.len(), 25);
    assert!(results
        .iter()
        .all(|r| describe(r).ends_with("is calculated by Worker-1")));
}

#[tokio::test]
async fn test_liveness_zero_items_five_workers() {
    let pool = WorkerPool::new(TokioRuntime, NeverShutdown, sum_pair);

    let (report, results) = pool.run(generate_pairs(0), 5).await.unwrap();

    assert_eq!(report.workers().len(), 5);
    assert_eq!(report.processed(), 0);
    assert!(results.is_empty());
    assert!(pool.drain_results().is_empty());
}

#[tokio::test]
async fn test_safety_drain_is_idempotent() {
    let pool = WorkerPool::new(TokioRuntime, NeverShutdown, sum_pair);

    let (_, results) = pool.run(generate_pairs(10), 3).await.unwrap();

    assert_eq!(results.len(), 10);
    assert!(pool.drain_results().is_empty());
    assert!(pool.drain_results().is_empty());
}

#[tokio::test]
async fn test_safety_worker_count_does_not_change_results() {
    let single = WorkerPool::new(TokioRuntime, NeverShutdown, sum_pair);
    let (_, single_results) = single.run(generate_pairs(50), 1).await.unwrap();

    let many = WorkerPool::new(TokioRuntime, NeverShutdown, sum_pair);
    let (_, many_results) = many.run(generate_pairs(50), 5).await.unwrap();

    let mut single_sums: Vec<i64> = single_results.iter().map(|r| *r.output()).collect();
    let mut many_sums: Vec<i64> = many_results.iter().map(|r| *r.output()).collect();
    single_sums.sort_unstable();
    many_sums.sort_unstable();
    assert_eq!(single_sums, many_sums);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_safety_stress_no_duplicates_no_losses() {
    let pool = WorkerPool::new(
        TokioRuntime,
        NeverShutdown,
        |item: &u32, _worker: WorkerId| -> Result<u32, Infallible> { Ok(*item) },
    );

    let (report, results) = pool.run(0..10_000, 8).await.unwrap();

    assert_eq!(report.processed(), 10_000);
    let unique: HashSet<u32> = results.iter().map(|r| *r.output()).collect();
    assert_eq!(unique.len(), 10_000);
}

#[tokio::test]
async fn test_cancelled_token_stops_after_current_item() {
    let token = CancellationToken::new();
    let cancel_on_first = token.clone();
    let pool = WorkerPool::new(
        TokioRuntime,
        TokenShutdownSignal::new(token),
        move |item: &u32, _worker: WorkerId| -> Result<u32, Infallible> {
            cancel_on_first.cancel();
            Ok(*item)
        },
    );

    let (report, results) = pool.run(0..20, 1).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(report.abandoned(), 19);
}

#[tokio::test]
async fn test_join_error_from_panicking_task() {
    let pool = WorkerPool::new(
        TokioRuntime,
        NeverShutdown,
        |item: &u32, _worker: WorkerId| -> Result<u32, Infallible> {
            assert_ne!(*item, 0, "zero is not allowed");
            Ok(*item)
        },
    );
    pool.submit_all([0]).unwrap();

    let handles = pool.spawn(1).await.unwrap();
    let result = pool.await_completion(handles).await;

    assert!(matches!(
        result,
        Err(PoolError::Join { worker, .. }) if worker == WorkerId::new(1)
    ));
}

#[test]
fn test_spawn_outside_runtime_fails() {
    let result = TokioRuntime.spawn(WorkerId::new(1), || WorkerReport::new(WorkerId::new(1)));

    let err = result.err().expect("Spawn needs a tokio runtime");
    assert_eq!(err.worker, WorkerId::new(1));
}
