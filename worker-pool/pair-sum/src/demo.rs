// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{compare_timing, describe, generate_pairs, generate_random_pairs, sum_pair, DemoConfig};
use std::time::{Duration, Instant};
use worker_pool_core::{ShutdownSignal, WorkerPool, WorkerRuntime};

/// Runs the whole demo on the given substrate and prints its results
pub async fn run_demo<R, S>(runtime: R, shutdown: S, config: &DemoConfig) -> anyhow::Result<()>
where
    R: WorkerRuntime + Clone,
    S: ShutdownSignal,
{
    let start_time = Instant::now();
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    println!("=== WORKER POOL PAIR SUM ===");
    println!("This system has {} CPU", cpus);
    println!("Configuration:");
    println!("  - Workers: {}", config.pool.num_workers);
    println!("  - Pairs: {}", config.num_items);
    println!("  - Random pairs: {}", config.random);
    println!("  - Failure policy: {:?}", config.pool.failure_policy);
    if let Some(capacity) = config.pool.queue_capacity {
        println!("  - Queue capacity: {}", capacity);
    }

    if !config.power_values.is_empty() {
        let timing = compare_timing(
            runtime.clone(),
            shutdown.clone(),
            &config.power_values,
            Duration::from_millis(config.power_delay_ms),
        )
        .await?;
        println!(
            "\nSpeedup with worker pool: {:.2}x",
            timing.sequential.as_secs_f64() / timing.parallel.as_secs_f64().max(f64::EPSILON)
        );
    }

    println!("\n=== Worker pool using queues ===");
    let pairs = if config.random {
        generate_random_pairs(&mut rand::rng(), config.num_items, config.max_value)
    } else {
        generate_pairs(config.num_items)
    };

    let pool = WorkerPool::new(runtime, shutdown, sum_pair).with_config(&config.pool);
    let (report, results) = pool.run(pairs, config.pool.num_workers).await?;

    for record in &results {
        println!("{}", describe(record));
    }

    println!("\n=== SUMMARY ===");
    for worker in report.workers() {
        println!(
            "{}: {} processed, {} skipped",
            worker.worker(),
            worker.processed(),
            worker.skipped().len()
        );
    }
    for failure in report.failures() {
        println!("Failed on {}: {}", failure.worker(), failure.message());
    }
    if report.abandoned() > 0 {
        println!("Abandoned after shutdown: {}", report.abandoned());
    }
    println!("Results collected: {}", results.len());

    println!("\nTotal time: {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(())
}
