// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::convert::Infallible;
use std::thread;
use std::time::{Duration, Instant};
use worker_pool_core::{PoolError, ShutdownSignal, WorkerId, WorkerPool, WorkerRuntime};

/// A slow job over a list of values, one line per value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerJob {
    Squares(Vec<u64>),
    Cubes(Vec<u64>),
}

impl PowerJob {
    /// Sleeps `delay` after every value to simulate work
    pub fn run(&self, delay: Duration) -> Vec<String> {
        let (name, exponent, values) = match self {
            PowerJob::Squares(values) => ("square", 2, values),
            PowerJob::Cubes(values) => ("cube", 3, values),
        };

        values
            .iter()
            .map(|value| {
                let power = value.saturating_pow(exponent);
                let line = format!("{} of {} is {}", name, value, power);
                println!("{}", line);
                thread::sleep(delay);
                line
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingComparison {
    pub sequential: Duration,
    pub parallel: Duration,
}

/// Runs the square and cube jobs one after the other, then on two pool workers
pub async fn compare_timing<R, S>(
    runtime: R,
    shutdown: S,
    values: &[u64],
    delay: Duration,
) -> Result<TimingComparison, PoolError>
where
    R: WorkerRuntime,
    S: ShutdownSignal,
{
    let jobs = vec![
        PowerJob::Squares(values.to_vec()),
        PowerJob::Cubes(values.to_vec()),
    ];

    println!("\n=== Without worker pool ===");
    let start = Instant::now();
    for job in &jobs {
        job.run(delay);
    }
    let sequential = start.elapsed();
    println!("Time taken: {:.2}s", sequential.as_secs_f64());

    println!("\n=== With worker pool ===");
    let pool = WorkerPool::new(
        runtime,
        shutdown,
        move |job: &PowerJob, _worker: WorkerId| -> Result<Vec<String>, Infallible> {
            Ok(job.run(delay))
        },
    );
    let start = Instant::now();
    let worker_count = jobs.len();
    pool.run(jobs, worker_count).await?;
    let parallel = start.elapsed();
    println!("Time taken: {:.2}s", parallel.as_secs_f64());

    Ok(TimingComparison {
        sequential,
        parallel,
    })
}
