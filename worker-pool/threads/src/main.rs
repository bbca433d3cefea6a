// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use tracing_subscriber::EnvFilter;
use worker_pool_pair_sum::{run_demo, DemoArgs, DemoConfig};
use worker_pool_threads::{AtomicShutdownSignal, ThreadRuntime};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = DemoArgs::parse();
    let config = DemoConfig::resolve(&args);

    let shutdown = AtomicShutdownSignal::new();
    let ctrl_c_signal = shutdown.clone();
    ctrlc::set_handler(move || {
        println!("\n\n=== Ctrl+C received, initiating shutdown ===");
        ctrl_c_signal.shutdown();
    })?;

    run_demo(ThreadRuntime::new(), shutdown, &config).await
}
