// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use worker_pool_pair_sum::{run_demo, DemoArgs, DemoConfig};
use worker_pool_tasks::{TokenShutdownSignal, TokioRuntime};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = DemoArgs::parse();
    let config = DemoConfig::resolve(&args);

    let cancel_token = CancellationToken::new();

    // Setup Ctrl+C handler
    let ctrl_c_token = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\n\n=== Ctrl+C received, initiating shutdown ===");
            ctrl_c_token.cancel();
        }
    });

    run_demo(TokioRuntime, TokenShutdownSignal::new(cancel_token), &config).await
}
