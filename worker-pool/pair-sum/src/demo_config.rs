// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use worker_pool_core::{load_json, load_json_or_default, ConfigError, FailurePolicy, PoolConfig};

/// Command line of the demo binaries; flags override the JSON configuration
#[derive(Debug, Clone, Parser)]
#[command(about = "Sum pairs of numbers on a pool of workers")]
pub struct DemoArgs {
    /// JSON configuration file
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Number of workers
    #[arg(long)]
    pub workers: Option<usize>,

    /// Number of pairs to submit
    #[arg(long)]
    pub items: Option<usize>,

    /// Draw random pairs instead of (i, i + 2)
    #[arg(long)]
    pub random: bool,

    /// Stop the whole pool at the first failed item
    #[arg(long)]
    pub fail_fast: bool,

    /// Skip the sequential vs parallel timing comparison
    #[arg(long)]
    pub skip_timing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    #[serde(flatten)]
    pub pool: PoolConfig,
    pub num_items: usize,
    pub random: bool,
    pub max_value: i64,
    pub power_values: Vec<u64>,
    pub power_delay_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            pool: PoolConfig::default(),
            num_items: 25,
            random: false,
            max_value: 1_000,
            power_values: vec![2, 3, 4, 5, 6],
            power_delay_ms: 200,
        }
    }
}

impl DemoConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_json(path)
    }

    /// Loads the configuration file named in `args`, then applies the flags
    pub fn resolve(args: &DemoArgs) -> Self {
        load_json_or_default::<Self>(&args.config).with_overrides(args)
    }

    pub fn with_overrides(mut self, args: &DemoArgs) -> Self {
        if let Some(workers) = args.workers {
            self.pool.num_workers = workers;
        }
        if let Some(items) = args.items {
            self.num_items = items;
        }
        if args.random {
            self.random = true;
        }
        if args.fail_fast {
            self.pool.failure_policy = FailurePolicy::FailFast;
        }
        if args.skip_timing {
            self.power_values.clear();
        }
        self
    }
}
