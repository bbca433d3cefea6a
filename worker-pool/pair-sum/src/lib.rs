// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod demo;
pub use demo::run_demo;

pub mod demo_config;
pub use demo_config::{DemoArgs, DemoConfig};

pub mod pair;
pub use pair::{describe, generate_pairs, generate_random_pairs, sum_pair, Pair, PairSumError};

pub mod timing;
pub use timing::{compare_timing, PowerJob, TimingComparison};
