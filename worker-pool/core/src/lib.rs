// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod completion_report;
pub use completion_report::CompletionReport;

pub mod failure_policy;
pub use failure_policy::FailurePolicy;

pub mod pool_config;
pub use pool_config::{load_json, load_json_or_default, ConfigError, PoolConfig};

pub mod pool_error;
pub use pool_error::{PoolError, SpawnError};

pub mod result_queue;
pub use result_queue::ResultQueue;

pub mod result_record;
pub use result_record::ResultRecord;

pub mod shutdown_signal;
pub use shutdown_signal::{NeverShutdown, ShutdownSignal};

pub mod work_function;
pub use work_function::WorkFunction;

pub mod work_queue;
pub use work_queue::{PushError, Take, WorkQueue};

mod worker;
pub use worker::{ProcessingFailure, WorkerReport};

pub mod worker_id;
pub use worker_id::WorkerId;

pub mod worker_pool;
pub use worker_pool::{WorkerHandle, WorkerPool};

pub mod worker_runtime;
pub use worker_runtime::WorkerRuntime;
