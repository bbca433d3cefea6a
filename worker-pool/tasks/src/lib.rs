// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod token_shutdown_signal;
pub use token_shutdown_signal::TokenShutdownSignal;

mod tokio_runtime;
pub use tokio_runtime::TokioRuntime;
