// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod atomic_shutdown_signal;
pub use atomic_shutdown_signal::AtomicShutdownSignal;

mod thread_runtime;
pub use thread_runtime::{ThreadHandle, ThreadJoinError, ThreadRuntime};
