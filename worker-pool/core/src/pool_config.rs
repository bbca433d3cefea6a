// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::FailurePolicy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Pool settings, loadable from a JSON file
/// Missing fields take their default values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub num_workers: usize,
    pub failure_policy: FailurePolicy,
    pub queue_capacity: Option<usize>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            num_workers: 5,
            failure_policy: FailurePolicy::default(),
            queue_capacity: None,
        }
    }
}

impl PoolConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_json(path)
    }

    /// Like `load`, but falls back to the defaults when the file is unusable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        load_json_or_default(path)
    }
}

/// Reads and deserializes a JSON configuration file
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a JSON configuration file, falling back to `T::default()` when it
/// is missing or malformed
pub fn load_json_or_default<T: DeserializeOwned + Default>(path: impl AsRef<Path>) -> T {
    let path = path.as_ref();
    match load_json(path) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "using default configuration");
            T::default()
        }
    }
}
