//! Session configuration.
//!
//! Defaults suit most callers. Deployments can override them through
//! environment variables via [`SessionConfig::from_env()`].

use crate::{Error, Result};
use std::env;

pub const ENV_VAR_MAX_CONTAINER_LEN: &str = "TIERED_SERDE_MAX_CONTAINER_LEN";
pub const ENV_VAR_BUFFER_CAPACITY: &str = "TIERED_SERDE_BUFFER_CAPACITY";

/// Upper bound on a decoded element count, unless overridden.
pub const DEFAULT_MAX_CONTAINER_LEN: usize = 1 << 26;

pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Decoded counts above this are rejected before anything is allocated.
    /// `None` trusts the stream.
    pub max_container_len: Option<usize>,

    /// Capacity of the buffer a session wraps around its stream.
    pub buffer_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_container_len: Some(DEFAULT_MAX_CONTAINER_LEN),
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl SessionConfig {
    pub fn unbounded() -> Self {
        Self {
            max_container_len: None,
            ..Self::default()
        }
    }

    pub fn with_max_container_len(mut self, limit: Option<usize>) -> Self {
        self.max_container_len = limit;
        self
    }

    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Defaults, overridden by whichever env vars are set.
    ///
    /// `TIERED_SERDE_MAX_CONTAINER_LEN=none` disables the length bound.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(val) = lookup(ENV_VAR_MAX_CONTAINER_LEN) {
            let val = val.trim();
            config.max_container_len = if val.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(parse_usize(ENV_VAR_MAX_CONTAINER_LEN, val)?)
            };
        }

        if let Some(val) = lookup(ENV_VAR_BUFFER_CAPACITY) {
            config.buffer_capacity = parse_usize(ENV_VAR_BUFFER_CAPACITY, val.trim())?;
        }

        Ok(config)
    }
}

fn parse_usize(key: &str, val: &str) -> Result<usize> {
    val.parse::<usize>()
        .map_err(|e| Error::Config(format!("{key}={val:?}: {e}")))
}
