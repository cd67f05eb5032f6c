use crate::{CoreError, CoreResult};

use mc_config::{RestartConfig, RestartMethod};

use std::time::Duration;

/// One restart invocation. Validated on construction and immutable after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartRequest {
    watch_hint: Option<String>,
    countdown_secs: u64,
    timeout_secs: u64,
    method: RestartMethod,
}

impl RestartRequest {
    #[track_caller]
    pub fn new(
        method: RestartMethod,
        countdown_secs: u64,
        timeout_secs: u64,
        watch_hint: Option<String>,
    ) -> CoreResult<Self> {
        if timeout_secs == 0 {
            return Err(CoreError::invalid_request("timeout_secs must be > 0"));
        }

        Ok(Self {
            watch_hint: watch_hint.filter(|h| !h.trim().is_empty()),
            countdown_secs,
            timeout_secs,
            method,
        })
    }

    /// Request built from the configured method, countdown and startup timeout.
    #[track_caller]
    pub fn from_config(config: &RestartConfig, watch_hint: Option<String>) -> CoreResult<Self> {
        Self::new(
            config.method,
            config.countdown_secs,
            config.startup_timeout_secs,
            watch_hint,
        )
    }

    pub fn watch_hint(&self) -> Option<&str> {
        self.watch_hint.as_deref()
    }

    pub fn countdown_secs(&self) -> u64 {
        self.countdown_secs
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn method(&self) -> RestartMethod {
        self.method
    }
}
