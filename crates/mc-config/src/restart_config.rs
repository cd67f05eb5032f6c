use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COUNTDOWN_SECS, DEFAULT_STARTUP_TIMEOUT_SECS,
    DEFAULT_SYSTEMD_UNIT, MAX_COUNTDOWN_SECS, MAX_STARTUP_TIMEOUT_SECS, MIN_STARTUP_TIMEOUT_SECS,
    RestartMethod,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RestartConfig {
    pub method: RestartMethod,
    /// systemd unit restarted by the local supervisor method
    pub systemd_unit: String,
    /// Seconds of in-game warning before `stop`
    pub countdown_secs: u64,
    /// How long to watch the log for startup before giving up
    pub startup_timeout_secs: u64,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            method: RestartMethod::default(),
            systemd_unit: String::from(DEFAULT_SYSTEMD_UNIT),
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
            startup_timeout_secs: DEFAULT_STARTUP_TIMEOUT_SECS,
        }
    }
}

impl RestartConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.countdown_secs > MAX_COUNTDOWN_SECS {
            return Err(ConfigError::restart(format!(
                "restart.countdown_secs must be 0-{}, got {}",
                MAX_COUNTDOWN_SECS, self.countdown_secs
            )));
        }

        if self.startup_timeout_secs < MIN_STARTUP_TIMEOUT_SECS
            || self.startup_timeout_secs > MAX_STARTUP_TIMEOUT_SECS
        {
            return Err(ConfigError::restart(format!(
                "restart.startup_timeout_secs must be {}-{}, got {}",
                MIN_STARTUP_TIMEOUT_SECS, MAX_STARTUP_TIMEOUT_SECS, self.startup_timeout_secs
            )));
        }

        if self.method == RestartMethod::LocalSupervisor && self.systemd_unit.trim().is_empty() {
            return Err(ConfigError::restart(
                "restart.systemd_unit is required for LOCAL_SYSTEMD",
            ));
        }

        Ok(())
    }
}
