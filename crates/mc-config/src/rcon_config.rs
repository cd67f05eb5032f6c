use crate::{ConfigError, ConfigErrorResult, DEFAULT_RCON_HOST, DEFAULT_RCON_PORT};

use std::fmt;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct RconConfig {
    pub host: String,
    pub port: u16,
    /// Shared secret for the console. Required when restarting over RCON
    pub password: Option<String>,
    /// Connect and per-reply read timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RconConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_RCON_HOST),
            port: DEFAULT_RCON_PORT,
            password: None,
            timeout_secs: 5,
        }
    }
}

// Hand-written so the password never reaches a log line.
impl fmt::Debug for RconConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RconConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl RconConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::rcon("rcon.host must not be empty"));
        }

        if self.port == 0 {
            return Err(ConfigError::rcon("rcon.port must be non-zero"));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::rcon("rcon.timeout_secs must be > 0"));
        }

        Ok(())
    }

    /// Password, if one is configured and non-empty.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}
