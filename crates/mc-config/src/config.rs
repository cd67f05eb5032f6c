use crate::{
    AccessConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError,
    ConfigErrorResult, LoggingConfig, RconConfig, RestartConfig, RestartMethod, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub rcon: RconConfig,
    pub server: ServerConfig,
    pub restart: RestartConfig,
    pub access: AccessConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for MCC_CONFIG_DIR env var, else use ./.mcctl/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: MCC_CONFIG_DIR env var > ./.mcctl/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.rcon.validate()?;
        self.server.validate()?;
        self.restart.validate()?;

        if self.restart.method == RestartMethod::RemoteConsole && self.rcon.password().is_none() {
            return Err(ConfigError::rcon(
                "rcon.password is required when restart.method is RCON",
            ));
        }

        Ok(())
    }

    /// Host answering status pings.
    pub fn status_host(&self) -> &str {
        self.server
            .status_host
            .as_deref()
            .filter(|h| !h.is_empty())
            .unwrap_or(&self.rcon.host)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  rcon: {}:{} (password {}, timeout {}s)",
            self.rcon.host,
            self.rcon.port,
            if self.rcon.password().is_some() {
                "set"
            } else {
                "unset"
            },
            self.rcon.timeout_secs
        );
        info!(
            "  server: dir={}, log={}, mods={}",
            self.server.dir,
            self.server.log_file().display(),
            self.server.mods_path().display()
        );
        info!(
            "  status: {}:{}",
            self.status_host(),
            self.server.status_port
        );
        info!(
            "  restart: method={}, unit={}, countdown={}s, timeout={}s",
            self.restart.method,
            self.restart.systemd_unit,
            self.restart.countdown_secs,
            self.restart.startup_timeout_secs
        );
        info!(
            "  access: guild={}, role={}",
            self.access
                .guild_id
                .map_or_else(|| String::from("any"), |g| g.to_string()),
            self.access.allowed_role_id.as_deref().unwrap_or("any")
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // RCON
        Self::apply_env_string("RCON_HOST", &mut self.rcon.host);
        Self::apply_env_parse("RCON_PORT", &mut self.rcon.port);
        Self::apply_env_option_string("RCON_PASSWORD", &mut self.rcon.password);
        Self::apply_env_parse("RCON_TIMEOUT_SECONDS", &mut self.rcon.timeout_secs);

        // Server
        Self::apply_env_string("MC_DIR", &mut self.server.dir);
        Self::apply_env_string("MC_LOG_PATH", &mut self.server.log_path);
        Self::apply_env_string("MC_MODS_DIR", &mut self.server.mods_dir);
        Self::apply_env_option_string("MC_STATUS_HOST", &mut self.server.status_host);
        Self::apply_env_parse("MC_STATUS_PORT", &mut self.server.status_port);

        // Restart
        Self::apply_env_parse("RESTART_METHOD", &mut self.restart.method);
        Self::apply_env_string("SYSTEMD_UNIT", &mut self.restart.systemd_unit);
        Self::apply_env_parse(
            "RESTART_COUNTDOWN_SECONDS",
            &mut self.restart.countdown_secs,
        );
        Self::apply_env_parse(
            "STARTUP_TIMEOUT_SECONDS",
            &mut self.restart.startup_timeout_secs,
        );

        // Access
        Self::apply_env_option_parse("GUILD_ID", &mut self.access.guild_id);
        Self::apply_env_option_string("ALLOWED_ROLE_ID", &mut self.access.allowed_role_id);

        // Logging
        Self::apply_env_parse("MCC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_option_string("MCC_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("MCC_LOG_COLORED", &mut self.logging.colored);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name)
            && !val.is_empty()
        {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<T> parseable values
    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = Some(parsed);
        }
    }

    /// Helper: Apply environment variable override for Option<String> values.
    /// Empty values are treated as unset.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name)
            && !val.is_empty()
        {
            *target = Some(val);
        }
    }
}
