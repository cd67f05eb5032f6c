mod access_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod rcon_config;
mod restart_config;
mod restart_method;
mod server_config;

#[cfg(test)]
mod tests;

pub use access_config::AccessConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rcon_config::RconConfig;
pub use restart_config::RestartConfig;
pub use restart_method::RestartMethod;
pub use server_config::ServerConfig;

const DEFAULT_RCON_HOST: &str = "127.0.0.1";
const DEFAULT_RCON_PORT: u16 = 25575;
const DEFAULT_STATUS_PORT: u16 = 25565;
const DEFAULT_SERVER_DIR: &str = ".";
const DEFAULT_LOG_PATH: &str = "logs/latest.log";
const DEFAULT_MODS_DIR: &str = "mods";
const DEFAULT_SYSTEMD_UNIT: &str = "minecraft";
const DEFAULT_COUNTDOWN_SECS: u64 = 10;
const DEFAULT_STARTUP_TIMEOUT_SECS: u64 = 240;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

const MAX_COUNTDOWN_SECS: u64 = 600;
const MIN_STARTUP_TIMEOUT_SECS: u64 = 1;
const MAX_STARTUP_TIMEOUT_SECS: u64 = 3600;

const CONFIG_DIR_ENV: &str = "MCC_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".mcctl";
const CONFIG_FILE_NAME: &str = "config.toml";
