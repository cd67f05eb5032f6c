use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_PATH, DEFAULT_MODS_DIR, DEFAULT_SERVER_DIR,
    DEFAULT_STATUS_PORT,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Where the Minecraft server lives on this host.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server root directory
    pub dir: String,
    /// Log file watched after a restart. Relative paths resolve against `dir`
    pub log_path: String,
    /// Mods directory. Relative paths resolve against `dir`
    pub mods_dir: String,
    /// Host answering status pings. None = same host as RCON
    pub status_host: Option<String>,
    pub status_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_SERVER_DIR),
            log_path: String::from(DEFAULT_LOG_PATH),
            mods_dir: String::from(DEFAULT_MODS_DIR),
            status_host: None,
            status_port: DEFAULT_STATUS_PORT,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.log_path.trim().is_empty() {
            return Err(ConfigError::server("server.log_path must not be empty"));
        }

        if self.mods_dir.trim().is_empty() {
            return Err(ConfigError::server("server.mods_dir must not be empty"));
        }

        if self.status_port == 0 {
            return Err(ConfigError::server("server.status_port must be non-zero"));
        }

        Ok(())
    }

    pub fn log_file(&self) -> PathBuf {
        self.resolve(&self.log_path)
    }

    pub fn mods_path(&self) -> PathBuf {
        self.resolve(&self.mods_dir)
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            Path::new(&self.dir).join(path)
        }
    }
}
