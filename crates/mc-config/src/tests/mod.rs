mod restart_method;

use std::env;

use tempfile::TempDir;

/// Every variable `Config::load` reads as an override.
const OVERRIDE_VARS: [&str; 18] = [
    "RCON_HOST",
    "RCON_PORT",
    "RCON_PASSWORD",
    "RCON_TIMEOUT_SECONDS",
    "MC_DIR",
    "MC_LOG_PATH",
    "MC_MODS_DIR",
    "MC_STATUS_HOST",
    "MC_STATUS_PORT",
    "RESTART_METHOD",
    "SYSTEMD_UNIT",
    "RESTART_COUNTDOWN_SECONDS",
    "STARTUP_TIMEOUT_SECONDS",
    "GUILD_ID",
    "ALLOWED_ROLE_ID",
    "MCC_LOG_LEVEL",
    "MCC_LOG_FILE",
    "MCC_LOG_COLORED",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory pointed to by MCC_CONFIG_DIR, with every override
/// variable cleared for the lifetime of the returned guards.
pub(crate) struct ConfigDir {
    pub(crate) temp: TempDir,
    _dir_guard: EnvGuard,
    _cleared: Vec<EnvGuard>,
}

impl ConfigDir {
    pub(crate) fn write(&self, contents: &str) {
        std::fs::write(self.temp.path().join(crate::CONFIG_FILE_NAME), contents).unwrap();
    }
}

pub(crate) fn setup_config_dir() -> ConfigDir {
    let temp = TempDir::new().unwrap();
    let dir_guard = EnvGuard::set(crate::CONFIG_DIR_ENV, temp.path().to_str().unwrap());
    let cleared = OVERRIDE_VARS.iter().map(|&k| EnvGuard::remove(k)).collect();
    ConfigDir {
        temp,
        _dir_guard: dir_guard,
        _cleared: cleared,
    }
}
