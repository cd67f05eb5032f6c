
use mc_config::Config;

use tempfile::TempDir;

/// Config whose server directory is a fresh temp dir.
pub(crate) fn temp_config() -> (TempDir, Config) {
    let temp = TempDir::new().unwrap();
    let mut config = Config::default();
    config.server.dir = temp.path().to_string_lossy().into_owned();
    config.rcon.password = Some(String::from("hunter2"));
    (temp, config)
}

/// A jar-looking file outside the mods directory.
pub(crate) fn upload(temp: &TempDir, name: &str) -> std::path::PathBuf {
    let path = temp.path().join(name);
    std::fs::write(&path, b"PK\x03\x04").unwrap();
    path
}
