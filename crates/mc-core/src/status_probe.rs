use mc_proto::{StatusResponse, ping_status};

use std::time::Duration;

use log::debug;

pub const OFFLINE_SUMMARY: &str = "Offline or unreachable";
pub const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// One-shot Server List Ping rendered for humans. Never fails; anything
/// that goes wrong reads as offline.
#[derive(Debug, Clone, Copy)]
pub struct StatusProbe {
    timeout: Duration,
}

impl Default for StatusProbe {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_TIMEOUT)
    }
}

impl StatusProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub async fn query(&self, host: &str, port: u16) -> String {
        match ping_status(host, port, self.timeout).await {
            Ok(status) => render_status(&status),
            Err(e) => {
                debug!("Status query to {host}:{port} failed: {e}");
                String::from(OFFLINE_SUMMARY)
            }
        }
    }
}

pub fn render_status(status: &StatusResponse) -> String {
    format!(
        "Online: {}/{} players | Version: {}",
        status.players.online, status.players.max, status.version.name
    )
}
