use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

const LOCAL_SYSTEMD: &str = "LOCAL_SYSTEMD";
const RCON: &str = "RCON";

/// How a restart is actuated.
///
/// Exactly one of these runs per restart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestartMethod {
    /// Countdown broadcasts then `stop` over RCON; an external wrapper brings
    /// the server back up.
    #[default]
    RemoteConsole,
    /// `systemctl restart <unit>` on this host.
    LocalSupervisor,
}

impl RestartMethod {
    /// Only an explicit `LOCAL_SYSTEMD` selects the supervisor; every other
    /// value falls back to RCON.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case(LOCAL_SYSTEMD) {
            RestartMethod::LocalSupervisor
        } else {
            RestartMethod::RemoteConsole
        }
    }
}

impl FromStr for RestartMethod {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RestartMethod::parse(s))
    }
}

impl<'de> Deserialize<'de> for RestartMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(RestartMethod::parse(&s))
    }
}

impl fmt::Display for RestartMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestartMethod::RemoteConsole => f.write_str(RCON),
            RestartMethod::LocalSupervisor => f.write_str(LOCAL_SYSTEMD),
        }
    }
}
