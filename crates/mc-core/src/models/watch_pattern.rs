use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Vanilla, Forge and Fabric all print this once the world is loaded.
pub const SERVER_READY_PATTERN: &str = r"(?i)Done \([0-9.]+s\)!";

static SERVER_READY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SERVER_READY_PATTERN).expect("server ready regex is valid"));

/// What a log watch is looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchPattern {
    /// Literal substring: the artifact's file name
    Artifact(String),
    /// Generic startup-complete line
    ServerReady,
}

impl WatchPattern {
    /// Artifact pattern from the hint's base name, else the server-ready marker.
    pub fn from_hint(hint: Option<&str>) -> Self {
        hint.map(str::trim)
            .filter(|h| !h.is_empty())
            .map(|h| {
                let name = Path::new(h)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| h.to_string());
                WatchPattern::Artifact(name)
            })
            .unwrap_or(WatchPattern::ServerReady)
    }

    pub fn matches(&self, line: &str) -> bool {
        match self {
            WatchPattern::Artifact(name) => line.contains(name.as_str()),
            WatchPattern::ServerReady => SERVER_READY_RE.is_match(line),
        }
    }
}

impl fmt::Display for WatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchPattern::Artifact(name) => write!(f, "{name}"),
            WatchPattern::ServerReady => f.write_str("server startup"),
        }
    }
}
