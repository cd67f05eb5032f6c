use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtoError {
    #[error("IO error: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Connection to {addr} timed out after {timeout_ms}ms {location}")]
    Timeout {
        addr: String,
        timeout_ms: u64,
        location: ErrorLocation,
    },

    #[error("RCON authentication rejected by {addr} {location}")]
    AuthenticationFailed {
        addr: String,
        location: ErrorLocation,
    },

    #[error("Connection closed by peer {location}")]
    ConnectionClosed { location: ErrorLocation },

    #[error("Malformed packet: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid status response: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl ProtoError {
    #[track_caller]
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::Malformed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn closed() -> Self {
        Self::ConnectionClosed {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the peer went away (EOF or reset) rather than sending garbage.
    pub fn is_disconnect(&self) -> bool {
        match self {
            Self::ConnectionClosed { .. } => true,
            Self::Io { source, .. } => matches!(
                source.kind(),
                std::io::ErrorKind::UnexpectedEof
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
                    | std::io::ErrorKind::BrokenPipe
            ),
            _ => false,
        }
    }
}

impl From<std::io::Error> for ProtoError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ProtoError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProtoError>;
