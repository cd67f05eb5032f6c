use mc_config::ConfigError;
use mc_core::{ActuationError, CoreError};

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CtlError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Permission denied: none of the given roles may run commands {location}")]
    AccessDenied { location: ErrorLocation },

    #[error("{source}")]
    Core {
        #[from]
        source: CoreError,
    },

    #[error("Restart failed: {}", .source.detail())]
    Actuation {
        #[from]
        source: ActuationError,
    },

    #[error("IO error: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl CtlError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn access_denied() -> Self {
        Self::AccessDenied {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for CtlError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CtlError>;
