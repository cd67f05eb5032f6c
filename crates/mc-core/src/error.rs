use mc_proto::ProtoError;

use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure of the restart action itself. Fatal to the invocation and never
/// retried.
#[derive(Error, Debug)]
pub enum ActuationError {
    #[error("Console error: {source} {location}")]
    Console {
        #[source]
        source: ProtoError,
        location: ErrorLocation,
    },

    #[error("{program} restart {unit} failed with exit code {code:?}: {stderr} {location}")]
    SupervisorFailed {
        program: String,
        unit: String,
        code: Option<i32>,
        stderr: String,
        location: ErrorLocation,
    },

    #[error("Failed to run {program}: {source} {location}")]
    SupervisorSpawn {
        program: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Actuation task failed: {message} {location}")]
    Task {
        message: String,
        location: ErrorLocation,
    },
}

impl ActuationError {
    #[track_caller]
    pub fn task<S: Into<String>>(message: S) -> Self {
        Self::Task {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text shown to whoever asked for the restart. Supervisor failures
    /// report the supervisor's own stderr when it wrote any.
    pub fn detail(&self) -> String {
        match self {
            Self::SupervisorFailed { stderr, .. } if !stderr.is_empty() => stderr.clone(),
            Self::SupervisorFailed { code, .. } => match code {
                Some(code) => format!("exited with status {code}"),
                None => String::from("terminated by signal"),
            },
            Self::Console { source, .. } => source.to_string(),
            Self::SupervisorSpawn { program, source, .. } => {
                format!("could not run {program}: {source}")
            }
            Self::Task { message, .. } => message.clone(),
        }
    }
}

impl From<ProtoError> for ActuationError {
    #[track_caller]
    fn from(source: ProtoError) -> Self {
        Self::Console {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid restart request: {message} {location}")]
    InvalidRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("Rejected artifact {filename}: {reason} {location}")]
    RejectedArtifact {
        filename: String,
        reason: &'static str,
        location: ErrorLocation,
    },

    #[error("Failed to deploy to {path}: {source} {location}")]
    Deploy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ActuationResult<T> = StdResult<T, ActuationError>;
pub type CoreResult<T> = StdResult<T, CoreError>;
