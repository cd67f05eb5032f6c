use crate::{ActuationError, ActuationResult, SUPERVISOR_PROGRAM};

use std::panic::Location;
use std::process::Stdio;

use error_location::ErrorLocation;
use log::{info, warn};
use tokio::process::Command;

/// `<program> restart <unit>`; `systemctl` in production.
#[derive(Debug, Clone)]
pub struct SupervisorCommand {
    program: String,
    unit: String,
}

impl SupervisorCommand {
    pub fn systemctl(unit: impl Into<String>) -> Self {
        Self::new(SUPERVISOR_PROGRAM, unit)
    }

    pub fn new(program: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            unit: unit.into(),
        }
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Run the restart once. A non-zero exit carries the trimmed stderr.
    pub async fn restart(&self) -> ActuationResult<()> {
        info!("Running {} restart {}", self.program, self.unit);

        let output = Command::new(&self.program)
            .arg("restart")
            .arg(&self.unit)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ActuationError::SupervisorSpawn {
                program: self.program.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        if output.status.success() {
            info!("{} restart {} succeeded", self.program, self.unit);
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!(
            "{} restart {} failed ({:?}): {stderr}",
            self.program,
            self.unit,
            output.status.code()
        );

        Err(ActuationError::SupervisorFailed {
            program: self.program.clone(),
            unit: self.unit.clone(),
            code: output.status.code(),
            stderr,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
