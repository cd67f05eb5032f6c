pub mod access_policy;
pub mod actuation;
pub mod artifact_registry;
pub mod deploy;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod status_probe;
pub mod watcher;

#[cfg(test)]
mod tests;

pub use access_policy::AccessPolicy;
pub use actuation::{
    ActuationBackend, ConsoleConnector, ConsoleSession, CountdownPlan, CountdownStep,
    RconConnector, STOP_COMMAND, STOPPING_NOW_BROADCAST, ServerActuator, SupervisorCommand,
};
pub use artifact_registry::ArtifactRegistry;
pub use deploy::deploy_artifact;
pub use error::{ActuationError, ActuationResult, CoreError, CoreResult};
pub use models::actuation_outcome::ActuationOutcome;
pub use models::restart_phase::RestartPhase;
pub use models::restart_request::RestartRequest;
pub use models::watch_pattern::WatchPattern;
pub use models::watch_result::WatchResult;
pub use orchestrator::RestartOrchestrator;
pub use status_probe::{OFFLINE_SUMMARY, StatusProbe, render_status};
pub use watcher::{LineSource, LogFollower, LogTailWatcher, TailFollower, TailProcess};

pub use mc_config::RestartMethod;

pub const SUPERVISOR_PROGRAM: &str = "systemctl";
