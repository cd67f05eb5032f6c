//! Restart-and-verify: actuate once, then watch the log for proof the
//! server came back.

use crate::{
    ActuationBackend, ActuationError, ActuationOutcome, ActuationResult, LogTailWatcher,
    RestartMethod, RestartPhase, RestartRequest, WatchPattern, WatchResult,
};

use std::sync::Arc;

use log::{error, info};
use tokio::sync::watch;

/// Composes an actuation backend and a log watcher into one workflow.
///
/// Holds no per-invocation state; concurrent calls each get their own
/// phase channel and tail process.
#[derive(Clone)]
pub struct RestartOrchestrator {
    backend: Arc<dyn ActuationBackend>,
    watcher: LogTailWatcher,
}

impl RestartOrchestrator {
    pub fn new(backend: Arc<dyn ActuationBackend>, watcher: LogTailWatcher) -> Self {
        Self { backend, watcher }
    }

    /// Restart and wait for the startup (or artifact) line.
    ///
    /// An actuation failure is returned as an error and no watch starts. A
    /// watch that runs out of time is a normal `detected: false` result.
    pub async fn execute(&self, request: &RestartRequest) -> ActuationResult<WatchResult> {
        let (phase_tx, _phase_rx) = watch::channel(RestartPhase::Idle);
        self.execute_observed(request, &phase_tx).await
    }

    /// Same as `execute`, publishing each phase transition on `phase`.
    pub async fn execute_observed(
        &self,
        request: &RestartRequest,
        phase: &watch::Sender<RestartPhase>,
    ) -> ActuationResult<WatchResult> {
        self.actuate_observed(request, phase).await?;

        let pattern = WatchPattern::from_hint(request.watch_hint());
        info!(
            "Watching for '{pattern}' (timeout {}s)",
            request.timeout_secs()
        );
        phase.send_replace(RestartPhase::Watching {
            pattern: pattern.to_string(),
        });

        let result = self.watcher.watch_for(&pattern, request.timeout()).await;

        phase.send_replace(if result.detected {
            RestartPhase::Detected {
                elapsed_secs: result.elapsed_secs,
            }
        } else {
            RestartPhase::TimedOut {
                elapsed_secs: result.elapsed_secs,
            }
        });

        Ok(result)
    }

    /// Run only the actuation half of the workflow.
    pub async fn actuate(&self, request: &RestartRequest) -> ActuationResult<()> {
        let (phase_tx, _phase_rx) = watch::channel(RestartPhase::Idle);
        self.actuate_observed(request, &phase_tx).await
    }

    async fn actuate_observed(
        &self,
        request: &RestartRequest,
        phase: &watch::Sender<RestartPhase>,
    ) -> ActuationResult<()> {
        phase.send_replace(RestartPhase::Actuating);

        let result = match request.method() {
            RestartMethod::LocalSupervisor => self.backend.restart_local().await,
            RestartMethod::RemoteConsole => {
                let backend = Arc::clone(&self.backend);
                let countdown = request.countdown_secs();
                tokio::spawn(async move { backend.restart_remote(countdown).await })
                    .await
                    .unwrap_or_else(|e| Err(ActuationError::task(e.to_string())))
            }
        };

        if let Some(detail) = ActuationOutcome::from(&result).error_detail {
            error!("Restart via {} failed: {detail}", request.method());
            phase.send_replace(RestartPhase::ActuationFailed { detail });
        }

        result
    }
}
