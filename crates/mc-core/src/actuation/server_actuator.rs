use crate::actuation::{
    ActuationBackend, ConsoleConnector, ConsoleSession, CountdownPlan, CountdownStep,
    STOP_COMMAND, SupervisorCommand,
};
use crate::{ActuationError, ActuationResult};

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};

/// Production backend: RCON for the remote path, a supervisor command for
/// the local one.
#[derive(Clone)]
pub struct ServerActuator {
    console: Arc<dyn ConsoleConnector>,
    supervisor: SupervisorCommand,
}

impl ServerActuator {
    pub fn new(console: Arc<dyn ConsoleConnector>, supervisor: SupervisorCommand) -> Self {
        Self {
            console,
            supervisor,
        }
    }

    /// A hang-up on `stop` is the server shutting down only if the session
    /// was still alive up to that point.
    async fn run_plan(
        session: &mut dyn ConsoleSession,
        plan: CountdownPlan,
    ) -> ActuationResult<()> {
        let mut session_lost = false;

        for step in plan {
            match step {
                CountdownStep::Broadcast(command) => {
                    if let Err(e) = session.send(&command).await {
                        session_lost |= e.is_disconnect();
                        debug!("Broadcast '{command}' failed: {e}");
                    }
                }
                CountdownStep::Wait(duration) => tokio::time::sleep(duration).await,
                CountdownStep::Stop => {
                    return match session.send(STOP_COMMAND).await {
                        Ok(_) => Ok(()),
                        Err(e) if e.is_disconnect() && !session_lost => {
                            debug!("Server closed the console on stop: {e}");
                            Ok(())
                        }
                        Err(e) => {
                            if session_lost {
                                warn!("Console session was lost before stop: {e}");
                            }
                            Err(ActuationError::from(e))
                        }
                    };
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl ActuationBackend for ServerActuator {
    async fn restart_remote(&self, countdown_secs: u64) -> ActuationResult<()> {
        let mut session = self.console.connect().await.map_err(|e| {
            warn!("Console connection failed: {e}");
            ActuationError::from(e)
        })?;

        info!("Console connected, {countdown_secs}s countdown started");
        let result = Self::run_plan(session.as_mut(), CountdownPlan::new(countdown_secs)).await;
        session.close().await;

        if result.is_ok() {
            info!("Stop command sent");
        }
        result
    }

    async fn restart_local(&self) -> ActuationResult<()> {
        self.supervisor.restart().await
    }
}
