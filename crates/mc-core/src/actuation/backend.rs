use crate::ActuationResult;

use async_trait::async_trait;

/// The restart actions a server can be asked to perform.
///
/// Stateless per call; exactly one of the two runs per restart request.
#[async_trait]
pub trait ActuationBackend: Send + Sync {
    /// Warn players over the console for `countdown_secs`, then `stop`.
    async fn restart_remote(&self, countdown_secs: u64) -> ActuationResult<()>;

    /// Ask the local process supervisor to restart the server unit.
    async fn restart_local(&self) -> ActuationResult<()>;
}
