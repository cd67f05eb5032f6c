use crate::watcher::{LineSource, LogFollower};
use crate::{WatchPattern, WatchResult};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::time::Instant;

/// Upper bound on a single read; also the back-off after a broken stream.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Watches a log for the first line matching a pattern, under a deadline.
#[derive(Clone)]
pub struct LogTailWatcher {
    follower: Arc<dyn LogFollower>,
    poll_interval: Duration,
}

impl LogTailWatcher {
    pub fn new(follower: Arc<dyn LogFollower>) -> Self {
        Self {
            follower,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Follow the log until `pattern` matches or `timeout` passes.
    ///
    /// The line source is terminated before this returns, whichever way the
    /// watch ends.
    pub async fn watch_for(&self, pattern: &WatchPattern, timeout: Duration) -> WatchResult {
        let started = Instant::now();

        let mut source = match self.follower.follow().await {
            Ok(source) => Some(source),
            Err(e) => {
                warn!("Could not follow log: {e}");
                None
            }
        };

        let detected = self
            .poll_until_match(source.as_deref_mut(), pattern, started, timeout)
            .await;
        let elapsed = started.elapsed();

        if let Some(source) = source.as_mut()
            && let Err(e) = source.terminate().await
        {
            warn!("Failed to stop log follower: {e}");
        }

        if detected {
            info!("Matched '{pattern}' after {:.1}s", elapsed.as_secs_f64());
        } else {
            info!(
                "No '{pattern}' within {}s, giving up",
                timeout.as_secs()
            );
        }

        WatchResult::new(detected, elapsed)
    }

    async fn poll_until_match(
        &self,
        mut source: Option<&mut (dyn LineSource + 'static)>,
        pattern: &WatchPattern,
        started: Instant,
        timeout: Duration,
    ) -> bool {
        loop {
            let elapsed = started.elapsed();
            if elapsed >= timeout {
                return false;
            }
            let remaining = timeout - elapsed;
            let poll = self.poll_interval.min(remaining);

            let Some(source) = source.as_deref_mut() else {
                // Nothing to read; the deadline still decides the outcome
                tokio::time::sleep(remaining).await;
                continue;
            };

            match tokio::time::timeout(poll, source.next_line()).await {
                Err(_) => {}
                Ok(Ok(Some(line))) => {
                    if pattern.matches(&line) {
                        return true;
                    }
                }
                Ok(Ok(None)) => {
                    debug!("Log stream ended, waiting out the deadline");
                    tokio::time::sleep(poll).await;
                }
                Ok(Err(e)) => {
                    debug!("Log read failed: {e}");
                    tokio::time::sleep(poll).await;
                }
            }
        }
    }
}
