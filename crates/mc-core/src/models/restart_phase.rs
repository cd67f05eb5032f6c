/// Where a single restart invocation currently is.
///
/// `Idle → Actuating → {ActuationFailed | Watching → {Detected | TimedOut}}`
#[derive(Debug, Clone, PartialEq)]
pub enum RestartPhase {
    /// Nothing has happened yet
    Idle,
    /// Countdown or supervisor call in progress
    Actuating,
    /// The restart action failed; no watch was started
    ActuationFailed { detail: String },
    /// Restart sent, tailing the log for `pattern`
    Watching { pattern: String },
    /// Pattern seen after `elapsed_secs`
    Detected { elapsed_secs: f64 },
    /// Deadline reached without a match
    TimedOut { elapsed_secs: f64 },
}

impl RestartPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::ActuationFailed { .. } | Self::Detected { .. } | Self::TimedOut { .. }
        )
    }
}
