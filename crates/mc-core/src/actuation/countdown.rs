use std::time::Duration;

pub const STOPPING_NOW_BROADCAST: &str = "say Stopping now...";
pub const STOP_COMMAND: &str = "stop";

/// Seconds (besides the first) at which a per-second notice is broadcast.
/// Everything else is a silent one-second wait.
pub const CHECKPOINTS_BELOW: [u64; 6] = [10, 5, 4, 3, 2, 1];

const STEP: Duration = Duration::from_secs(1);

/// One step of the console restart script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownStep {
    /// Best-effort console command; failure is logged and skipped
    Broadcast(String),
    /// Pause before the next step
    Wait(Duration),
    /// The final `stop`; its failure fails the restart
    Stop,
}

/// The full restart script for a countdown, computed up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownPlan {
    steps: Vec<CountdownStep>,
}

impl CountdownPlan {
    pub fn new(countdown_secs: u64) -> Self {
        let mut steps = vec![CountdownStep::Broadcast(format!(
            "say Server restarting in {countdown_secs} seconds..."
        ))];

        for second in (1..=countdown_secs).rev() {
            if second == countdown_secs || CHECKPOINTS_BELOW.contains(&second) {
                steps.push(CountdownStep::Broadcast(format!(
                    "say Restarting in {second}..."
                )));
            }
            steps.push(CountdownStep::Wait(STEP));
        }

        steps.push(CountdownStep::Broadcast(String::from(STOPPING_NOW_BROADCAST)));
        steps.push(CountdownStep::Stop);

        Self { steps }
    }

    pub fn steps(&self) -> &[CountdownStep] {
        &self.steps
    }

    /// Sum of all waits in the plan.
    pub fn duration(&self) -> Duration {
        self.steps
            .iter()
            .map(|step| match step {
                CountdownStep::Wait(d) => *d,
                _ => Duration::ZERO,
            })
            .sum()
    }
}

impl IntoIterator for CountdownPlan {
    type Item = CountdownStep;
    type IntoIter = std::vec::IntoIter<CountdownStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
