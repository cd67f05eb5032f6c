use std::time::Duration;

/// How a log watch ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchResult {
    pub detected: bool,
    pub elapsed_secs: f64,
}

impl WatchResult {
    pub fn new(detected: bool, elapsed: Duration) -> Self {
        Self {
            detected,
            elapsed_secs: elapsed.as_secs_f64(),
        }
    }
}
