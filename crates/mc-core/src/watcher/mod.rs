//! Following a log file for one matching line under a deadline.

mod line_source;
mod log_tail_watcher;
pub(crate) mod tail_process;

pub use line_source::{LineSource, LogFollower};
pub use log_tail_watcher::{DEFAULT_POLL_INTERVAL, LogTailWatcher};
pub use tail_process::{DEFAULT_TERMINATE_GRACE, TailFollower, TailProcess};
