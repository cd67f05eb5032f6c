pub mod actuation_outcome;
pub mod restart_phase;
pub mod restart_request;
pub mod watch_pattern;
pub mod watch_result;
