//! The two ways a restart is carried out.

mod backend;
mod console;
mod countdown;
mod server_actuator;
mod supervisor;

pub use backend::ActuationBackend;
pub use console::{ConsoleConnector, ConsoleSession, RconConnector};
pub use countdown::{
    CHECKPOINTS_BELOW, CountdownPlan, CountdownStep, STOP_COMMAND, STOPPING_NOW_BROADCAST,
};
pub use server_actuator::ServerActuator;
pub use supervisor::SupervisorCommand;
