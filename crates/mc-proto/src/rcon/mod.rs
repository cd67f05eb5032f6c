pub mod client;
pub mod packet;

pub use client::RconClient;
pub use packet::{
    AUTH_FAILED_ID, MAX_COMMAND_LEN, RconPacket, SERVERDATA_AUTH, SERVERDATA_AUTH_RESPONSE,
    SERVERDATA_EXECCOMMAND, SERVERDATA_RESPONSE_VALUE,
};
