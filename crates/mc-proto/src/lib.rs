//! Client-side wire protocols for talking to a Minecraft server:
//! RCON for console commands and Server List Ping for status.

pub mod error;
pub mod ping;
pub mod rcon;

#[cfg(test)]
mod tests;

pub use error::{ProtoError, Result as ProtoResult};
pub use ping::{StatusPlayers, StatusResponse, StatusVersion, ping_status};
pub use rcon::{RconClient, RconPacket};
