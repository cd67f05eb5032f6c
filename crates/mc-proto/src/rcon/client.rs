use crate::rcon::packet::{
    AUTH_FAILED_ID, RconPacket, SERVERDATA_AUTH, SERVERDATA_AUTH_RESPONSE, SERVERDATA_EXECCOMMAND,
};
use crate::{ProtoError, ProtoResult};

use std::panic::Location;
use std::time::Duration;

use bytes::BytesMut;
use error_location::ErrorLocation;
use log::debug;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Authenticated RCON session over one TCP connection.
///
/// Not pooled: open one per command sequence and drop it afterwards.
pub struct RconClient {
    stream: TcpStream,
    addr: String,
    buffer: BytesMut,
    next_id: i32,
    io_timeout: Duration,
}

impl RconClient {
    /// Connect and log in.
    ///
    /// `io_timeout` bounds the TCP connect and every later read.
    pub async fn connect(
        host: &str,
        port: u16,
        password: &str,
        io_timeout: Duration,
    ) -> ProtoResult<Self> {
        let addr = format!("{host}:{port}");

        let stream = tokio::time::timeout(io_timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| ProtoError::Timeout {
                addr: addr.clone(),
                timeout_ms: io_timeout.as_millis() as u64,
                location: ErrorLocation::from(Location::caller()),
            })??;

        let mut client = Self {
            stream,
            addr,
            buffer: BytesMut::with_capacity(4096),
            next_id: 1,
            io_timeout,
        };
        client.login(password).await?;

        debug!("RCON session opened to {}", client.addr);
        Ok(client)
    }

    async fn login(&mut self, password: &str) -> ProtoResult<()> {
        let id = self.allocate_id();
        self.send(&RconPacket::new(id, SERVERDATA_AUTH, password))
            .await?;

        // Some servers emit an empty RESPONSE_VALUE ahead of the auth reply.
        loop {
            let packet = self.read_packet().await?;
            if packet.packet_type != SERVERDATA_AUTH_RESPONSE {
                continue;
            }

            if packet.request_id == AUTH_FAILED_ID {
                return Err(ProtoError::AuthenticationFailed {
                    addr: self.addr.clone(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            if packet.request_id != id {
                return Err(ProtoError::malformed(format!(
                    "auth reply for request {} while waiting on {id}",
                    packet.request_id
                )));
            }

            return Ok(());
        }
    }

    /// Run one console command and return the server's reply text.
    pub async fn command(&mut self, command: &str) -> ProtoResult<String> {
        let id = self.allocate_id();
        self.send(&RconPacket::new(id, SERVERDATA_EXECCOMMAND, command))
            .await?;

        loop {
            let packet = self.read_packet().await?;
            if packet.request_id == id {
                return Ok(packet.body);
            }
            debug!(
                "Skipping RCON packet for request {} (waiting on {id})",
                packet.request_id
            );
        }
    }

    /// Close the connection. Errors are irrelevant once we are done talking.
    pub async fn close(mut self) {
        let _ = self.stream.shutdown().await;
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    async fn send(&mut self, packet: &RconPacket) -> ProtoResult<()> {
        let mut out = BytesMut::new();
        packet.encode(&mut out)?;
        self.stream.write_all(&out).await?;
        self.stream.flush().await?;
        Ok(())
    }

    async fn read_packet(&mut self) -> ProtoResult<RconPacket> {
        loop {
            if let Some(packet) = RconPacket::decode(&mut self.buffer)? {
                return Ok(packet);
            }

            let read = tokio::time::timeout(self.io_timeout, self.stream.read_buf(&mut self.buffer))
                .await
                .map_err(|_| ProtoError::Timeout {
                    addr: self.addr.clone(),
                    timeout_ms: self.io_timeout.as_millis() as u64,
                    location: ErrorLocation::from(Location::caller()),
                })??;

            if read == 0 {
                return Err(ProtoError::closed());
            }
        }
    }
}
