//! Server List Ping: the unauthenticated status exchange every Java edition
//! server answers on its game port.

use crate::ping::varint::{get_string, get_varint, peek_varint, put_string, put_varint};
use crate::{ProtoError, ProtoResult};

use std::panic::Location;
use std::time::Duration;

use bytes::{Buf, BufMut, BytesMut};
use error_location::ErrorLocation;
use serde::Deserialize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

pub const HANDSHAKE_PACKET_ID: i32 = 0x00;
pub const STATUS_REQUEST_PACKET_ID: i32 = 0x00;
pub const STATUS_RESPONSE_PACKET_ID: i32 = 0x00;

/// Protocol number sent in the handshake. Servers answer status requests
/// regardless of the value, so an old one keeps legacy servers happy.
pub const STATUS_PROTOCOL_VERSION: i32 = 47;

const NEXT_STATE_STATUS: i32 = 1;
const MAX_RESPONSE_LEN: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub version: StatusVersion,
    #[serde(default)]
    pub players: StatusPlayers,
    #[serde(default)]
    pub description: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusVersion {
    pub name: String,
    #[serde(default)]
    pub protocol: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusPlayers {
    #[serde(default)]
    pub online: u32,
    #[serde(default)]
    pub max: u32,
}

/// Build the handshake frame followed by the empty status request frame.
pub fn encode_status_request(host: &str, port: u16) -> BytesMut {
    let mut handshake = BytesMut::new();
    put_varint(&mut handshake, HANDSHAKE_PACKET_ID);
    put_varint(&mut handshake, STATUS_PROTOCOL_VERSION);
    put_string(&mut handshake, host);
    handshake.put_u16(port);
    put_varint(&mut handshake, NEXT_STATE_STATUS);

    let mut out = BytesMut::with_capacity(handshake.len() + 8);
    put_varint(&mut out, handshake.len() as i32);
    out.extend_from_slice(&handshake);

    // status request: length 1, packet id 0
    put_varint(&mut out, 1);
    put_varint(&mut out, STATUS_REQUEST_PACKET_ID);
    out
}

/// Try to split one complete status response frame off `src`.
pub fn decode_status_response(src: &mut BytesMut) -> ProtoResult<Option<StatusResponse>> {
    let Some((frame_len, width)) = peek_varint(src)? else {
        return Ok(None);
    };

    if frame_len <= 0 || frame_len as usize > MAX_RESPONSE_LEN {
        return Err(ProtoError::malformed(format!(
            "status frame length {frame_len} out of range"
        )));
    }

    if src.len() < width + frame_len as usize {
        return Ok(None);
    }

    src.advance(width);
    let mut frame = src.split_to(frame_len as usize);

    let packet_id = get_varint(&mut frame)?;
    if packet_id != STATUS_RESPONSE_PACKET_ID {
        return Err(ProtoError::malformed(format!(
            "unexpected status packet id {packet_id:#04x}"
        )));
    }

    let json = get_string(&mut frame)?;
    Ok(Some(serde_json::from_str(&json)?))
}

/// One status round trip. The whole exchange is bounded by `timeout`.
pub async fn ping_status(host: &str, port: u16, timeout: Duration) -> ProtoResult<StatusResponse> {
    tokio::time::timeout(timeout, exchange(host, port))
        .await
        .map_err(|_| ProtoError::Timeout {
            addr: format!("{host}:{port}"),
            timeout_ms: timeout.as_millis() as u64,
            location: ErrorLocation::from(Location::caller()),
        })?
}

async fn exchange(host: &str, port: u16) -> ProtoResult<StatusResponse> {
    let mut stream = TcpStream::connect((host, port)).await?;
    stream.write_all(&encode_status_request(host, port)).await?;
    stream.flush().await?;

    let mut buffer = BytesMut::with_capacity(4096);
    loop {
        if let Some(response) = decode_status_response(&mut buffer)? {
            return Ok(response);
        }
        if stream.read_buf(&mut buffer).await? == 0 {
            return Err(ProtoError::closed());
        }
    }
}
