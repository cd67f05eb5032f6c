use crate::{ProtoError, ProtoResult};

use bytes::{Buf, BufMut, BytesMut};

pub const SERVERDATA_AUTH: i32 = 3;
pub const SERVERDATA_AUTH_RESPONSE: i32 = 2;
pub const SERVERDATA_EXECCOMMAND: i32 = 2;
pub const SERVERDATA_RESPONSE_VALUE: i32 = 0;

/// Request id the server echoes back when the password is wrong.
pub const AUTH_FAILED_ID: i32 = -1;

/// Largest body a client may send in one packet.
pub const MAX_COMMAND_LEN: usize = 1446;

// id + type + two trailing NULs
const HEADER_LEN: usize = 10;
const MAX_PACKET_LEN: usize = 64 * 1024;

/// One RCON frame: `len:i32le | id:i32le | type:i32le | body | \0 | \0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RconPacket {
    pub request_id: i32,
    pub packet_type: i32,
    pub body: String,
}

impl RconPacket {
    pub fn new<S: Into<String>>(request_id: i32, packet_type: i32, body: S) -> Self {
        Self {
            request_id,
            packet_type,
            body: body.into(),
        }
    }

    pub fn encode(&self, dst: &mut BytesMut) -> ProtoResult<()> {
        let body = self.body.as_bytes();
        if body.len() > MAX_COMMAND_LEN {
            return Err(ProtoError::malformed(format!(
                "body of {} bytes exceeds the {} byte limit",
                body.len(),
                MAX_COMMAND_LEN
            )));
        }
        if body.contains(&0) {
            return Err(ProtoError::malformed("body contains a NUL byte"));
        }

        dst.reserve(4 + HEADER_LEN + body.len());
        dst.put_i32_le((HEADER_LEN + body.len()) as i32);
        dst.put_i32_le(self.request_id);
        dst.put_i32_le(self.packet_type);
        dst.put_slice(body);
        dst.put_u8(0);
        dst.put_u8(0);
        Ok(())
    }

    /// Decode one packet from the front of `src`.
    ///
    /// Returns `Ok(None)` when more bytes are needed; consumed bytes are removed
    /// from `src` only when a whole packet is available.
    pub fn decode(src: &mut BytesMut) -> ProtoResult<Option<Self>> {
        if src.len() < 4 {
            return Ok(None);
        }

        let declared = i32::from_le_bytes([src[0], src[1], src[2], src[3]]);
        if declared < HEADER_LEN as i32 || declared as usize > MAX_PACKET_LEN {
            return Err(ProtoError::malformed(format!(
                "declared packet length {declared} out of range"
            )));
        }

        let len = declared as usize;
        if src.len() < 4 + len {
            return Ok(None);
        }

        src.advance(4);
        let mut frame = src.split_to(len);
        let request_id = frame.get_i32_le();
        let packet_type = frame.get_i32_le();

        let body_len = len - HEADER_LEN;
        let body = String::from_utf8_lossy(&frame[..body_len]).into_owned();
        if frame[body_len..] != [0, 0] {
            return Err(ProtoError::malformed("missing packet terminator"));
        }

        Ok(Some(Self {
            request_id,
            packet_type,
            body,
        }))
    }
}
