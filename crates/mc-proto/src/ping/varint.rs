use crate::{ProtoError, ProtoResult};

use bytes::{Buf, BufMut, BytesMut};

const SEGMENT_BITS: u32 = 0x7F;
const CONTINUE_BIT: u8 = 0x80;
const MAX_VARINT_LEN: usize = 5;

pub fn put_varint(dst: &mut BytesMut, value: i32) {
    let mut value = value as u32;
    loop {
        if value & !SEGMENT_BITS == 0 {
            dst.put_u8(value as u8);
            return;
        }
        dst.put_u8((value & SEGMENT_BITS) as u8 | CONTINUE_BIT);
        value >>= 7;
    }
}

/// Length-prefixed UTF-8 string as used in handshake and status packets.
pub fn put_string(dst: &mut BytesMut, value: &str) {
    put_varint(dst, value.len() as i32);
    dst.put_slice(value.as_bytes());
}

/// Peek a VarInt at the front of `src` without consuming it.
///
/// Returns the value and its encoded width, or `None` if `src` ends mid-number.
pub fn peek_varint(src: &[u8]) -> ProtoResult<Option<(i32, usize)>> {
    let mut value: u32 = 0;
    for (index, byte) in src.iter().enumerate() {
        if index >= MAX_VARINT_LEN {
            return Err(ProtoError::malformed("VarInt is longer than 5 bytes"));
        }
        value |= (u32::from(*byte) & SEGMENT_BITS) << (7 * index);
        if byte & CONTINUE_BIT == 0 {
            return Ok(Some((value as i32, index + 1)));
        }
    }

    if src.len() >= MAX_VARINT_LEN {
        return Err(ProtoError::malformed("VarInt is longer than 5 bytes"));
    }
    Ok(None)
}

/// Consume a VarInt from a buffer that is known to hold a complete frame.
pub fn get_varint(src: &mut BytesMut) -> ProtoResult<i32> {
    match peek_varint(src)? {
        Some((value, width)) => {
            src.advance(width);
            Ok(value)
        }
        None => Err(ProtoError::malformed("truncated VarInt")),
    }
}

pub fn get_string(src: &mut BytesMut) -> ProtoResult<String> {
    let len = get_varint(src)?;
    if len < 0 || len as usize > src.len() {
        return Err(ProtoError::malformed(format!(
            "string length {len} exceeds remaining {} bytes",
            src.len()
        )));
    }
    let raw = src.split_to(len as usize);
    String::from_utf8(raw.to_vec()).map_err(|e| ProtoError::malformed(e.to_string()))
}
