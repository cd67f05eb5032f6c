
use crate::RconPacket;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Bind an ephemeral local port for a fake server.
pub(crate) async fn listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

pub(crate) async fn read_rcon(stream: &mut TcpStream, buffer: &mut BytesMut) -> Option<RconPacket> {
    loop {
        if let Some(packet) = RconPacket::decode(buffer).unwrap() {
            return Some(packet);
        }
        if stream.read_buf(buffer).await.unwrap() == 0 {
            return None;
        }
    }
}

pub(crate) async fn write_rcon(stream: &mut TcpStream, packet: RconPacket) {
    let mut out = BytesMut::new();
    packet.encode(&mut out).unwrap();
    stream.write_all(&out).await.unwrap();
}
