//! Minecraft protocol framing and packet types for the handshake and
//! status exchange.
//!
//! The crate stays byte-oriented: decoding borrows from a caller-owned
//! frame, encoding appends to caller-owned buffers, and nothing here
//! touches a socket.

mod error;
mod io;
mod packets;
mod state;
mod types;
mod varint;


pub use error::{ProtoError, Result};
pub use packets::{
    HandshakeC2s, LoginDisconnectS2c, ServerboundPacket, StatusPingC2s, StatusPongS2c,
    StatusRequestC2s, StatusResponseS2c,
};
pub use state::{HandshakeNextState, PacketState};
pub use types::{
    encode_packet, encode_raw_packet, PacketDecoder, PacketEncode, PacketEncoder, PacketFrame,
    MAX_PACKET_SIZE,
};
