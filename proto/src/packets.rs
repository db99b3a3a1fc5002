use super::{
    error::{debug_log_error, ProtoError, Result},
    io::{
        read_i64_be, read_string_bounded, read_u16_be, write_i64_be, write_string_bounded,
        write_u16_be,
    },
    state::{HandshakeNextState, PacketState},
    types::{PacketEncode, PacketFrame},
    varint::{read_varint, write_varint},
};

/// Bound on the handshake's server address, in UTF-16 units.
const MAX_SERVER_ADDRESS: usize = 255;
/// Bound on JSON payloads: the status response and the disconnect reason.
const MAX_JSON_CHARS: usize = 32_767;

/// First packet of every connection; names the state to switch into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandshakeC2s<'a> {
    pub protocol_version: i32,
    pub server_address: &'a str,
    pub server_port: u16,
    pub next_state: HandshakeNextState,
}

impl<'a> HandshakeC2s<'a> {
    pub const ID: i32 = 0x00;

    pub fn decode_body(input: &mut &'a [u8]) -> Result<Self> {
        let protocol_version = read_varint(input)?;
        let server_address = read_string_bounded(input, MAX_SERVER_ADDRESS)?;
        let server_port = read_u16_be(input)?;
        let raw_next = read_varint(input)?;
        let next_state = HandshakeNextState::from_raw(raw_next)
            .ok_or(ProtoError::UnsupportedNextState(raw_next))?;
        Ok(Self {
            protocol_version,
            server_address,
            server_port,
            next_state,
        })
    }
}

impl PacketEncode for HandshakeC2s<'_> {
    const ID: i32 = HandshakeC2s::ID;

    fn encode_body(&self, out: &mut Vec<u8>) -> Result<()> {
        write_varint(out, self.protocol_version);
        write_string_bounded(out, self.server_address, MAX_SERVER_ADDRESS)?;
        write_u16_be(out, self.server_port);
        write_varint(out, self.next_state.as_raw());
        Ok(())
    }
}

/// Status-state request for the server list entry. No body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRequestC2s;

impl StatusRequestC2s {
    pub const ID: i32 = 0x00;

    pub fn decode_body(_input: &mut &[u8]) -> Result<Self> {
        Ok(Self)
    }
}

impl PacketEncode for StatusRequestC2s {
    const ID: i32 = StatusRequestC2s::ID;

    fn encode_body(&self, _out: &mut Vec<u8>) -> Result<()> {
        Ok(())
    }
}

/// Latency probe; the payload is opaque to the server and echoed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPingC2s {
    pub payload: i64,
}

impl StatusPingC2s {
    pub const ID: i32 = 0x01;

    pub fn decode_body(input: &mut &[u8]) -> Result<Self> {
        Ok(Self {
            payload: read_i64_be(input)?,
        })
    }
}

impl PacketEncode for StatusPingC2s {
    const ID: i32 = StatusPingC2s::ID;

    fn encode_body(&self, out: &mut Vec<u8>) -> Result<()> {
        write_i64_be(out, self.payload);
        Ok(())
    }
}

/// Server list entry as a JSON string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusResponseS2c<'a> {
    pub json: &'a str,
}

impl<'a> StatusResponseS2c<'a> {
    pub const ID: i32 = 0x00;

    pub fn decode_body(input: &mut &'a [u8]) -> Result<Self> {
        Ok(Self {
            json: read_string_bounded(input, MAX_JSON_CHARS)?,
        })
    }
}

impl PacketEncode for StatusResponseS2c<'_> {
    const ID: i32 = StatusResponseS2c::ID;

    fn encode_body(&self, out: &mut Vec<u8>) -> Result<()> {
        write_string_bounded(out, self.json, MAX_JSON_CHARS)
    }
}

/// Echo of a [`StatusPingC2s`] payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPongS2c {
    pub payload: i64,
}

impl StatusPongS2c {
    pub const ID: i32 = 0x01;

    pub fn decode_body(input: &mut &[u8]) -> Result<Self> {
        Ok(Self {
            payload: read_i64_be(input)?,
        })
    }
}

impl PacketEncode for StatusPongS2c {
    const ID: i32 = StatusPongS2c::ID;

    fn encode_body(&self, out: &mut Vec<u8>) -> Result<()> {
        write_i64_be(out, self.payload);
        Ok(())
    }
}

/// Login-state kick carrying a JSON text component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginDisconnectS2c<'a> {
    pub reason: &'a str,
}

impl<'a> LoginDisconnectS2c<'a> {
    pub const ID: i32 = 0x00;

    pub fn decode_body(input: &mut &'a [u8]) -> Result<Self> {
        Ok(Self {
            reason: read_string_bounded(input, MAX_JSON_CHARS)?,
        })
    }
}

impl PacketEncode for LoginDisconnectS2c<'_> {
    const ID: i32 = LoginDisconnectS2c::ID;

    fn encode_body(&self, out: &mut Vec<u8>) -> Result<()> {
        write_string_bounded(out, self.reason, MAX_JSON_CHARS)
    }
}

/// Any serverbound packet this server understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerboundPacket<'a> {
    Handshake(HandshakeC2s<'a>),
    StatusRequest(StatusRequestC2s),
    StatusPing(StatusPingC2s),
}

impl<'a> ServerboundPacket<'a> {
    /// Decode a frame under the packet-ID namespace of `state`.
    ///
    /// A body that decodes cleanly but does not cover the whole frame is
    /// rejected; an ID without meaning in `state` reports
    /// [`ProtoError::UnknownPacket`] and is the caller's call to skip.
    pub fn decode(state: PacketState, frame: &'a PacketFrame) -> Result<Self> {
        let mut input = frame.body.as_slice();
        let packet = match (state, frame.id) {
            (PacketState::Handshaking, HandshakeC2s::ID) => {
                HandshakeC2s::decode_body(&mut input).map(Self::Handshake)
            }
            (PacketState::Status, StatusRequestC2s::ID) => {
                StatusRequestC2s::decode_body(&mut input).map(Self::StatusRequest)
            }
            (PacketState::Status, StatusPingC2s::ID) => {
                StatusPingC2s::decode_body(&mut input).map(Self::StatusPing)
            }
            _ => {
                return Err(ProtoError::UnknownPacket {
                    state,
                    id: frame.id,
                });
            }
        };
        match packet {
            Ok(packet) => {
                if !input.is_empty() {
                    let err = ProtoError::TrailingBytes(input.len());
                    debug_log_error("packet body", &err);
                    return Err(err);
                }
                Ok(packet)
            }
            Err(err) => {
                debug_log_error("packet body", &err);
                Err(err)
            }
        }
    }
}

impl PacketFrame {
    /// Convenience dispatch for [`ServerboundPacket::decode`].
    pub fn decode_serverbound(&self, state: PacketState) -> Result<ServerboundPacket<'_>> {
        ServerboundPacket::decode(state, self)
    }
}
