use std::fmt;

use super::state::PacketState;

/// Decode and encode failures for the handshake and status exchange.
///
/// Every variant except [`ProtoError::UnknownPacket`] is fatal for the
/// connection that produced it. An unknown packet ID carries enough
/// context for the session layer to decide whether to skip the frame or
/// hang up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtoError {
    /// Input ended inside a VarInt, a frame, or a fixed-width field.
    UnexpectedEof,
    /// A VarInt ran past five bytes without terminating.
    VarIntTooLarge,
    /// A frame length above the protocol ceiling.
    PacketTooLarge { len: usize },
    /// A negative length prefix.
    NegativeLength(i32),
    /// String bytes that are not valid UTF-8.
    InvalidUtf8,
    /// A string whose UTF-16 unit count exceeds the field bound.
    StringTooLong { max: usize, actual: usize },
    /// A declared byte length above what the field bound allows.
    LengthTooLarge { max: usize, actual: usize },
    /// Bytes left over after a packet body decoded cleanly.
    TrailingBytes(usize),
    /// A packet ID with no meaning in the given state.
    UnknownPacket { state: PacketState, id: i32 },
    /// A handshake requesting a next state other than status or login.
    UnsupportedNextState(i32),
}

pub type Result<T> = std::result::Result<T, ProtoError>;

/// Log decode failures in debug builds only; release builds stay quiet
/// here and leave reporting to the session layer.
pub(crate) fn debug_log_error(context: &str, error: &ProtoError) {
    #[cfg(debug_assertions)]
    log::error!("{context}: {error}");
    #[cfg(not(debug_assertions))]
    {
        let _ = context;
        let _ = error;
    }
}

impl fmt::Display for ProtoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ProtoError {}
