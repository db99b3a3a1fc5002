/// Wire state selecting the packet-ID namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketState {
    Handshaking,
    Status,
    Login,
}

/// State the client asks to move into at the end of the handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeNextState {
    Status,
    Login,
}

impl HandshakeNextState {
    /// Map the handshake's next-state field; values other than 1 and 2
    /// have no assigned meaning.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            1 => Some(Self::Status),
            2 => Some(Self::Login),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> i32 {
        match self {
            Self::Status => 1,
            Self::Login => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Login => "login",
        }
    }
}
