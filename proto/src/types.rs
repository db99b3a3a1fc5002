use bytes::{Buf, BytesMut};

use super::{
    error::{debug_log_error, ProtoError, Result},
    varint::{read_varint, read_varint_partial, varint_len, write_varint},
};

/// Ceiling for one packet's declared length, in bytes.
pub const MAX_PACKET_SIZE: usize = 2_097_152;

/// Body encoding for one packet type.
pub trait PacketEncode {
    const ID: i32;

    fn encode_body(&self, out: &mut Vec<u8>) -> Result<()>;
}

/// One length-delimited frame, split into packet ID and raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketFrame {
    pub id: i32,
    pub body: Vec<u8>,
}

/// Incremental decoder for length-prefixed frames.
///
/// Bytes are queued as they arrive off the socket; [`try_next_packet`]
/// hands out at most one complete frame per call and leaves everything
/// after it buffered for the next call.
///
/// [`try_next_packet`]: PacketDecoder::try_next_packet
#[derive(Debug, Default)]
pub struct PacketDecoder {
    queue: BytesMut,
}

impl PacketDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_slice(&mut self, bytes: &[u8]) {
        self.queue.extend_from_slice(bytes);
    }

    /// True while received bytes sit short of a whole frame.
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Drain bytes received but not yet consumed as frames.
    pub fn take_pending_bytes(&mut self) -> Vec<u8> {
        self.queue.split().to_vec()
    }

    /// Cut the next complete frame out of the queue.
    ///
    /// `Ok(None)` means the queued bytes stop partway through a length
    /// prefix or a frame body; queue more and call again. Errors are
    /// fatal for the stream, which has no way to resynchronize past a
    /// bad length prefix.
    pub fn try_next_packet(&mut self) -> Result<Option<PacketFrame>> {
        let (packet_len, prefix_len) = match read_varint_partial(&self.queue) {
            Ok(Some(decoded)) => decoded,
            Ok(None) => return Ok(None),
            Err(err) => {
                debug_log_error("frame length prefix", &err);
                return Err(err);
            }
        };

        if packet_len < 0 {
            let err = ProtoError::NegativeLength(packet_len);
            debug_log_error("frame length prefix", &err);
            return Err(err);
        }
        let packet_len = packet_len as usize;
        if packet_len > MAX_PACKET_SIZE {
            let err = ProtoError::PacketTooLarge { len: packet_len };
            debug_log_error("frame length prefix", &err);
            return Err(err);
        }

        if self.queue.len() < prefix_len + packet_len {
            return Ok(None);
        }

        self.queue.advance(prefix_len);
        let frame = self.queue.split_to(packet_len);

        let mut body = &frame[..];
        let id = match read_varint(&mut body) {
            Ok(id) => id,
            Err(err) => {
                debug_log_error("packet id", &err);
                return Err(err);
            }
        };

        Ok(Some(PacketFrame {
            id,
            body: body.to_vec(),
        }))
    }
}

/// Builder for outbound frames; written frames accumulate until taken.
#[derive(Debug, Default)]
pub struct PacketEncoder {
    out: Vec<u8>,
    scratch: Vec<u8>,
}

impl PacketEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_packet<P: PacketEncode>(&mut self, packet: &P) -> Result<()> {
        self.scratch.clear();
        packet.encode_body(&mut self.scratch)?;
        encode_raw_packet(&mut self.out, P::ID, &self.scratch)
    }

    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.out)
    }
}

/// Encode one packet as a standalone frame.
pub fn encode_packet<P: PacketEncode>(out: &mut Vec<u8>, packet: &P) -> Result<()> {
    let mut body = Vec::new();
    packet.encode_body(&mut body)?;
    encode_raw_packet(out, P::ID, &body)
}

/// Frame `VarInt(len) ++ VarInt(id) ++ body` into `out`.
pub fn encode_raw_packet(out: &mut Vec<u8>, id: i32, body: &[u8]) -> Result<()> {
    let packet_len = varint_len(id) + body.len();
    if packet_len > MAX_PACKET_SIZE {
        return Err(ProtoError::PacketTooLarge { len: packet_len });
    }
    write_varint(out, packet_len as i32);
    write_varint(out, id);
    out.extend_from_slice(body);
    Ok(())
}
