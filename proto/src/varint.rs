use super::error::{ProtoError, Result};

/// Longest legal VarInt encoding in bytes.
pub(crate) const MAX_VARINT_LEN: usize = 5;

/// Read a VarInt and advance `input` past it.
#[inline]
pub(crate) fn read_varint(input: &mut &[u8]) -> Result<i32> {
    match read_varint_partial(input)? {
        Some((value, used)) => {
            *input = &input[used..];
            Ok(value)
        }
        None => Err(ProtoError::UnexpectedEof),
    }
}

/// Non-consuming decode for buffered readers.
///
/// `Ok(None)` means the slice ends before the terminating byte and more
/// input is needed; a continuation bit still set on the fifth byte is an
/// error regardless of what might follow.
#[inline]
pub(crate) fn read_varint_partial(input: &[u8]) -> Result<Option<(i32, usize)>> {
    let mut acc: u32 = 0;
    for (idx, &byte) in input.iter().enumerate() {
        if idx == MAX_VARINT_LEN {
            return Err(ProtoError::VarIntTooLarge);
        }
        acc |= u32::from(byte & 0x7f) << (idx * 7);
        if byte & 0x80 == 0 {
            return Ok(Some((acc as i32, idx + 1)));
        }
    }
    if input.len() >= MAX_VARINT_LEN {
        return Err(ProtoError::VarIntTooLarge);
    }
    Ok(None)
}

/// Append the minimal VarInt encoding of `value`.
#[inline]
pub(crate) fn write_varint(out: &mut Vec<u8>, value: i32) {
    let mut rest = value as u32;
    while rest & !0x7f != 0 {
        out.push((rest as u8 & 0x7f) | 0x80);
        rest >>= 7;
    }
    out.push(rest as u8);
}

/// Encoded length of `value`, without writing it.
#[inline]
pub(crate) fn varint_len(value: i32) -> usize {
    let mut rest = value as u32;
    let mut len = 1;
    while rest & !0x7f != 0 {
        rest >>= 7;
        len += 1;
    }
    len
}
