use super::{
    error::{ProtoError, Result},
    varint::{read_varint, write_varint},
};

/// Split `len` bytes off the front of `input`.
#[inline]
pub(crate) fn take<'a>(input: &mut &'a [u8], len: usize) -> Result<&'a [u8]> {
    if len > input.len() {
        return Err(ProtoError::UnexpectedEof);
    }
    let (head, rest) = input.split_at(len);
    *input = rest;
    Ok(head)
}

#[inline]
pub(crate) fn read_u16_be(input: &mut &[u8]) -> Result<u16> {
    let bytes: [u8; 2] = take(input, 2)?.try_into().unwrap();
    Ok(u16::from_be_bytes(bytes))
}

#[inline]
pub(crate) fn write_u16_be(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

#[inline]
pub(crate) fn read_i64_be(input: &mut &[u8]) -> Result<i64> {
    let bytes: [u8; 8] = take(input, 8)?.try_into().unwrap();
    Ok(i64::from_be_bytes(bytes))
}

#[inline]
pub(crate) fn write_i64_be(out: &mut Vec<u8>, value: i64) {
    out.extend_from_slice(&value.to_be_bytes());
}

/// Read a length-prefixed UTF-8 string with a UTF-16 unit bound.
///
/// The byte-length prefix is checked against `4 * max_chars` before any
/// bytes are taken, so a hostile length cannot force a large read.
pub(crate) fn read_string_bounded<'a>(input: &mut &'a [u8], max_chars: usize) -> Result<&'a str> {
    let byte_len = read_varint(input)?;
    if byte_len < 0 {
        return Err(ProtoError::NegativeLength(byte_len));
    }
    let byte_len = byte_len as usize;

    let max_bytes = max_chars * 4;
    if byte_len > max_bytes {
        return Err(ProtoError::LengthTooLarge {
            max: max_bytes,
            actual: byte_len,
        });
    }

    let text = std::str::from_utf8(take(input, byte_len)?).map_err(|_| ProtoError::InvalidUtf8)?;

    let units = text.encode_utf16().count();
    if units > max_chars {
        return Err(ProtoError::StringTooLong {
            max: max_chars,
            actual: units,
        });
    }
    Ok(text)
}

pub(crate) fn write_string_bounded(out: &mut Vec<u8>, text: &str, max_chars: usize) -> Result<()> {
    let units = text.encode_utf16().count();
    if units > max_chars {
        return Err(ProtoError::StringTooLong {
            max: max_chars,
            actual: units,
        });
    }
    write_varint(out, text.len() as i32);
    out.extend_from_slice(text.as_bytes());
    Ok(())
}
