//! Fixed-width scalar codec.
//!
//! Big-endian pack/unpack for booleans, 2/4/8-byte integers, 4/8-byte IEEE
//! floats, opaque bytes and text. Pure byte-buffer transforms: length is
//! implied by the cell boundary, so every unpack checks it exactly.
//!
//! No implicit integer/float coercion happens here. Packing a value that
//! does not fit the target width fails with `Range` instead of truncating.

use bytes::BytesMut;

use crate::error::{CodecError, CodecResult};

fn fixed<const N: usize>(buf: &[u8], what: &'static str) -> CodecResult<[u8; N]> {
    buf.try_into().map_err(|_| {
        CodecError::Malformed(format!("{what} expects {N} bytes, got {}", buf.len()))
    })
}

/// Unpack a 1-byte boolean. The server emits exactly 0 or 1.
pub fn unpack_bool(buf: &[u8]) -> CodecResult<bool> {
    match fixed::<1>(buf, "bool")?[0] {
        0 => Ok(false),
        1 => Ok(true),
        b => Err(CodecError::Malformed(format!("invalid bool byte 0x{b:02x}"))),
    }
}

pub fn pack_bool(v: bool) -> BytesMut {
    BytesMut::from(&[v as u8][..])
}

pub fn unpack_int2(buf: &[u8]) -> CodecResult<i16> {
    Ok(i16::from_be_bytes(fixed(buf, "int2")?))
}

/// Pack into a 2-byte integer, failing with `Range` when the value does
/// not fit.
pub fn pack_int2(v: i64) -> CodecResult<BytesMut> {
    let v = i16::try_from(v).map_err(|_| CodecError::Range {
        value: v.to_string(),
        target: "int2",
    })?;
    Ok(BytesMut::from(&v.to_be_bytes()[..]))
}

pub fn unpack_int4(buf: &[u8]) -> CodecResult<i32> {
    Ok(i32::from_be_bytes(fixed(buf, "int4")?))
}

/// Pack into a 4-byte integer, failing with `Range` when the value does
/// not fit.
pub fn pack_int4(v: i64) -> CodecResult<BytesMut> {
    let v = i32::try_from(v).map_err(|_| CodecError::Range {
        value: v.to_string(),
        target: "int4",
    })?;
    Ok(BytesMut::from(&v.to_be_bytes()[..]))
}

pub fn unpack_int8(buf: &[u8]) -> CodecResult<i64> {
    Ok(i64::from_be_bytes(fixed(buf, "int8")?))
}

pub fn pack_int8(v: i64) -> BytesMut {
    BytesMut::from(&v.to_be_bytes()[..])
}

/// Unpack an unsigned 4-byte OID value.
pub fn unpack_oid(buf: &[u8]) -> CodecResult<u32> {
    Ok(u32::from_be_bytes(fixed(buf, "oid")?))
}

pub fn pack_oid(v: u32) -> BytesMut {
    BytesMut::from(&v.to_be_bytes()[..])
}

pub fn unpack_float4(buf: &[u8]) -> CodecResult<f32> {
    Ok(f32::from_be_bytes(fixed(buf, "float4")?))
}

/// Pack into a 4-byte IEEE float. A finite f64 whose magnitude overflows
/// f32 fails with `Range`; narrowing precision alone is accepted.
pub fn pack_float4(v: f64) -> CodecResult<BytesMut> {
    let narrowed = v as f32;
    if v.is_finite() && narrowed.is_infinite() {
        return Err(CodecError::Range {
            value: v.to_string(),
            target: "float4",
        });
    }
    Ok(BytesMut::from(&narrowed.to_be_bytes()[..]))
}

pub fn unpack_float8(buf: &[u8]) -> CodecResult<f64> {
    Ok(f64::from_be_bytes(fixed(buf, "float8")?))
}

pub fn pack_float8(v: f64) -> BytesMut {
    BytesMut::from(&v.to_be_bytes()[..])
}

/// Unpack text. Byte-for-byte pass-through, UTF-8 validated, never
/// transcoded.
pub fn unpack_text(buf: &[u8]) -> CodecResult<String> {
    String::from_utf8(buf.to_vec())
        .map_err(|e| CodecError::Malformed(format!("text is not valid UTF-8: {e}")))
}

pub fn pack_text(v: &str) -> BytesMut {
    BytesMut::from(v.as_bytes())
}

/// Unpack opaque bytes. The cell boundary is the length.
pub fn unpack_bytea(buf: &[u8]) -> Vec<u8> {
    buf.to_vec()
}

pub fn pack_bytea(v: &[u8]) -> BytesMut {
    BytesMut::from(v)
}
