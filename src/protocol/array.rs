//! Single-dimension array framing.
//!
//! Wire layout, all big-endian:
//!
//! ```text
//! nDims:i32, flags:i32(=0), elementOid:u32,
//! (dimLength:i32, dimLowerBound:i32){nDims},
//! (elementLength:i32, elementBytes){total}
//! ```
//!
//! Element bytes are whatever the element type's codec produces; a length
//! of -1 marks a NULL element. Only one dimension is supported: decoding
//! anything else fails rather than flattening.

use bytes::BytesMut;

use crate::error::{CodecError, CodecResult};

/// A decoded array frame: element OID plus per-element raw cells, in order.
/// Elements still carry wire bytes; resolving them to values is dispatch
/// work, not framing work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArray {
    /// OID of the element type, as written in the frame.
    pub element_oid: u32,
    /// Lower bound of the single dimension (1 on everything we pack).
    pub lower_bound: i32,
    /// Raw element payloads; `None` is a NULL element.
    pub elements: Vec<Option<Vec<u8>>>,
}

fn read_i32(buf: &[u8], at: usize, what: &'static str) -> CodecResult<i32> {
    let end = at + 4;
    if buf.len() < end {
        return Err(CodecError::Malformed(format!(
            "array frame truncated reading {what} at offset {at}"
        )));
    }
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&buf[at..end]);
    Ok(i32::from_be_bytes(raw))
}

/// Decode an array frame. Rejects every dimensionality except one.
pub fn unpack_array(buf: &[u8]) -> CodecResult<RawArray> {
    let n_dims = read_i32(buf, 0, "nDims")?;
    let _flags = read_i32(buf, 4, "flags")?;
    let element_oid = read_i32(buf, 8, "elementOid")? as u32;
    if n_dims != 1 {
        return Err(CodecError::Unsupported(format!(
            "{n_dims}-dimensional array (only one dimension is supported)"
        )));
    }
    let len = read_i32(buf, 12, "dimLength")?;
    let lower_bound = read_i32(buf, 16, "dimLowerBound")?;
    if len < 0 {
        return Err(CodecError::Malformed(format!(
            "negative array dimension length {len}"
        )));
    }

    let mut elements = Vec::with_capacity(len as usize);
    let mut at = 20;
    for _ in 0..len {
        let elem_len = read_i32(buf, at, "elementLength")?;
        at += 4;
        if elem_len == -1 {
            elements.push(None);
            continue;
        }
        if elem_len < 0 {
            return Err(CodecError::Malformed(format!(
                "negative array element length {elem_len}"
            )));
        }
        let end = at + elem_len as usize;
        if buf.len() < end {
            return Err(CodecError::Malformed(format!(
                "array frame truncated reading element of {elem_len} bytes at offset {at}"
            )));
        }
        elements.push(Some(buf[at..end].to_vec()));
        at = end;
    }
    if at != buf.len() {
        return Err(CodecError::Malformed(format!(
            "{} trailing bytes after array elements",
            buf.len() - at
        )));
    }

    Ok(RawArray { element_oid, lower_bound, elements })
}

/// Encode a one-dimensional array frame from already-packed element
/// payloads. `None` encodes a NULL element (length -1).
pub fn pack_array(element_oid: u32, elements: &[Option<BytesMut>]) -> CodecResult<BytesMut> {
    let len = i32::try_from(elements.len()).map_err(|_| CodecError::Range {
        value: elements.len().to_string(),
        target: "array dimension length",
    })?;

    let payload: usize = elements
        .iter()
        .map(|e| 4 + e.as_ref().map_or(0, |b| b.len()))
        .sum();
    let mut buf = BytesMut::with_capacity(20 + payload);
    buf.extend_from_slice(&1i32.to_be_bytes()); // nDims
    buf.extend_from_slice(&0i32.to_be_bytes()); // flags
    buf.extend_from_slice(&element_oid.to_be_bytes());
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(&1i32.to_be_bytes()); // lower bound

    for element in elements {
        match element {
            None => buf.extend_from_slice(&(-1i32).to_be_bytes()),
            Some(data) => {
                let elem_len = i32::try_from(data.len()).map_err(|_| CodecError::Range {
                    value: data.len().to_string(),
                    target: "array element length",
                })?;
                buf.extend_from_slice(&elem_len.to_be_bytes());
                buf.extend_from_slice(data);
            }
        }
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int4_array_fixture() -> Vec<u8> {
        // [1, 2, 3]::int4[] with lower bound 1
        let mut buf = Vec::new();
        buf.extend_from_slice(&1i32.to_be_bytes());
        buf.extend_from_slice(&0i32.to_be_bytes());
        buf.extend_from_slice(&23u32.to_be_bytes());
        buf.extend_from_slice(&3i32.to_be_bytes());
        buf.extend_from_slice(&1i32.to_be_bytes());
        for v in [1i32, 2, 3] {
            buf.extend_from_slice(&4i32.to_be_bytes());
            buf.extend_from_slice(&v.to_be_bytes());
        }
        buf
    }

    #[test]
    fn test_unpack_int4_array() {
        let arr = unpack_array(&int4_array_fixture()).unwrap();
        assert_eq!(arr.element_oid, 23);
        assert_eq!(arr.lower_bound, 1);
        assert_eq!(arr.elements.len(), 3);
        assert_eq!(arr.elements[2], Some(3i32.to_be_bytes().to_vec()));
    }

    #[test]
    fn test_pack_matches_fixture() {
        let elements: Vec<Option<BytesMut>> = [1i32, 2, 3]
            .iter()
            .map(|v| Some(BytesMut::from(&v.to_be_bytes()[..])))
            .collect();
        let buf = pack_array(23, &elements).unwrap();
        assert_eq!(buf.as_ref(), &int4_array_fixture()[..]);
    }

    #[test]
    fn test_rejects_multidimensional() {
        let mut buf = int4_array_fixture();
        buf[..4].copy_from_slice(&2i32.to_be_bytes());
        assert!(matches!(
            unpack_array(&buf),
            Err(CodecError::Unsupported(_))
        ));
        buf[..4].copy_from_slice(&0i32.to_be_bytes());
        assert!(matches!(
            unpack_array(&buf),
            Err(CodecError::Unsupported(_))
        ));
    }

    #[test]
    fn test_null_element_roundtrip() {
        let elements = vec![Some(BytesMut::from(&7i32.to_be_bytes()[..])), None];
        let buf = pack_array(23, &elements).unwrap();
        let arr = unpack_array(&buf).unwrap();
        assert_eq!(arr.elements[0], Some(7i32.to_be_bytes().to_vec()));
        assert_eq!(arr.elements[1], None);
    }

    #[test]
    fn test_truncated_frames() {
        let buf = int4_array_fixture();
        assert!(unpack_array(&buf[..10]).is_err());
        assert!(unpack_array(&buf[..buf.len() - 2]).is_err());
        // Trailing garbage is as malformed as missing bytes.
        let mut long = buf.clone();
        long.push(0);
        assert!(unpack_array(&long).is_err());
    }
}
