//! Conversion dispatch.
//!
//! A [`ConversionRegistry`] is built once per connection (the temporal wire
//! width is a per-connection server capability) and is read-only during
//! query execution. Registration takes `&mut self`; callers that share a
//! registry across threads wrap it in `Arc`/`RwLock` and configure it
//! before handing out clones.
//!
//! Both tables hold plain function pointers: OID → unpack on the way out of
//! the server, value kind → pack on the way in. Arrays never sit in the
//! tables; they are routed structurally through the array codec and recurse
//! per element.

use std::collections::HashMap;

use bytes::{Bytes, BytesMut};
use tracing::{debug, trace};

use crate::error::{CodecError, CodecResult};
use crate::protocol::{array, numeric, scalar, temporal, types};
use crate::protocol::types::oid;
use crate::value::{PgValue, ValueKind};

/// One column's raw tagged value for one row, as produced by the
/// execution/transport layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Column name, used in error reporting.
    pub name: String,
    /// Server-assigned wire type OID.
    pub oid: u32,
    /// Raw cell bytes; `None` is SQL NULL.
    pub raw: Option<Bytes>,
}

impl Cell {
    pub fn new(name: impl Into<String>, oid: u32, raw: Option<Bytes>) -> Self {
        Self { name: name.into(), oid, raw }
    }
}

/// Converts raw bytes of one wire type into an application value.
pub type UnpackFn = fn(&[u8]) -> CodecResult<PgValue>;

/// Converts an application value into its wire type OID and bytes.
pub type PackFn = fn(&PgValue) -> CodecResult<(u32, BytesMut)>;

/// Two-way dispatch tables routing values to the right (de)serializer
/// without static type information.
#[derive(Debug, Clone)]
pub struct ConversionRegistry {
    unpack: HashMap<u32, UnpackFn>,
    pack: HashMap<ValueKind, PackFn>,
}

impl ConversionRegistry {
    /// A registry with no conversions at all.
    pub fn empty() -> Self {
        Self { unpack: HashMap::new(), pack: HashMap::new() }
    }

    /// A registry with the default conversions for the common
    /// scalar/temporal/numeric family. `integer_datetimes` is the server's
    /// per-connection capability flag from the handshake: true selects the
    /// 64-bit integer temporal encodings, false the IEEE float ones.
    pub fn new(integer_datetimes: bool) -> Self {
        let mut reg = Self::empty();

        reg.register_unpack(oid::BOOL, from_bool);
        reg.register_unpack(oid::INT2, from_int2);
        reg.register_unpack(oid::INT4, from_int4);
        reg.register_unpack(oid::INT8, from_int8);
        reg.register_unpack(oid::OID, from_oid);
        reg.register_unpack(oid::FLOAT4, from_float4);
        reg.register_unpack(oid::FLOAT8, from_float8);
        reg.register_unpack(oid::TEXT, from_text);
        reg.register_unpack(oid::VARCHAR, from_text);
        reg.register_unpack(oid::BPCHAR, from_text);
        reg.register_unpack(oid::BYTEA, from_bytea);
        reg.register_unpack(oid::NUMERIC, from_numeric);

        reg.register_pack(ValueKind::Bool, to_bool);
        reg.register_pack(ValueKind::Int, to_int8);
        reg.register_pack(ValueKind::Float, to_float8);
        reg.register_pack(ValueKind::Text, to_text);
        reg.register_pack(ValueKind::Bytes, to_bytea);
        reg.register_pack(ValueKind::Numeric, to_numeric);

        if integer_datetimes {
            reg.register_unpack(oid::DATE, from_date_int);
            reg.register_unpack(oid::TIME, from_time_int);
            reg.register_unpack(oid::TIMESTAMP, from_timestamp_int);
            reg.register_unpack(oid::INTERVAL, from_interval_int);
            reg.register_pack(ValueKind::Date, to_date_int);
            reg.register_pack(ValueKind::Time, to_time_int);
            reg.register_pack(ValueKind::Timestamp, to_timestamp_int);
            reg.register_pack(ValueKind::Interval, to_interval_int);
        } else {
            reg.register_unpack(oid::DATE, from_date_float);
            reg.register_unpack(oid::TIME, from_time_float);
            reg.register_unpack(oid::TIMESTAMP, from_timestamp_float);
            reg.register_unpack(oid::INTERVAL, from_interval_float);
            reg.register_pack(ValueKind::Date, to_date_float);
            reg.register_pack(ValueKind::Time, to_time_float);
            reg.register_pack(ValueKind::Timestamp, to_timestamp_float);
            reg.register_pack(ValueKind::Interval, to_interval_float);
        }

        reg
    }

    /// Register (or replace) the unpack function for a wire type OID.
    pub fn register_unpack(&mut self, oid: u32, f: UnpackFn) {
        debug!(oid, name = types::oid_to_name(oid), "registered unpack function");
        self.unpack.insert(oid, f);
    }

    /// Register (or replace) the pack function for a value kind.
    pub fn register_pack(&mut self, kind: ValueKind, f: PackFn) {
        debug!(%kind, "registered pack function");
        self.pack.insert(kind, f);
    }

    /// Convert one cell into an application value.
    ///
    /// A NULL cell maps to `PgValue::Null` for any OID, registered or not,
    /// without invoking any unpack function.
    pub fn unpack_cell(&self, cell: &Cell) -> CodecResult<PgValue> {
        trace!(column = %cell.name, oid = cell.oid, "unpacking cell");
        match &cell.raw {
            None => Ok(PgValue::Null),
            Some(raw) => self.unpack_raw(&cell.name, cell.oid, raw),
        }
    }

    /// Convert an ordered cell sequence into an ordered value sequence.
    /// The primary entry used by the cursor layer.
    pub fn materialize_row(&self, cells: &[Cell]) -> CodecResult<Vec<PgValue>> {
        cells.iter().map(|cell| self.unpack_cell(cell)).collect()
    }

    fn unpack_raw(&self, column: &str, type_oid: u32, raw: &[u8]) -> CodecResult<PgValue> {
        if types::is_array_oid(type_oid) {
            let frame = array::unpack_array(raw).map_err(|e| match e {
                // A dimensionality the codec refuses is not a malformed
                // buffer and surfaces as-is.
                e @ CodecError::Unsupported(_) => e,
                other => internal(column, type_oid, raw, other),
            })?;
            let mut out = Vec::with_capacity(frame.elements.len());
            for element in &frame.elements {
                match element {
                    None => out.push(PgValue::Null),
                    // The frame's own element OID is authoritative.
                    Some(bytes) => {
                        out.push(self.unpack_raw(column, frame.element_oid, bytes)?);
                    }
                }
            }
            return Ok(PgValue::Array(out));
        }

        let f = self.unpack.get(&type_oid).ok_or_else(|| CodecError::Interface {
            oid: type_oid,
            column: column.to_string(),
            raw: raw.to_vec(),
        })?;
        f(raw).map_err(|e| internal(column, type_oid, raw, e))
    }

    /// Convert an application value into its wire type OID and bytes, for
    /// binding as a query parameter. `Null` yields `None`: a NULL parameter
    /// is length -1 at the Bind message layer and carries no bytes.
    pub fn pack_value(&self, value: &PgValue) -> CodecResult<Option<(u32, Bytes)>> {
        match value {
            PgValue::Null => Ok(None),
            PgValue::Array(elements) => {
                let (array_oid, buf) = self.pack_array_value(elements)?;
                Ok(Some((array_oid, buf.freeze())))
            }
            other => {
                let kind = other.kind();
                let f = self.pack.get(&kind).ok_or_else(|| {
                    CodecError::Data(format!("no pack function for {kind} value"))
                })?;
                let (type_oid, buf) = f(other)?;
                Ok(Some((type_oid, buf.freeze())))
            }
        }
    }

    /// Pack a sequence as a one-dimensional array. Every non-NULL element
    /// must resolve to the same wire OID; the element type of an empty or
    /// all-NULL array is unknowable.
    fn pack_array_value(&self, elements: &[PgValue]) -> CodecResult<(u32, BytesMut)> {
        let mut element_oid: Option<u32> = None;
        let mut packed: Vec<Option<BytesMut>> = Vec::with_capacity(elements.len());

        for element in elements {
            match element {
                PgValue::Null => packed.push(None),
                PgValue::Array(_) => {
                    return Err(CodecError::Unsupported(
                        "nested array (only one dimension is supported)".to_string(),
                    ));
                }
                other => {
                    let kind = other.kind();
                    let f = self.pack.get(&kind).ok_or_else(|| {
                        CodecError::Data(format!("no pack function for {kind} array element"))
                    })?;
                    let (type_oid, data) = f(other)?;
                    match element_oid {
                        None => element_oid = Some(type_oid),
                        Some(first) if first != type_oid => {
                            return Err(CodecError::Data(format!(
                                "array elements are not homogeneous: oid {type_oid} after oid {first}"
                            )));
                        }
                        Some(_) => {}
                    }
                    packed.push(Some(data));
                }
            }
        }

        let element_oid = element_oid.ok_or_else(|| {
            CodecError::Data("array element type unknowable (empty or all-NULL array)".to_string())
        })?;
        let array_oid = types::array_oid_of(element_oid).ok_or_else(|| {
            CodecError::Data(format!("no array type for element oid {element_oid}"))
        })?;
        Ok((array_oid, array::pack_array(element_oid, &packed)?))
    }
}

fn internal(column: &str, oid: u32, raw: &[u8], source: CodecError) -> CodecError {
    CodecError::Internal {
        column: column.to_string(),
        oid,
        raw: raw.to_vec(),
        source: Box::new(source),
    }
}

// ---- default conversions: wire bytes -> PgValue ----

fn from_bool(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Bool(scalar::unpack_bool(buf)?))
}

fn from_int2(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Int(scalar::unpack_int2(buf)?.into()))
}

fn from_int4(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Int(scalar::unpack_int4(buf)?.into()))
}

fn from_int8(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Int(scalar::unpack_int8(buf)?))
}

fn from_oid(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Int(scalar::unpack_oid(buf)?.into()))
}

fn from_float4(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Float(scalar::unpack_float4(buf)?.into()))
}

fn from_float8(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Float(scalar::unpack_float8(buf)?))
}

fn from_text(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Text(scalar::unpack_text(buf)?))
}

fn from_bytea(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Bytes(Bytes::from(scalar::unpack_bytea(buf))))
}

fn from_numeric(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Numeric(numeric::unpack_numeric(buf)?))
}

fn from_date_int(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Date(temporal::unpack_date_int(buf)?))
}

fn from_date_float(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Date(temporal::unpack_date_float(buf)?))
}

fn from_time_int(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Time(temporal::unpack_time_int(buf)?))
}

fn from_time_float(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Time(temporal::unpack_time_float(buf)?))
}

fn from_timestamp_int(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Timestamp(temporal::unpack_timestamp_int(buf)?))
}

fn from_timestamp_float(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Timestamp(temporal::unpack_timestamp_float(buf)?))
}

fn from_interval_int(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Interval(temporal::unpack_interval_int(buf)?))
}

fn from_interval_float(buf: &[u8]) -> CodecResult<PgValue> {
    Ok(PgValue::Interval(temporal::unpack_interval_float(buf)?))
}

// ---- default conversions: PgValue -> (oid, wire bytes) ----

fn kind_mismatch(expected: ValueKind, got: &PgValue) -> CodecError {
    CodecError::Data(format!(
        "pack function for {expected} received a {} value",
        got.kind()
    ))
}

fn to_bool(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Bool(b) => Ok((oid::BOOL, scalar::pack_bool(*b))),
        other => Err(kind_mismatch(ValueKind::Bool, other)),
    }
}

/// Alternate integer packer: 2-byte width, range-checked.
pub fn to_int2(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Int(i) => Ok((oid::INT2, scalar::pack_int2(*i)?)),
        other => Err(kind_mismatch(ValueKind::Int, other)),
    }
}

/// Alternate integer packer: 4-byte width, range-checked.
pub fn to_int4(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Int(i) => Ok((oid::INT4, scalar::pack_int4(*i)?)),
        other => Err(kind_mismatch(ValueKind::Int, other)),
    }
}

/// Default integer packer: 8-byte width, lossless for any `Int`.
pub fn to_int8(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Int(i) => Ok((oid::INT8, scalar::pack_int8(*i))),
        other => Err(kind_mismatch(ValueKind::Int, other)),
    }
}

/// Alternate float packer: 4-byte width, overflow-checked.
pub fn to_float4(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Float(f) => Ok((oid::FLOAT4, scalar::pack_float4(*f)?)),
        other => Err(kind_mismatch(ValueKind::Float, other)),
    }
}

/// Default float packer: 8-byte width.
pub fn to_float8(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Float(f) => Ok((oid::FLOAT8, scalar::pack_float8(*f))),
        other => Err(kind_mismatch(ValueKind::Float, other)),
    }
}

fn to_text(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Text(s) => Ok((oid::TEXT, scalar::pack_text(s))),
        other => Err(kind_mismatch(ValueKind::Text, other)),
    }
}

fn to_bytea(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Bytes(b) => Ok((oid::BYTEA, scalar::pack_bytea(b))),
        other => Err(kind_mismatch(ValueKind::Bytes, other)),
    }
}

fn to_numeric(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Numeric(n) => Ok((oid::NUMERIC, numeric::pack_numeric(n)?)),
        other => Err(kind_mismatch(ValueKind::Numeric, other)),
    }
}

fn to_date_int(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Date(d) => Ok((oid::DATE, temporal::pack_date_int(*d)?)),
        other => Err(kind_mismatch(ValueKind::Date, other)),
    }
}

fn to_date_float(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Date(d) => Ok((oid::DATE, temporal::pack_date_float(*d)?)),
        other => Err(kind_mismatch(ValueKind::Date, other)),
    }
}

fn to_time_int(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Time(t) => Ok((oid::TIME, temporal::pack_time_int(*t))),
        other => Err(kind_mismatch(ValueKind::Time, other)),
    }
}

fn to_time_float(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Time(t) => Ok((oid::TIME, temporal::pack_time_float(*t))),
        other => Err(kind_mismatch(ValueKind::Time, other)),
    }
}

fn to_timestamp_int(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Timestamp(ts) => Ok((oid::TIMESTAMP, temporal::pack_timestamp_int(*ts)?)),
        other => Err(kind_mismatch(ValueKind::Timestamp, other)),
    }
}

fn to_timestamp_float(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Timestamp(ts) => Ok((oid::TIMESTAMP, temporal::pack_timestamp_float(*ts)?)),
        other => Err(kind_mismatch(ValueKind::Timestamp, other)),
    }
}

fn to_interval_int(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Interval(iv) => Ok((oid::INTERVAL, temporal::pack_interval_int(*iv))),
        other => Err(kind_mismatch(ValueKind::Interval, other)),
    }
}

fn to_interval_float(v: &PgValue) -> CodecResult<(u32, BytesMut)> {
    match v {
        PgValue::Interval(iv) => Ok((oid::INTERVAL, temporal::pack_interval_float(*iv))),
        other => Err(kind_mismatch(ValueKind::Interval, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Interval, Numeric};

    fn cell(name: &str, oid: u32, raw: &[u8]) -> Cell {
        Cell::new(name, oid, Some(Bytes::copy_from_slice(raw)))
    }

    #[test]
    fn test_materialize_row_ordered() {
        let reg = ConversionRegistry::new(true);
        let cells = vec![
            cell("id", oid::INT4, &7i32.to_be_bytes()),
            cell("name", oid::TEXT, b"ada"),
            Cell::new("note", oid::TEXT, None),
        ];
        let row = reg.materialize_row(&cells).unwrap();
        assert_eq!(
            row,
            vec![PgValue::Int(7), PgValue::Text("ada".to_string()), PgValue::Null]
        );
    }

    #[test]
    fn test_null_skips_unpack_function() {
        // NULL maps to Null even for an OID nothing is registered for.
        let reg = ConversionRegistry::empty();
        let value = reg.unpack_cell(&Cell::new("c", 99999, None)).unwrap();
        assert_eq!(value, PgValue::Null);
    }

    #[test]
    fn test_unregistered_oid_is_interface_error() {
        let reg = ConversionRegistry::empty();
        let err = reg.unpack_cell(&cell("c", oid::INT4, &[0, 0, 0, 1])).unwrap_err();
        match err {
            CodecError::Interface { oid: o, column, raw } => {
                assert_eq!(o, oid::INT4);
                assert_eq!(column, "c");
                assert_eq!(raw, vec![0, 0, 0, 1]);
            }
            other => panic!("expected Interface error, got {other}"),
        }
    }

    #[test]
    fn test_unpack_failure_wrapped_internal() {
        let reg = ConversionRegistry::new(true);
        // int4 cell with the wrong byte count.
        let err = reg.unpack_cell(&cell("n", oid::INT4, &[0, 1])).unwrap_err();
        match err {
            CodecError::Internal { column, oid: o, raw, source } => {
                assert_eq!(column, "n");
                assert_eq!(o, oid::INT4);
                assert_eq!(raw, vec![0, 1]);
                assert!(matches!(*source, CodecError::Malformed(_)));
            }
            other => panic!("expected Internal error, got {other}"),
        }
    }

    #[test]
    fn test_unregistered_kind_is_data_error() {
        let reg = ConversionRegistry::empty();
        let err = reg.pack_value(&PgValue::Bool(true)).unwrap_err();
        match err {
            CodecError::Data(msg) => assert!(msg.contains("bool")),
            other => panic!("expected Data error, got {other}"),
        }
    }

    #[test]
    fn test_pack_null_is_no_bytes() {
        let reg = ConversionRegistry::new(true);
        assert_eq!(reg.pack_value(&PgValue::Null).unwrap(), None);
    }

    #[test]
    fn test_pack_scalars_default_widths() {
        let reg = ConversionRegistry::new(true);
        let (o, b) = reg.pack_value(&PgValue::Int(42)).unwrap().unwrap();
        assert_eq!((o, b.as_ref()), (oid::INT8, &42i64.to_be_bytes()[..]));
        let (o, _) = reg.pack_value(&PgValue::Float(1.5)).unwrap().unwrap();
        assert_eq!(o, oid::FLOAT8);
    }

    #[test]
    fn test_register_narrower_int_packer() {
        let mut reg = ConversionRegistry::new(true);
        reg.register_pack(ValueKind::Int, to_int2);
        let (o, b) = reg.pack_value(&PgValue::Int(0x7FFF)).unwrap().unwrap();
        assert_eq!((o, b.as_ref()), (oid::INT2, &[0x7Fu8, 0xFF][..]));
        assert!(matches!(
            reg.pack_value(&PgValue::Int(0xFFFF)),
            Err(CodecError::Range { target: "int2", .. })
        ));
    }

    #[test]
    fn test_array_roundtrip_through_registry() {
        let mut reg = ConversionRegistry::new(true);
        reg.register_pack(ValueKind::Int, to_int4);
        let value = PgValue::Array(vec![PgValue::Int(1), PgValue::Int(2), PgValue::Int(3)]);
        let (array_oid, bytes) = reg.pack_value(&value).unwrap().unwrap();
        assert_eq!(array_oid, oid::INT4_ARRAY);

        let back = reg
            .unpack_cell(&cell("xs", oid::INT4_ARRAY, &bytes))
            .unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_array_with_null_element() {
        let reg = ConversionRegistry::new(true);
        let value = PgValue::Array(vec![PgValue::Int(1), PgValue::Null]);
        let (array_oid, bytes) = reg.pack_value(&value).unwrap().unwrap();
        assert_eq!(array_oid, oid::INT8_ARRAY);
        let back = reg.unpack_cell(&cell("xs", oid::INT8_ARRAY, &bytes)).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_empty_array_is_data_error() {
        let reg = ConversionRegistry::new(true);
        assert!(matches!(
            reg.pack_value(&PgValue::Array(vec![])),
            Err(CodecError::Data(_))
        ));
        assert!(matches!(
            reg.pack_value(&PgValue::Array(vec![PgValue::Null])),
            Err(CodecError::Data(_))
        ));
    }

    #[test]
    fn test_mixed_array_is_data_error() {
        let reg = ConversionRegistry::new(true);
        let value = PgValue::Array(vec![PgValue::Int(1), PgValue::Text("a".to_string())]);
        assert!(matches!(reg.pack_value(&value), Err(CodecError::Data(_))));
    }

    #[test]
    fn test_nested_array_is_unsupported() {
        let reg = ConversionRegistry::new(true);
        let value = PgValue::Array(vec![PgValue::Array(vec![PgValue::Int(1)])]);
        assert!(matches!(
            reg.pack_value(&value),
            Err(CodecError::Unsupported(_))
        ));
    }

    #[test]
    fn test_temporal_mode_selection() {
        let int_mode = ConversionRegistry::new(true);
        let float_mode = ConversionRegistry::new(false);

        // Day 0 decodes to the reference date in integer mode.
        let date = int_mode
            .unpack_cell(&cell("d", oid::DATE, &0i32.to_be_bytes()))
            .unwrap();
        assert_eq!(date, PgValue::Date(temporal::epoch_date()));

        // The same value in float mode travels as an f32 day count.
        let date = float_mode
            .unpack_cell(&cell("d", oid::DATE, &0f32.to_be_bytes()))
            .unwrap();
        assert_eq!(date, PgValue::Date(temporal::epoch_date()));

        let (_, int_bytes) = int_mode
            .pack_value(&PgValue::Interval(Interval::new(1, 0, 0)))
            .unwrap()
            .unwrap();
        let (_, float_bytes) = float_mode
            .pack_value(&PgValue::Interval(Interval::new(1, 0, 0)))
            .unwrap()
            .unwrap();
        assert_ne!(int_bytes, float_bytes);
    }

    #[test]
    fn test_numeric_through_registry() {
        let reg = ConversionRegistry::new(true);
        let n = PgValue::Numeric(Numeric::positive(vec![1, 2, 3], -2));
        let (o, bytes) = reg.pack_value(&n).unwrap().unwrap();
        assert_eq!(o, oid::NUMERIC);
        assert_eq!(reg.unpack_cell(&cell("x", oid::NUMERIC, &bytes)).unwrap(), n);
    }

    #[test]
    fn test_pack_infinity_is_unsupported() {
        let reg = ConversionRegistry::new(true);
        let v = PgValue::Numeric(Numeric::Infinity { negative: false });
        assert!(matches!(
            reg.pack_value(&v),
            Err(CodecError::Unsupported(_))
        ));
    }
}
