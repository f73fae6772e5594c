//! Integration tests for the full codec surface.
//!
//! These exercise the public API the way a driver would: a registry built
//! from the connection's `integer_datetimes` capability, cells coming back
//! from the server, values going out as bound parameters.

use bytes::Bytes;
use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;

use pgcell::protocol::oid;
use pgcell::{Cell, CodecError, ConversionRegistry, Interval, Numeric, PgValue};

fn cell(name: &str, oid: u32, raw: &[u8]) -> Cell {
    Cell::new(name, oid, Some(Bytes::copy_from_slice(raw)))
}

/// Pack a value with one registry and feed the bytes back as a cell.
fn roundtrip(reg: &ConversionRegistry, value: &PgValue) -> PgValue {
    let (type_oid, bytes) = reg.pack_value(value).unwrap().unwrap();
    reg.unpack_cell(&cell("v", type_oid, &bytes)).unwrap()
}

#[test]
fn scalar_values_survive_the_wire() {
    let reg = ConversionRegistry::new(true);
    for value in [
        PgValue::Bool(true),
        PgValue::Bool(false),
        PgValue::Int(0),
        PgValue::Int(i64::MIN),
        PgValue::Int(i64::MAX),
        PgValue::Float(-2.5),
        PgValue::Text("grüße".to_string()),
        PgValue::Bytes(Bytes::from_static(&[0, 1, 2, 0xff])),
    ] {
        assert_eq!(roundtrip(&reg, &value), value);
    }
}

#[test]
fn temporal_values_survive_both_modes() {
    let date = NaiveDate::from_ymd_opt(1969, 7, 20).unwrap();
    let time = NaiveTime::from_hms_micro_opt(20, 17, 40, 123456).unwrap();
    let ts = date.and_time(time);
    let interval = Interval::new(5_000_000, 3, 14);

    for integer_datetimes in [true, false] {
        let reg = ConversionRegistry::new(integer_datetimes);
        for value in [
            PgValue::Date(date),
            PgValue::Time(time),
            PgValue::Timestamp(ts),
            PgValue::Interval(interval),
        ] {
            assert_eq!(roundtrip(&reg, &value), value, "integer_datetimes={integer_datetimes}");
        }
    }
}

#[test]
fn numeric_edge_values_survive_the_wire() {
    let reg = ConversionRegistry::new(true);
    for n in [
        Numeric::positive(vec![0], 0),      // 0
        Numeric::positive(vec![0], -4),     // 0.0000
        Numeric::positive(vec![1], 1000),   // 1e1000
        Numeric::positive(vec![1], -1000),  // 1e-1000
        Numeric::negative(vec![1], -1000),  // -1e-1000
        Numeric::NaN,
    ] {
        let value = PgValue::Numeric(n.clone());
        let back = roundtrip(&reg, &value);
        let PgValue::Numeric(back) = back else {
            panic!("numeric came back as {back:?}");
        };
        assert_eq!(back.normalize(), n.normalize());
    }
}

#[test]
fn infinity_has_no_wire_form() {
    let reg = ConversionRegistry::new(true);
    let err = reg
        .pack_value(&PgValue::Numeric(Numeric::Infinity { negative: true }))
        .unwrap_err();
    assert!(matches!(err, CodecError::Unsupported(_)));
}

#[test]
fn array_roundtrip_is_one_dimension() {
    let reg = ConversionRegistry::new(true);
    let value = PgValue::Array(vec![PgValue::Int(1), PgValue::Int(2), PgValue::Int(3)]);
    let (array_oid, bytes) = reg.pack_value(&value).unwrap().unwrap();
    assert_eq!(array_oid, oid::INT8_ARRAY);

    // One dimension of length 3 in the frame header.
    assert_eq!(&bytes[0..4], &1i32.to_be_bytes());
    assert_eq!(&bytes[12..16], &3i32.to_be_bytes());

    assert_eq!(reg.unpack_cell(&cell("xs", array_oid, &bytes)).unwrap(), value);
}

#[test]
fn bad_arrays_fail_before_the_wire() {
    let reg = ConversionRegistry::new(true);
    assert!(matches!(
        reg.pack_value(&PgValue::Array(vec![])),
        Err(CodecError::Data(_))
    ));
    let mixed = PgValue::Array(vec![PgValue::Int(1), PgValue::Text("a".to_string())]);
    assert!(matches!(reg.pack_value(&mixed), Err(CodecError::Data(_))));
}

#[test]
fn errors_name_the_offender() {
    let reg = ConversionRegistry::empty();

    let err = reg
        .materialize_row(&[cell("who", oid::TEXT, b"x")])
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("25"), "missing oid in {msg:?}");
    assert!(msg.contains("who"), "missing column in {msg:?}");

    let err = reg.pack_value(&PgValue::Text("x".to_string())).unwrap_err();
    assert!(err.to_string().contains("text"));
}

#[test]
fn null_cells_never_dispatch() {
    // An empty registry cannot unpack anything, so a success here proves
    // NULL short-circuits before dispatch.
    let reg = ConversionRegistry::empty();
    let row = reg
        .materialize_row(&[Cell::new("a", oid::NUMERIC, None), Cell::new("b", 424242, None)])
        .unwrap();
    assert_eq!(row, vec![PgValue::Null, PgValue::Null]);
}

proptest! {
    #[test]
    fn prop_int_roundtrip(v in any::<i64>()) {
        let reg = ConversionRegistry::new(true);
        prop_assert_eq!(roundtrip(&reg, &PgValue::Int(v)), PgValue::Int(v));
    }

    #[test]
    fn prop_float_roundtrip(v in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let reg = ConversionRegistry::new(true);
        prop_assert_eq!(roundtrip(&reg, &PgValue::Float(v)), PgValue::Float(v));
    }

    #[test]
    fn prop_text_roundtrip(s in "\\PC*") {
        let reg = ConversionRegistry::new(true);
        prop_assert_eq!(
            roundtrip(&reg, &PgValue::Text(s.clone())),
            PgValue::Text(s)
        );
    }

    #[test]
    fn prop_numeric_roundtrip(
        digits in proptest::collection::vec(0u8..10, 1..40),
        exponent in -200i32..200,
        negative in any::<bool>(),
    ) {
        let reg = ConversionRegistry::new(true);
        let n = Numeric::Value { negative, digits, exponent };
        let back = roundtrip(&reg, &PgValue::Numeric(n.clone()));
        let PgValue::Numeric(back) = back else {
            panic!("numeric came back as another kind");
        };
        prop_assert_eq!(back.normalize(), n.normalize());
    }

    #[test]
    fn prop_interval_roundtrip(us in any::<i64>(), days in any::<i32>(), months in any::<i32>()) {
        let reg = ConversionRegistry::new(true);
        let iv = PgValue::Interval(Interval::new(us, days, months));
        prop_assert_eq!(roundtrip(&reg, &iv), iv);
    }
}
