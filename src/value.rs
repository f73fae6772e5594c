//! Application-level value model.
//!
//! A closed, tagged set of variants produced by the caller. Each variant
//! carries enough information to select a packer without runtime type
//! inspection; the discriminant ([`ValueKind`]) is the pack-table key.

use bytes::Bytes;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// An application-level value as seen by the codec layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PgValue {
    /// SQL NULL. Binds as a parameter of length -1, carries no bytes.
    Null,
    Bool(bool),
    /// Integer. Default packer emits int8; int2/int4 packers range-check.
    Int(i64),
    /// Floating point. Default packer emits float8.
    Float(f64),
    Text(String),
    Bytes(Bytes),
    Numeric(Numeric),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    Interval(Interval),
    /// Single-dimension array of homogeneously typed elements.
    Array(Vec<PgValue>),
}

impl PgValue {
    /// The discriminant used for pack dispatch.
    pub fn kind(&self) -> ValueKind {
        match self {
            PgValue::Null => ValueKind::Null,
            PgValue::Bool(_) => ValueKind::Bool,
            PgValue::Int(_) => ValueKind::Int,
            PgValue::Float(_) => ValueKind::Float,
            PgValue::Text(_) => ValueKind::Text,
            PgValue::Bytes(_) => ValueKind::Bytes,
            PgValue::Numeric(_) => ValueKind::Numeric,
            PgValue::Date(_) => ValueKind::Date,
            PgValue::Time(_) => ValueKind::Time,
            PgValue::Timestamp(_) => ValueKind::Timestamp,
            PgValue::Interval(_) => ValueKind::Interval,
            PgValue::Array(_) => ValueKind::Array,
        }
    }

    /// True for `PgValue::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, PgValue::Null)
    }
}

/// Discriminant of [`PgValue`], the key of the pack dispatch table.
///
/// `Null` and `Array` never live in the table: NULL short-circuits before
/// dispatch and sequences route through the array codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Text,
    Bytes,
    Numeric,
    Date,
    Time,
    Timestamp,
    Interval,
    Array,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::Bytes => "bytes",
            ValueKind::Numeric => "numeric",
            ValueKind::Date => "date",
            ValueKind::Time => "time",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Interval => "interval",
            ValueKind::Array => "array",
        };
        f.write_str(name)
    }
}

/// Arbitrary-precision decimal in the shape the NUMERIC wire format speaks:
/// a sign, a base-10 digit sequence (most significant first) and a decimal
/// exponent, so that `sign * digits * 10^exponent` is the number exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Numeric {
    /// Not-a-number. Has a wire form (sign word 0xC000, no digit words).
    NaN,
    /// Infinity. Representable here so packing it can fail cleanly; the
    /// wire format has no encoding for it and no decode produces it.
    Infinity { negative: bool },
    /// A finite value.
    Value {
        negative: bool,
        /// Base-10 digits, most significant first. Never relies on leading
        /// zeros; an exact zero is `[0]`.
        digits: Vec<u8>,
        /// Power of ten applied to the digit sequence.
        exponent: i32,
    },
}

impl Numeric {
    /// A finite positive value from digits and exponent.
    pub fn positive(digits: Vec<u8>, exponent: i32) -> Self {
        Numeric::Value { negative: false, digits, exponent }
    }

    /// A finite negative value from digits and exponent.
    pub fn negative(digits: Vec<u8>, exponent: i32) -> Self {
        Numeric::Value { negative: true, digits, exponent }
    }

    /// True if the value is an exact zero (any exponent).
    pub fn is_zero(&self) -> bool {
        match self {
            Numeric::Value { digits, .. } => digits.iter().all(|&d| d == 0),
            _ => false,
        }
    }

    /// Canonical form for value comparison: leading zeros dropped, trailing
    /// zeros folded into the exponent, zero reduced to `[0]` with exponent 0.
    ///
    /// Two different wire encodings can denote the same number (differing
    /// trailing zero-word counts); normalizing both sides makes numeric
    /// equality testable.
    pub fn normalize(&self) -> Numeric {
        match self {
            Numeric::Value { negative, digits, exponent } => {
                let lead = digits.iter().take_while(|&&d| d == 0).count();
                let mut digits: Vec<u8> = digits[lead..].to_vec();
                let mut exponent = *exponent;
                if digits.is_empty() {
                    return Numeric::Value { negative: false, digits: vec![0], exponent: 0 };
                }
                while digits.len() > 1 && digits.last() == Some(&0) {
                    digits.pop();
                    exponent += 1;
                }
                if digits == [0] {
                    return Numeric::Value { negative: false, digits, exponent: 0 };
                }
                Numeric::Value { negative: *negative, digits, exponent }
            }
            other => other.clone(),
        }
    }
}

/// PostgreSQL interval decomposition.
///
/// Days and months stay distinct from the time component: "1 month" is
/// calendar-relative, not a fixed duration, and is never folded into
/// elapsed microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interval {
    /// Elapsed time, in microseconds.
    pub microseconds: i64,
    /// Calendar days.
    pub days: i32,
    /// Calendar months.
    pub months: i32,
}

impl Interval {
    pub fn new(microseconds: i64, days: i32, months: i32) -> Self {
        Self { microseconds, days, months }
    }
}

impl From<bool> for PgValue {
    fn from(v: bool) -> Self {
        PgValue::Bool(v)
    }
}

impl From<i16> for PgValue {
    fn from(v: i16) -> Self {
        PgValue::Int(v.into())
    }
}

impl From<i32> for PgValue {
    fn from(v: i32) -> Self {
        PgValue::Int(v.into())
    }
}

impl From<i64> for PgValue {
    fn from(v: i64) -> Self {
        PgValue::Int(v)
    }
}

impl From<f64> for PgValue {
    fn from(v: f64) -> Self {
        PgValue::Float(v)
    }
}

impl From<&str> for PgValue {
    fn from(v: &str) -> Self {
        PgValue::Text(v.to_string())
    }
}

impl From<String> for PgValue {
    fn from(v: String) -> Self {
        PgValue::Text(v)
    }
}

impl From<Numeric> for PgValue {
    fn from(v: Numeric) -> Self {
        PgValue::Numeric(v)
    }
}

impl From<Interval> for PgValue {
    fn from(v: Interval) -> Self {
        PgValue::Interval(v)
    }
}

impl<T: Into<PgValue>> From<Option<T>> for PgValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(PgValue::Null, Into::into)
    }
}
