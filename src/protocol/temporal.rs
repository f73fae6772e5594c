//! Temporal codec.
//!
//! Each type comes in two wire variants, selected once per connection by
//! the server's `integer_datetimes` capability:
//!
//! - integer mode: time/timestamp as signed 64-bit microseconds, date as
//!   signed 32-bit days, interval as (i64 microseconds, i32 days, i32 months)
//! - float mode: time/timestamp as 64-bit IEEE seconds, date as 32-bit IEEE
//!   days, interval as (f64 seconds, i32 days, i32 months)
//!
//! Dates and timestamps count from 2000-01-01, not the Unix epoch; all
//! conversions translate explicitly. Interval keeps days and months apart
//! from the time component, since a month has no fixed duration.

use bytes::BytesMut;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{CodecError, CodecResult};
use crate::protocol::scalar;
use crate::value::Interval;

const MICROS_PER_SEC: i64 = 1_000_000;
const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SEC;

/// The PostgreSQL reference date, 2000-01-01.
pub fn epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("2000-01-01 is a valid date")
}

/// The PostgreSQL reference timestamp, 2000-01-01 00:00:00.
pub fn epoch_timestamp() -> NaiveDateTime {
    epoch_date()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
}

fn time_from_micros(us: i64) -> CodecResult<NaiveTime> {
    if !(0..MICROS_PER_DAY).contains(&us) {
        return Err(CodecError::Malformed(format!(
            "time of {us} microseconds is outside the day"
        )));
    }
    let secs = (us / MICROS_PER_SEC) as u32;
    let nanos = (us % MICROS_PER_SEC) as u32 * 1000;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos)
        .ok_or_else(|| CodecError::Malformed(format!("time of {us} microseconds is invalid")))
}

fn micros_of_time(t: NaiveTime) -> i64 {
    i64::from(t.num_seconds_from_midnight()) * MICROS_PER_SEC + i64::from(t.nanosecond() / 1000)
}

fn seconds_to_micros(secs: f64, what: &'static str) -> CodecResult<i64> {
    let us = secs * MICROS_PER_SEC as f64;
    if !us.is_finite() || us.round() >= i64::MAX as f64 || us.round() <= i64::MIN as f64 {
        return Err(CodecError::Malformed(format!(
            "{what} of {secs} seconds has no microsecond form"
        )));
    }
    Ok(us.round() as i64)
}

// ---- date ----

/// Integer-mode date: signed day count from 2000-01-01.
pub fn unpack_date_int(buf: &[u8]) -> CodecResult<NaiveDate> {
    date_from_days(i64::from(scalar::unpack_int4(buf)?))
}

pub fn pack_date_int(date: NaiveDate) -> CodecResult<BytesMut> {
    scalar::pack_int4(days_of_date(date))
}

/// Float-mode date: 32-bit IEEE day count from 2000-01-01.
pub fn unpack_date_float(buf: &[u8]) -> CodecResult<NaiveDate> {
    let days = f64::from(scalar::unpack_float4(buf)?);
    if !days.is_finite() || days.abs() >= i32::MAX as f64 {
        return Err(CodecError::Malformed(format!(
            "date of {days} days has no calendar form"
        )));
    }
    date_from_days(days.round() as i64)
}

pub fn pack_date_float(date: NaiveDate) -> CodecResult<BytesMut> {
    scalar::pack_float4(days_of_date(date) as f64)
}

fn date_from_days(days: i64) -> CodecResult<NaiveDate> {
    epoch_date()
        .checked_add_signed(Duration::days(days))
        .ok_or_else(|| CodecError::Malformed(format!("day count {days} is out of calendar range")))
}

fn days_of_date(date: NaiveDate) -> i64 {
    date.signed_duration_since(epoch_date()).num_days()
}

// ---- time ----

/// Integer-mode time: signed 64-bit microseconds into the day.
pub fn unpack_time_int(buf: &[u8]) -> CodecResult<NaiveTime> {
    time_from_micros(scalar::unpack_int8(buf)?)
}

pub fn pack_time_int(time: NaiveTime) -> BytesMut {
    scalar::pack_int8(micros_of_time(time))
}

/// Float-mode time: 64-bit IEEE seconds into the day.
pub fn unpack_time_float(buf: &[u8]) -> CodecResult<NaiveTime> {
    time_from_micros(seconds_to_micros(scalar::unpack_float8(buf)?, "time")?)
}

pub fn pack_time_float(time: NaiveTime) -> BytesMut {
    scalar::pack_float8(micros_of_time(time) as f64 / MICROS_PER_SEC as f64)
}

// ---- timestamp ----

/// Integer-mode timestamp: signed 64-bit microseconds from 2000-01-01.
pub fn unpack_timestamp_int(buf: &[u8]) -> CodecResult<NaiveDateTime> {
    timestamp_from_micros(scalar::unpack_int8(buf)?)
}

pub fn pack_timestamp_int(ts: NaiveDateTime) -> CodecResult<BytesMut> {
    Ok(scalar::pack_int8(micros_of_timestamp(ts)?))
}

/// Float-mode timestamp: 64-bit IEEE seconds from 2000-01-01.
pub fn unpack_timestamp_float(buf: &[u8]) -> CodecResult<NaiveDateTime> {
    timestamp_from_micros(seconds_to_micros(scalar::unpack_float8(buf)?, "timestamp")?)
}

pub fn pack_timestamp_float(ts: NaiveDateTime) -> CodecResult<BytesMut> {
    Ok(scalar::pack_float8(
        micros_of_timestamp(ts)? as f64 / MICROS_PER_SEC as f64,
    ))
}

fn timestamp_from_micros(us: i64) -> CodecResult<NaiveDateTime> {
    epoch_timestamp()
        .checked_add_signed(Duration::microseconds(us))
        .ok_or_else(|| {
            CodecError::Malformed(format!("timestamp of {us} microseconds is out of range"))
        })
}

fn micros_of_timestamp(ts: NaiveDateTime) -> CodecResult<i64> {
    ts.signed_duration_since(epoch_timestamp())
        .num_microseconds()
        .ok_or_else(|| CodecError::Range {
            value: ts.to_string(),
            target: "timestamp",
        })
}

// ---- interval ----

/// Integer-mode interval: (i64 microseconds, i32 days, i32 months).
pub fn unpack_interval_int(buf: &[u8]) -> CodecResult<Interval> {
    if buf.len() != 16 {
        return Err(CodecError::Malformed(format!(
            "interval expects 16 bytes, got {}",
            buf.len()
        )));
    }
    Ok(Interval {
        microseconds: scalar::unpack_int8(&buf[..8])?,
        days: scalar::unpack_int4(&buf[8..12])?,
        months: scalar::unpack_int4(&buf[12..16])?,
    })
}

pub fn pack_interval_int(iv: Interval) -> BytesMut {
    let mut buf = scalar::pack_int8(iv.microseconds);
    buf.extend_from_slice(&iv.days.to_be_bytes());
    buf.extend_from_slice(&iv.months.to_be_bytes());
    buf
}

/// Float-mode interval: (f64 seconds, i32 days, i32 months).
pub fn unpack_interval_float(buf: &[u8]) -> CodecResult<Interval> {
    if buf.len() != 16 {
        return Err(CodecError::Malformed(format!(
            "interval expects 16 bytes, got {}",
            buf.len()
        )));
    }
    Ok(Interval {
        microseconds: seconds_to_micros(scalar::unpack_float8(&buf[..8])?, "interval")?,
        days: scalar::unpack_int4(&buf[8..12])?,
        months: scalar::unpack_int4(&buf[12..16])?,
    })
}

pub fn pack_interval_float(iv: Interval) -> BytesMut {
    let mut buf = scalar::pack_float8(iv.microseconds as f64 / MICROS_PER_SEC as f64);
    buf.extend_from_slice(&iv.days.to_be_bytes());
    buf.extend_from_slice(&iv.months.to_be_bytes());
    buf
}
