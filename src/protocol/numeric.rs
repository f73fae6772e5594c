//! NUMERIC wire codec.
//!
//! Wire layout, all big-endian 16-bit words:
//!
//! ```text
//! nWords:u16, weight:i16, sign:u16, dscale:u16, word[0..nWords)
//! ```
//!
//! Each word is a base-10000 digit group (0-9999). `weight` is the signed
//! index of the most significant group relative to the decimal point, in
//! units of 4 decimal digits; `dscale` is the number of digits to show
//! after the point, independent of the stored group count. Two different
//! encodings can denote the same number (trailing zero words), which is why
//! the fixtures below are literal bytes.

use bytes::BytesMut;

use crate::error::{CodecError, CodecResult};
use crate::value::Numeric;

const SIGN_POS: u16 = 0x0000;
const SIGN_NEG: u16 = 0x4000;
const SIGN_NAN: u16 = 0xC000;

/// Expand base-10000 words (most significant first) into base-10 digits,
/// dropping leading zeros of the overall sequence.
fn unpack_digit_groups(words: &[u16]) -> Vec<u8> {
    let mut digits = Vec::with_capacity(words.len() * 4);
    for &word in words {
        for shift in [1000u16, 100, 10, 1] {
            let d = (word / shift % 10) as u8;
            if !digits.is_empty() || d != 0 {
                digits.push(d);
            }
        }
    }
    digits
}

/// Group base-10 digits (most significant first) into base-10000 words,
/// aligned so the final digit lands at the end of the last word.
fn pack_digit_groups(digits: &[u8]) -> Vec<u16> {
    let mut words = Vec::with_capacity(digits.len().div_ceil(4));
    for chunk in digits.rchunks(4) {
        let mut word = 0u16;
        for &d in chunk {
            word = word * 10 + u16::from(d);
        }
        words.push(word);
    }
    words.reverse();
    words
}

/// Decode NUMERIC wire bytes into an exact decimal value.
pub fn unpack_numeric(buf: &[u8]) -> CodecResult<Numeric> {
    if buf.len() < 8 {
        return Err(CodecError::Malformed(format!(
            "numeric header expects 8 bytes, got {}",
            buf.len()
        )));
    }
    let n_words = u16::from_be_bytes([buf[0], buf[1]]) as usize;
    let weight = i16::from_be_bytes([buf[2], buf[3]]);
    let sign = u16::from_be_bytes([buf[4], buf[5]]);
    let dscale = u16::from_be_bytes([buf[6], buf[7]]);

    let negative = match sign {
        SIGN_POS => false,
        SIGN_NEG => true,
        SIGN_NAN => return Ok(Numeric::NaN),
        other => {
            return Err(CodecError::Malformed(format!(
                "invalid numeric sign 0x{other:04x}"
            )));
        }
    };

    if buf.len() != 8 + n_words * 2 {
        return Err(CodecError::Malformed(format!(
            "numeric with {n_words} words expects {} bytes, got {}",
            8 + n_words * 2,
            buf.len()
        )));
    }

    // No digit words is an exact zero at the advertised display scale.
    if n_words == 0 {
        return Ok(Numeric::Value {
            negative,
            digits: vec![0],
            exponent: -i32::from(dscale),
        });
    }

    let words: Vec<u16> = buf[8..]
        .chunks_exact(2)
        .map(|w| u16::from_be_bytes([w[0], w[1]]))
        .collect();
    let mut digits = unpack_digit_groups(&words);

    // The last word is padded out to a 4-digit boundary; cull the padding
    // the display scale says is not part of the value.
    let cull = (4 - i32::from(dscale)).rem_euclid(4) as usize;
    let exponent = (i32::from(weight) + 1 - n_words as i32) * 4 + cull as i32;
    digits.truncate(digits.len().saturating_sub(cull));
    if digits.is_empty() {
        digits.push(0);
    }

    Ok(Numeric::Value { negative, digits, exponent })
}

/// Encode an exact decimal value into NUMERIC wire bytes.
///
/// NaN has a wire form (sign word 0xC000, no digit words); infinity does
/// not and fails with `Unsupported`.
pub fn pack_numeric(num: &Numeric) -> CodecResult<BytesMut> {
    let (negative, digits, exponent) = match num {
        Numeric::NaN => return Ok(header(0, 0, SIGN_NAN, 0)),
        Numeric::Infinity { .. } => {
            return Err(CodecError::Unsupported(
                "no numeric wire form for infinity".to_string(),
            ));
        }
        Numeric::Value { negative, digits, exponent } => (*negative, digits, *exponent),
    };

    if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
        return Err(CodecError::Data(format!(
            "numeric digit {bad} is not a base-10 digit"
        )));
    }

    let dscale = u16::try_from((-i64::from(exponent)).max(0)).map_err(|_| CodecError::Range {
        value: exponent.to_string(),
        target: "numeric dscale",
    })?;
    let sign = if negative { SIGN_NEG } else { SIGN_POS };

    // Right-pad so the least significant digit lands on a 4-digit boundary.
    let mut padded = digits.clone();
    if padded.is_empty() {
        padded.push(0);
    }
    padded.resize(padded.len() + exponent.rem_euclid(4) as usize, 0);

    let words = pack_digit_groups(&padded);
    let n_words = u16::try_from(words.len()).map_err(|_| CodecError::Range {
        value: words.len().to_string(),
        target: "numeric word count",
    })?;
    let weight = i16::try_from(words.len() as i64 - 1 + i64::from(exponent.div_euclid(4)))
        .map_err(|_| CodecError::Range {
            value: exponent.to_string(),
            target: "numeric weight",
        })?;

    let mut buf = header(n_words, weight, sign, dscale);
    for word in words {
        buf.extend_from_slice(&word.to_be_bytes());
    }
    Ok(buf)
}

fn header(n_words: u16, weight: i16, sign: u16, dscale: u16) -> BytesMut {
    let mut buf = BytesMut::with_capacity(8 + n_words as usize * 2);
    buf.extend_from_slice(&n_words.to_be_bytes());
    buf.extend_from_slice(&weight.to_be_bytes());
    buf.extend_from_slice(&sign.to_be_bytes());
    buf.extend_from_slice(&dscale.to_be_bytes());
    buf
}
