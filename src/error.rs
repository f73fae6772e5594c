//! Codec errors.
//!
//! Every failure aborts the current row or parameter-binding operation and
//! surfaces with column name, type OID and raw bytes where feasible. No
//! retries, no default substitution anywhere in this layer.

use thiserror::Error;

/// Errors that can occur while converting between application values and
/// PostgreSQL binary wire representations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A value does not fit the target wire width (e.g. 0xFFFF into int2).
    /// Packing fails rather than truncating.
    #[error("value {value} out of range for {target}")]
    Range {
        /// Display form of the offending value.
        value: String,
        /// Wire type the value was being packed into.
        target: &'static str,
    },

    /// A semantically valid value with no binary wire form
    /// (Decimal infinity, multi-dimensional array).
    #[error("no wire representation: {0}")]
    Unsupported(String),

    /// No pack function for an application value kind, or an array that is
    /// empty or not homogeneously typed.
    #[error("data error: {0}")]
    Data(String),

    /// No unpack function registered for a wire type OID.
    #[error("no unpack function for oid {oid} (column {column:?}, value {raw:02x?})")]
    Interface {
        /// Wire type OID the server tagged the cell with.
        oid: u32,
        /// Column name of the offending cell.
        column: String,
        /// Raw cell bytes.
        raw: Vec<u8>,
    },

    /// An unpack function itself failed (malformed bytes or a bug).
    /// Always wraps the original cause.
    #[error("failed to convert column {column:?} (oid {oid}, value {raw:02x?}): {source}")]
    Internal {
        /// Column name of the offending cell.
        column: String,
        /// Wire type OID the server tagged the cell with.
        oid: u32,
        /// Raw cell bytes.
        raw: Vec<u8>,
        /// The underlying conversion failure.
        source: Box<CodecError>,
    },

    /// Wire bytes that do not decode: truncated buffer, invalid sign word,
    /// out-of-range field. This is the cause `Internal` wraps.
    #[error("malformed wire data: {0}")]
    Malformed(String),
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_display() {
        let err = CodecError::Range {
            value: "65535".to_string(),
            target: "int2",
        };
        assert_eq!(err.to_string(), "value 65535 out of range for int2");
    }

    #[test]
    fn test_internal_carries_cause() {
        let err = CodecError::Internal {
            column: "total".to_string(),
            oid: 1700,
            raw: vec![0xff],
            source: Box::new(CodecError::Malformed("numeric header".to_string())),
        };
        let msg = err.to_string();
        assert!(msg.contains("total"));
        assert!(msg.contains("1700"));
        assert!(msg.contains("numeric header"));
    }
}
