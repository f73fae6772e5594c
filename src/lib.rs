//! pgcell — PostgreSQL binary wire-format value codec.
//!
//! Bridges application-level values and the server's binary type
//! representations for clients binding query parameters and consuming
//! typed results. Everything operates on in-memory byte buffers tagged
//! with server-assigned type OIDs; the network transport, query execution
//! and cursor iteration live in other layers and only hand cells in.
//!
//! # Architecture
//!
//! - [`protocol`]: pure codecs — fixed-width scalars, NUMERIC base-10000
//!   digit groups, temporal values in two wire widths, one-dimensional
//!   array framing. Synchronous, stateless, bit-exact.
//! - [`ConversionRegistry`]: the two-way dispatch tables built once per
//!   connection. OID-keyed unpack on the way out, value-kind-keyed pack on
//!   the way in.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use pgcell::{Cell, ConversionRegistry, PgValue, protocol::oid};
//!
//! // integer_datetimes comes from the connection handshake.
//! let registry = ConversionRegistry::new(true);
//!
//! let cells = vec![
//!     Cell::new("id", oid::INT4, Some(Bytes::copy_from_slice(&7i32.to_be_bytes()))),
//!     Cell::new("name", oid::TEXT, None),
//! ];
//! let row = registry.materialize_row(&cells).unwrap();
//! assert_eq!(row, vec![PgValue::Int(7), PgValue::Null]);
//!
//! let param = registry.pack_value(&PgValue::Int(7)).unwrap();
//! let (type_oid, bytes) = param.unwrap();
//! assert_eq!(type_oid, oid::INT8);
//! assert_eq!(bytes.as_ref(), &7i64.to_be_bytes());
//! ```

pub mod error;
pub mod protocol;
pub mod registry;
pub mod value;

pub use error::{CodecError, CodecResult};
pub use registry::{Cell, ConversionRegistry, PackFn, UnpackFn};
pub use value::{Interval, Numeric, PgValue, ValueKind};
