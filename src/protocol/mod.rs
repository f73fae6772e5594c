//! PostgreSQL binary value wire formats (pure, sync).
//!
//! Bounded, deterministic byte-buffer transforms. No async, no I/O, no
//! shared state: every function here is safe to call concurrently on
//! independent inputs. The transport layer that carries these buffers
//! lives elsewhere.
//!
//! - `scalar`: fixed-width big-endian scalars
//! - `numeric`: arbitrary-precision NUMERIC (base-10000 digit groups)
//! - `temporal`: date/time/timestamp/interval, integer and float variants
//! - `array`: one-dimensional array framing over the other codecs
//! - `types`: OID constants and array/element pairing

pub mod array;
pub mod numeric;
pub mod scalar;
pub mod temporal;
pub mod types;

pub use array::{pack_array, unpack_array, RawArray};
pub use numeric::{pack_numeric, unpack_numeric};
pub use types::{array_oid_of, element_oid_of, is_array_oid, oid, oid_to_name};
