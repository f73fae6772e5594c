//! PostgreSQL type OID constants.
//!
//! OIDs are server-assigned and stable within a server version.
//! Reference: https://github.com/postgres/postgres/blob/master/src/include/catalog/pg_type.dat

/// PostgreSQL type OIDs for the scalar/temporal/numeric/array family this
/// crate converts.
#[allow(dead_code)]
pub mod oid {
    // Boolean
    pub const BOOL: u32 = 16;

    // Bytes
    pub const BYTEA: u32 = 17;

    // Integers
    pub const INT8: u32 = 20; // bigint
    pub const INT2: u32 = 21; // smallint
    pub const INT4: u32 = 23; // integer

    // Text
    pub const TEXT: u32 = 25;
    pub const VARCHAR: u32 = 1043;
    pub const BPCHAR: u32 = 1042; // blank-padded char

    // OID
    pub const OID: u32 = 26;

    // Float
    pub const FLOAT4: u32 = 700;
    pub const FLOAT8: u32 = 701;

    // Numeric
    pub const NUMERIC: u32 = 1700;

    // Date/Time
    pub const DATE: u32 = 1082;
    pub const TIME: u32 = 1083;
    pub const TIMESTAMP: u32 = 1114;
    pub const TIMESTAMPTZ: u32 = 1184;
    pub const INTERVAL: u32 = 1186;

    // Array types (defined separately in pg_type, not derivable)
    pub const BOOL_ARRAY: u32 = 1000;
    pub const BYTEA_ARRAY: u32 = 1001;
    pub const INT2_ARRAY: u32 = 1005;
    pub const INT4_ARRAY: u32 = 1007;
    pub const INT8_ARRAY: u32 = 1016;
    pub const TEXT_ARRAY: u32 = 1009;
    pub const VARCHAR_ARRAY: u32 = 1015;
    pub const FLOAT4_ARRAY: u32 = 1021;
    pub const FLOAT8_ARRAY: u32 = 1022;
    pub const NUMERIC_ARRAY: u32 = 1231;
    pub const DATE_ARRAY: u32 = 1182;
    pub const TIME_ARRAY: u32 = 1183;
    pub const TIMESTAMP_ARRAY: u32 = 1115;
    pub const INTERVAL_ARRAY: u32 = 1187;
}

/// Element OID / array OID pairs for the supported family.
const ARRAY_PAIRS: &[(u32, u32)] = &[
    (oid::BOOL, oid::BOOL_ARRAY),
    (oid::BYTEA, oid::BYTEA_ARRAY),
    (oid::INT2, oid::INT2_ARRAY),
    (oid::INT4, oid::INT4_ARRAY),
    (oid::INT8, oid::INT8_ARRAY),
    (oid::TEXT, oid::TEXT_ARRAY),
    (oid::VARCHAR, oid::VARCHAR_ARRAY),
    (oid::FLOAT4, oid::FLOAT4_ARRAY),
    (oid::FLOAT8, oid::FLOAT8_ARRAY),
    (oid::NUMERIC, oid::NUMERIC_ARRAY),
    (oid::DATE, oid::DATE_ARRAY),
    (oid::TIME, oid::TIME_ARRAY),
    (oid::TIMESTAMP, oid::TIMESTAMP_ARRAY),
    (oid::INTERVAL, oid::INTERVAL_ARRAY),
];

/// Map OID to a human-readable type name.
pub fn oid_to_name(oid: u32) -> &'static str {
    match oid {
        oid::BOOL => "bool",
        oid::BYTEA => "bytea",
        oid::INT8 => "int8",
        oid::INT2 => "int2",
        oid::INT4 => "int4",
        oid::TEXT => "text",
        oid::VARCHAR => "varchar",
        oid::BPCHAR => "bpchar",
        oid::OID => "oid",
        oid::FLOAT4 => "float4",
        oid::FLOAT8 => "float8",
        oid::NUMERIC => "numeric",
        oid::DATE => "date",
        oid::TIME => "time",
        oid::TIMESTAMP => "timestamp",
        oid::TIMESTAMPTZ => "timestamptz",
        oid::INTERVAL => "interval",
        oid::BOOL_ARRAY => "bool[]",
        oid::BYTEA_ARRAY => "bytea[]",
        oid::INT2_ARRAY => "int2[]",
        oid::INT4_ARRAY => "int4[]",
        oid::INT8_ARRAY => "int8[]",
        oid::TEXT_ARRAY => "text[]",
        oid::VARCHAR_ARRAY => "varchar[]",
        oid::FLOAT4_ARRAY => "float4[]",
        oid::FLOAT8_ARRAY => "float8[]",
        oid::NUMERIC_ARRAY => "numeric[]",
        oid::DATE_ARRAY => "date[]",
        oid::TIME_ARRAY => "time[]",
        oid::TIMESTAMP_ARRAY => "timestamp[]",
        oid::INTERVAL_ARRAY => "interval[]",
        _ => "unknown",
    }
}

/// Check if an OID is one of the supported array types.
pub fn is_array_oid(oid: u32) -> bool {
    element_oid_of(oid).is_some()
}

/// Array OID for an element OID, if the element type has an array form here.
pub fn array_oid_of(element: u32) -> Option<u32> {
    ARRAY_PAIRS
        .iter()
        .find(|(e, _)| *e == element)
        .map(|(_, a)| *a)
}

/// Element OID for an array OID, if the OID is a supported array type.
pub fn element_oid_of(array: u32) -> Option<u32> {
    ARRAY_PAIRS
        .iter()
        .find(|(_, a)| *a == array)
        .map(|(e, _)| *e)
}
