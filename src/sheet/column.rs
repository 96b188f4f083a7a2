/// Supported column data types for sheet data.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColumnType {
    /// 64-bit signed integers
    BigInt,
    /// Double-precision floating point numbers
    Double,
    /// Variable-length strings
    Varchar,
    /// Untyped fallback, rendered verbatim
    Any,
}

/// Represents a column of a sheet with name, data type, and key marker.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Column data type
    pub kind: ColumnType,
    /// Whether this column is the primary/sort key of its sheet
    pub key: bool,
}

impl ColumnType {
    /// Returns the string representation of the column type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColumnType::BigInt => "bigint",
            ColumnType::Double => "double",
            ColumnType::Varchar => "varchar",
            ColumnType::Any => "any",
        }
    }

    /// Infers a column type from a numpy-style element type code.
    /// Integer and unsigned markers win over the float marker; anything
    /// else falls back to the untyped column.
    pub fn from_type_code(code: &str) -> Self {
        if code.contains('i') || code.contains('u') {
            ColumnType::BigInt
        } else if code.contains('f') {
            ColumnType::Double
        } else {
            ColumnType::Any
        }
    }
}

impl Column {
    /// Creates a regular (non-key) column.
    pub fn new(name: &str, kind: ColumnType) -> Self {
        Column {
            name: name.to_owned(),
            kind,
            key: false,
        }
    }

    /// Creates a primary/sort key column.
    pub fn key(name: &str, kind: ColumnType) -> Self {
        Column {
            name: name.to_owned(),
            kind,
            key: true,
        }
    }
}
