use crate::SqlDataType;

/// Name of the Rust type used to represent any character data.
const STRING: &str = "std::string::String";
/// Name of the Rust type used to represent data of unknown or custom types.
const BYTES: &str = "std::vec::Vec<u8>";

/// SQL type of a parameter, together with the size information relevant for that type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DataType {
    /// No type information is available.
    #[default]
    Unknown,
    /// Character string padded to a fixed number of characters.
    Char { length: usize },
    /// Exact number with `precision` digits in total, `scale` of them after the decimal point.
    Numeric { precision: usize, scale: i16 },
    /// Like [`DataType::Numeric`], but the database may store more digits than `precision`.
    Decimal { precision: usize, scale: i16 },
    /// Signed 32 Bit integer.
    Integer,
    /// Signed 16 Bit integer.
    SmallInt,
    /// Floating point number, usually stored with double precision.
    Float,
    /// Single precision floating point number.
    Real,
    /// Double precision floating point number.
    Double,
    /// Character string of at most `length` characters. `0` leaves the maximum length open.
    Varchar { length: usize },
    /// Calendar date.
    Date,
    /// Time of day with `precision` digits of fractional seconds.
    Time { precision: i16 },
    /// Date and time of day with `precision` digits of fractional seconds.
    Timestamp { precision: i16 },
    /// Signed 64 Bit integer.
    Bigint,
    /// Signed 8 Bit integer.
    Tinyint,
    /// Single bit.
    Bit,
    /// Any type code without a dedicated variant. Size information is kept as reported.
    Other {
        data_type: SqlDataType,
        column_size: usize,
        decimal_digits: i16,
    },
}

impl DataType {
    /// Interprets a raw type code. `column_size` is used as length or precision and
    /// `decimal_digits` as scale or fractional seconds, depending on the type. Types without size
    /// information ignore both.
    pub fn from_sql_type(code: SqlDataType, column_size: usize, decimal_digits: i16) -> Self {
        let (length, precision, scale) = (column_size, column_size, decimal_digits);
        match code {
            SqlDataType::VARCHAR => DataType::Varchar { length },
            SqlDataType::CHAR => DataType::Char { length },
            SqlDataType::NUMERIC => DataType::Numeric { precision, scale },
            SqlDataType::DECIMAL => DataType::Decimal { precision, scale },
            SqlDataType::TIME => DataType::Time { precision: scale },
            SqlDataType::TIMESTAMP => DataType::Timestamp { precision: scale },
            SqlDataType::INTEGER => DataType::Integer,
            SqlDataType::SMALLINT => DataType::SmallInt,
            SqlDataType::BIGINT => DataType::Bigint,
            SqlDataType::TINYINT => DataType::Tinyint,
            SqlDataType::FLOAT => DataType::Float,
            SqlDataType::REAL => DataType::Real,
            SqlDataType::DOUBLE => DataType::Double,
            SqlDataType::DATE => DataType::Date,
            SqlDataType::BIT => DataType::Bit,
            SqlDataType::UNKNOWN_TYPE => DataType::Unknown,
            data_type => DataType::Other {
                data_type,
                column_size,
                decimal_digits,
            },
        }
    }

    /// The SQL type code of this data type.
    pub fn data_type(&self) -> SqlDataType {
        match self {
            DataType::Unknown => SqlDataType::UNKNOWN_TYPE,
            DataType::Char { .. } => SqlDataType::CHAR,
            DataType::Numeric { .. } => SqlDataType::NUMERIC,
            DataType::Decimal { .. } => SqlDataType::DECIMAL,
            DataType::Integer => SqlDataType::INTEGER,
            DataType::SmallInt => SqlDataType::SMALLINT,
            DataType::Float => SqlDataType::FLOAT,
            DataType::Real => SqlDataType::REAL,
            DataType::Double => SqlDataType::DOUBLE,
            DataType::Varchar { .. } => SqlDataType::VARCHAR,
            DataType::Date => SqlDataType::DATE,
            DataType::Time { .. } => SqlDataType::TIME,
            DataType::Timestamp { .. } => SqlDataType::TIMESTAMP,
            DataType::Bigint => SqlDataType::BIGINT,
            DataType::Tinyint => SqlDataType::TINYINT,
            DataType::Bit => SqlDataType::BIT,
            DataType::Other { data_type, .. } => *data_type,
        }
    }

    /// Column size of the type. For character data this is the length in characters, for numeric
    /// types the maximum number of digits and for temporal types the number of characters of their
    /// textual representation. `0` for unknown types.
    pub fn precision(&self) -> usize {
        match self {
            DataType::Unknown => 0,
            DataType::Char { length } | DataType::Varchar { length } => *length,
            DataType::Numeric { precision, .. } | DataType::Decimal { precision, .. } => *precision,
            DataType::Integer => 10,
            DataType::SmallInt => 5,
            DataType::Bigint => 19,
            DataType::Tinyint => 3,
            DataType::Real => 7,
            DataType::Float | DataType::Double => 15,
            DataType::Bit => 1,
            // YYYY-MM-DD
            DataType::Date => 10,
            // HH:MM:SS[.fff...]
            DataType::Time { precision } => 8 + fractional_seconds_len(*precision),
            // YYYY-MM-DD HH:MM:SS[.fff...]
            DataType::Timestamp { precision } => 19 + fractional_seconds_len(*precision),
            DataType::Other { column_size, .. } => *column_size,
        }
    }

    /// Number of digits to the right of the decimal point, or fractional seconds for temporal
    /// types. `0` for all types those values do not have a fractional part.
    pub fn scale(&self) -> i16 {
        match self {
            DataType::Numeric { scale, .. } | DataType::Decimal { scale, .. } => *scale,
            DataType::Time { precision } | DataType::Timestamp { precision } => *precision,
            DataType::Other { decimal_digits, .. } => *decimal_digits,
            _ => 0,
        }
    }

    /// Database specific name of the type, e.g. `VARCHAR`.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataType::Unknown => "UNKNOWN",
            DataType::Char { .. } => "CHAR",
            DataType::Numeric { .. } => "NUMERIC",
            DataType::Decimal { .. } => "DECIMAL",
            DataType::Integer => "INTEGER",
            DataType::SmallInt => "SMALLINT",
            DataType::Float => "FLOAT",
            DataType::Real => "REAL",
            DataType::Double => "DOUBLE",
            DataType::Varchar { .. } => "VARCHAR",
            DataType::Date => "DATE",
            DataType::Time { .. } => "TIME",
            DataType::Timestamp { .. } => "TIMESTAMP",
            DataType::Bigint => "BIGINT",
            DataType::Tinyint => "TINYINT",
            DataType::Bit => "BIT",
            DataType::Other { .. } => "OTHER",
        }
    }

    /// `true` for signed numeric types. `false` for unsigned or non numeric types.
    pub fn is_signed(&self) -> bool {
        match self {
            DataType::Numeric { .. }
            | DataType::Decimal { .. }
            | DataType::Integer
            | DataType::SmallInt
            | DataType::Float
            | DataType::Real
            | DataType::Double
            | DataType::Bigint
            | DataType::Tinyint => true,
            DataType::Unknown
            | DataType::Char { .. }
            | DataType::Varchar { .. }
            | DataType::Date
            | DataType::Time { .. }
            | DataType::Timestamp { .. }
            | DataType::Bit
            | DataType::Other { .. } => false,
        }
    }

    /// Fully qualified name of the Rust type an application would use to hold a value of this
    /// type. Exact numeric and temporal types are represented as text.
    pub fn class_name(&self) -> &'static str {
        match self {
            DataType::Char { .. }
            | DataType::Varchar { .. }
            | DataType::Numeric { .. }
            | DataType::Decimal { .. }
            | DataType::Date
            | DataType::Time { .. }
            | DataType::Timestamp { .. } => STRING,
            DataType::Integer => "i32",
            DataType::SmallInt => "i16",
            DataType::Bigint => "i64",
            DataType::Tinyint => "i8",
            DataType::Real => "f32",
            DataType::Float | DataType::Double => "f64",
            DataType::Bit => "bool",
            DataType::Unknown | DataType::Other { .. } => BYTES,
        }
    }
}

/// Characters needed for the fractional seconds, including the decimal point.
fn fractional_seconds_len(precision: i16) -> usize {
    if precision > 0 {
        1 + precision as usize
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::{DataType, SqlDataType};

    #[test]
    fn unspecified_varchar() {
        let varchar = DataType::Varchar { length: 0 };

        assert_eq!(SqlDataType::VARCHAR, varchar.data_type());
        assert_eq!("VARCHAR", varchar.type_name());
        assert_eq!(0, varchar.precision());
        assert_eq!(0, varchar.scale());
        assert!(!varchar.is_signed());
        assert_eq!("std::string::String", varchar.class_name());
    }

    #[test]
    fn sql_type_code_maps_back_to_data_type() {
        let decimal = DataType::from_sql_type(SqlDataType::DECIMAL, 10, 2);

        assert_eq!(
            DataType::Decimal {
                precision: 10,
                scale: 2
            },
            decimal
        );
        assert_eq!(SqlDataType::DECIMAL, decimal.data_type());
        assert_eq!(10, decimal.precision());
        assert_eq!(2, decimal.scale());
    }

    #[test]
    fn unrecognized_type_code_is_preserved() {
        let custom = DataType::from_sql_type(SqlDataType(-150), 42, 0);

        assert_eq!(SqlDataType(-150), custom.data_type());
        assert_eq!(42, custom.precision());
        assert_eq!("OTHER", custom.type_name());
    }

    #[test]
    fn timestamp_precision_includes_fractional_seconds() {
        assert_eq!(19, DataType::Timestamp { precision: 0 }.precision());
        assert_eq!(23, DataType::Timestamp { precision: 3 }.precision());
        assert_eq!(3, DataType::Timestamp { precision: 3 }.scale());
    }

    #[test]
    fn default_is_unknown() {
        let unknown = DataType::default();

        assert_eq!(DataType::Unknown, unknown);
        assert_eq!(SqlDataType::UNKNOWN_TYPE, unknown.data_type());
    }
}
