/// SQL data type codes, as used by ODBC and JDBC to identify the type of a column or a parameter.
///
/// The numeric values are identical in both APIs for all the types listed here, so a driver may
/// hand the raw code (see [`SqlDataType::code`]) to either kind of consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SqlDataType(pub i16);

impl SqlDataType {
    pub const UNKNOWN_TYPE: SqlDataType = SqlDataType(0);
    pub const CHAR: SqlDataType = SqlDataType(1);
    pub const NUMERIC: SqlDataType = SqlDataType(2);
    pub const DECIMAL: SqlDataType = SqlDataType(3);
    /// 32 Bit signed integer
    pub const INTEGER: SqlDataType = SqlDataType(4);
    /// 16 Bit signed integer
    pub const SMALLINT: SqlDataType = SqlDataType(5);
    pub const FLOAT: SqlDataType = SqlDataType(6);
    pub const REAL: SqlDataType = SqlDataType(7);
    pub const DOUBLE: SqlDataType = SqlDataType(8);
    /// Variable length character string.
    pub const VARCHAR: SqlDataType = SqlDataType(12);
    pub const DATE: SqlDataType = SqlDataType(91);
    pub const TIME: SqlDataType = SqlDataType(92);
    pub const TIMESTAMP: SqlDataType = SqlDataType(93);
    /// 64 Bit signed integer
    pub const BIGINT: SqlDataType = SqlDataType(-5);
    /// 8 Bit signed integer
    pub const TINYINT: SqlDataType = SqlDataType(-6);
    pub const BIT: SqlDataType = SqlDataType(-7);

    /// Raw integer code of the type.
    pub fn code(self) -> i16 {
        self.0
    }
}
