use crate::{DataType, SqlDataType};

/// Direction in which data flows through a parameter of a statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ParameterMode {
    /// It is not known whether the parameter is used for input, output or both.
    #[default]
    Unknown,
    /// Input parameter. Data is sent from the application to the database.
    In,
    /// Data is sent to the database and the parameter receives a value once the statement has been
    /// executed.
    InOut,
    /// Output parameter, e.g. of a stored procedure.
    Out,
}

impl ParameterMode {
    /// Code of the parameter mode, as understood by ODBC (`SQL_PARAM_INPUT`, ...) and JDBC
    /// (`parameterModeIn`, ...).
    pub fn code(self) -> i16 {
        match self {
            ParameterMode::Unknown => 0,
            ParameterMode::In => 1,
            ParameterMode::InOut => 2,
            ParameterMode::Out => 4,
        }
    }
}

/// Indication of whether a parameter accepts `NULL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Nullability {
    /// Indicates that we do not know whether the parameter is Nullable or not.
    #[default]
    Unknown,
    /// The parameter may hold NULL values.
    Nullable,
    /// The parameter can not hold NULL values.
    NoNulls,
}

impl Nullability {
    /// `true` if the parameter is `Nullable` or it is not know whether it is nullable. `false` if
    /// and only if the parameter is `NoNulls`.
    pub fn could_be_nullable(self) -> bool {
        match self {
            Nullability::Nullable | Nullability::Unknown => true,
            Nullability::NoNulls => false,
        }
    }
}

/// Describes the type and direction of a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterDescription {
    /// The SQL Type associated with that parameter.
    pub data_type: DataType,
    /// Whether data is sent to or received from the database.
    pub mode: ParameterMode,
}

impl ParameterDescription {
    /// Describes a parameter from the raw type information a server or a configuration reports.
    /// See [`DataType::from_sql_type`] for how `column_size` and `decimal_digits` are interpreted.
    pub fn new(
        code: SqlDataType,
        column_size: usize,
        decimal_digits: i16,
        mode: ParameterMode,
    ) -> Self {
        Self {
            data_type: DataType::from_sql_type(code, column_size, decimal_digits),
            mode,
        }
    }

    /// Every positional parameter is sent as an input character string of unspecified length. Type
    /// information on the server side is not available before execution, so this is the only
    /// description a driver can give without inspecting bound values.
    pub const VARCHAR_INPUT: ParameterDescription = ParameterDescription {
        data_type: DataType::Varchar { length: 0 },
        mode: ParameterMode::In,
    };
}

impl Default for ParameterDescription {
    fn default() -> Self {
        Self::VARCHAR_INPUT
    }
}

#[cfg(test)]
mod tests {
    use super::{Nullability, ParameterDescription, ParameterMode};
    use crate::{DataType, SqlDataType};

    #[test]
    fn parameter_mode_codes() {
        assert_eq!(0, ParameterMode::Unknown.code());
        assert_eq!(1, ParameterMode::In.code());
        assert_eq!(2, ParameterMode::InOut.code());
        assert_eq!(4, ParameterMode::Out.code());
    }

    #[test]
    fn varchar_input_from_raw_type_code() {
        let description = ParameterDescription::new(SqlDataType::VARCHAR, 0, 0, ParameterMode::In);

        assert_eq!(ParameterDescription::VARCHAR_INPUT, description);
    }

    #[test]
    fn timestamp_from_raw_type_code() {
        let description =
            ParameterDescription::new(SqlDataType::TIMESTAMP, 23, 3, ParameterMode::In);

        assert_eq!(DataType::Timestamp { precision: 3 }, description.data_type);
    }

    #[test]
    fn unknown_nullability_could_be_nullable() {
        assert!(Nullability::Unknown.could_be_nullable());
        assert!(Nullability::Nullable.could_be_nullable());
        assert!(!Nullability::NoNulls.could_be_nullable());
    }
}
