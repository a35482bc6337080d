use log::debug;

use crate::{
    Error, Nullability, ParameterDescription, ParameterMetadata, error::InvalidParameterIndex,
};

/// Parameter metadata of a statement whose positional parameters all share the same description.
///
/// The wire protocol does not reveal parameter types ahead of execution. So rather than guessing,
/// every parameter is described as [`ParameterDescription::VARCHAR_INPUT`] unless another uniform
/// description is specified with [`Self::with_description`]. Only the number of parameters varies
/// between statements.
///
/// ```
/// use parameter_metadata::{ParameterMetadata, ParameterMode, SqlDataType, UniformParameters};
///
/// let metadata = UniformParameters::new(5);
/// assert_eq!(5, metadata.parameter_count());
/// assert_eq!(ParameterMode::In, metadata.parameter_mode(2).unwrap());
/// assert_eq!(SqlDataType::VARCHAR, metadata.parameter_type(2).unwrap());
/// assert!(metadata.parameter_type(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformParameters {
    parameter_count: u16,
    description: ParameterDescription,
}

impl UniformParameters {
    /// Describes `parameter_count` positional parameters, each an input character string of
    /// unspecified length. `0` is valid for statements without parameter markers.
    pub fn new(parameter_count: u16) -> Self {
        Self::with_description(parameter_count, ParameterDescription::VARCHAR_INPUT)
    }

    /// Describes `parameter_count` positional parameters, each one with `description`.
    pub fn with_description(parameter_count: u16, description: ParameterDescription) -> Self {
        #[cfg(feature = "structured_logging")]
        debug!(
            parameter_count = parameter_count,
            type_name = description.data_type.type_name();
            "Parameter metadata created."
        );
        #[cfg(not(feature = "structured_logging"))]
        debug!(
            "Parameter metadata created for {} parameters of type {}.",
            parameter_count,
            description.data_type.type_name()
        );

        Self {
            parameter_count,
            description,
        }
    }
}

impl ParameterMetadata for UniformParameters {
    fn parameter_count(&self) -> u16 {
        self.parameter_count
    }

    fn describe_param(&self, parameter_number: i32) -> Result<ParameterDescription, Error> {
        InvalidParameterIndex::check(parameter_number, self.parameter_count)?;
        Ok(self.description)
    }

    /// Nullability can not be known before the statement is executed, so this fails with
    /// [`Error::FeatureNotSupported`] for any index, valid or not.
    fn is_nullable(&self, _parameter_number: i32) -> Result<Nullability, Error> {
        Err(Error::FeatureNotSupported {
            feature: "is_nullable",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::UniformParameters;
    use crate::{DataType, ParameterDescription, ParameterMetadata, ParameterMode};

    #[test]
    fn count_is_stored_verbatim() {
        assert_eq!(0, UniformParameters::new(0).parameter_count());
        assert_eq!(u16::MAX, UniformParameters::new(u16::MAX).parameter_count());
    }

    #[test]
    fn largest_count_accepts_last_index() {
        let metadata = UniformParameters::new(u16::MAX);

        assert!(metadata.describe_param(i32::from(u16::MAX)).is_ok());
        assert!(metadata.describe_param(i32::from(u16::MAX) + 1).is_err());
    }

    #[test]
    fn default_description_is_varchar_input() {
        let metadata = UniformParameters::new(1);

        assert_eq!(
            ParameterDescription {
                data_type: DataType::Varchar { length: 0 },
                mode: ParameterMode::In
            },
            metadata.describe_param(1).unwrap()
        );
    }
}
