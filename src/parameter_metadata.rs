use crate::{Error, Nullability, ParameterDescription, ParameterMode, SqlDataType};

/// Provides metadata about the positional parameters of a prepared statement. This is the
/// introspection interface a prepared statement exposes to applications.
///
/// Parameters are referenced by their 1-based index. Indices are signed, so a driver is able to
/// forward any ordinal an application passes. Every per parameter query fails with
/// [`Error::InvalidParameterIndex`] if the index does not refer to a parameter.
///
/// Implementers only need to provide [`Self::parameter_count`], [`Self::describe_param`] and
/// [`Self::is_nullable`]. All other queries are answered from the parameter description.
pub trait ParameterMetadata {
    /// Number of parameter markers in the statement.
    fn parameter_count(&self) -> u16;

    /// Describes the parameter with the given index.
    ///
    /// # Parameters
    ///
    /// * `parameter_number`: Parameter marker number ordered sequentially in increasing parameter
    ///   order, starting at 1.
    fn describe_param(&self, parameter_number: i32) -> Result<ParameterDescription, Error>;

    /// Whether the parameter accepts `NULL`.
    fn is_nullable(&self, parameter_number: i32) -> Result<Nullability, Error>;

    /// Whether the parameter is used for input, output or both.
    fn parameter_mode(&self, parameter_number: i32) -> Result<ParameterMode, Error> {
        Ok(self.describe_param(parameter_number)?.mode)
    }

    /// SQL type code of the parameter.
    fn parameter_type(&self, parameter_number: i32) -> Result<SqlDataType, Error> {
        let description = self.describe_param(parameter_number)?;
        Ok(description.data_type.data_type())
    }

    /// Column size of the parameter. For variable length character data this is the maximum
    /// length in characters, `0` if unspecified.
    fn precision(&self, parameter_number: i32) -> Result<usize, Error> {
        let description = self.describe_param(parameter_number)?;
        Ok(description.data_type.precision())
    }

    /// Number of digits to the right of the decimal point. `0` for types without a fractional part.
    fn scale(&self, parameter_number: i32) -> Result<i16, Error> {
        let description = self.describe_param(parameter_number)?;
        Ok(description.data_type.scale())
    }

    /// Fully qualified name of the Rust type used to hold values of the parameter.
    fn parameter_class_name(&self, parameter_number: i32) -> Result<&'static str, Error> {
        let description = self.describe_param(parameter_number)?;
        Ok(description.data_type.class_name())
    }

    /// Database specific type name of the parameter, e.g. `VARCHAR`.
    fn parameter_type_name(&self, parameter_number: i32) -> Result<&'static str, Error> {
        let description = self.describe_param(parameter_number)?;
        Ok(description.data_type.type_name())
    }

    /// `true` if values of the parameter may be signed numbers.
    fn is_signed(&self, parameter_number: i32) -> Result<bool, Error> {
        let description = self.describe_param(parameter_number)?;
        Ok(description.data_type.is_signed())
    }

    /// Use this if you want to iterate over the descriptions of all parameters.
    ///
    /// This is a wrapper around `describe_param` introduced for convenience.
    fn descriptions(&self) -> ParameterDescriptionsIt<'_, Self>
    where
        Self: Sized,
    {
        ParameterDescriptionsIt::new(self)
    }
}

/// An iterator calling `describe_param` for each parameter of a statement.
pub struct ParameterDescriptionsIt<'c, C: ?Sized> {
    metadata: &'c C,
    parameter: i32,
}

impl<'c, C> ParameterDescriptionsIt<'c, C>
where
    C: ParameterMetadata + ?Sized,
{
    fn new(metadata: &'c C) -> Self {
        Self {
            metadata,
            parameter: 1,
        }
    }
}

impl<C> Iterator for ParameterDescriptionsIt<'_, C>
where
    C: ParameterMetadata + ?Sized,
{
    type Item = Result<ParameterDescription, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.parameter <= i32::from(self.metadata.parameter_count()) {
            let description = self.metadata.describe_param(self.parameter);
            self.parameter += 1;
            Some(description)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (i32::from(self.metadata.parameter_count()) - self.parameter + 1).max(0);
        let remaining = remaining as usize;
        (remaining, Some(remaining))
    }
}

impl<C> ExactSizeIterator for ParameterDescriptionsIt<'_, C> where C: ParameterMetadata + ?Sized {}
