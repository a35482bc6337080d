//! # Parameter metadata
//!
//! Answers introspection questions about the positional parameters of prepared statements: How
//! many are there? Which SQL type, precision, scale and direction does each one have? Parameters
//! are referenced by a 1-based index, which is validated by every per parameter query.
//!
//! Drivers hold an implementation of [`ParameterMetadata`] for each prepared statement. The
//! implementation shipped with this crate, [`UniformParameters`], describes every parameter alike.
//!
//! ```
//! use parameter_metadata::{Error, ParameterMetadata, UniformParameters};
//!
//! let metadata = UniformParameters::new(1);
//! assert_eq!("VARCHAR", metadata.parameter_type_name(1).unwrap());
//! assert_eq!(
//!     "Parameter index of '2' is greater than number of parameters, which is '1'.",
//!     metadata.parameter_type_name(2).unwrap_err().to_string()
//! );
//! assert!(matches!(
//!     metadata.is_nullable(1),
//!     Err(Error::FeatureNotSupported { .. })
//! ));
//! ```

mod data_type;
mod error;
mod parameter_description;
mod parameter_metadata;
mod sql_type;
mod state;
mod uniform_parameters;

pub use self::{
    data_type::DataType,
    error::{Error, InvalidParameterIndex},
    parameter_description::{Nullability, ParameterDescription, ParameterMode},
    parameter_metadata::{ParameterDescriptionsIt, ParameterMetadata},
    sql_type::SqlDataType,
    state::{SQLSTATE_SIZE, State},
    uniform_parameters::UniformParameters,
};
