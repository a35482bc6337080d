use thiserror::Error as ThisError;

use crate::State;

/// A 1-based parameter index outside of the range of parameters of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum InvalidParameterIndex {
    /// Parameter indices start at `1`. `0` and negative values never denote a parameter.
    #[error("Parameter index of '{index}' is invalid.")]
    BelowOne { index: i32 },
    /// The index is larger than the number of parameters of the statement.
    #[error(
        "Parameter index of '{index}' is greater than number of parameters, which is \
        '{parameter_count}'."
    )]
    GreaterThanCount { index: i32, parameter_count: u16 },
}

impl InvalidParameterIndex {
    /// Checks `index` against the valid range `1..=parameter_count`.
    pub fn check(index: i32, parameter_count: u16) -> Result<(), InvalidParameterIndex> {
        if index < 1 {
            Err(InvalidParameterIndex::BelowOne { index })
        } else if index > i32::from(parameter_count) {
            Err(InvalidParameterIndex::GreaterThanCount {
                index,
                parameter_count,
            })
        } else {
            Ok(())
        }
    }

    /// The rejected index.
    pub fn index(&self) -> i32 {
        match self {
            InvalidParameterIndex::BelowOne { index }
            | InvalidParameterIndex::GreaterThanCount { index, .. } => *index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
/// Error type returned by queries for parameter metadata.
pub enum Error {
    /// A per parameter query has been invoked with an index which does not refer to a parameter of
    /// the statement. The caller may recover by passing a valid index.
    #[error(transparent)]
    InvalidParameterIndex(#[from] InvalidParameterIndex),
    /// The requested information is not available for this kind of statement. Retrying never
    /// helps.
    #[error("Feature not supported: '{feature}'.")]
    FeatureNotSupported {
        /// Name of the query which is not supported, e.g. `is_nullable`.
        feature: &'static str,
    },
}

impl Error {
    /// SQLSTATE classifying this error, for drivers reporting errors as diagnostic records.
    pub fn state(&self) -> State {
        match self {
            Error::InvalidParameterIndex(_) => State::INVALID_DESCRIPTOR_INDEX,
            Error::FeatureNotSupported { .. } => State::OPTIONAL_FEATURE_NOT_IMPLEMENTED,
        }
    }
}
