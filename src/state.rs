use std::fmt;

/// Number of characters in an SQLSTATE code.
pub const SQLSTATE_SIZE: usize = 5;

/// A five character SQLSTATE code classifying an error. The first two characters indicate the
/// class; the next three indicate the subclass.
///
/// See: <https://docs.microsoft.com/sql/odbc/reference/develop-app/sqlstates>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State(pub [u8; SQLSTATE_SIZE]);

impl State {
    /// The value specified for the argument ColumnNumber or ParameterNumber was outside the range
    /// of valid descriptor indices.
    pub const INVALID_DESCRIPTOR_INDEX: State = State(*b"07009");
    /// The driver or data source does not support the requested operation.
    pub const OPTIONAL_FEATURE_NOT_IMPLEMENTED: State = State(*b"HYC00");

    /// View status code as string slice for displaying. `None` if the code holds non ASCII bytes,
    /// which is never the case for the associated constants.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.0 {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::State;

    #[test]
    fn display_state() {
        assert_eq!("07009", State::INVALID_DESCRIPTOR_INDEX.to_string());
        let state = State::OPTIONAL_FEATURE_NOT_IMPLEMENTED;
        assert_eq!(Some("HYC00"), state.as_str());
    }
}
