use thiserror::Error;

/// Reasons a frame is rejected in strict mode.
///
/// Lenient parsing never produces these; it degrades to defined values
/// instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Frame body was empty or began with the separator
    #[error("Frame has no axis selector")]
    MissingAxis,

    /// Instruction frame had no argument field
    #[error("Instruction for axis '{axis}' is missing its argument")]
    MissingArgument { axis: char },

    /// Argument field is not a number
    #[error("Instruction for axis '{axis}' has a non-numeric argument: {field:?}")]
    InvalidNumber { axis: char, field: String },
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::MissingArgument { axis: 'p' };
        assert_eq!(
            err.to_string(),
            "Instruction for axis 'p' is missing its argument"
        );

        let err = ParseError::InvalidNumber {
            axis: 'p',
            field: "abc".into(),
        };
        assert!(err.to_string().contains("\"abc\""));
    }
}
