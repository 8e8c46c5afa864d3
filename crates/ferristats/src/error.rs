// =============================================================================
// Error Types
// =============================================================================
//
// This module defines the error type used throughout the library.
//
// Most of the library never errors: mathematical poles return +Infinity and
// overflow saturates to +/-Infinity, because callers doing numeric work want
// a value they can propagate, not a branch they have to unwind (see the
// special-function modules for the exact conventions). Errors are reserved
// for arguments that make the requested computation meaningless:
//
//   - InvalidArgument: the incomplete-beta family was asked to integrate to
//     an x outside [0,1], or with non-positive shape parameters.
//   - EmptyInput: a descriptive statistic that divides by the sample size
//     was given an empty sample.
//
// =============================================================================

use thiserror::Error;

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = std::result::Result<T, FerristatsError>;

/// Errors that ferristats operations can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FerristatsError {
    /// An argument is outside the domain of the requested operation.
    /// The message says which argument (e.g. "invalid x is specified").
    #[error("{0}")]
    InvalidArgument(String),

    /// A sample statistic was requested over an empty sample.
    #[error("{0}")]
    EmptyInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_pass_through() {
        let e = FerristatsError::InvalidArgument("invalid x is specified".to_string());
        assert_eq!(e.to_string(), "invalid x is specified");

        let e = FerristatsError::EmptyInput("mean of an empty sample".to_string());
        assert_eq!(e.to_string(), "mean of an empty sample");
    }
}
