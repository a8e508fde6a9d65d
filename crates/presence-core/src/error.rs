//! Error types for optional values
//!
//! Every failure carries a stable numeric code and a type key so callers
//! can branch on the kind of failure instead of the message text.

use std::fmt;

use thiserror::Error;

/// Stable numeric error codes
pub mod code {
    pub const MUST_BE_PRESENT: u16 = 1000;
    pub const AT_LEAST_ONE_PRESENT: u16 = 1001;
    pub const MISSING_TRANSFORM_FUNCTION: u16 = 1002;
}

const ILLEGAL_STATE_PREFIX: &str = "Optional Illegal State Error";

/// Error class shared by a family of failures
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// The caller asked for something the current state cannot provide
    IllegalState,
}

impl ErrorType {
    /// Stable key for matching
    pub fn key(self) -> &'static str {
        match self {
            ErrorType::IllegalState => "IllegalState",
        }
    }

    /// Prefix used in rendered messages
    pub fn prefix(self) -> &'static str {
        match self {
            ErrorType::IllegalState => ILLEGAL_STATE_PREFIX,
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Optional errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalError {
    /// A value was read from (or an optional built around) an absent value
    #[error(
        "{prefix} ({code}): Optional item must be present.",
        prefix = ILLEGAL_STATE_PREFIX,
        code = code::MUST_BE_PRESENT
    )]
    MustBePresent,

    /// `or` was called on an absent optional with an absent fallback
    #[error(
        "{prefix} ({code}): Either the 'of' value or the 'or' value must be present.  \
         Consider using or_null() / or_undefined() instead of or(None).",
        prefix = ILLEGAL_STATE_PREFIX,
        code = code::AT_LEAST_ONE_PRESENT
    )]
    AtLeastOnePresent,

    /// A transform was requested without a mapping function
    #[error(
        "{prefix} ({code}): Transform Function must be given.",
        prefix = ILLEGAL_STATE_PREFIX,
        code = code::MISSING_TRANSFORM_FUNCTION
    )]
    MissingTransformFunction,
}

impl OptionalError {
    /// Stable numeric code
    pub fn code(&self) -> u16 {
        match self {
            OptionalError::MustBePresent => code::MUST_BE_PRESENT,
            OptionalError::AtLeastOnePresent => code::AT_LEAST_ONE_PRESENT,
            OptionalError::MissingTransformFunction => code::MISSING_TRANSFORM_FUNCTION,
        }
    }

    /// Look up an error by its numeric code
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            code::MUST_BE_PRESENT => Some(OptionalError::MustBePresent),
            code::AT_LEAST_ONE_PRESENT => Some(OptionalError::AtLeastOnePresent),
            code::MISSING_TRANSFORM_FUNCTION => Some(OptionalError::MissingTransformFunction),
            _ => None,
        }
    }

    /// Stable name of the error kind
    pub fn name(&self) -> &'static str {
        match self {
            OptionalError::MustBePresent => "MustBePresent",
            OptionalError::AtLeastOnePresent => "AtLeastOnePresent",
            OptionalError::MissingTransformFunction => "MissingTransformFunction",
        }
    }

    pub fn error_type(&self) -> ErrorType {
        ErrorType::IllegalState
    }
}

/// Result type for optional operations
pub type OptionalResult<T> = Result<T, OptionalError>;
