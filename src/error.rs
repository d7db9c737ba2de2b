//! Errors returned by the signal generator.

use std::fmt;

/// Error returned when a generator call is rejected.
///
/// A rejected call never allocates an output buffer or changes the generator's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    /// A parameter was outside the range the call accepts.
    InvalidArgument(&'static str),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::InvalidArgument(message) => write!(f, "Invalid argument: {}", message),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Result of a generator call.
pub type GeneratorResult<T> = Result<T, GeneratorError>;
