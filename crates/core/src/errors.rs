use thiserror::Error;

/// Unified error type for the market-mock core.
/// Both query engines return `Result<T, QueryError>`.
///
/// Errors are detected as early as possible (parameter presence before
/// parsing, parsing before filtering) and returned as a single terminal
/// signal, never alongside partial output.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A required input was absent or empty.
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// A supplied date-like string does not parse to a valid calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Unexpected fault during filtering/reduction. Should not occur for
    /// valid inputs, but surfaced rather than crashing the process.
    #[error("Internal error: {0}")]
    Internal(String),
}
