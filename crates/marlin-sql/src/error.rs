//! Error types for SQL helpers.

use thiserror::Error;

/// Errors raised while reading a routine definition.
#[derive(Debug, Clone, Error)]
pub enum SqlError {
    /// The definition text could not be tokenized.
    #[error("failed to tokenize definition: {0}")]
    Tokenize(String),

    /// The definition is not a `CREATE PROCEDURE`/`CREATE FUNCTION`.
    #[error("definition is not a stored routine")]
    NotARoutine,

    /// The routine header has no parameter list.
    #[error("definition has no parameter list")]
    MissingParameterList,

    /// A parameter could not be split into name and type.
    #[error("malformed parameter in definition")]
    MalformedParameter,
}
