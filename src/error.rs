use thiserror::Error;

pub type QuatResult<T> = Result<T, QuatError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuatError {
    /// Operand of the wrong kind or shape.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Component index outside w, x, y, z, v (or 0 to 3).
    #[error("Invalid index: {0}")]
    InvalidIndex(String),
}

/// Errors raised while reading the command line.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No operation given")]
    MissingOperation,
    #[error("Unknown operation or flag: {0}")]
    UnknownArgument(String),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Operation {op} needs {what}")]
    MissingOperand { op: &'static str, what: &'static str },
    #[error("Too many quaternions given, at most 2 are used")]
    TooManyQuaternions,
    #[error("Flag {0} given more than once")]
    DuplicateFlag(&'static str),
    #[error("Operation {op} does not use {flag}")]
    UnusedFlag { op: &'static str, flag: &'static str },
    #[error(transparent)]
    Quaternion(#[from] QuatError),
}
