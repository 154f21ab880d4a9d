#![forbid(unsafe_code)]

//! Top-level error type and exit code mapping

use crate::command::OpenError;
use crate::sites::UsageError;
use thiserror::Error;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Open(#[from] OpenError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => EXIT_USAGE,
            Error::Open(_) | Error::Output(_) => EXIT_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_exit_with_usage_code() {
        let err = Error::from(UsageError::MissingRepo);
        assert_eq!(err.exit_code(), EXIT_USAGE);
        assert!(err.to_string().contains("missing repository abbreviation"));
    }

    #[test]
    fn test_runtime_errors_exit_with_error_code() {
        let err = Error::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(err.exit_code(), EXIT_ERROR);
        assert!(err.to_string().starts_with("Failed to write output"));
    }
}
