//! Error types for the knapsack optimizer and sweep driver.
//!
//! Everything that can fail at a boundary (bad parameters, malformed or
//! missing instance files, output I/O) is reported through
//! [`KnapsackError`]. Per-generation operations are infallible: a length
//! mismatch between chromosomes is a contract violation and panics instead.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for configuration errors (bad parameters, malformed instances).
pub const EXIT_CONFIG_ERROR: i32 = 1;

/// Exit code for I/O errors (file read/write failures, CSV/YAML parsing).
pub const EXIT_IO_ERROR: i32 = 10;

/// Errors raised by instance loading, configuration and the sweep driver.
#[derive(Debug, Error)]
pub enum KnapsackError {
    /// Invalid optimizer/sweep parameters or a malformed instance table.
    #[error("configuration error: {0}")]
    Config(String),

    /// The instance file does not exist.
    #[error("instance file not found: {}", .0.display())]
    InstanceNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl KnapsackError {
    /// Shorthand for building a [`KnapsackError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        KnapsackError::Config(msg.into())
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            KnapsackError::Config(_) | KnapsackError::InstanceNotFound(_) => EXIT_CONFIG_ERROR,
            KnapsackError::Io(_) | KnapsackError::Csv(_) | KnapsackError::Yaml(_) => EXIT_IO_ERROR,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_display() {
        let err = KnapsackError::config("population_size must be at least 2");
        assert_eq!(
            err.to_string(),
            "configuration error: population_size must be at least 2"
        );
        assert_eq!(err.exit_code(), EXIT_CONFIG_ERROR);
    }

    #[test]
    fn test_not_found_display() {
        let err = KnapsackError::InstanceNotFound(PathBuf::from("knapsack_3.csv"));
        assert_eq!(err.to_string(), "instance file not found: knapsack_3.csv");
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: KnapsackError = io.into();
        assert!(matches!(err, KnapsackError::Io(_)));
        assert_eq!(err.exit_code(), EXIT_IO_ERROR);
    }
}
