//! Provides all error types the program uses.

use thiserror::Error;

/// Represents all types of errors that correspond to invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured property prefix is empty, which would match every property.
    #[error("The property prefix must not be empty")]
    EmptyPrefix,
}

/// Represents all types of errors that can occur when reading JVM metadata from a property
/// report.
#[derive(Debug, Error)]
pub enum JvmError {
    /// A given `java.specification.version` value isn't a known legacy version nor an unsigned
    /// integer.
    #[error("JVM specification version '{0}' cannot be parsed as an unsigned integer")]
    InvalidSpecificationVersion(String),
}
