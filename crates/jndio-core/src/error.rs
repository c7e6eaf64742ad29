//! Error types for jndio-core
//!
//! Everything here is fatal to the build step that raised it: a descriptor
//! entry is either produced whole or not at all, so no partial output ever
//! escapes on the error path.

use thiserror::Error;

/// Result type for jndio-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for jndio-core
#[derive(Error, Debug)]
pub enum Error {
    /// Resource carries neither an implementation class nor a symbolic type,
    /// so no type-declaring line can be emitted for it
    #[error("malformed resource '{name}': neither class name nor entry type is set")]
    MalformedResource { name: String },

    /// DataSource fails a structural requirement before conversion
    #[error("malformed datasource: {message}")]
    MalformedDataSource { message: String },

    /// Parameter key cannot form a well-formed markup attribute name
    #[error("invalid parameter key '{key}': {reason}")]
    InvalidParameterKey { key: String, reason: &'static str },
}

impl Error {
    /// Create a malformed-resource error
    pub fn malformed_resource(name: impl Into<String>) -> Self {
        Self::MalformedResource { name: name.into() }
    }

    /// Create a malformed-datasource error
    pub fn malformed_datasource(message: impl Into<String>) -> Self {
        Self::MalformedDataSource {
            message: message.into(),
        }
    }

    /// Create an invalid-parameter-key error
    pub fn invalid_parameter_key(key: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidParameterKey {
            key: key.into(),
            reason,
        }
    }
}
