//! Mapping error model.

use thiserror::Error;

/// Result type used across the mapping layer.
pub type MappingResult<T> = Result<T, MappingError>;

/// Mapping-level error.
///
/// These are caller errors (bad names, bad documents). They are never
/// recovered locally; the policy propagates them to whoever asked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// A resource type name was not one of the known shapes.
    #[error("unsupported resource type '{0}'")]
    InvalidResourceType(String),

    /// An HTTP method name was not one of the known verbs.
    #[error("unknown http method '{0}'")]
    UnknownHttpMethod(String),

    /// No repository is registered under the given name.
    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    /// An exposure document could not be read.
    #[error("invalid exposure configuration: {0}")]
    Config(String),
}

impl MappingError {
    pub fn invalid_resource_type(name: impl Into<String>) -> Self {
        Self::InvalidResourceType(name.into())
    }

    pub fn unknown_http_method(name: impl Into<String>) -> Self {
        Self::UnknownHttpMethod(name.into())
    }

    pub fn unknown_resource(name: impl Into<String>) -> Self {
        Self::UnknownResource(name.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
