//! Error types for the configuration core.

use thiserror::Error;

/// Main error type for configuration and service resolution.
#[derive(Error, Debug)]
pub enum OrmError {
    /// A validation rule was violated while constructing the configuration.
    #[error("Configuration validation failed: {0}")]
    Validation(String),

    /// The `type` option names a platform the registry does not know.
    #[error("Invalid platform type specified: '{tag}', available platform types: {}", supported.join(", "))]
    UnknownPlatform { tag: String, supported: Vec<String> },

    /// The module loader could not provide the package for a platform.
    #[error("Driver package '{package}' for platform '{tag}' is not available")]
    DriverUnavailable { tag: String, package: String },

    /// The package was loaded but does not export the expected driver class.
    #[error("Package '{package}' does not export driver class '{class}'")]
    MissingExport { package: String, class: String },

    /// A pluggable service name is not registered in the service catalog.
    #[error("Unknown {kind} '{name}', registered: {}", available.join(", "))]
    UnknownService {
        kind: &'static str,
        name: String,
        available: Vec<String>,
    },

    /// A cached service exists under the key but with a different type.
    #[error("Cached service '{key}' has a different type than requested")]
    ServiceType { key: String },

    /// No client URL has been resolved.
    #[error("No client URL resolved, provide `client_url` or `db_name`")]
    ClientUrlMissing,

    /// Keyed access to an option that is not part of the schema.
    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    /// Keyed update with a value of the wrong shape.
    #[error("Invalid value for option '{key}': {message}")]
    InvalidOption { key: String, message: String },

    /// Raised by the not-found handler hooks.
    #[error("{message}")]
    NotFound { entity: String, message: String },

    /// Cache adapter failure.
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration loading error (missing file, bad environment value).
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OrmError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        OrmError::Validation(message.into())
    }

    /// Create an InvalidOption error.
    pub fn invalid_option(key: impl Into<String>, message: impl Into<String>) -> Self {
        OrmError::InvalidOption {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> u8 {
        match self {
            OrmError::Validation(_) | OrmError::UnknownPlatform { .. } => 2,
            OrmError::DriverUnavailable { .. } | OrmError::MissingExport { .. } => 3,
            OrmError::Config(_) | OrmError::Yaml(_) | OrmError::Io(_) => 4,
            _ => 1,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, OrmError>;
