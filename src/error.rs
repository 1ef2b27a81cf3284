//! Error handling for the aura engine
//!
//! One error type for every public operation. Validation failures are
//! returned to the caller, never swallowed and never retried.

use crate::world::core::{CapabilityTag, Location};
use std::error::Error as StdError;
use std::fmt;

/// Main error type for the aura engine
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    // Aura request errors
    InvalidLocation {
        location: Location,
    },
    MissingCapability {
        location: Location,
        capability: CapabilityTag,
    },
    ConstructionFailure {
        location: Location,
        reason: String,
    },

    // Upgrade errors
    IneligibleTarget {
        item: String,
    },

    // Configuration errors
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    // System errors
    IoError {
        path: String,
        error: String,
    },
    SystemError {
        component: String,
        error: String,
    },
    ResourceNotFound {
        resource_type: String,
        id: String,
    },
    SerializationError {
        context: String,
        error: String,
    },
    DeserializationError {
        context: String,
        error: String,
    },
    ResourceExhausted(String),

    // Generic fallback for unexpected errors
    Internal {
        message: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidLocation { location } => {
                write!(f, "The block at {} is non-existent!", location)
            }
            EngineError::MissingCapability {
                location,
                capability,
            } => write!(
                f,
                "The block at {} does not implement {}!",
                location, capability
            ),
            EngineError::ConstructionFailure { location, reason } => write!(
                f,
                "Failed to construct passive controller at {}: {}",
                location, reason
            ),

            EngineError::IneligibleTarget { item } => {
                write!(f, "Stack {} is ineligible for upgrades!", item)
            }

            EngineError::InvalidConfig {
                field,
                value,
                reason,
            } => write!(f, "Invalid config: {} = {} ({})", field, value, reason),

            EngineError::IoError { path, error } => write!(f, "IO error for {}: {}", path, error),
            EngineError::SystemError { component, error } => {
                write!(f, "System error in {}: {}", component, error)
            }
            EngineError::ResourceNotFound { resource_type, id } => {
                write!(f, "Resource not found: {} '{}'", resource_type, id)
            }
            EngineError::SerializationError { context, error } => {
                write!(f, "Serialization error in {}: {}", context, error)
            }
            EngineError::DeserializationError { context, error } => {
                write!(f, "Deserialization error in {}: {}", context, error)
            }
            EngineError::ResourceExhausted(msg) => write!(f, "Resource exhausted: {}", msg),

            EngineError::Internal { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl StdError for EngineError {}

/// Type alias for Results in the aura engine
pub type EngineResult<T> = Result<T, EngineError>;

// Conversion traits for common error types

impl From<std::io::Error> for EngineError {
    fn from(error: std::io::Error) -> Self {
        EngineError::IoError {
            path: String::new(),
            error: error.to_string(),
        }
    }
}

impl From<crate::world::WorldError> for EngineError {
    fn from(err: crate::world::WorldError) -> Self {
        EngineError::SystemError {
            component: "world".to_string(),
            error: err.to_string(),
        }
    }
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::SerializationError {
            context: "bincode".to_string(),
            error: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::SerializationError {
            context: "json".to_string(),
            error: err.to_string(),
        }
    }
}

// Helper functions for common error patterns

/// Convert Option to Result with context
pub trait OptionExt<T> {
    fn ok_or_engine<F>(self, f: F) -> EngineResult<T>
    where
        F: FnOnce() -> EngineError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_engine<F>(self, f: F) -> EngineResult<T>
    where
        F: FnOnce() -> EngineError,
    {
        self.ok_or_else(f)
    }
}

/// Extension trait for adding context to errors
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> EngineResult<T>;
    fn with_context<F>(self, f: F) -> EngineResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn context(self, msg: &str) -> EngineResult<T> {
        self.map_err(|e| EngineError::Internal {
            message: format!("{}: {}", msg, e),
        })
    }

    fn with_context<F>(self, f: F) -> EngineResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| EngineError::Internal {
            message: format!("{}: {}", f(), e),
        })
    }
}
