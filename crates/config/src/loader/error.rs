//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every loading failure: resolution, I/O, decoding,
//!   overlay and validation.
//! - Classify variants into coarse `ErrorKind`s for callers that only care about the class.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, field names).
//! - Environment values are never embedded in messages, only variable names.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("At least one config search path is required")]
    NoSearchPaths,

    #[error("No config filename given for search directory {0}")]
    MissingFilename(PathBuf),

    #[error("Failed to read config search directory {path}: {source}")]
    SearchDirRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Destination must be a structured record, got {type_name}")]
    NotARecord { type_name: &'static str },

    #[error("Invalid value for {var} (field '{field}'): {message}")]
    InvalidValue {
        var: String,
        field: String,
        message: String,
    },

    #[error("Cannot set field '{field}' of type {type_name} from {var}")]
    UnsupportedType {
        var: String,
        field: String,
        type_name: &'static str,
    },

    #[error("Invalid configuration: {message}")]
    Validation { message: String },
}

/// Coarse classification of a `ConfigError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    PathResolution,
    Filesystem,
    Decode,
    Type,
    Conversion,
    UnsupportedType,
    Validation,
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::NoSearchPaths | ConfigError::MissingFilename(_) => {
                ErrorKind::PathResolution
            }
            ConfigError::SearchDirRead { .. } | ConfigError::ConfigFileRead { .. } => {
                ErrorKind::Filesystem
            }
            ConfigError::ConfigFileParse { .. } => ErrorKind::Decode,
            ConfigError::NotARecord { .. } => ErrorKind::Type,
            ConfigError::InvalidValue { .. } => ErrorKind::Conversion,
            ConfigError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            ConfigError::Validation { .. } => ErrorKind::Validation,
        }
    }
}
