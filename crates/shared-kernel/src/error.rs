// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CollectFilesError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, CollectFilesError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Invalid pattern '{pattern}': {details}")]
    InvalidPattern {
        pattern: String,
        details: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("stream did not contain valid UTF-8: invalid byte sequence at offset {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Collection aborted at '{path}': {source}")]
    CollectionAborted {
        path: PathBuf,
        #[source]
        source: Box<CollectFilesError>,
    },

    #[error("Could not save data to {output}: {source}")]
    SaveFailed {
        output: PathBuf,
        #[source]
        source: Box<CollectFilesError>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Failed to load configuration '{path}': {details}")]
    ConfigLoad { path: PathBuf, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue { flag: String, value: String, reason: String },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for CollectFilesError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError { format: "JSON".to_string(), details: err.to_string() }
    }
}

impl From<serde_json::Error> for CollectFilesError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError { format: "YAML".to_string(), details: err.to_string() }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for CollectFilesError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl CollectFilesError {
    /// The innermost error message, without the layer prefixes.
    ///
    /// Console diagnostics print this so that a failed read shows the OS error text.
    pub fn root_message(&self) -> String {
        match self {
            Self::Infrastructure(InfrastructureError::FileRead { source, .. })
            | Self::Infrastructure(InfrastructureError::FileWrite { source, .. }) => source.to_string(),
            Self::Infrastructure(InfrastructureError::OutputError { message, .. }) => message.clone(),
            Self::Application(
                ApplicationError::SaveFailed { source, .. } | ApplicationError::CollectionAborted { source, .. },
            ) => source.root_message(),
            Self::Domain(err) => err.to_string(),
            Self::Infrastructure(err) => err.to_string(),
            Self::Presentation(err) => err.to_string(),
        }
    }
}
