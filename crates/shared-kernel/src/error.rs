// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum RegscanError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<RegscanError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, RegscanError>;

impl RegscanError {
    /// Returns the innermost error once all `Context` layers are peeled off.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when the device rejected a hardware-synchronized request.
    pub fn is_sync_unsupported(&self) -> bool {
        matches!(self.root(), Self::Infrastructure(InfrastructureError::SyncUnsupported { .. }))
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The bracket shape of a dump line matched but its content did not parse.
    #[error("Corrupt values list on line {line}: '{token}' ({reason})")]
    CorruptValuesList { line: usize, token: String, reason: String },

    /// A device field arrived in a shape that cannot be decoded to an integer.
    #[error("Ambiguous field value at index {index}: {detail}")]
    DecodeAmbiguous { index: u64, detail: String },

    #[error("Invalid probe range: start {start} is not below end {end}")]
    InvalidRange { start: u64, end: u64 },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{} does not exist", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("No register dump files found in {}", path.display())]
    NoFilesFound { path: PathBuf },

    #[error("Failed to analyze '{}': {source}", path.display())]
    CorruptDump {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{}': {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory '{}': {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dump pattern '{pattern}': {details}")]
    InvalidPattern { pattern: String, details: String },

    #[error("Device error on register '{register}': {reason}")]
    Device { register: String, reason: String },

    #[error("Register '{register}' does not support hardware-synchronized access")]
    SyncUnsupported { register: String },

    #[error("Output error: {message}")]
    Output {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for RegscanError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<RegscanError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RegscanError::Context { context: context.into(), source: Box::new(e.into()) })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| RegscanError::Context { context: f(), source: Box::new(e.into()) })
    }
}
