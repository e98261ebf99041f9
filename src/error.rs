// src/error.rs
use regscan_shared_kernel::RegscanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Regscan(#[from] RegscanError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<derive_builder::UninitializedFieldError> for AppError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<String> for AppError {
    fn from(reason: String) -> Self {
        Self::Config(reason)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
