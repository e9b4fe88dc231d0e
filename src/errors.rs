// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemucsError {
    #[error("Input file not specified in configuration.")]
    InputNotSpecified,

    #[error("Invalid input path: {0}")]
    InvalidInput(String),

    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Demucs process failed with exit code {code}:\n{stderr}")]
    ProcessFailed { code: i32, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DemucsError {
    /// Exit code reported by the external process, if it ran and failed.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            DemucsError::ProcessFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemucsError>;
