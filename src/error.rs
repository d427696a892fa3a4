use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfToolError {
    #[error("Input file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported file format: {0} (supported: .png, .jpg, .jpeg)")]
    UnsupportedFormat(String),

    #[error("Backend execution failed: {0}")]
    BackendExecution(String),

    #[error("Failed to decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    #[error("Failed to encode {0}")]
    Encode(String),

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PdfToolError {
    pub(crate) fn decode(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PdfToolError>;
