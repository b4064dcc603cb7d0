use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("I/O error on '{path}': {message}")]
    Io { path: PathBuf, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl LogError {
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LogError>;
