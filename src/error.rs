use std::io;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconErrorKind {
    NotFound,
    InvalidData,
    PermissionDenied,
    InvalidArg,
    Failed,
}

#[derive(Debug, Error)]
#[error("{kind:?}: {message}")]
pub struct IconError {
    kind: IconErrorKind,
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl IconError {
    pub fn new(kind: IconErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        kind: IconErrorKind,
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Wraps an I/O error with a message naming what was being accessed.
    pub fn io(context: impl Into<String>, err: io::Error) -> Self {
        Self::with_source(io_kind(err.kind()), format!("{}: {}", context.into(), err), Box::new(err))
    }

    pub fn kind(&self) -> IconErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn io_kind(kind: io::ErrorKind) -> IconErrorKind {
    match kind {
        io::ErrorKind::NotFound => IconErrorKind::NotFound,
        io::ErrorKind::PermissionDenied => IconErrorKind::PermissionDenied,
        io::ErrorKind::InvalidInput => IconErrorKind::InvalidArg,
        io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => IconErrorKind::InvalidData,
        _ => IconErrorKind::Failed,
    }
}

impl From<io::Error> for IconError {
    fn from(err: io::Error) -> Self {
        Self::with_source(io_kind(err.kind()), err.to_string(), Box::new(err))
    }
}

impl From<serde_json::Error> for IconError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(IconErrorKind::InvalidData, err.to_string(), Box::new(err))
    }
}

pub type IconResult<T> = Result<T, IconError>;
