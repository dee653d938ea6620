use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Rendered usage message from the argument parser.
    #[error("{0}")]
    InvalidArguments(String),

    #[error("File does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Path contains a nul character.")]
    InvalidPathError,

    #[error("GlobalAlloc failed: {0}")]
    AllocationFailed(String),

    #[error("GlobalLock failed: {0}")]
    LockFailed(String),

    #[error("Failed to open clipboard: {0}")]
    ClipboardUnavailable(String),

    #[error("SetClipboardData failed: {0}")]
    PublishFailed(String),

    #[error("Clipboard file drop is only supported on Windows.")]
    UnsupportedPlatform,

    #[error("IO error: {0}")]
    IOError(std::io::Error),

    #[error("Logic error: {0}")]
    LogicError(&'static str),
}

impl Error {
    /// Process exit code for the error.
    ///
    /// Usage errors exit with 1, everything that went wrong while publishing
    /// exits with 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidArguments(_) => 1,
            _ => 2,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::IOError(e)
    }
}

impl From<widestring::error::ContainsNul<u16>> for Error {
    fn from(_: widestring::error::ContainsNul<u16>) -> Error {
        Error::InvalidPathError
    }
}
