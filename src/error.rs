use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sitecopy
#[derive(Error, Debug)]
pub enum SiteCopyError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("File operation failed on {}: {message}", path.display())]
    FileOperation { message: String, path: PathBuf },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Invalid replacement table: {message}")]
    InvalidTable { message: String },
}

impl SiteCopyError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    /// Create a new file operation error
    pub fn file_error(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileOperation {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn invalid_table(message: impl Into<String>) -> Self {
        Self::InvalidTable {
            message: message.into(),
        }
    }

    /// Path the error relates to, when there is one
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            SiteCopyError::Io { path, .. } => path.as_ref(),
            SiteCopyError::FileOperation { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SiteCopyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            source: err,
            path: None,
        }
    }
}

pub type SiteCopyResult<T> = Result<T, SiteCopyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_error_carries_path() {
        let err = SiteCopyError::file_error("permission denied", "en/index.html");
        assert_eq!(err.path(), Some(&PathBuf::from("en/index.html")));
        assert_eq!(
            err.to_string(),
            "File operation failed on en/index.html: permission denied"
        );
    }

    #[test]
    fn test_io_conversion_has_no_path() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: SiteCopyError = io.into();
        assert!(err.path().is_none());
        assert!(err.to_string().contains("boom"));
    }
}
